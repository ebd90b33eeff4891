use std::collections::{HashMap, HashSet};

use petgraph::Undirected;
use petgraph::stable_graph::{NodeIndex, StableGraph};

use crate::network::edge::{Edge, UndirectedEdgeKey};
use crate::network::node::{Node, UNKNOWN_DEVICE};
use crate::topology::store::SnapshotStore;

/// The merged view across all snapshots.
///
/// Builds a graph from per-device snapshots and wires edges between
/// reporters and the neighbors they mention. `name_to_index` maps device
/// names to graph indices to allow safe lookups; `seen_pairs` holds the
/// canonical unordered pair keys already wired, so an adjacency discovered
/// from both ends collapses to one edge (first observation wins, including
/// its interface labels).
#[derive(Debug, Default)]
pub struct TopologyGraph {
    graph: StableGraph<Node, Edge, Undirected>,
    name_to_index: HashMap<String, NodeIndex>,
    seen_pairs: HashSet<UndirectedEdgeKey>,
}

impl TopologyGraph {
    /// Merges a snapshot collection into a unified graph. Nodes are added
    /// in the store's iteration order, so the result is deterministic for
    /// a given store.
    pub fn build(store: &SnapshotStore) -> Self {
        let mut merged = TopologyGraph::default();

        for (device, snapshot) in store.iter() {
            // The loader key is the provenance; it wins over the body's own
            // device field when they disagree.
            merged.upsert_reporter(
                device,
                snapshot.display_platform().map(str::to_string),
                Some(snapshot.protocol),
            );

            for neighbor in &snapshot.neighbors {
                let neighbor_name = neighbor.device_id.as_deref().unwrap_or(UNKNOWN_DEVICE);
                merged.upsert_neighbor(neighbor_name, neighbor.platform.clone());
                merged.add_adjacency(
                    device,
                    neighbor_name,
                    neighbor.local_interface.clone(),
                    neighbor.remote_interface.clone(),
                );
            }
        }

        merged
    }

    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.name_to_index.get(name) {
            return index;
        }
        let index = self.graph.add_node(Node::new(name, None, None));
        self.name_to_index.insert(name.to_string(), index);
        index
    }

    /// Adds or updates a reporting device. The reporter's own view is
    /// authoritative for its protocol and, when resolved, its platform.
    fn upsert_reporter(
        &mut self,
        name: &str,
        platform: Option<String>,
        protocol: Option<crate::parsers::Protocol>,
    ) {
        let index = self.ensure_node(name);
        if let Some(node) = self.graph.node_weight_mut(index) {
            node.protocol = protocol;
            if platform.is_some() {
                node.platform = platform;
            }
        }
    }

    /// Adds or reuses a node for a mentioned neighbor, backfilling its
    /// platform only if the node has none yet.
    fn upsert_neighbor(&mut self, name: &str, platform: Option<String>) {
        let index = self.ensure_node(name);
        if let Some(node) = self.graph.node_weight_mut(index) {
            if node.platform.is_none() {
                node.platform = platform;
            }
        }
    }

    /// Wires one adjacency unless its unordered pair was already seen.
    /// Returns whether a new edge was added.
    fn add_adjacency(
        &mut self,
        source: &str,
        target: &str,
        local_interface: Option<String>,
        remote_interface: Option<String>,
    ) -> bool {
        let key = UndirectedEdgeKey::new(source, target);
        if !self.seen_pairs.insert(key) {
            return false;
        }

        let source_index = self.ensure_node(source);
        let target_index = self.ensure_node(target);
        let edge = Edge {
            source: source.to_string(),
            target: target.to_string(),
            local_interface,
            remote_interface,
        };
        self.graph.add_edge(source_index, target_index, edge);
        true
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.name_to_index
            .get(name)
            .and_then(|&index| self.graph.node_weight(index))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Edges in discovery order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    /// Nodes in display order: core tier, then access tier, then the rest,
    /// ties broken by name. A layout heuristic, not a structural inference.
    pub fn ordered_nodes(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self.graph.node_weights().collect();
        nodes.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        nodes
    }
}

mod tests {
    #[allow(unused_imports)]
    use super::*;
    #[allow(unused_imports)]
    use crate::parsers::{NeighborRecord, Protocol};
    #[allow(unused_imports)]
    use crate::topology::snapshot::TopologySnapshot;

    #[allow(dead_code)]
    fn neighbor(device_id: &str, local: &str, remote: &str) -> NeighborRecord {
        NeighborRecord {
            device_id: Some(device_id.to_string()),
            local_interface: Some(local.to_string()),
            remote_interface: Some(remote.to_string()),
            platform: None,
            capabilities: Vec::new(),
        }
    }

    #[allow(dead_code)]
    fn two_way_store() -> SnapshotStore {
        let mut store = SnapshotStore::default();
        store.insert(
            "core-1".into(),
            TopologySnapshot::assemble(
                "core-1",
                Protocol::Cdp,
                vec![neighbor("access-2", "Gi0/0", "Gi0/1")],
            ),
        );
        store.insert(
            "access-2".into(),
            TopologySnapshot::assemble(
                "access-2",
                Protocol::Cdp,
                vec![neighbor("core-1", "Gi0/1", "Gi0/0")],
            ),
        );
        store
    }

    #[test]
    fn test_edge_dedup_keeps_first_observation() {
        let graph = TopologyGraph::build(&two_way_store());

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let edge = graph.edges().next().unwrap();
        assert_eq!(edge.source, "core-1");
        assert_eq!(edge.local_interface.as_deref(), Some("Gi0/0"));
        assert_eq!(edge.remote_interface.as_deref(), Some("Gi0/1"));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let store = two_way_store();
        let once = TopologyGraph::build(&store);
        let twice = TopologyGraph::build(&store);

        assert_eq!(once.node_count(), twice.node_count());
        assert_eq!(once.edge_count(), twice.edge_count());
        let names =
            |g: &TopologyGraph| g.ordered_nodes().iter().map(|n| n.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn test_display_order_core_access_rest() {
        let mut store = SnapshotStore::default();
        for device in ["access-2", "core-1", "edge-3"] {
            store.insert(
                device.into(),
                TopologySnapshot::assemble(device, Protocol::Cdp, Vec::new()),
            );
        }
        let graph = TopologyGraph::build(&store);
        let names: Vec<_> = graph.ordered_nodes().iter().map(|n| n.name.clone()).collect();
        assert_eq!(names, vec!["core-1", "access-2", "edge-3"]);
    }

    #[test]
    fn test_mentioned_neighbor_becomes_node_with_platform() {
        let mut store = SnapshotStore::default();
        let mut record = neighbor("access-2", "Gi0/0", "Gi0/1");
        record.platform = Some("cisco WS-C2960X".to_string());
        store.insert(
            "core-1".into(),
            TopologySnapshot::assemble("core-1", Protocol::Cdp, vec![record]),
        );

        let graph = TopologyGraph::build(&store);
        let node = graph.node("access-2").unwrap();
        assert_eq!(node.platform.as_deref(), Some("cisco WS-C2960X"));
        // Mentioned only, never reported: no protocol.
        assert_eq!(node.protocol, None);

        // The reporter resolves its platform from its first neighbor record.
        let reporter = graph.node("core-1").unwrap();
        assert_eq!(reporter.platform.as_deref(), Some("cisco WS-C2960X"));
        assert_eq!(reporter.protocol, Some(Protocol::Cdp));
    }

    #[test]
    fn test_record_without_device_id_maps_to_unknown_node() {
        let mut store = SnapshotStore::default();
        let record = NeighborRecord {
            local_interface: Some("Gi0/3".to_string()),
            ..NeighborRecord::default()
        };
        store.insert(
            "core-1".into(),
            TopologySnapshot::assemble("core-1", Protocol::Lldp, vec![record]),
        );

        let graph = TopologyGraph::build(&store);
        assert!(graph.node("unknown").is_some());
        assert_eq!(graph.edge_count(), 1);
    }
}
