//! GraphViz DOT graph description.

use crate::network::edge::label_or_na;
use crate::network::node::UNKNOWN_DEVICE;
use crate::topology::store::SnapshotStore;

/// Renders one directed edge statement per discovered adjacency, wrapped in
/// a left-to-right digraph declaration. Adjacencies are emitted as observed,
/// one statement per snapshot record; GraphViz itself is left to draw both
/// directions of a link reported from both ends.
pub fn render(store: &SnapshotStore) -> String {
    let mut out: Vec<String> = Vec::new();
    out.push("digraph NetworkTopology {".to_string());
    out.push("  rankdir=LR;".to_string());
    out.push("  node [shape=box];".to_string());
    out.push(String::new());

    for (device, snapshot) in store.iter() {
        for neighbor in &snapshot.neighbors {
            let neighbor_id = neighbor.device_id.as_deref().unwrap_or(UNKNOWN_DEVICE);
            let label = format!(
                "{} <-> {}",
                label_or_na(neighbor.local_interface.as_deref()),
                label_or_na(neighbor.remote_interface.as_deref()),
            );
            out.push(format!(
                "  \"{device}\" -> \"{neighbor_id}\" [label=\"{label}\"];"
            ));
        }
    }

    out.push("}".to_string());
    out.join("\n")
}

mod tests {
    #[allow(unused_imports)]
    use super::*;
    #[allow(unused_imports)]
    use crate::parsers::{NeighborRecord, Protocol};
    #[allow(unused_imports)]
    use crate::topology::snapshot::TopologySnapshot;

    #[test]
    fn test_dot_structure() {
        let mut store = SnapshotStore::default();
        let record = NeighborRecord {
            device_id: Some("access-2".into()),
            local_interface: Some("Gi0/0".into()),
            remote_interface: Some("Gi0/1".into()),
            ..NeighborRecord::default()
        };
        store.insert(
            "core-1".into(),
            TopologySnapshot::assemble("core-1", Protocol::Cdp, vec![record]),
        );

        let dot = render(&store);
        assert!(dot.starts_with("digraph NetworkTopology {"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("node [shape=box];"));
        assert!(dot.contains("\"core-1\" -> \"access-2\" [label=\"Gi0/0 <-> Gi0/1\"];"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_one_statement_per_observed_adjacency() {
        let mut store = SnapshotStore::default();
        let a_to_b = NeighborRecord {
            device_id: Some("b".into()),
            ..NeighborRecord::default()
        };
        let b_to_a = NeighborRecord {
            device_id: Some("a".into()),
            ..NeighborRecord::default()
        };
        store.insert(
            "a".into(),
            TopologySnapshot::assemble("a", Protocol::Cdp, vec![a_to_b]),
        );
        store.insert(
            "b".into(),
            TopologySnapshot::assemble("b", Protocol::Cdp, vec![b_to_a]),
        );

        let dot = render(&store);
        let statements = dot.lines().filter(|l| l.contains("->")).count();
        assert_eq!(statements, 2);
        assert!(dot.contains("[label=\"N/A <-> N/A\"]"));
    }
}
