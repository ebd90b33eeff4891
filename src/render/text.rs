//! Plain-text topology summary.

use crate::network::edge::label_or_na;
use crate::network::node::UNKNOWN_DEVICE;
use crate::topology::store::SnapshotStore;

const BANNER_WIDTH: usize = 60;

/// Renders the per-device summary: a fixed-width banner, then each device
/// with its uppercased protocol, neighbor count, and an indented block per
/// neighbor. Missing interfaces display as "N/A"; the platform line is
/// emitted only when present.
pub fn render(store: &SnapshotStore) -> String {
    let mut out: Vec<String> = Vec::new();
    out.push("=".repeat(BANNER_WIDTH));
    out.push("Network Topology Summary".to_string());
    out.push("=".repeat(BANNER_WIDTH));
    out.push(String::new());

    for (device, snapshot) in store.iter() {
        out.push(format!("Device: {device}"));
        out.push(format!(
            "  Protocol: {}",
            snapshot.protocol.to_string().to_uppercase()
        ));
        out.push(format!("  Neighbors: {}", snapshot.neighbor_count));
        out.push(String::new());

        for neighbor in &snapshot.neighbors {
            out.push(format!(
                "  -> {}",
                neighbor.device_id.as_deref().unwrap_or(UNKNOWN_DEVICE)
            ));
            out.push(format!(
                "     Local Interface: {}",
                label_or_na(neighbor.local_interface.as_deref())
            ));
            out.push(format!(
                "     Remote Interface: {}",
                label_or_na(neighbor.remote_interface.as_deref())
            ));
            if let Some(platform) = &neighbor.platform {
                out.push(format!("     Platform: {platform}"));
            }
            out.push(String::new());
        }
    }

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
    fn test_summary_shape() {
        let mut store = SnapshotStore::default();
        let record = NeighborRecord {
            device_id: Some("access-2".into()),
            local_interface: Some("Gi0/0".into()),
            platform: Some("cisco WS-C2960X".into()),
            ..NeighborRecord::default()
        };
        store.insert(
            "core-1".into(),
            TopologySnapshot::assemble("core-1", Protocol::Cdp, vec![record]),
        );

        let text = render(&store);
        assert!(text.starts_with(&"=".repeat(60)));
        assert!(text.contains("Network Topology Summary"));
        assert!(text.contains("Device: core-1"));
        assert!(text.contains("  Protocol: CDP"));
        assert!(text.contains("  Neighbors: 1"));
        assert!(text.contains("  -> access-2"));
        assert!(text.contains("     Local Interface: Gi0/0"));
        assert!(text.contains("     Remote Interface: N/A"));
        assert!(text.contains("     Platform: cisco WS-C2960X"));
    }

    #[test]
    fn test_neighbor_without_device_id_shows_unknown() {
        let mut store = SnapshotStore::default();
        let record = NeighborRecord::default();
        store.insert(
            "r1".into(),
            TopologySnapshot::assemble("r1", Protocol::Lldp, vec![record]),
        );

        let text = render(&store);
        assert!(text.contains("  -> unknown"));
        // No platform on the record, so no platform line in its block.
        assert!(!text.contains("     Platform:"));
    }
}
