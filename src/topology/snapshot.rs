//! Per-device topology snapshots and the discover boundary.

use serde::{Deserialize, Serialize};

use crate::parsers::{self, NeighborRecord, Protocol};

/// One device's self-reported view of its neighbors.
///
/// Immutable after assembly; this is also the wire format of one
/// `topology_<device>.json` file. All fields are lenient on load so that a
/// hand-edited or partial file still yields a usable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub protocol: Protocol,
    #[serde(default)]
    pub neighbor_count: usize,
    #[serde(default)]
    pub neighbors: Vec<NeighborRecord>,
    /// Reporter's own platform. Discovery never fills this in (neighbor
    /// output does not describe the local device), but external snapshot
    /// files may carry it and it then takes precedence for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl TopologySnapshot {
    /// Assembles a snapshot from one device's parsed neighbor records.
    /// Pure and deterministic; `neighbor_count` always equals the record
    /// count.
    pub fn assemble(device: &str, protocol: Protocol, neighbors: Vec<NeighborRecord>) -> Self {
        TopologySnapshot {
            device: device.to_string(),
            protocol,
            neighbor_count: neighbors.len(),
            neighbors,
            platform: None,
        }
    }

    /// Canonical snapshot filename for this device.
    pub fn file_name(&self) -> String {
        format!("topology_{}.json", self.device)
    }

    /// Platform label for display: the snapshot's own platform if present,
    /// else the first neighbor record's platform.
    pub fn display_platform(&self) -> Option<&str> {
        self.platform
            .as_deref()
            .or_else(|| self.neighbors.first().and_then(|n| n.platform.as_deref()))
    }
}

/// Invocation boundary: parse one device's raw neighbor output and assemble
/// its snapshot. Parsing is total, so this cannot fail for any text input;
/// I/O around it is the caller's concern.
pub fn discover(neighbor_output: &str, protocol: Protocol, device_name: &str) -> TopologySnapshot {
    let neighbors = parsers::parse_neighbors(neighbor_output, protocol);
    TopologySnapshot::assemble(device_name, protocol, neighbors)
}

mod tests {
    #[allow(unused_imports)]
    use super::*;
    #[allow(unused_imports)]
    use serde_json::json;

    #[test]
    fn test_discover_end_to_end_cdp() {
        let output = "Device ID: R2\n  Interface: Gi0/0,  Port ID (outgoing port): Gi0/1\nPlatform: cisco WS-C\nCapabilities: Router, Switch\n";
        let snapshot = discover(output, Protocol::Cdp, "R1");

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            json!({
                "device": "R1",
                "protocol": "cdp",
                "neighbor_count": 1,
                "neighbors": [{
                    "device_id": "R2",
                    "local_interface": "Gi0/0",
                    "remote_interface": "Gi0/1",
                    "platform": "cisco WS-C",
                    "capabilities": ["Router", "Switch"],
                }],
            })
        );
    }

    #[test]
    fn test_assemble_counts_records() {
        let snapshot = discover("", Protocol::Lldp, "r5");
        assert_eq!(snapshot.neighbor_count, 0);
        assert!(snapshot.neighbors.is_empty());
        assert_eq!(snapshot.file_name(), "topology_r5.json");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let fixture = include_str!("../../test_data/snapshots/topology_core-1.json");
        let snapshot: TopologySnapshot = serde_json::from_str(fixture).unwrap();

        assert_eq!(snapshot.device, "core-1");
        assert_eq!(snapshot.protocol, Protocol::Cdp);
        assert_eq!(snapshot.neighbor_count, snapshot.neighbors.len());

        let round = serde_json::to_string(&snapshot).unwrap();
        let again: TopologySnapshot = serde_json::from_str(&round).unwrap();
        assert_eq!(again, snapshot);
    }

    #[test]
    fn test_display_platform_falls_back_to_first_neighbor() {
        let mut snapshot = discover(
            "Device ID: R2\nPlatform: cisco ISR4331\n",
            Protocol::Cdp,
            "R1",
        );
        assert_eq!(snapshot.display_platform(), Some("cisco ISR4331"));

        snapshot.platform = Some("cisco C9300".to_string());
        assert_eq!(snapshot.display_platform(), Some("cisco C9300"));
    }
}
