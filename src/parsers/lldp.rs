//! LLDP "show lldp neighbors detail" state machine.
//!
//! LLDP blocks repeat identity fields with different reliability, so two of
//! the markers are fallbacks: `Chassis id:` only seeds `device_id` when
//! `System Name:` has not already set it, and `Port id:` only seeds
//! `remote_interface` when `Port Description:` has not.

use crate::parsers::line::LldpLine;
use crate::parsers::{NeighborRecord, RecordState};

/// Parses LLDP neighbor output into an ordered sequence of records.
/// `Local Intf:` starts a new record and seeds its local interface.
pub fn parse(output: &str) -> Vec<NeighborRecord> {
    let mut records = Vec::new();
    let mut state = RecordState::Idle;

    for line in output.lines() {
        match LldpLine::classify(line) {
            LldpLine::LocalIntf(intf) => {
                let record = state.begin_record(&mut records);
                record.local_interface = Some(intf.to_string());
            }
            LldpLine::SystemName(name) => {
                // Preferred identity source; overwrites a chassis id fallback.
                state.current().device_id = Some(name.to_string());
            }
            LldpLine::ChassisId(id) => {
                let record = state.current();
                if record.device_id.is_none() {
                    record.device_id = Some(id.to_string());
                }
            }
            LldpLine::PortDescription(desc) => {
                state.current().remote_interface = Some(desc.to_string());
            }
            LldpLine::PortId(id) => {
                let record = state.current();
                if record.remote_interface.is_none() {
                    record.remote_interface = Some(id.to_string());
                }
            }
            LldpLine::SystemDescription(desc) => {
                state.current().platform = Some(desc.to_string());
            }
            LldpLine::Other => {}
        }
    }

    state.finish(&mut records);
    records
}

mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_fixture_records() {
        let output = include_str!("../../test_data/lldp_neighbors_detail.txt");
        let records = parse(output);

        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.local_interface.as_deref(), Some("Gi1/0/7"));
        // System Name wins over the chassis id seen earlier in the block.
        assert_eq!(first.device_id.as_deref(), Some("access-2.lab.local"));
        // Port Description overwrites the Port id fallback.
        assert_eq!(first.remote_interface.as_deref(), Some("GigabitEthernet0/2"));
        assert!(first.platform.as_deref().unwrap().starts_with("Cisco IOS"));
        assert!(first.capabilities.is_empty());

        let second = &records[1];
        // No System Name in the second block; chassis id is kept.
        assert_eq!(second.device_id.as_deref(), Some("00aa.bbcc.dd99"));
        assert_eq!(second.remote_interface.as_deref(), Some("Gi0/48"));
    }

    #[test]
    fn test_system_name_overwrites_chassis_id() {
        let output = "Local Intf: Gi0/1\nChassis id: aabb.ccdd.eeff\nSystem Name: sw-access-9\n";
        let records = parse(output);
        assert_eq!(records[0].device_id.as_deref(), Some("sw-access-9"));
    }

    #[test]
    fn test_chassis_id_never_overwrites() {
        let output = "Local Intf: Gi0/1\nSystem Name: sw-access-9\nChassis id: aabb.ccdd.eeff\n";
        let records = parse(output);
        assert_eq!(records[0].device_id.as_deref(), Some("sw-access-9"));
    }

    #[test]
    fn test_port_id_is_a_fallback() {
        let output = "Local Intf: Gi0/1\nPort Description: GigabitEthernet0/2\nPort id: Gi0/2\n";
        let records = parse(output);
        assert_eq!(
            records[0].remote_interface.as_deref(),
            Some("GigabitEthernet0/2")
        );
    }

    #[test]
    fn test_each_local_intf_starts_a_record() {
        let output = "Local Intf: Gi0/1\nSystem Name: a\nLocal Intf: Gi0/2\nSystem Name: b\n";
        let records = parse(output);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].local_interface.as_deref(), Some("Gi0/1"));
        assert_eq!(records[1].local_interface.as_deref(), Some("Gi0/2"));
    }
}
