//! CDP "show cdp neighbors detail" state machine.

use crate::parsers::line::CdpLine;
use crate::parsers::{NeighborRecord, RecordState};

/// Parses CDP neighbor output into an ordered sequence of records.
///
/// Every `Device ID:` line starts a new record, flushing the previous one;
/// all other recognized markers accumulate fields onto the current record.
/// End of input flushes whatever is still active.
pub fn parse(output: &str) -> Vec<NeighborRecord> {
    let mut records = Vec::new();
    let mut state = RecordState::Idle;

    for line in output.lines() {
        match CdpLine::classify(line) {
            CdpLine::DeviceId(id) => {
                let record = state.begin_record(&mut records);
                record.device_id = Some(id.to_string());
            }
            CdpLine::InterfacePair { local, remote } => {
                let record = state.current();
                if let Some(local) = local {
                    record.local_interface = Some(local.to_string());
                }
                if let Some(remote) = remote {
                    record.remote_interface = Some(remote.to_string());
                }
            }
            CdpLine::Platform(platform) => {
                state.current().platform = Some(platform.to_string());
            }
            CdpLine::Capabilities(tokens) => {
                state.current().capabilities =
                    tokens.into_iter().map(str::to_string).collect();
            }
            CdpLine::Other => {}
        }
    }

    state.finish(&mut records);
    records
}

mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_one_record_per_device_id_line_in_source_order() {
        let output = include_str!("../../test_data/cdp_neighbors_detail.txt");
        let records = parse(output);

        let device_id_lines = output.lines().filter(|l| l.contains("Device ID:")).count();
        assert_eq!(records.len(), device_id_lines);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].device_id.as_deref(), Some("access-2.lab.local"));
        assert_eq!(records[1].device_id.as_deref(), Some("edge-3.lab.local"));
    }

    #[test]
    fn test_fixture_fields() {
        let output = include_str!("../../test_data/cdp_neighbors_detail.txt");
        let records = parse(output);

        let first = &records[0];
        assert_eq!(first.local_interface.as_deref(), Some("GigabitEthernet1/0/1"));
        assert_eq!(first.remote_interface.as_deref(), Some("GigabitEthernet0/24"));
        assert_eq!(first.platform.as_deref(), Some("cisco WS-C2960X-24TS-L"));
        assert_eq!(first.capabilities, vec!["Switch", "IGMP"]);

        let second = &records[1];
        assert_eq!(second.local_interface.as_deref(), Some("GigabitEthernet1/0/2"));
        assert_eq!(second.capabilities, vec!["Router", "Switch", "IGMP"]);
    }

    #[test]
    fn test_spec_scenario_single_neighbor() {
        let output = "Device ID: R2\n  Interface: Gi0/0,  Port ID (outgoing port): Gi0/1\nPlatform: cisco WS-C\nCapabilities: Router, Switch\n";
        let records = parse(output);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.device_id.as_deref(), Some("R2"));
        assert_eq!(record.local_interface.as_deref(), Some("Gi0/0"));
        assert_eq!(record.remote_interface.as_deref(), Some("Gi0/1"));
        assert_eq!(record.platform.as_deref(), Some("cisco WS-C"));
        assert_eq!(record.capabilities, vec!["Router", "Switch"]);
    }

    #[test]
    fn test_fields_before_first_start_marker_form_implicit_record() {
        // The accumulator is tolerant: a stray field line before the first
        // Device ID still produces a (device-less) record.
        let output = "Platform: cisco ASR1001-X\nDevice ID: R9\n";
        let records = parse(output);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].device_id, None);
        assert_eq!(records[0].platform.as_deref(), Some("cisco ASR1001-X"));
        assert_eq!(records[1].device_id.as_deref(), Some("R9"));
    }

    #[test]
    fn test_start_marker_on_first_line_flushes_nothing() {
        let records = parse("Device ID: R1\n");
        assert_eq!(records.len(), 1);
    }
}
