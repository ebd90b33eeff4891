/*!
Neighbor-output parsers.

This module defines:
- `Protocol`: the discovery protocol selector (CDP or LLDP).
- `NeighborRecord`: one discovered adjacency as reported by one device.
- `RecordState`: the two-state accumulator shared by both protocol parsers.
- `cdp` / `lldp`: single-pass, line-oriented state machines over raw
  "show ... neighbors detail" command output.

The parsers are tolerant by design: a line matching no recognized marker is
ignored, missing fields stay absent, and a record without a device id is
still emitted. They never fail for any text input.
*/

pub mod cdp;
pub mod line;
pub mod lldp;

use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Discovery protocol whose textual neighbor output is being consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Cdp,
    Lldp,
}

impl Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Cdp => write!(f, "cdp"),
            Protocol::Lldp => write!(f, "lldp"),
        }
    }
}

/// One discovered adjacency as reported by one device.
///
/// Every field is optional: the parsers keep whatever the command output
/// actually carried and nothing more. A record with no `device_id` is
/// valid-but-incomplete data, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_interface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_interface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// CDP only; empty for LLDP records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
}

/// Explicit parser state: either no record has been started yet, or fields
/// are accumulating onto the current record until the next start marker
/// (or end of input) flushes it.
#[derive(Debug)]
pub enum RecordState {
    Idle,
    Active(NeighborRecord),
}

impl RecordState {
    /// Returns the current record, activating a fresh one if none is active.
    /// Field lines seen before the first start marker accumulate onto this
    /// implicit record, which is flushed at end of input like any other.
    pub fn current(&mut self) -> &mut NeighborRecord {
        if matches!(self, RecordState::Idle) {
            *self = RecordState::Active(NeighborRecord::default());
        }
        match self {
            RecordState::Active(record) => record,
            RecordState::Idle => unreachable!("state activated above"),
        }
    }

    /// Flushes the active record (if any) into `out` and starts a fresh one.
    /// Called on every record-start marker; a start marker on the very first
    /// meaningful line therefore flushes nothing.
    pub fn begin_record(&mut self, out: &mut Vec<NeighborRecord>) -> &mut NeighborRecord {
        if let RecordState::Active(record) = std::mem::replace(self, RecordState::Idle) {
            out.push(record);
        }
        *self = RecordState::Active(NeighborRecord::default());
        self.current()
    }

    /// Flushes the active record at end of input.
    pub fn finish(self, out: &mut Vec<NeighborRecord>) {
        if let RecordState::Active(record) = self {
            out.push(record);
        }
    }
}

/// Parses one block of raw neighbor-command output into an ordered sequence
/// of records for the given protocol. Total for any text input.
pub fn parse_neighbors(output: &str, protocol: Protocol) -> Vec<NeighborRecord> {
    match protocol {
        Protocol::Cdp => cdp::parse(output),
        Protocol::Lldp => lldp::parse(output),
    }
}

mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_no_markers_yields_empty_sequence() {
        let noise = "show cdp neighbors detail\n\nTotal entries displayed: 0\n";
        assert!(parse_neighbors(noise, Protocol::Cdp).is_empty());
        assert!(parse_neighbors(noise, Protocol::Lldp).is_empty());
        assert!(parse_neighbors("", Protocol::Cdp).is_empty());
    }

    #[test]
    fn test_protocol_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Protocol::Lldp).unwrap(), "\"lldp\"");
        let p: Protocol = serde_json::from_str("\"cdp\"").unwrap();
        assert_eq!(p, Protocol::Cdp);
    }
}
