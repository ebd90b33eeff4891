//! Tagged classification of trimmed output lines.
//!
//! Each protocol recognizes a closed set of marker substrings. A line is
//! attributed to the first matching marker in the documented order, which
//! makes the precedence between markers explicit instead of being implied
//! by a chain of substring checks. The field value is always the substring
//! after the marker token, trimmed; it may be empty.

/// Substring after the first occurrence of `marker`, trimmed.
fn value_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.split_once(marker).map(|(_, rest)| rest.trim())
}

/// One classified line of CDP "show cdp neighbors detail" output.
///
/// Precedence: `Device ID:` > `Interface:` > `Platform:` > `Capabilities:`.
/// Note that real CDP output often joins platform and capabilities on one
/// comma-separated line; such a line classifies as `Platform` and the whole
/// remainder becomes the platform value, matching the tolerant contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdpLine<'a> {
    /// Record-start marker, carrying the remote device identity.
    DeviceId(&'a str),
    /// The comma-joined interface line; each comma segment was inspected
    /// independently for `Interface:` (local) and `Port ID` (remote).
    InterfacePair {
        local: Option<&'a str>,
        remote: Option<&'a str>,
    },
    Platform(&'a str),
    /// Comma-split capability tokens, trimmed, empties dropped.
    Capabilities(Vec<&'a str>),
    /// Unrecognized; ignored by the state machine.
    Other,
}

impl<'a> CdpLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if let Some(id) = value_after(line, "Device ID:") {
            return CdpLine::DeviceId(id);
        }
        if line.contains("Interface:") {
            // Vendor output places both ends on one comma-joined line, e.g.
            // "Interface: Gi0/0,  Port ID (outgoing port): Gi0/1".
            let mut local = None;
            let mut remote = None;
            for part in line.split(',') {
                if let Some(value) = value_after(part, "Interface:") {
                    local = Some(value);
                } else if let Some(rest) = value_after(part, "Port ID") {
                    // Skip the "(outgoing port):" qualifier when present.
                    remote = Some(rest.split_once(':').map_or(rest, |(_, v)| v.trim()));
                }
            }
            return CdpLine::InterfacePair { local, remote };
        }
        if let Some(platform) = value_after(line, "Platform:") {
            return CdpLine::Platform(platform);
        }
        if let Some(caps) = value_after(line, "Capabilities:") {
            let tokens = caps
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect();
            return CdpLine::Capabilities(tokens);
        }
        CdpLine::Other
    }
}

/// One classified line of LLDP "show lldp neighbors detail" output.
///
/// Precedence: `Local Intf:` > `System Name:` > `Chassis id:` >
/// `Port Description:` > `Port id:` > `System Description:`. LLDP blocks may
/// repeat identity fields; which occurrences overwrite and which are
/// fallbacks is decided by the state machine, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LldpLine<'a> {
    /// Record-start marker, carrying the local interface.
    LocalIntf(&'a str),
    SystemName(&'a str),
    ChassisId(&'a str),
    PortDescription(&'a str),
    PortId(&'a str),
    SystemDescription(&'a str),
    Other,
}

impl<'a> LldpLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if let Some(value) = value_after(line, "Local Intf:") {
            LldpLine::LocalIntf(value)
        } else if let Some(value) = value_after(line, "System Name:") {
            LldpLine::SystemName(value)
        } else if let Some(value) = value_after(line, "Chassis id:") {
            LldpLine::ChassisId(value)
        } else if let Some(value) = value_after(line, "Port Description:") {
            LldpLine::PortDescription(value)
        } else if let Some(value) = value_after(line, "Port id:") {
            LldpLine::PortId(value)
        } else if let Some(value) = value_after(line, "System Description:") {
            LldpLine::SystemDescription(value)
        } else {
            LldpLine::Other
        }
    }
}

mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_cdp_interface_pair_split() {
        let line = "Interface: GigabitEthernet0/0,  Port ID (outgoing port): GigabitEthernet0/1";
        assert_eq!(
            CdpLine::classify(line),
            CdpLine::InterfacePair {
                local: Some("GigabitEthernet0/0"),
                remote: Some("GigabitEthernet0/1"),
            }
        );
    }

    #[test]
    fn test_cdp_capabilities_tolerates_irregular_spacing() {
        let line = "Capabilities: Router ,  Switch,IGMP , ";
        assert_eq!(
            CdpLine::classify(line),
            CdpLine::Capabilities(vec!["Router", "Switch", "IGMP"])
        );
    }

    #[test]
    fn test_cdp_value_may_be_empty() {
        assert_eq!(CdpLine::classify("Device ID:"), CdpLine::DeviceId(""));
    }

    #[test]
    fn test_lldp_classification_order() {
        assert_eq!(
            LldpLine::classify("  Local Intf: Gi1/0/7"),
            LldpLine::LocalIntf("Gi1/0/7")
        );
        assert_eq!(
            LldpLine::classify("Chassis id: 00aa.bbcc.dd01"),
            LldpLine::ChassisId("00aa.bbcc.dd01")
        );
        assert_eq!(
            LldpLine::classify("Port Description: GigabitEthernet0/2"),
            LldpLine::PortDescription("GigabitEthernet0/2")
        );
    }

    #[test]
    fn test_unrecognized_lines_are_other() {
        assert_eq!(CdpLine::classify("Holdtime : 155 sec"), CdpLine::Other);
        assert_eq!(LldpLine::classify("Time remaining: 91 seconds"), LldpLine::Other);
        assert_eq!(CdpLine::classify(""), CdpLine::Other);
    }
}
