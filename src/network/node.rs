use serde::{Deserialize, Serialize};

use crate::parsers::Protocol;

/// Placeholder identity for a neighbor record that carried no device id.
pub const UNKNOWN_DEVICE: &str = "unknown";

/// A device in the merged topology graph: either a reporter (it contributed
/// a snapshot) or a node merely mentioned as someone's neighbor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    /// Free-text platform label; resolved from the device's own snapshot if
    /// present, else from the first neighbor record naming it.
    pub platform: Option<String>,
    /// Set only for reporters.
    pub protocol: Option<Protocol>,
}

impl Node {
    pub fn new(name: &str, platform: Option<String>, protocol: Option<Protocol>) -> Self {
        Node {
            name: name.to_string(),
            platform,
            protocol,
        }
    }

    /// Display ordering tier. Devices named like core equipment sort first,
    /// access equipment second, everything else last. This is a layout
    /// heuristic keyed on the hostname only; it does not detect actual
    /// network roles.
    pub fn sort_tier(name: &str) -> u8 {
        let lower = name.to_lowercase();
        if lower.contains("core") {
            0
        } else if lower.contains("access") {
            1
        } else {
            2
        }
    }

    /// Tier plus name, for deterministic left-to-right layout.
    pub fn sort_key(&self) -> (u8, &str) {
        (Self::sort_tier(&self.name), self.name.as_str())
    }
}

mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_sort_tiers() {
        assert_eq!(Node::sort_tier("core-1"), 0);
        assert_eq!(Node::sort_tier("CORE-EAST"), 0);
        assert_eq!(Node::sort_tier("access-2"), 1);
        assert_eq!(Node::sort_tier("edge-3"), 2);
        assert_eq!(Node::sort_tier(""), 2);
    }

    #[test]
    fn test_sort_key_breaks_ties_by_name() {
        let a = Node::new("access-1", None, None);
        let b = Node::new("access-2", None, None);
        assert!(a.sort_key() < b.sort_key());
    }
}
