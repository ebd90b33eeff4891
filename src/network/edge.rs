use serde::{Deserialize, Serialize};

/// One discovered adjacency, with the interface labels attributed to the
/// direction in which it was first observed: `local_interface` belongs to
/// `source`, `remote_interface` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub local_interface: Option<String>,
    pub remote_interface: Option<String>,
}

impl Edge {
    /// Midpoint label for the renderers, with "N/A" standing in for a
    /// missing or empty interface name.
    pub fn interface_label(&self) -> String {
        format!(
            "{} \u{2194} {}",
            label_or_na(self.local_interface.as_deref()),
            label_or_na(self.remote_interface.as_deref()),
        )
    }
}

/// Interface placeholder rule shared by all renderers: absent and empty
/// both display as "N/A".
pub fn label_or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "N/A",
    }
}

/// Canonical key for an unordered device pair. Endpoints are ordered
/// lexicographically, so an edge discovered from both ends produces the
/// same key and collapses to one observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UndirectedEdgeKey {
    a: String,
    b: String,
}

impl UndirectedEdgeKey {
    pub fn new(a: &str, b: &str) -> Self {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        UndirectedEdgeKey {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn endpoints(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }
}

mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_key_is_direction_independent() {
        let forward = UndirectedEdgeKey::new("core-1", "access-2");
        let reverse = UndirectedEdgeKey::new("access-2", "core-1");
        assert_eq!(forward, reverse);
        assert_eq!(forward.endpoints(), ("access-2", "core-1"));
    }

    #[test]
    fn test_self_pair() {
        let key = UndirectedEdgeKey::new("r1", "r1");
        assert_eq!(key.endpoints(), ("r1", "r1"));
    }

    #[test]
    fn test_interface_label_placeholders() {
        let edge = Edge {
            source: "a".into(),
            target: "b".into(),
            local_interface: Some("Gi0/0".into()),
            remote_interface: Some(String::new()),
        };
        assert_eq!(edge.interface_label(), "Gi0/0 \u{2194} N/A");
    }
}
