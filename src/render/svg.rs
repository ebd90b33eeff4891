//! SVG diagram of the merged graph.
//!
//! Fixed-size canvas, nodes laid out left-to-right in the graph builder's
//! display order with equal horizontal spacing, straight edge lines between
//! node centers, and an interface-pair label at each edge midpoint. Drawing
//! order is edges, then node boxes, then edge labels, so labels stay
//! visible on top.

use std::collections::HashMap;

use crate::network::graph::TopologyGraph;

const CANVAS_W: f32 = 560.0;
const CANVAS_H: f32 = 300.0;
const PADDING: f32 = 95.0;
const BOX_W: f32 = 140.0;
const BOX_H: f32 = 56.0;

/// Shortens well-known interface-name prefixes for midpoint labels; other
/// names longer than 14 characters are truncated with a trailing marker.
pub fn shorten_interface(name: &str) -> String {
    let name = name.trim();
    if let Some(rest) = name.strip_prefix("GigabitEthernet") {
        return format!("Gi{rest}");
    }
    if let Some(rest) = name.strip_prefix("FastEthernet") {
        return format!("Fa{rest}");
    }
    if let Some(rest) = name.strip_prefix("Ethernet") {
        return format!("Eth{rest}");
    }
    if name.chars().count() > 14 {
        let head: String = name.chars().take(12).collect();
        format!("{head}..")
    } else {
        name.to_string()
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders the graph as a standalone SVG document.
pub fn render(graph: &TopologyGraph) -> String {
    let order = graph.ordered_nodes();
    let n_nodes = order.len().max(2);
    let step = (CANVAS_W - 2.0 * PADDING) / (n_nodes.saturating_sub(1)).max(1) as f32;

    let mut positions: HashMap<&str, (f32, f32)> = HashMap::new();
    for (i, node) in order.iter().enumerate() {
        positions.insert(
            node.name.as_str(),
            (PADDING + i as f32 * step, CANVAS_H / 2.0),
        );
    }

    let mut lines: Vec<String> = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {CANVAS_W} {CANVAS_H}" width="{CANVAS_W}" height="{CANVAS_H}">"#
        ),
        concat!(
            "<style>.node-name { font: 14px sans-serif; font-weight: bold; } ",
            ".node-platform { font: 11px sans-serif; fill: #555; } ",
            ".edge-label { font: 11px sans-serif; fill: #333; }</style>"
        )
        .to_string(),
    ];

    // 1) Edge lines between node centers.
    for edge in graph.edges() {
        let (x1, y1) = positions.get(edge.source.as_str()).copied().unwrap_or((0.0, 0.0));
        let (x2, y2) = positions.get(edge.target.as_str()).copied().unwrap_or((0.0, 0.0));
        lines.push(format!(
            r##"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="#333" stroke-width="2"/>"##
        ));
    }

    // 2) Node boxes with name and platform label.
    for node in &order {
        let (x, y) = positions[node.name.as_str()];
        lines.push(format!(
            r##"  <rect x="{}" y="{}" width="{BOX_W}" height="{BOX_H}" fill="#e0e8f0" stroke="#333"/>"##,
            x - BOX_W / 2.0,
            y - BOX_H / 2.0,
        ));
        lines.push(format!(
            r#"  <text x="{x}" y="{}" class="node-name" text-anchor="middle">{}</text>"#,
            y - 6.0,
            xml_escape(&node.name),
        ));
        if let Some(platform) = node.platform.as_deref().filter(|p| !p.is_empty()) {
            lines.push(format!(
                r#"  <text x="{x}" y="{}" class="node-platform" text-anchor="middle">{}</text>"#,
                y + 10.0,
                xml_escape(platform),
            ));
        }
    }

    // 3) Interface labels last so they sit above boxes and lines.
    for edge in graph.edges() {
        let (x1, y1) = positions.get(edge.source.as_str()).copied().unwrap_or((0.0, 0.0));
        let (x2, y2) = positions.get(edge.target.as_str()).copied().unwrap_or((0.0, 0.0));
        let mid_x = (x1 + x2) / 2.0;
        let mid_y = (y1 + y2) / 2.0 - 16.0;
        let label = format!(
            "{} \u{2194} {}",
            shorten_interface(crate::network::edge::label_or_na(
                edge.local_interface.as_deref()
            )),
            shorten_interface(crate::network::edge::label_or_na(
                edge.remote_interface.as_deref()
            )),
        );
        lines.push(format!(
            r#"  <text x="{mid_x}" y="{mid_y}" class="edge-label" text-anchor="middle">({})</text>"#,
            xml_escape(&label),
        ));
    }

    lines.push("</svg>".to_string());
    lines.join("\n")
}

mod tests {
    #[allow(unused_imports)]
    use super::*;
    #[allow(unused_imports)]
    use crate::parsers::{NeighborRecord, Protocol};
    #[allow(unused_imports)]
    use crate::topology::snapshot::TopologySnapshot;
    #[allow(unused_imports)]
    use crate::topology::store::SnapshotStore;

    #[test]
    fn test_shorten_interface_prefixes() {
        assert_eq!(shorten_interface("GigabitEthernet0/1"), "Gi0/1");
        assert_eq!(shorten_interface("FastEthernet0/24"), "Fa0/24");
        assert_eq!(shorten_interface("Ethernet1/1"), "Eth1/1");
        assert_eq!(shorten_interface("N/A"), "N/A");
        assert_eq!(
            shorten_interface("Port-channel100.2001"),
            "Port-channel.."
        );
        assert_eq!(shorten_interface("Vlan100"), "Vlan100");
    }

    #[allow(dead_code)]
    fn sample_graph() -> TopologyGraph {
        let mut store = SnapshotStore::default();
        let record = NeighborRecord {
            device_id: Some("access-2".into()),
            local_interface: Some("GigabitEthernet0/0".into()),
            remote_interface: Some("GigabitEthernet0/1".into()),
            platform: Some("cisco WS-C2960X".into()),
            capabilities: Vec::new(),
        };
        store.insert(
            "core-1".into(),
            TopologySnapshot::assemble("core-1", Protocol::Cdp, vec![record]),
        );
        TopologyGraph::build(&store)
    }

    #[test]
    fn test_svg_document_shape() {
        let svg = render(&sample_graph());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg xmlns="));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<rect ").count(), 2);
        assert_eq!(svg.matches("<line ").count(), 1);
        assert!(svg.contains("core-1"));
        assert!(svg.contains("cisco WS-C2960X"));
        // Midpoint label uses shortened names.
        assert!(svg.contains("(Gi0/0 \u{2194} Gi0/1)"));
    }

    #[test]
    fn test_core_node_is_leftmost() {
        let svg = render(&sample_graph());
        let core_pos = svg.find(">core-1<").unwrap();
        let access_pos = svg.find(">access-2<").unwrap();
        assert!(core_pos < access_pos);
    }
}
