//! PNG output: rasterizes the generated SVG diagram.

use thiserror::Error;
use tiny_skia::Pixmap;
use usvg::Tree;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to parse generated SVG: {0}")]
    Svg(String),
    #[error("could not allocate a {0}x{1} pixmap")]
    Allocation(u32, u32),
    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

/// Rasterizes an SVG document to PNG bytes at the given scale factor.
pub fn rasterize_svg(svg: &str, scale: f32) -> Result<Vec<u8>, RasterError> {
    let mut opt = usvg::Options::default();
    // Node and edge labels are SVG text; without fonts they silently vanish
    // from the raster.
    opt.fontdb_mut().load_system_fonts();
    let tree = Tree::from_data(svg.as_bytes(), &opt).map_err(|e| RasterError::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let w = ((size.width() as f32) * scale).ceil().max(1.0) as u32;
    let h = ((size.height() as f32) * scale).ceil().max(1.0) as u32;

    let mut pixmap = Pixmap::new(w, h).ok_or(RasterError::Allocation(w, h))?;
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| RasterError::Encode(e.to_string()))
}

mod tests {
    #[allow(unused_imports)]
    use super::*;
    #[allow(unused_imports)]
    use crate::network::graph::TopologyGraph;
    #[allow(unused_imports)]
    use crate::parsers::{NeighborRecord, Protocol};
    #[allow(unused_imports)]
    use crate::topology::snapshot::TopologySnapshot;
    #[allow(unused_imports)]
    use crate::topology::store::SnapshotStore;

    #[test]
    fn test_rasterized_diagram_is_png() {
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
        let graph = TopologyGraph::build(&store);

        let svg = crate::render::svg::render(&graph);
        let png = rasterize_svg(&svg, 2.0).unwrap();

        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_invalid_svg_is_reported() {
        let result = rasterize_svg("not an svg document", 1.0);
        assert!(matches!(result, Err(RasterError::Svg(_))));
    }
}
