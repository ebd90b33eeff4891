/*!
Rendering backends.

Renderers consume the snapshot collection and/or the merged graph and
produce one of the supported output formats. They are format plumbing only:
node/edge de-duplication and ordering are decided by the graph builder, and
missing fields arrive here already normalized to placeholders.
*/

pub mod dot;
pub mod raster;
pub mod svg;
pub mod text;

use clap::ValueEnum;

/// The output-format selector surfaced on the CLI. An unrecognized value is
/// rejected by clap as a usage error before any rendering starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text summary per device.
    Text,
    /// GraphViz DOT graph description.
    Dot,
    /// SVG diagram.
    Svg,
    /// PNG raster of the SVG diagram.
    Png,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Dot => write!(f, "dot"),
            OutputFormat::Svg => write!(f, "svg"),
            OutputFormat::Png => write!(f, "png"),
        }
    }
}
