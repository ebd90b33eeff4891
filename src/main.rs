mod cli;
mod logging;
mod network;
mod parsers;
mod render;
mod topology;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use tracing::{info, warn};

use cli::{CommandLine, Commands};
use network::TopologyGraph;
use parsers::Protocol;
use render::OutputFormat;
use topology::store::{SnapshotStore, StoreError};

fn main() -> anyhow::Result<()> {
    logging::init();
    let commands = CommandLine::parse_args();

    match commands.command {
        Commands::Discover {
            input,
            device,
            protocol,
            out_dir,
        } => run_discover(&input, &device, protocol, out_dir.as_deref()),
        Commands::Render {
            dir,
            format,
            output,
        } => run_render(&dir, format, output),
    }
}

fn run_discover(
    input: &Path,
    device: &str,
    protocol: Protocol,
    out_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let neighbor_output = read_input(input)?;
    let snapshot = topology::snapshot::discover(&neighbor_output, protocol, device);
    info!(
        "discovered {} neighbor(s) for {device} via {protocol}",
        snapshot.neighbor_count
    );

    let json = serde_json::to_string_pretty(&snapshot).context("failed to serialize snapshot")?;
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let path = dir.join(snapshot.file_name());
        fs::write(&path, &json).with_context(|| format!("failed to write {}", path.display()))?;
        info!("snapshot written: {}", path.display());
    }
    println!("{json}");
    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read neighbor output from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
    }
}

fn run_render(dir: &Path, format: OutputFormat, output: Option<PathBuf>) -> anyhow::Result<()> {
    let store = match SnapshotStore::load_dir(dir) {
        Ok(store) => store,
        // A missing directory is "no data", not a crash; the no-data check
        // below decides whether anything can be rendered at all.
        Err(err @ StoreError::DirectoryMissing(_)) => {
            warn!("{err}");
            SnapshotStore::default()
        }
        Err(err) => return Err(err.into()),
    };

    if store.is_empty() {
        bail!("no topology data found in {}", dir.display());
    }
    info!("loaded {} snapshot(s) from {}", store.len(), dir.display());

    let graph = TopologyGraph::build(&store);

    match format {
        OutputFormat::Text => {
            let text = render::text::render(&store);
            match output {
                Some(path) => write_output(&path, text.as_bytes())?,
                None => println!("{text}"),
            }
        }
        OutputFormat::Dot => {
            let dot = render::dot::render(&store);
            let path = output.unwrap_or_else(|| dir.join("topology.dot"));
            write_output(&path, dot.as_bytes())?;
            info!("render with: dot -Tpng {} -o topology.png", path.display());
        }
        OutputFormat::Svg => {
            let svg = render::svg::render(&graph);
            let path = output.unwrap_or_else(|| dir.join("topology.svg"));
            write_output(&path, svg.as_bytes())?;
        }
        OutputFormat::Png => {
            let svg = render::svg::render(&graph);
            // Encode fully before touching the filesystem so a rasterizer
            // failure leaves no partial file behind.
            let png = render::raster::rasterize_svg(&svg, 2.0)?;
            let path = output.unwrap_or_else(|| dir.join("topology.png"));
            write_output(&path, &png)?;
        }
    }
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    info!("topology output saved: {}", path.display());
    Ok(())
}
