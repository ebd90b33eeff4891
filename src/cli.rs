use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::parsers::Protocol;
use crate::render::OutputFormat;

#[derive(Parser)]
#[command(name = "neighbor-visualization")]
#[command(about = "Turn CDP/LLDP neighbor output into a rendered network topology.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one device's neighbor output into a topology snapshot
    #[command(alias = "d")]
    Discover {
        /// File holding the raw "show ... neighbors detail" output, or - for stdin
        input: PathBuf,
        /// Name of the reporting device
        #[arg(short, long)]
        device: String,
        /// Discovery protocol the output came from
        #[arg(short, long, value_enum, default_value_t = Protocol::Cdp)]
        protocol: Protocol,
        /// Directory to write topology_<device>.json into; printed to stdout
        /// either way
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Render collected snapshots as text, DOT, SVG or PNG
    #[command(alias = "r")]
    Render {
        /// Directory holding topology_*.json snapshot files
        dir: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Output path; defaults to <dir>/topology.<ext> (stdout for text)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_unrecognized_format_is_a_usage_error() {
        let result = CommandLine::try_parse_from([
            "neighbor-visualization",
            "render",
            "./topology",
            "--format",
            "jpeg",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_args() {
        let cli = CommandLine::try_parse_from([
            "neighbor-visualization",
            "discover",
            "cdp.txt",
            "--device",
            "core-1",
            "--protocol",
            "lldp",
        ])
        .unwrap();
        match cli.command {
            Commands::Discover {
                device, protocol, ..
            } => {
                assert_eq!(device, "core-1");
                assert_eq!(protocol, Protocol::Lldp);
            }
            _ => panic!("expected discover"),
        }
    }
}
