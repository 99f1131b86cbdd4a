use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a flow-distribution LP file from node counts
    Generate {
        /// Number 'X' of source nodes
        #[arg(short = 'x', long, allow_negative_numbers = true)]
        sources: i64,

        /// Number 'Y' of transit nodes
        #[arg(short = 'y', long, allow_negative_numbers = true)]
        transits: i64,

        /// Number 'Z' of destination nodes
        #[arg(short = 'z', long, allow_negative_numbers = true)]
        destinations: i64,

        /// Per-pair demand volumes (JSON array of {source, destination,
        /// volume}); defaults to the built-in 2·i + j volumes
        #[arg(long)]
        demands: Option<PathBuf>,

        /// Directory the .lp file is written into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Echo the generated document to stdout
        #[arg(long)]
        print: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
