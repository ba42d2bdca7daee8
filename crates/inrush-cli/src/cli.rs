//! CLI definitions for inrush.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "inrush",
    version,
    about = "Structured Text parser CLI",
    infer_subcommands = true,
    after_help = "Examples:\n  inrush parse main.st\n  inrush parse main.st --format json\n  inrush check main.st --config ./inrush.toml\n  RUST_LOG=inrush_syntax=trace inrush check main.st"
)]
pub struct Cli {
    /// Show parser logging on stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a file and print its syntax tree and diagnostics.
    Parse {
        /// Source file.
        file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Tree)]
        format: Format,
        /// Parser config file (defaults to ./inrush.toml when present).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the token stream with positions.
    Tokens {
        /// Source file.
        file: PathBuf,
    },
    /// Print the source reconstructed from the syntax tree.
    Fmt {
        /// Source file.
        file: PathBuf,
        /// Parser config file (defaults to ./inrush.toml when present).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Report diagnostics only.
    Check {
        /// Source file.
        file: PathBuf,
        /// Parser config file (defaults to ./inrush.toml when present).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented tree with token positions.
    Tree,
    /// JSON document with `root` and `diagnostics`.
    Json,
}
