//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "enumkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect enumeration domains and serialized EnumMap payloads")]
pub struct Cli {
    /// Config file (TOML, JSON or YAML); `ENUMKIT__*` variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered enumerations with their constants and ordinals
    Domains {},
    /// Print the entries of a serialized EnumMap by constant name
    Inspect {
        /// Path to a JSON payload
        file: PathBuf,
    },
    /// Validate a payload against the Suit -> int schema
    Check {
        /// Path to a JSON payload
        file: PathBuf,
    },
}
