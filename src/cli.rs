//! CLI definition and parsing.
//!
//! Notes:
//! - `--source`/`--destination` are required for a move run, but not for
//!   `--print-config`.
//! - `--debug` is a shorthand for `--log-level debug`.
//! - Source-tree removal is an explicit flag, never inferred from the
//!   absence of an extension filter.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::LogLevel;

/// Move files out of a source tree into `destination/<extension>/` folders.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move files into extension-keyed folders with a bounded worker pool"
)]
pub struct Args {
    /// Source directory to scan.
    #[arg(
        short = 's',
        long,
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        required_unless_present = "print_config"
    )]
    pub source: Option<PathBuf>,

    /// Destination root; files land in `<destination>/<extension>/`.
    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        required_unless_present = "print_config"
    )]
    pub destination: Option<PathBuf>,

    /// Only move files with these extensions (e.g. -t txt pdf jpeg).
    /// Tokens are case-insensitive; a leading dot is accepted and ignored.
    #[arg(short = 't', long = "types", value_name = "EXT", num_args = 1..)]
    pub types: Option<Vec<String>>,

    /// Delete the source tree after a run where nothing failed.
    /// With --types this also deletes files the filter left behind.
    #[arg(long)]
    pub remove_source: bool,

    /// How many moves may run at once (default 1: serialized).
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(long)]
    pub debug: bool,

    /// Emit logs as structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the config file location used by ext_move and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
