//! Core configuration types.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::engine::DEFAULT_JOBS;

use super::paths;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More detail
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Settings the config file can supply; everything here has a usable default
/// so running without a config file works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many moves may run at once (admission gate width).
    pub jobs: usize,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jobs: DEFAULT_JOBS,
            log_level: LogLevel::Normal,
            log_file: paths::default_log_path().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_aliases_case_insensitively() {
        assert_eq!(LogLevel::parse("QUIET"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::parse("error"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::parse("Verbose"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn default_jobs_serializes_moves() {
        assert_eq!(Config::default().jobs, 1);
    }
}
