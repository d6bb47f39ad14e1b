//! Tracing initialization.
//! Builds a subscriber with EnvFilter, compact or JSON stdout formatting,
//! and an optional non-blocking file layer.
//!
//! Notes:
//! - The level comes from LogLevel; RUST_LOG is not consulted.
//! - File logging is refused when an ancestor of the log path is a symlink.
//! - The returned WorkerGuard must live until shutdown to flush the file.

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use std::fs::OpenOptions;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{path_has_symlink_ancestor, LogLevel};
use crate::output as out;

/// Human-friendly local timestamps for log lines.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

#[inline]
fn env_filter_for(lvl: &LogLevel) -> EnvFilter {
    let filter = match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    };
    EnvFilter::new(filter.to_string())
}

/// Open a non-blocking append writer for the log file, or None with a
/// warning when the path is unusable.
fn maybe_open_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(false) => {}
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing file logging: an ancestor of {} is a symlink; continuing on stdout only.",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!(
                "Could not check log path {}: {}; continuing on stdout only.",
                path.display(),
                e
            ));
            return None;
        }
    }

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!(
                "Failed to open log file {}: {}; continuing on stdout only.",
                path.display(),
                e
            ));
            None
        }
    }
}

/// Initialize tracing. Returns the appender guard when a file layer was
/// added; hold it until exit so buffered lines are flushed.
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let env_filter = env_filter_for(lvl);
    let file_writer = log_file.and_then(maybe_open_writer);

    // The json/compact formatters are distinct types, so each combination
    // gets its own init call.
    match (json, file_writer) {
        (true, Some((writer, guard))) => {
            let stdout_layer = tsfmt::layer().json().with_timer(LocalTime);
            let file_layer = tsfmt::layer()
                .json()
                .with_timer(LocalTime)
                .with_writer(writer);
            registry().with(env_filter).with(stdout_layer).with(file_layer).init();
            Ok(Some(guard))
        }
        (false, Some((writer, guard))) => {
            let stdout_layer = tsfmt::layer().with_timer(LocalTime).compact();
            let file_layer = tsfmt::layer()
                .with_timer(LocalTime)
                .with_ansi(false)
                .compact()
                .with_writer(writer);
            registry().with(env_filter).with(stdout_layer).with(file_layer).init();
            Ok(Some(guard))
        }
        (true, None) => {
            let stdout_layer = tsfmt::layer().json().with_timer(LocalTime);
            registry().with(env_filter).with(stdout_layer).init();
            Ok(None)
        }
        (false, None) => {
            let stdout_layer = tsfmt::layer().with_timer(LocalTime).compact();
            registry().with(env_filter).with(stdout_layer).init();
            Ok(None)
        }
    }
}
