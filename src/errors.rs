//! Typed error definitions for ext_move.
//! Structural errors abort a run before any move is scheduled; move errors
//! are per-file data recorded in the outcome list and never escape a task.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that invalidate the whole operation before scheduling.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("Source directory does not exist: {0}")]
    SourceMissing(PathBuf),

    #[error("Source path is not a directory: {0}")]
    SourceNotDirectory(PathBuf),

    #[error("Cannot access source directory '{path}': {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create destination root '{path}': {source}")]
    DestinationCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to build the move worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Per-file failure reasons. `Cancelled` is its own variant so callers can
/// tell "could not move" apart from "was told to stop".
#[derive(Debug, Error)]
pub enum MoveError {
    #[error("cancelled before the move started")]
    Cancelled,

    #[error("source vanished before the move: {0}")]
    SourceVanished(PathBuf),

    #[error("{op} '{path}': {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MoveError {
    /// Whether this failure was caused by cancellation rather than I/O.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, MoveError::Cancelled)
    }
}
