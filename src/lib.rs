//! Core library for `ext_move`.
//!
//! Moves files out of a source tree into `destination/<extension>/` folders.
//! The interesting part lives in [`engine`]: scan the source, classify every
//! candidate by extension, then run the moves on a bounded worker pool while
//! collecting one outcome per file. Everything else (CLI, config, logging)
//! is glue around that loop.

pub mod app;
pub mod cancel;
pub mod classify;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod output;
pub mod scan;

pub use cancel::CancelToken;
pub use classify::{FALLBACK_CATEGORY, category};
pub use config::{Config, LogLevel};
pub use engine::{EngineOptions, MoveOutcome, OperationResult, Summary};
pub use errors::{MoveError, StructuralError};
pub use scan::ExtensionFilter;
