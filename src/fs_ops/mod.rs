//! Filesystem operations: the single-file move primitive and its helpers.

mod atomic;
mod copy;
mod helpers;
mod relocate;

pub use relocate::relocate;
