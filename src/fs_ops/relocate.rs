//! Single-file move implementation.
//! Ensures the category directory exists, then attempts an atomic rename;
//! on cross-filesystem or other rename errors, falls back to copy+rename
//! and removes the source.
//!
//! An existing destination of the same name is overwritten: last mover to
//! complete wins. That is documented behavior, not a safety guarantee.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::errors::MoveError;

use super::atomic::try_rename;
use super::copy::copy_then_remove;

fn io_err(op: &'static str, path: &Path, source: io::Error) -> MoveError {
    MoveError::Io {
        op,
        path: path.to_path_buf(),
        source,
    }
}

/// Move `src` into `dest_root/category/<basename>` and return the final path.
pub fn relocate(src: &Path, dest_root: &Path, category: &str) -> Result<PathBuf, MoveError> {
    let category_dir = dest_root.join(category);
    // Idempotent, and safe when sibling tasks race to create the same dir.
    fs::create_dir_all(&category_dir)
        .map_err(|e| io_err("create category directory", &category_dir, e))?;

    let file_name = src.file_name().ok_or_else(|| {
        io_err(
            "resolve file name",
            src,
            io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"),
        )
    })?;
    let dest = category_dir.join(file_name);

    match try_rename(src, &dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "renamed file atomically");
            Ok(dest)
        }
        Err(e) => {
            // The scan snapshot is stale by move time if the file was
            // deleted underneath us; report that distinctly.
            if e.kind() == io::ErrorKind::NotFound && !src.exists() {
                return Err(MoveError::SourceVanished(src.to_path_buf()));
            }
            warn!(
                src = %src.display(),
                error = %e,
                "atomic rename failed, falling back to copy+remove"
            );
            copy_then_remove(src, &dest).map_err(|e| io_err("relocate file", src, e))?;
            info!(src = %src.display(), dest = %dest.display(), "copied file and removed source");
            Ok(dest)
        }
    }
}
