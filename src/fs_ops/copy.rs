//! Copy fallback for cross-filesystem moves.
//! Copies into a unique temp file inside the destination directory, fsyncs
//! it, then renames over the final name. The rename keeps the overwrite
//! semantics of the fast path and never exposes a half-written destination.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::atomic::try_rename;
use super::helpers::io_error_with_help_io;

fn unique_temp_path(dst_dir: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    dst_dir.join(format!(".ext_move.{pid}.{nanos}.tmp"))
}

/// Copy `src` over `dst` via a temp file in `dst`'s directory, then remove
/// `src`. On any failure the temp file is cleaned up best-effort and `src`
/// is left in place.
pub(super) fn copy_then_remove(src: &Path, dst: &Path) -> io::Result<()> {
    let dst_dir = dst.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("destination has no parent: {}", dst.display()),
        )
    })?;

    let tmp = unique_temp_path(dst_dir);

    let copied = (|| -> io::Result<()> {
        fs::copy(src, &tmp).map_err(io_error_with_help_io("copy to temporary file", &tmp))?;
        // Make the bytes durable before the rename publishes them.
        fs::File::open(&tmp)?.sync_all()?;
        try_rename(&tmp, dst).map_err(io_error_with_help_io("rename temporary file", dst))
    })();

    if let Err(e) = copied {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    fs::remove_file(src).map_err(io_error_with_help_io("remove original file", src))
}
