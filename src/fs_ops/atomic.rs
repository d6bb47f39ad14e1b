//! Atomic rename helper.
//! - On Windows, removes an existing destination first (rename does not
//!   overwrite there); on Unix, rename itself replaces the destination.
//! - After a successful rename on Unix, best-effort fsync of the parent
//!   directory so the new entry survives a crash.

use std::fs;
use std::io;
use std::path::Path;

pub(super) fn try_rename(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    if dst.exists() {
        if let Err(e) = fs::remove_file(dst) {
            if e.kind() != io::ErrorKind::NotFound {
                return Err(e);
            }
        }
    }

    fs::rename(src, dst)?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // A failed fsync must not turn a completed rename into an error.
        let _ = fs::File::open(parent).and_then(|d| d.sync_all());
    }

    Ok(())
}
