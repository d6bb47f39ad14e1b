//! I/O helper utilities.
//!
//! Enriches io::Error messages with the operation, the path, and a
//! platform-aware hint for the most common failure codes, while keeping the
//! original ErrorKind so callers can still branch on it.
//!
//! Usage:
//!   fs::copy(src, dst).map_err(io_error_with_help_io("copy file", dst))?;

use std::io;
use std::path::Path;

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        match code {
            libc::EACCES | libc::EPERM => {
                msg.push_str(" — permission denied; check ownership and write permissions.");
            }
            libc::EXDEV => {
                msg.push_str(" — cross-filesystem; atomic rename not possible.");
            }
            libc::ENOENT => {
                msg.push_str(" — path not found; verify it exists.");
            }
            libc::ENOSPC => {
                msg.push_str(" — insufficient space on device.");
            }
            libc::EROFS => {
                msg.push_str(" — read-only filesystem; cannot write here.");
            }
            libc::EISDIR => {
                msg.push_str(" — target is a directory, expected a file.");
            }
            _ => {}
        }
        #[cfg(windows)]
        match code {
            5 => msg.push_str(" — access denied; check permissions."),
            17 => msg.push_str(" — not same device; cross-filesystem move."),
            32 => msg.push_str(" — sharing violation; file is in use."),
            2 | 3 => msg.push_str(" — path not found; verify it exists."),
            112 => msg.push_str(" — insufficient disk space."),
            _ => {}
        }
        msg.push_str(&format!(" [os code: {code}]"));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" — permission denied; check ownership and write permissions.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" — path not found; verify it exists.");
            }
            _ => {}
        }
    }

    msg
}

/// Returns a closure for `.map_err(...)` that rewraps an io::Error with an
/// enriched message, preserving the original ErrorKind.
pub(super) fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
