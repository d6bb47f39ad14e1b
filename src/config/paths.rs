//! Default path helpers and symlink checks.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// OS-appropriate default config path (`<config dir>/ext_move/config.xml`).
pub fn default_config_path() -> Result<PathBuf> {
    let mut base = dirs::config_dir().context("no user config directory on this platform")?;
    base.push("ext_move");
    base.push("config.xml");
    Ok(base)
}

/// OS-appropriate default log file path (`<data dir>/ext_move/ext_move.log`).
pub fn default_log_path() -> Result<PathBuf> {
    let mut base = dirs::data_dir().context("no user data directory on this platform")?;
    base.push("ext_move");
    base.push("ext_move.log");
    Ok(base)
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
