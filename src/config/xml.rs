//! XML configuration file support (quick_xml + serde).
//! - `EXT_MOVE_CONFIG` points at an explicit file; parse errors there are
//!   hard failures so misconfigurations surface early.
//! - Otherwise the OS default path is used; a commented template is written
//!   on first run so users get a starting point.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::CONFIG_ENV;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
struct XmlConfig {
    jobs: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

impl XmlConfig {
    fn into_config(self) -> Config {
        let mut cfg = Config::default();
        if let Some(jobs) = self.jobs.as_deref().and_then(|s| s.trim().parse::<usize>().ok()) {
            if jobs > 0 {
                cfg.jobs = jobs;
            }
        }
        if let Some(level) = self.log_level.as_deref().and_then(LogLevel::parse) {
            cfg.log_level = level;
        }
        if let Some(s) = self.log_file.as_deref() {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                cfg.log_file = Some(PathBuf::from(trimmed));
            }
        }
        cfg
    }
}

/// Load a Config from a specific XML file.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config '{}'", path.display()))?;
    let parsed: XmlConfig =
        from_xml_str(&contents).with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(parsed.into_config())
}

/// Resolve and load the effective file config, if any.
///
/// `EXT_MOVE_CONFIG` wins and must parse. The default location is
/// best-effort: a missing file gets a template written and yields None,
/// and an unparsable file is logged and ignored.
pub fn load_config() -> Result<Option<Config>> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        let path = PathBuf::from(p);
        let cfg = load_config_from_path(&path)
            .with_context(|| format!("{CONFIG_ENV} points at '{}'", path.display()))?;
        return Ok(Some(cfg));
    }

    let Ok(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        if let Err(e) = create_template_config(&path) {
            debug!(error = %e, "could not write template config");
        }
        return Ok(None);
    }
    match load_config_from_path(&path) {
        Ok(cfg) => Ok(Some(cfg)),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring unparsable config");
            Ok(None)
        }
    }
}

/// Write a commented template config at `path`, creating parents.
/// Refuses paths with symlinked ancestors.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        anyhow::bail!(
            "refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/ext_move.log".into());

    let content = format!(
        "<!--\n  ext_move configuration (XML)\n\n  Fields:\n    jobs       -> how many file moves may run at once (default 1)\n    log_level  -> quiet | normal | info | debug\n    log_file   -> path to a log file (optional; stdout is always used)\n\n  CLI flags override these values. Set {CONFIG_ENV} to use a different file.\n-->\n<config>\n  <jobs>1</jobs>\n  <log_level>normal</log_level>\n  <log_file>{suggested_log}</log_file>\n</config>\n"
    );

    fs::write(path, content).with_context(|| format!("write config '{}'", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}
