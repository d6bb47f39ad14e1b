//! Configuration: types, default paths, and XML file loading.
//! The config file supplies defaults (worker count, log level, log file);
//! CLI flags always win over file values.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_path};

/// Environment variable naming an explicit config file location.
pub const CONFIG_ENV: &str = "EXT_MOVE_CONFIG";
