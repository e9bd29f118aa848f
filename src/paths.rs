//! Centralized path definitions for pipetrack
//!
//! This module provides a single source of truth for all filesystem paths used by pipetrack.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.pipetrack/
//! └── config.toml               # Store location, pipeline rules
//! ```
//!
//! The config location can be overridden with `--config` or the
//! `PIPETRACK_CONFIG` environment variable.

use std::env;
use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".pipetrack";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable naming an alternate config file
pub const CONFIG_ENV: &str = "PIPETRACK_CONFIG";

/// Get the global pipetrack directory.
///
/// Returns `~/.pipetrack/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.pipetrack/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Config file named by `PIPETRACK_CONFIG`, if set and non-empty
#[must_use]
pub fn config_from_env() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}
