//! Configuration management
//!
//! Config is stored at `~/.pipetrack/config.toml`:
//!
//! ```toml
//! [store]
//! snapshot = "/studio/snapshots/sandbox.json"
//!
//! [pipeline]
//! shot_asset_preference = ["Rig", "Model"]
//! excluded_version_statuses = ["rej", "omt"]
//!
//! [pipeline.asset]
//! Model = ["Art"]
//! Rig = ["Model"]
//! ```
//!
//! Every section and key is optional; omitted pipeline tables fall back to
//! the studio defaults.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{PipelineRules, Severity};
use crate::core::services::has_errors;
use crate::paths;

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML of the expected shape
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Pipeline rules failed validation
    #[error("invalid pipeline rules:\n{}", .issues.join("\n"))]
    InvalidRules {
        /// Rendered error-level issues
        issues: Vec<String>,
    },
}

/// Where records are read from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON snapshot file backing the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,
}

/// pipetrack configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Pipeline rule tables
    #[serde(default)]
    pub pipeline: PipelineRules,
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load and validate config
    ///
    /// `explicit` (from `--config`) wins over `PIPETRACK_CONFIG`, which wins
    /// over the default path. A named file must exist; a missing default
    /// file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::read(explicit)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config without validating its rules
    pub fn read(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read_file(path);
        }
        if let Some(path) = paths::config_from_env() {
            return Self::read_file(&path);
        }

        let path = Self::config_path();
        if path.exists() {
            Self::read_file(&path)
        } else {
            debug!("No config at {}; using defaults", path.display());
            Ok(Self::default())
        }
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config TOML without validating it
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reject rules with error-level issues; log the rest
    pub fn validate(&self) -> Result<(), ConfigError> {
        let issues = self.pipeline.validate();
        if has_errors(&issues) {
            return Err(ConfigError::InvalidRules {
                issues: issues.iter().filter(|i| i.is_error()).map(ToString::to_string).collect(),
            });
        }
        for issue in issues.iter().filter(|i| i.severity == Severity::Warn) {
            warn!("{issue}");
        }
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
