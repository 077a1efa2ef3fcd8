//! User configuration
//!
//! Settings come from `config.toml` in the platform config directory, then
//! `LINESTAMP_*` environment variables, then command-line flags, each layer
//! overriding the previous one.

use crate::error::{ErrorCode, LinestampError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Get the directory holding the linestamp configuration file
pub fn get_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "linestamp", "linestamp")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            LinestampError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                "Could not determine home directory",
            )
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinestampConfig {
    /// Control room origin used when a command is given a file ID instead of a URL
    pub origin: Option<String>,
    pub auth_token: Option<String>,
    /// Default placeholder token for `rewrite`
    pub placeholder: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl LinestampConfig {
    /// Load from the default location and environment
    pub fn load() -> Result<Self> {
        let mut config = match get_config_dir() {
            Ok(dir) => Self::load_from_path(&dir.join("config.toml"))?,
            Err(e) => {
                debug!("Skipping config file: {}", e);
                Self::default()
            }
        };
        config.merge_env_vars();
        Ok(config)
    }

    /// Load a config file; a missing file yields the defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| LinestampError::from(e).with_context(path.display()))
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_from(|key| std::env::var(key).ok());
    }

    /// Merge settings from a variable lookup
    pub fn merge_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(origin) = lookup("LINESTAMP_ORIGIN") {
            self.origin = Some(origin);
        }

        if let Some(token) = lookup("LINESTAMP_AUTH_TOKEN") {
            self.auth_token = Some(token);
        }

        if let Some(placeholder) = lookup("LINESTAMP_PLACEHOLDER") {
            self.placeholder = Some(placeholder);
        }

        if let Some(timeout) = lookup("LINESTAMP_TIMEOUT_SECS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.timeout_secs = Some(value);
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
