//! Shell configuration
//!
//! Read from a JSON file. Every field is optional and falls back to its
//! default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "TRAILHEAD_CONFIG";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid configuration JSON
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration of the application shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Route shown when the app starts
    #[serde(default = "default_initial_route")]
    pub initial_route: String,

    /// Show a title header above every screen
    #[serde(default)]
    pub header_shown: bool,

    /// Default tracing filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_initial_route() -> String {
    app_ui::screens::routes::LOGIN.to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            initial_route: default_initial_route(),
            header_shown: false,
            log_filter: default_log_filter(),
        }
    }
}

impl ShellConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Load from the file named by `TRAILHEAD_CONFIG`, or use defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
