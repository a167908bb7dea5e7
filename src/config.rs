//! Service configuration
//!
//! Loaded from an optional JSON file. Every field has a default, so an empty
//! object (or no file at all) yields a working local setup.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::cli::{CliError, CliResult};
use crate::http_server::HttpServerConfig;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file (default: "./booklog.db")
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Log level: trace, debug, info, warn or error (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_database_path() -> String {
    "./booklog.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_level: default_log_level(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.database_path.trim().is_empty() {
            return Err(CliError::Config("database_path must not be empty".to_string()));
        }

        self.level()?;

        if self.http.host.trim().is_empty() {
            return Err(CliError::Config("http.host must not be empty".to_string()));
        }

        let invalid = self.http.invalid_cors_origins();
        if !invalid.is_empty() {
            return Err(CliError::Config(format!(
                "Invalid http.cors_origins: {}",
                invalid.join(", ")
            )));
        }

        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> CliResult<Level> {
        Level::from_str(&self.log_level).map_err(|_| {
            CliError::Config(format!(
                "Invalid log_level: '{}'. Must be one of trace, debug, info, warn, error.",
                self.log_level
            ))
        })
    }

    /// Database file as a path
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database_path)
    }
}
