//! CLI error types
//!
//! Every CLI error ends the process; `Display` carries a stable code prefix
//! for scripts reading stderr.

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file unreadable or invalid, or a bad override
    #[error("BOOKLOG_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Writing command output failed
    #[error("BOOKLOG_CLI_IO_ERROR: {0}")]
    Io(String),

    /// Database could not be opened or bootstrapped
    #[error("BOOKLOG_CLI_STORE_ERROR: Failed to open database: {0}")]
    Store(#[from] StoreError),

    /// Runtime or listener failure
    #[error("BOOKLOG_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(format!("JSON error: {}", e))
    }
}
