//! CLI-specific error types
//!
//! All CLI errors are fatal: the command prints the error and the process
//! exits non-zero.

use thiserror::Error;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server failed to boot or crashed while serving
    #[error("Boot failed: {0}")]
    Boot(String),

    /// I/O error outside the store (config file, runtime setup)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Boot error
    pub fn boot(msg: impl Into<String>) -> Self {
        Self::Boot(msg.into())
    }
}
