//! Store error types
//!
//! The taxonomy the dispatcher maps to HTTP status codes:
//! - `InvalidArgument` - bad or missing input, no I/O attempted (400)
//! - `NotFound` - index outside the current collection bounds (404)
//! - `Read` / `Write` - backing file I/O failure (500)
//! - `Corrupt` - backing file exists but is not a valid collection (500)
//!
//! Absence of the backing file is not an error anywhere in the store.

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the submission store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Bad or missing input; raised before any load occurs
    #[error("{0}")]
    InvalidArgument(String),

    /// Index outside the current collection bounds
    #[error("Submission not found.")]
    NotFound,

    /// Backing file could not be read (other than non-existence)
    #[error("Failed to read backing file: {source}")]
    Read {
        #[source]
        source: io::Error,
    },

    /// Backing file could not be written
    #[error("Failed to write backing file: {source}")]
    Write {
        #[source]
        source: io::Error,
    },

    /// Backing file content is not a valid submission collection
    #[error("Backing file is corrupt: {0}")]
    Corrupt(String),
}

impl StoreError {
    /// Invalid argument with a caller-facing message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether this error indicates a client-side fault (bad input or
    /// out-of-range index) rather than a server-side failure
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::NotFound)
    }
}
