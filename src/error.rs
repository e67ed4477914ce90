//! Error types for authgate.

use thiserror::Error;

/// Common error type for authgate.
#[derive(Error, Debug)]
pub enum AuthGateError {
    /// Database error.
    ///
    /// Wraps errors from the storage backend. sqlx errors are converted
    /// automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for AuthGateError {
    fn from(e: sqlx::Error) -> Self {
        AuthGateError::Database(e.to_string())
    }
}

/// Result type alias for authgate operations.
pub type Result<T> = std::result::Result<T, AuthGateError>;
