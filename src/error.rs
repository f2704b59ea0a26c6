//! Error handling for dataset generation and conversion

use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, MatrixMillError>;

/// Main error type for MatrixMill operations
#[derive(Error, Debug)]
pub enum MatrixMillError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Matrix failed shape or content checks
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl MatrixMillError {
    /// Create an error with additional context
    pub fn with_context<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Wrap an error with the file it came from
    pub fn at_path<E>(path: &Path, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::with_context(path.display().to_string(), error)
    }

    /// Create an invalid matrix error
    pub fn invalid_matrix(msg: impl Into<String>) -> Self {
        Self::InvalidMatrix(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl From<serde_json::Error> for MatrixMillError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
