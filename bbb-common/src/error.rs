//! Common error types for the biodiversity dashboard

use thiserror::Error;

/// Common result type for dataset operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the dashboard crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store does not match the declared table schema
    #[error("Schema mismatch in table '{table}': {}", problems.join("; "))]
    SchemaMismatch {
        table: String,
        problems: Vec<String>,
    },

    /// Requested sample or identifier not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored value could not be coerced to the expected type
    #[error("Malformed value: {0}")]
    Malformed(String),

    /// Stored rows violate a dataset invariant
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
