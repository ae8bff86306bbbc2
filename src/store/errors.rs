//! # Store Errors
//!
//! Error types for the data access layer.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Data access errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No row matched the requested id
    #[error("product not found")]
    NotFound,

    /// Any other database failure; the driver message is kept verbatim
    #[error("{0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Query(other.to_string()),
        }
    }
}
