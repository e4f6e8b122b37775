//! Discovery service error types.
//!
//! Error messages are intentionally generic so they can be surfaced to
//! clients by the embedding service without leaking internal details. Actual
//! database errors are carried in the variant and logged server-side.

use thiserror::Error;

/// Discovery read-path error type.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Convert sqlx errors to DiscoveryError
impl From<sqlx::Error> for DiscoveryError {
    fn from(err: sqlx::Error) -> Self {
        DiscoveryError::Database(err.to_string())
    }
}
