//! Persistence error model.

use thiserror::Error;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level fault.
///
/// Anything in here means the operation was aborted; absence of a row is
/// never an error (operations return `Option`/zero-rows for that). The
/// HTTP layer maps every variant to an opaque 500 and logs the detail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connectivity or query failure in the underlying database.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
