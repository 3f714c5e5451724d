//! Store-level error types.

use thiserror::Error;

/// Errors surfaced by a [`PostStore`](crate::ports::PostStore) implementation.
///
/// Absence of a record is never an error: lookups return `Option`/`bool`
/// so callers can distinguish "not found" from an actual failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
