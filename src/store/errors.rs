//! Store error types

use thiserror::Error;

/// Errors from the author store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The id does not resolve to an existing record.
    #[error("Author not found")]
    NotFound,

    /// Backing collection failure (e.g. poisoned lock).
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
