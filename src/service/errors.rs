//! Service error types
//!
//! `NotFound` is the only domain error; everything else a caller can send is
//! accepted permissively. Store failures that are not `NotFound` surface as
//! `Internal`.

use thiserror::Error;

use crate::store::StoreError;

/// Errors from author service operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The author id does not resolve to an existing record. Malformed
    /// identifiers normalize here too, never to a parse error.
    #[error("Author not found")]
    NotFound,

    /// Store-level failure unrelated to the request.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound,
            StoreError::Internal(msg) => ServiceError::Internal(msg),
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_domain_not_found() {
        assert_eq!(
            ServiceError::from(StoreError::NotFound),
            ServiceError::NotFound
        );
    }

    #[test]
    fn test_store_internal_maps_to_internal() {
        let err = ServiceError::from(StoreError::Internal("lock".to_string()));
        assert_eq!(err, ServiceError::Internal("lock".to_string()));
    }
}
