//! Response Formatting
//!
//! Fixed-shape response bodies with their exact message strings. Consumers
//! key on the `message` field, so the strings here are part of the wire
//! contract and must not drift.

use serde::Serialize;

/// `message` when an author id does not resolve.
pub const AUTHOR_NOT_FOUND: &str = "Author NOT Found!";

/// `message` returned by a successful create.
pub const AUTHOR_ADDED: &str = "Author Successfully Added!";

/// `message` returned by a successful work append.
pub const WORK_ADDED: &str = "Work Successfully Added!";

/// `message` returned by a successful work removal.
pub const WORK_DELETED: &str = "Work Successfully deleted!";

/// `message` when the store itself fails.
pub const INTERNAL_ERROR: &str = "Internal Server Error!";

/// Message-only response body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn author_not_found() -> Self {
        Self {
            message: AUTHOR_NOT_FOUND,
        }
    }

    pub fn work_deleted() -> Self {
        Self {
            message: WORK_DELETED,
        }
    }

    pub fn internal_error() -> Self {
        Self {
            message: INTERNAL_ERROR,
        }
    }
}

/// Message-plus-payload response body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageDataResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> MessageDataResponse<T> {
    pub fn author_added(data: T) -> Self {
        Self {
            message: AUTHOR_ADDED,
            data,
        }
    }

    pub fn work_added(data: T) -> Self {
        Self {
            message: WORK_ADDED,
            data,
        }
    }
}
