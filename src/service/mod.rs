//! # Author Service
//!
//! Validates input, applies business rules, and translates store outcomes to
//! `Result` values. Identifier-parse failures and store-level `NotFound` both
//! surface as the single domain error, `ServiceError::NotFound`.

mod authors;
mod errors;

pub use authors::AuthorService;
pub use errors::{ServiceError, ServiceResult};
