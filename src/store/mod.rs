//! # Author Store
//!
//! Persistence abstraction for Author records: lookup by id, listing,
//! insertion with id generation, and works-list mutation. The store is an
//! injected handle behind the `AuthorStore` trait; `MemoryStore` is the
//! provided in-process backend.

mod author;
mod errors;
mod memory;

pub use author::{Author, NewAuthor, WorksMutation};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use uuid::Uuid;

/// Contract the service layer programs against.
///
/// Side effects are limited to the backing collection. Every operation is a
/// single atomic read or read-modify-write; per-record atomicity is the only
/// guarantee callers may rely on.
pub trait AuthorStore: Send + Sync {
    /// All records, in insertion order.
    fn find_all(&self) -> StoreResult<Vec<Author>>;

    /// Look up one record. `StoreError::NotFound` when the id does not resolve.
    fn find_by_id(&self, id: Uuid) -> StoreResult<Author>;

    /// Insert a record, generating its id.
    fn insert(&self, new: NewAuthor) -> StoreResult<Author>;

    /// Apply a works-list mutation and return the updated record.
    fn update(&self, id: Uuid, mutation: WorksMutation) -> StoreResult<Author>;
}
