//! Author service
//!
//! Business rules on top of the store: existence checks, works-list mutation
//! rules, and normalization of malformed identifiers to `NotFound`. Each
//! operation is one atomic read-modify-write against the store; there is no
//! multi-step transaction and no cross-request coordination.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::store::{Author, AuthorStore, NewAuthor, WorksMutation};

use super::errors::{ServiceError, ServiceResult};

/// Author service over an injected store handle.
pub struct AuthorService<S: AuthorStore> {
    store: Arc<S>,
}

impl<S: AuthorStore> AuthorService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Parse a raw path-segment identifier.
    ///
    /// Malformed input (e.g. `"9999"`) is a domain `NotFound`: such an id can
    /// never resolve to a record, and parse failures must not leak upward.
    fn parse_id(raw: &str) -> ServiceResult<Uuid> {
        Uuid::parse_str(raw).map_err(|_| ServiceError::NotFound)
    }

    /// All authors as full records. The collection endpoint serializes them
    /// whole; any name-only projection is the consumer's choice.
    pub fn list_authors(&self) -> ServiceResult<Vec<Author>> {
        Ok(self.store.find_all()?)
    }

    /// Look up one author by raw id.
    pub fn get_author(&self, raw_id: &str) -> ServiceResult<Author> {
        let id = Self::parse_id(raw_id)?;
        Ok(self.store.find_by_id(id)?)
    }

    /// Create an author. Always succeeds given any strings; names are not
    /// unique.
    pub fn create_author(&self, name: String, introduction: String) -> ServiceResult<Author> {
        let author = self.store.insert(NewAuthor::new(name, introduction))?;
        debug!(author_id = %author.id, "author created");
        Ok(author)
    }

    /// Append a work id to the author's works list. Duplicates are kept.
    pub fn add_work(&self, raw_author_id: &str, work_id: String) -> ServiceResult<Author> {
        let id = Self::parse_id(raw_author_id)?;
        let author = self.store.update(id, WorksMutation::Append(work_id))?;
        debug!(author_id = %author.id, "work appended");
        Ok(author)
    }

    /// Remove a work id from the author's works list. Absence of the work id
    /// is a no-op success; only an unresolvable author id is an error.
    pub fn remove_work(&self, raw_author_id: &str, work_id: &str) -> ServiceResult<Author> {
        let id = Self::parse_id(raw_author_id)?;
        let author = self
            .store
            .update(id, WorksMutation::Remove(work_id.to_string()))?;
        debug!(author_id = %author.id, "work removed");
        Ok(author)
    }

    /// Existence-checked lookup for a caller that has already passed an
    /// upstream identity check. No HTTP route mounts this; the authenticated
    /// surface it belongs to lives in an external collaborator.
    pub fn like_author(&self, raw_author_id: &str) -> ServiceResult<Author> {
        let id = Self::parse_id(raw_author_id)?;
        Ok(self.store.find_by_id(id)?)
    }
}
