//! In-memory author store
//!
//! `RwLock<Vec<Author>>` backing collection. Insertion order is preserved
//! so collection listings are deterministic. Each operation takes the lock
//! once, so per-record read-modify-write is atomic; no coordination exists
//! across operations.

use std::sync::RwLock;

use uuid::Uuid;

use super::author::{Author, NewAuthor, WorksMutation};
use super::errors::{StoreError, StoreResult};
use super::AuthorStore;

/// In-memory `AuthorStore` backend.
pub struct MemoryStore {
    records: RwLock<Vec<Author>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Remove every record. Test fixture setup only; not exposed over HTTP.
    pub fn clear(&self) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        records.clear();
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorStore for MemoryStore {
    fn find_all(&self) -> StoreResult<Vec<Author>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        Ok(records.clone())
    }

    fn find_by_id(&self, id: Uuid) -> StoreResult<Author> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        records
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn insert(&self, new: NewAuthor) -> StoreResult<Author> {
        let author = Author {
            id: Uuid::new_v4(),
            name: new.name,
            introduction: new.introduction,
            works: Vec::new(),
        };

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        records.push(author.clone());
        Ok(author)
    }

    fn update(&self, id: Uuid, mutation: WorksMutation) -> StoreResult<Author> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;
        let author = records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::NotFound)?;

        mutation.apply(&mut author.works);
        Ok(author.clone())
    }
}
