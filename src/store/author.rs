//! Author record types
//!
//! The Author is the root entity: biographical text plus an ordered list
//! of referenced work identifiers. Works are external entities referenced
//! by opaque id only; no referential integrity is enforced here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An author record as stored and as serialized on the wire.
///
/// The id serializes as `_id` (string); consumers key on that field name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// Unique identifier, generated by the store on insert. Immutable.
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Display name. Required at creation; no uniqueness constraint.
    pub name: String,

    /// Free-form biography. Empty when not supplied.
    #[serde(default)]
    pub introduction: String,

    /// Referenced work identifiers, in append order. Duplicates are kept.
    #[serde(default)]
    pub works: Vec<String>,
}

/// Input for creating an author; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub introduction: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, introduction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            introduction: introduction.into(),
        }
    }
}

/// A single mutation of an author's works list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorksMutation {
    /// Append a work id. No dedup: appending an id already present keeps both.
    Append(String),
    /// Remove a work id if present. Removing an absent id is a no-op success.
    Remove(String),
}

impl WorksMutation {
    /// Apply this mutation to a works list.
    pub fn apply(&self, works: &mut Vec<String>) {
        match self {
            WorksMutation::Append(work_id) => works.push(work_id.clone()),
            WorksMutation::Remove(work_id) => works.retain(|w| w != work_id),
        }
    }
}
