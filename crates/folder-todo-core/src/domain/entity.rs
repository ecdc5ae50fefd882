//! Domain Layer - Core Entity Trait
//!
//! Folders and todos are identified by a user-visible key (folder name,
//! todo title) rather than a numeric ID.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// Returns the entity's identifying key
    fn key(&self) -> &str;
}

/// First entity whose key equals `key`
pub fn find_by_key<'a, T: Entity>(entities: &'a [T], key: &str) -> Option<&'a T> {
    entities.iter().find(|entity| entity.key() == key)
}

/// Remove every entity whose key equals `key`, returning how many were removed
pub fn remove_by_key<T: Entity>(entities: &mut Vec<T>, key: &str) -> usize {
    let before = entities.len();
    entities.retain(|entity| entity.key() != key);
    before - entities.len()
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Refused because at least one folder must always exist
    #[error("You must have at least one folder.")]
    LastFolder,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
