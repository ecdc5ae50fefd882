//! Repository Layer - Core Traits
//!
//! Defines the abstract storage interface.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::DomainResult;

/// Synchronous string key-value storage
///
/// Values are opaque serialized blobs. A write either fully succeeds or
/// returns an error.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}
