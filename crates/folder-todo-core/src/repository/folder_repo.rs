//! Folder Repository
//!
//! Reads and writes the whole folders collection as one JSON blob under a
//! single storage key.

use tracing::{debug, warn};

use crate::domain::{DomainResult, Folder};
use super::traits::KeyValueStorage;

pub struct FolderRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> FolderRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Load the stored collection, `None` when nothing was ever saved or
    /// the stored value is JSON `null`
    pub fn load(&self) -> DomainResult<Option<Vec<Folder>>> {
        let Some(blob) = self.storage.get(&self.key)? else {
            debug!(key = %self.key, "no stored folders");
            return Ok(None);
        };
        let folders: Option<Vec<Folder>> = serde_json::from_str(&blob)?;
        debug!(key = %self.key, count = folders.as_ref().map_or(0, Vec::len), "loaded folders");
        Ok(folders)
    }

    /// Copy the raw stored blob to `backup_key`, returning whether there
    /// was anything to copy
    pub fn back_up(&self, backup_key: &str) -> DomainResult<bool> {
        let Some(blob) = self.storage.get(&self.key)? else {
            return Ok(false);
        };
        self.storage.set(backup_key, &blob)?;
        warn!(key = %self.key, backup_key, bytes = blob.len(), "backed up stored folders");
        Ok(true)
    }

    /// Replace the stored collection with `folders`
    pub fn save(&self, folders: &[Folder]) -> DomainResult<()> {
        let blob = serde_json::to_string(folders)?;
        self.storage.set(&self.key, &blob)?;
        debug!(key = %self.key, count = folders.len(), bytes = blob.len(), "saved folders");
        Ok(())
    }
}
