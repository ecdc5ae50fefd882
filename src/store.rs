//! Global Application State Store
//!
//! The folder store lives in one signal provided via context. Components
//! read it through the view-model builders and mutate it only through
//! `run_action`.

use folder_todo_core::{DomainResult, FolderStore, StoreConfig};
use leptos::prelude::*;
use tracing::error;

use crate::storage::BrowserStorage;

/// Type alias for the store
pub type AppStore = RwSignal<FolderStore<BrowserStorage>>;

/// Load saved folders from localStorage
///
/// An unparseable blob is backed up before the store starts fresh. If
/// storage can't be read or the backup fails, the store runs without
/// saving so the stored data is never replaced.
pub fn create_app_store() -> AppStore {
    let config = StoreConfig::default();
    let store = FolderStore::load_or_recover(BrowserStorage, &config).unwrap_or_else(|err| {
        error!(%err, "could not load saved folders, changes will not be saved");
        FolderStore::unsaved_default(BrowserStorage, &config)
    });
    RwSignal::new(store)
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Run a user action and re-render if it changed anything
///
/// A failed action may already have changed in-memory state before the
/// storage write failed, so errors re-render too.
pub fn run_action(
    store: AppStore,
    action: impl FnOnce(&mut FolderStore<BrowserStorage>) -> DomainResult<bool>,
) {
    store.maybe_update(|state| match action(state) {
        Ok(changed) => changed,
        Err(err) => {
            error!(%err, "action failed");
            true
        }
    });
}
