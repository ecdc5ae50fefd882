//! Store configuration

/// Storage key the folders collection is saved under
pub const DEFAULT_STORAGE_KEY: &str = "todoFolders";

/// Key an unreadable stored blob is copied to before it can be replaced
pub const DEFAULT_BACKUP_KEY: &str = "todoFolders.backup";

/// Folder seeded when nothing usable is stored
pub const DEFAULT_FOLDER_NAME: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    pub backup_key: String,
    pub default_folder: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            backup_key: DEFAULT_BACKUP_KEY.to_string(),
            default_folder: DEFAULT_FOLDER_NAME.to_string(),
        }
    }
}
