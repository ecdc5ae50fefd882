//! Folder State Store
//!
//! Owns the ordered folder collection and the current selection, and writes
//! the full collection through to storage after every mutation.

use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::domain::{self, find_by_key, remove_by_key, DomainError, DomainResult, Folder, Todo};
use crate::repository::{FolderRepository, KeyValueStorage};

pub struct FolderStore<S> {
    folders: Vec<Folder>,
    /// Index of the current folder; always in bounds
    current: usize,
    repo: FolderRepository<S>,
    /// False when stored data could be neither read nor backed up
    saving: bool,
}

impl<S: KeyValueStorage> FolderStore<S> {
    /// Load the stored folders, seeding the default folder when nothing,
    /// `null` or an empty collection is stored
    pub fn load(storage: S, config: &StoreConfig) -> DomainResult<Self> {
        let repo = FolderRepository::new(storage, config.storage_key.as_str());
        let folders = repo.load()?;
        Ok(Self::from_loaded(folders, repo, config))
    }

    /// Like [`FolderStore::load`], but a blob that fails to parse is copied
    /// to the backup key and the store starts from the default folder
    ///
    /// The unreadable blob is only replaced once its backup was written.
    pub fn load_or_recover(storage: S, config: &StoreConfig) -> DomainResult<Self> {
        let repo = FolderRepository::new(storage, config.storage_key.as_str());
        let folders = match repo.load() {
            Ok(folders) => folders,
            Err(err @ DomainError::Serialization(_)) => {
                warn!(%err, "stored folders unreadable, starting fresh");
                repo.back_up(&config.backup_key)?;
                None
            }
            Err(err) => return Err(err),
        };
        Ok(Self::from_loaded(folders, repo, config))
    }

    /// Default state that never writes to storage
    ///
    /// For when stored data could be neither read nor backed up: every
    /// persist fails instead of replacing it.
    pub fn unsaved_default(storage: S, config: &StoreConfig) -> Self {
        Self {
            folders: vec![Folder::new(config.default_folder.as_str())],
            current: 0,
            repo: FolderRepository::new(storage, config.storage_key.as_str()),
            saving: false,
        }
    }

    fn from_loaded(
        folders: Option<Vec<Folder>>,
        repo: FolderRepository<S>,
        config: &StoreConfig,
    ) -> Self {
        let folders = match folders {
            Some(folders) if !folders.is_empty() => folders,
            _ => {
                info!(folder = %config.default_folder, "seeding default folder");
                vec![Folder::new(config.default_folder.as_str())]
            }
        };
        Self {
            folders,
            current: 0,
            repo,
            saving: true,
        }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn current_folder(&self) -> &Folder {
        &self.folders[self.current]
    }

    pub fn find_folder(&self, name: &str) -> Option<&Folder> {
        find_by_key(&self.folders, name)
    }

    /// Append a new empty folder
    pub fn add_folder(&mut self, name: &str) -> DomainResult<&Folder> {
        if self.find_folder(name).is_some() {
            warn!(folder = name, "folder already exists");
            return Err(DomainError::Conflict(format!(
                "A folder named \"{name}\" already exists."
            )));
        }
        let index = self.folders.len();
        self.folders.push(Folder::new(name));
        self.persist()?;
        debug!(folder = name, "added folder");
        Ok(&self.folders[index])
    }

    /// Remove every folder named `name`
    ///
    /// Refused with [`DomainError::LastFolder`] when it would leave no folder.
    /// If the current folder goes, the first remaining folder becomes current.
    pub fn delete_folder(&mut self, name: &str) -> DomainResult<()> {
        let matching = self.folders.iter().filter(|f| f.name == name).count();
        if self.folders.len() <= 1 || matching == self.folders.len() {
            warn!(folder = name, "refusing to delete the last folder");
            return Err(DomainError::LastFolder);
        }

        let current_removed = self.current_folder().name == name;
        let removed_before = self.folders[..self.current]
            .iter()
            .filter(|f| f.name == name)
            .count();
        remove_by_key(&mut self.folders, name);
        self.current = if current_removed {
            0
        } else {
            self.current - removed_before
        };
        debug!(folder = name, removed = matching, "deleted folder");
        self.persist()
    }

    /// Select the first folder named `name`; unknown names leave the
    /// selection unchanged
    pub fn set_current_folder(&mut self, name: &str) -> DomainResult<()> {
        let index = self
            .folders
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| DomainError::NotFound(format!("folder \"{name}\"")))?;
        self.current = index;
        Ok(())
    }

    pub fn add_todo(&mut self, folder: &str, todo: Todo) -> DomainResult<()> {
        let target = self.folder_mut(folder)?;
        debug!(folder, todo = %todo.title, "adding todo");
        domain::add_todo(target, todo);
        self.persist()
    }

    pub fn add_todo_to_current(&mut self, todo: Todo) -> DomainResult<()> {
        domain::add_todo(&mut self.folders[self.current], todo);
        self.persist()
    }

    /// Remove every todo titled `title` from `folder`
    pub fn remove_todo(&mut self, folder: &str, title: &str) -> DomainResult<usize> {
        let removed = domain::remove_todo(self.folder_mut(folder)?, title);
        debug!(folder, todo = title, removed, "removed todo");
        self.persist()?;
        Ok(removed)
    }

    /// Write the whole folder collection to storage
    pub fn persist(&self) -> DomainResult<()> {
        if !self.saving {
            return Err(DomainError::Storage(
                "saving disabled: stored folders could not be read".to_string(),
            ));
        }
        self.repo.save(&self.folders)
    }

    fn folder_mut(&mut self, name: &str) -> DomainResult<&mut Folder> {
        self.folders
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| DomainError::NotFound(format!("folder \"{name}\"")))
    }
}
