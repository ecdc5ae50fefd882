//! Folder Todo Core
//!
//! Layered architecture:
//! - domain: folder and todo records and their mutation rules
//! - repository: key-value storage abstraction and the persisted layout
//! - store: the folder collection plus current selection, written through
//!   to storage on every mutation
//! - render / actions: view models and user-action flows, driven through
//!   the `Dialogs` input provider

pub mod actions;
pub mod config;
pub mod dialogs;
pub mod domain;
pub mod render;
pub mod repository;
pub mod store;

pub use config::StoreConfig;
pub use dialogs::{Dialogs, ScriptedDialogs};
pub use domain::{DomainError, DomainResult, Folder, Priority, Todo};
pub use render::{render_folders, render_todos, FolderEntry, TodoEntry, TodoListView};
pub use repository::{KeyValueStorage, MemoryStorage};
pub use store::FolderStore;
