//! Domain Layer
//!
//! Folder and todo records plus the free functions that mutate them.
//! No storage or browser dependencies live here.

mod entity;
mod folder;
mod todo;

pub use entity::{find_by_key, remove_by_key, DomainError, DomainResult, Entity};
pub use folder::{add_todo, remove_todo, Folder};
pub use todo::{Priority, Todo};
