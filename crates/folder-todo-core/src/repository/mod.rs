//! Repository Layer
//!
//! Storage abstraction and the folder collection's persisted form.

mod traits;
mod memory;
mod folder_repo;


pub use traits::KeyValueStorage;
pub use memory::MemoryStorage;
pub use folder_repo::FolderRepository;
