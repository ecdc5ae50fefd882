//! UI Components
//!
//! Leptos components rendering the folder and todo lists.

mod folder_sidebar;
mod todo_panel;

pub use folder_sidebar::FolderSidebar;
pub use todo_panel::TodoPanel;
