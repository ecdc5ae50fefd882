//! View Models
//!
//! Pure builders for the folder list and the todo list. Each call rebuilds
//! the whole list from the store, so rendering unchanged state twice yields
//! identical output.

use crate::domain::{Folder, Todo};
use crate::repository::KeyValueStorage;
use crate::store::FolderStore;

/// One row of the folder list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    /// Whether this is the current folder
    pub active: bool,
}

/// One row of the todo list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
    pub title: String,
    /// `"{title} (Due: {due_date})"`
    pub label: String,
    /// Priority used as the style classifier
    pub priority_class: &'static str,
    pub description: String,
}

impl TodoEntry {
    /// Full class attribute for the row
    pub fn class(&self) -> String {
        format!("todo-item {}", self.priority_class)
    }
}

impl From<&Todo> for TodoEntry {
    fn from(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            label: todo.label(),
            priority_class: todo.priority.as_str(),
            description: todo.description.clone(),
        }
    }
}

/// The todo panel: current folder title plus its todos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListView {
    pub title: String,
    pub entries: Vec<TodoEntry>,
}

pub fn render_folders<S: KeyValueStorage>(store: &FolderStore<S>) -> Vec<FolderEntry> {
    let current = store.current_folder();
    store
        .folders()
        .iter()
        .map(|folder| FolderEntry {
            name: folder.name.clone(),
            active: std::ptr::eq(folder, current),
        })
        .collect()
}

pub fn render_todos<S: KeyValueStorage>(store: &FolderStore<S>) -> TodoListView {
    todo_list_view(store.current_folder())
}

fn todo_list_view(folder: &Folder) -> TodoListView {
    TodoListView {
        title: folder.name.clone(),
        entries: folder.todos.iter().map(TodoEntry::from).collect(),
    }
}
