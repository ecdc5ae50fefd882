//! Folder Entity
//!
//! A named, ordered container of todos.

use serde::{Deserialize, Serialize};

use super::entity::{remove_by_key, Entity};
use super::todo::Todo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl Folder {
    /// Create an empty folder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }
}

impl Entity for Folder {
    fn key(&self) -> &str {
        &self.name
    }
}

/// Append a todo to the end of the folder
pub fn add_todo(folder: &mut Folder, todo: Todo) {
    folder.todos.push(todo);
}

/// Remove every todo titled `title`, returning how many were removed
pub fn remove_todo(folder: &mut Folder, title: &str) -> usize {
    remove_by_key(&mut folder.todos, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    fn todo(title: &str) -> Todo {
        Todo::new(title, "desc", "2024-01-01", Priority::Low)
    }

    #[test]
    fn test_new_folder_is_empty() {
        let folder = Folder::new("General");
        assert_eq!(folder.key(), "General");
        assert!(folder.todos.is_empty());
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut folder = Folder::new("General");
        add_todo(&mut folder, todo("a"));
        add_todo(&mut folder, todo("b"));
        let titles: Vec<_> = folder.todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
    }

    #[test]
    fn test_remove_drops_all_matching_titles() {
        let mut folder = Folder::new("General");
        add_todo(&mut folder, todo("a"));
        add_todo(&mut folder, todo("b"));
        add_todo(&mut folder, todo("a"));
        assert_eq!(remove_todo(&mut folder, "a"), 2);
        assert_eq!(folder.todos, vec![todo("b")]);
        assert_eq!(remove_todo(&mut folder, "missing"), 0);
    }
}
