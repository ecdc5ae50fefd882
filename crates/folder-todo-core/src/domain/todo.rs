//! Todo Entity
//!
//! A single task with scheduling and descriptive metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::entity::{DomainError, Entity};

/// Todo priority, also used as the entry's style class
///
/// Stored data may hold whatever text an older version accepted, so
/// deserialization is lenient: casing and whitespace are ignored and
/// unrecognized values load as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    /// Accepts any casing and ignores surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(DomainError::InvalidInput(
                "Priority must be one of: low, medium, high.".to_string(),
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(Priority::default());
        };
        Ok(raw.parse::<Priority>().unwrap_or_else(|_| {
            warn!(priority = %raw, "unrecognized stored priority, using default");
            Priority::default()
        }))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A todo item; its title is its identity within a folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub title: String,
    pub description: String,
    pub due_date: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Create a new, not yet completed todo with empty notes and checklist
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            priority,
            notes: String::new(),
            checklist: Vec::new(),
            completed: false,
        }
    }

    /// Display label, e.g. `Buy milk (Due: 2024-01-01)`
    pub fn label(&self) -> String {
        format!("{} (Due: {})", self.title, self.due_date)
    }
}

impl Entity for Todo {
    fn key(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new("Buy milk", "2%", "2024-01-01", Priority::Low);
        assert_eq!(todo.key(), "Buy milk");
        assert!(todo.notes.is_empty());
        assert!(todo.checklist.is_empty());
        assert!(!todo.completed);
        assert_eq!(todo.label(), "Buy milk (Due: 2024-01-01)");
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("low".parse::<Priority>(), Ok(Priority::Low));
        assert_eq!(" High ".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("MEDIUM".parse::<Priority>(), Ok(Priority::Medium));
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_serialized_field_names() {
        let todo = Todo::new("t", "d", "2024-01-01", Priority::High);
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["dueDate"], "2024-01-01");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_stored_priority_is_lenient() {
        let parse = |value: &str| -> Priority { serde_json::from_str(value).unwrap() };
        assert_eq!(parse(r#""High""#), Priority::High);
        assert_eq!(parse(r#"" Medium ""#), Priority::Medium);
        assert_eq!(parse(r#""LOW""#), Priority::Low);
        assert_eq!(parse(r#""urgent""#), Priority::Low);
        assert_eq!(parse(r#""""#), Priority::Low);
        assert_eq!(parse("null"), Priority::Low);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"title":"t","description":"d","dueDate":"x","priority":"medium"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.priority, Priority::Medium);
        assert!(todo.checklist.is_empty());
        assert!(!todo.completed);
    }
}
