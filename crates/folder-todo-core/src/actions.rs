//! User Actions
//!
//! What each button and list entry does: gather input through [`Dialogs`],
//! apply one store mutation, and report refusals back to the user.
//! Each returns `Ok(true)` when state changed so the caller knows to
//! re-render. Storage failures are returned as errors.

use tracing::debug;

use crate::dialogs::Dialogs;
use crate::domain::{DomainError, DomainResult, Priority, Todo};
use crate::render::TodoEntry;
use crate::repository::KeyValueStorage;
use crate::store::FolderStore;

pub const FOLDER_NAME_PROMPT: &str = "Enter folder name:";
pub const TODO_TITLE_PROMPT: &str = "Enter todo title:";
pub const TODO_DESCRIPTION_PROMPT: &str = "Enter todo description:";
pub const TODO_DUE_DATE_PROMPT: &str = "Enter todo due date:";
pub const TODO_PRIORITY_PROMPT: &str = "Enter todo priority (low, medium, high):";

/// Prompt for a name and append a new folder
pub fn add_folder<S: KeyValueStorage>(
    store: &mut FolderStore<S>,
    dialogs: &impl Dialogs,
) -> DomainResult<bool> {
    let Some(name) = non_empty(dialogs.prompt(FOLDER_NAME_PROMPT)) else {
        debug!("add folder abandoned");
        return Ok(false);
    };
    report_refusal(dialogs, store.add_folder(&name).map(|_| ()))
}

/// Confirm, then delete every folder named `name`
pub fn delete_folder<S: KeyValueStorage>(
    store: &mut FolderStore<S>,
    dialogs: &impl Dialogs,
    name: &str,
) -> DomainResult<bool> {
    let question = format!("Are you sure you want to delete the folder \"{name}\"?");
    if !dialogs.confirm(&question) {
        return Ok(false);
    }
    report_refusal(dialogs, store.delete_folder(name))
}

/// Make `name` the current folder
pub fn select_folder<S: KeyValueStorage>(
    store: &mut FolderStore<S>,
    name: &str,
) -> DomainResult<bool> {
    store.set_current_folder(name)?;
    Ok(true)
}

/// Prompt for title, description, due date and priority, then append the
/// todo to the current folder
///
/// All four prompts are always shown; any empty or cancelled answer
/// abandons the todo.
pub fn add_todo<S: KeyValueStorage>(
    store: &mut FolderStore<S>,
    dialogs: &impl Dialogs,
) -> DomainResult<bool> {
    let title = non_empty(dialogs.prompt(TODO_TITLE_PROMPT));
    let description = non_empty(dialogs.prompt(TODO_DESCRIPTION_PROMPT));
    let due_date = non_empty(dialogs.prompt(TODO_DUE_DATE_PROMPT));
    let priority = non_empty(dialogs.prompt(TODO_PRIORITY_PROMPT));

    let (Some(title), Some(description), Some(due_date), Some(priority)) =
        (title, description, due_date, priority)
    else {
        debug!("add todo abandoned");
        return Ok(false);
    };

    let priority = match priority.parse::<Priority>() {
        Ok(priority) => priority,
        Err(err) => return report_refusal(dialogs, Err(err)),
    };
    store.add_todo_to_current(Todo::new(title, description, due_date, priority))?;
    Ok(true)
}

/// Show a todo's description
pub fn show_todo(dialogs: &impl Dialogs, entry: &TodoEntry) {
    dialogs.alert(&format!("Description: {}", entry.description));
}

/// Confirm, then remove every todo titled `title` from the current folder
pub fn delete_todo<S: KeyValueStorage>(
    store: &mut FolderStore<S>,
    dialogs: &impl Dialogs,
    title: &str,
) -> DomainResult<bool> {
    if !dialogs.confirm(&format!("Delete the todo \"{title}\"?")) {
        return Ok(false);
    }
    let folder = store.current_folder().name.clone();
    Ok(store.remove_todo(&folder, title)? > 0)
}

fn non_empty(answer: Option<String>) -> Option<String> {
    answer.filter(|text| !text.is_empty())
}

/// Turn a refused operation into an alert; storage errors pass through
fn report_refusal(dialogs: &impl Dialogs, result: DomainResult<()>) -> DomainResult<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(err @ DomainError::LastFolder) => {
            dialogs.alert(&err.to_string());
            Ok(false)
        }
        Err(DomainError::Conflict(message) | DomainError::InvalidInput(message)) => {
            dialogs.alert(&message);
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::dialogs::ScriptedDialogs;
    use crate::render::render_todos;
    use crate::repository::MemoryStorage;

    fn store() -> FolderStore<MemoryStorage> {
        FolderStore::load(MemoryStorage::new(), &StoreConfig::default()).unwrap()
    }

    fn names(store: &FolderStore<MemoryStorage>) -> Vec<String> {
        store.folders().iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_add_folder_from_prompt() {
        let mut store = store();
        let dialogs = ScriptedDialogs::new().with_answers([Some("Work")]);

        assert!(add_folder(&mut store, &dialogs).unwrap());
        assert_eq!(names(&store), ["General", "Work"]);
        assert_eq!(dialogs.prompts(), [FOLDER_NAME_PROMPT]);
    }

    #[test]
    fn test_cancelled_or_empty_folder_name_is_ignored() {
        let mut store = store();
        let dialogs = ScriptedDialogs::new().with_answers([None, Some("")]);

        assert!(!add_folder(&mut store, &dialogs).unwrap());
        assert!(!add_folder(&mut store, &dialogs).unwrap());
        assert_eq!(names(&store), ["General"]);
        assert!(dialogs.alerts().is_empty());
    }

    #[test]
    fn test_duplicate_folder_alerts() {
        let mut store = store();
        let dialogs = ScriptedDialogs::new().with_answers([Some("General")]);

        assert!(!add_folder(&mut store, &dialogs).unwrap());
        assert_eq!(dialogs.alerts(), ["A folder named \"General\" already exists."]);
    }

    #[test]
    fn test_delete_folder_requires_confirmation() {
        let mut store = store();
        store.add_folder("Work").unwrap();
        let dialogs = ScriptedDialogs::new().with_confirmations([false, true]);

        assert!(!delete_folder(&mut store, &dialogs, "Work").unwrap());
        assert_eq!(names(&store), ["General", "Work"]);

        assert!(delete_folder(&mut store, &dialogs, "Work").unwrap());
        assert_eq!(names(&store), ["General"]);
        assert_eq!(
            dialogs.confirms()[0],
            "Are you sure you want to delete the folder \"Work\"?"
        );
    }

    #[test]
    fn test_last_folder_warning() {
        let mut store = store();
        let dialogs = ScriptedDialogs::new().with_confirmations([true]);

        assert!(!delete_folder(&mut store, &dialogs, "General").unwrap());
        assert_eq!(dialogs.alerts(), ["You must have at least one folder."]);
        assert_eq!(names(&store), ["General"]);
    }

    #[test]
    fn test_add_todo_asks_four_prompts() {
        let mut store = store();
        let dialogs = ScriptedDialogs::new().with_answers([
            Some("Buy milk"),
            Some("2%"),
            Some("2024-01-01"),
            Some("low"),
        ]);

        assert!(add_todo(&mut store, &dialogs).unwrap());
        assert_eq!(
            dialogs.prompts(),
            [
                TODO_TITLE_PROMPT,
                TODO_DESCRIPTION_PROMPT,
                TODO_DUE_DATE_PROMPT,
                TODO_PRIORITY_PROMPT
            ]
        );
        let view = render_todos(&store);
        assert_eq!(view.entries[0].label, "Buy milk (Due: 2024-01-01)");
        assert_eq!(view.entries[0].priority_class, "low");
    }

    #[test]
    fn test_add_todo_abandoned_when_any_field_missing() {
        let mut store = store();
        let dialogs = ScriptedDialogs::new().with_answers([
            None,
            Some("desc"),
            Some("2024-01-01"),
            Some("high"),
        ]);

        assert!(!add_todo(&mut store, &dialogs).unwrap());
        assert_eq!(dialogs.prompts().len(), 4);
        assert!(store.current_folder().todos.is_empty());
    }

    #[test]
    fn test_add_todo_rejects_unknown_priority() {
        let mut store = store();
        let dialogs = ScriptedDialogs::new().with_answers([
            Some("t"),
            Some("d"),
            Some("2024-01-01"),
            Some("urgent"),
        ]);

        assert!(!add_todo(&mut store, &dialogs).unwrap());
        assert_eq!(dialogs.alerts(), ["Priority must be one of: low, medium, high."]);
        assert!(store.current_folder().todos.is_empty());
    }

    #[test]
    fn test_show_and_delete_todo() {
        let mut store = store();
        store
            .add_todo_to_current(Todo::new("Buy milk", "2%", "2024-01-01", Priority::Low))
            .unwrap();
        let entry = render_todos(&store).entries[0].clone();
        let dialogs = ScriptedDialogs::new().with_confirmations([true]);

        show_todo(&dialogs, &entry);
        assert_eq!(dialogs.alerts(), ["Description: 2%"]);

        assert!(delete_todo(&mut store, &dialogs, &entry.title).unwrap());
        assert!(store.current_folder().todos.is_empty());
    }

    #[test]
    fn test_select_unknown_folder_is_an_error() {
        let mut store = store();
        assert!(select_folder(&mut store, "General").unwrap());
        assert!(matches!(
            select_folder(&mut store, "Nope"),
            Err(DomainError::NotFound(_))
        ));
    }
}
