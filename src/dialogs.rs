//! Browser Dialogs
//!
//! `Dialogs` backed by the blocking `window.prompt/confirm/alert` calls.

use folder_todo_core::Dialogs;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn prompt(&self, message: &str) -> Option<String> {
        web_sys::window()?.prompt_with_message(message).ok().flatten()
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            warn!(message, "no window to show alert");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            warn!(error = ?err, message, "alert failed");
        }
    }
}
