//! Input Provider
//!
//! Blocking prompt/confirm/alert primitives the action flows depend on.
//! The browser implements them with `window.prompt` and friends;
//! [`ScriptedDialogs`] replays canned answers in tests.

use std::cell::RefCell;
use std::collections::VecDeque;

pub trait Dialogs {
    /// Ask for a line of text; `None` when the user cancels
    fn prompt(&self, message: &str) -> Option<String>;

    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// Show a message and wait for acknowledgement
    fn alert(&self, message: &str);
}

/// Scripted dialogs that answer from queues and record what was shown
///
/// Prompts beyond the script answer `None`; confirms beyond the script
/// answer `false`.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    answers: RefCell<VecDeque<Option<String>>>,
    confirmations: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue prompt answers; `None` simulates a cancelled prompt
    pub fn with_answers<I, T>(self, answers: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
        T: Into<String>,
    {
        self.answers
            .borrow_mut()
            .extend(answers.into_iter().map(|a| a.map(Into::into)));
        self
    }

    /// Queue confirm answers
    pub fn with_confirmations(self, confirmations: impl IntoIterator<Item = bool>) -> Self {
        self.confirmations.borrow_mut().extend(confirmations);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn prompt(&self, message: &str) -> Option<String> {
        self.prompts.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().flatten()
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirmations.borrow_mut().pop_front().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
