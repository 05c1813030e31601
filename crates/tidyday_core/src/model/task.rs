//! Task record model.
//!
//! # Responsibility
//! - Define the `{ text, done }` record shared by store, codec and views.
//! - Own the creation-time text validation rule.
//!
//! # Invariants
//! - `TaskRecord::new` only accepts text that is non-empty after trimming.
//! - Struct literals and deserialization bypass validation on purpose: edited
//!   and persisted text may be empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Ordered task collection; the index of a record is its identity.
pub type TaskList = Vec<TaskRecord>;

/// Validation error for task creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Input was empty or whitespace-only.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do entry.
///
/// Serialized field names (`text`, `done`) are the persisted wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// User-facing task text.
    pub text: String,
    /// Completion flag.
    pub done: bool,
}

impl TaskRecord {
    /// Creates an open task from raw user input.
    ///
    /// Leading/trailing whitespace is trimmed before storing.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::EmptyText` when nothing is left after trimming.
    pub fn new(raw_text: &str) -> Result<Self, TaskValidationError> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(Self {
            text: trimmed.to_string(),
            done: false,
        })
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskRecord, TaskValidationError};

    #[test]
    fn new_trims_text_and_starts_open() {
        let task = TaskRecord::new("  buy milk \n").expect("non-empty text");
        assert_eq!(task.text, "buy milk");
        assert!(!task.done);
    }

    #[test]
    fn new_rejects_whitespace_only() {
        assert_eq!(
            TaskRecord::new(" \t ").unwrap_err(),
            TaskValidationError::EmptyText
        );
        assert_eq!(TaskRecord::new("").unwrap_err(), TaskValidationError::EmptyText);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut task = TaskRecord::new("stretch").unwrap();
        task.toggle();
        assert!(task.done);
        task.toggle();
        assert!(!task.done);
    }
}
