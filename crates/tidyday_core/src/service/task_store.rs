//! Task store: the in-memory task collection and its single writer.
//!
//! # Responsibility
//! - Apply add/toggle/edit/delete to the ordered collection.
//! - Write the full collection through `TaskPersistence` after each mutation.
//! - Keep the pending input buffer that `submit_input` consumes.
//!
//! # Invariants
//! - Every successful mutation triggers exactly one `save`; rejected input and
//!   out-of-range indices trigger none and leave state untouched.
//! - Added text is trimmed and non-empty; edited text is stored verbatim.
//! - The store is the only writer of the persisted collection.

use crate::model::task::{TaskList, TaskRecord};
use crate::persistence::TaskPersistence;
use crate::service::summary::{summarize, DaySummary, MessageSink};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, TaskStoreError>;

/// Failed task store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStoreError {
    /// `index` does not name a task in a collection of `len` tasks.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for TaskStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "task index {index} out of range for {len} task(s)")
            }
        }
    }
}

impl Error for TaskStoreError {}

/// Result of an add attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Task appended at `index` (always the last position).
    Added { index: usize },
    /// Input was empty after trimming; nothing changed.
    Rejected,
}

/// Ordered task list bound to a persistence adapter.
pub struct TaskStore<P: TaskPersistence> {
    persistence: P,
    tasks: TaskList,
    input: String,
}

impl<P: TaskPersistence> TaskStore<P> {
    /// Loads the saved collection (empty when absent or unreadable).
    pub fn open(persistence: P) -> Self {
        let tasks = persistence.load();
        info!("event=store_open module=store status=ok len={}", tasks.len());
        Self {
            persistence,
            tasks,
            input: String::new(),
        }
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TaskRecord> {
        self.tasks.get(index)
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Current contents of the pending input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the pending input. Not persisted.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Adds the pending input as a task.
    ///
    /// On rejection the input is kept so the user can fix it.
    pub fn submit_input(&mut self) -> AddOutcome {
        let raw = self.input.clone();
        self.add(&raw)
    }

    /// Appends `{ text: raw_text.trim(), done: false }`.
    ///
    /// Whitespace-only input is ignored. On success the pending input is
    /// cleared and the collection is saved.
    pub fn add(&mut self, raw_text: &str) -> AddOutcome {
        let task = match TaskRecord::new(raw_text) {
            Ok(task) => task,
            Err(_) => {
                debug!("event=task_add module=store status=rejected reason=empty_text");
                return AddOutcome::Rejected;
            }
        };

        self.tasks.push(task);
        self.input.clear();
        let index = self.tasks.len() - 1;
        self.commit("task_add", index);
        AddOutcome::Added { index }
    }

    /// Flips `done` at `index` and returns the new value.
    ///
    /// # Errors
    /// - `TaskStoreError::IndexOutOfRange`; nothing is mutated or saved.
    pub fn toggle_done(&mut self, index: usize) -> StoreResult<bool> {
        let task = self.task_mut(index)?;
        task.toggle();
        let done = task.done;
        self.commit("task_toggle", index);
        Ok(done)
    }

    /// Replaces the text at `index` verbatim.
    ///
    /// No trimming or emptiness check: this backs live editing, where the
    /// field may be cleared before new text is typed.
    ///
    /// # Errors
    /// - `TaskStoreError::IndexOutOfRange`; nothing is mutated or saved.
    pub fn edit(&mut self, index: usize, new_text: impl Into<String>) -> StoreResult<()> {
        self.task_mut(index)?.text = new_text.into();
        self.commit("task_edit", index);
        Ok(())
    }

    /// Removes and returns the task at `index`; later tasks shift down by one.
    ///
    /// # Errors
    /// - `TaskStoreError::IndexOutOfRange`; nothing is mutated or saved.
    pub fn delete(&mut self, index: usize) -> StoreResult<TaskRecord> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        self.commit("task_delete", index);
        Ok(removed)
    }

    /// Evaluates the day summary for the current collection.
    pub fn summarize(&self) -> DaySummary {
        summarize(&self.tasks)
    }

    /// Evaluates the day summary and shows its message on `sink`.
    pub fn finish_day(&self, sink: &mut dyn MessageSink) -> DaySummary {
        let summary = self.summarize();
        info!(
            "event=day_summary module=store status=ok summary={} len={}",
            summary.as_str(),
            self.tasks.len()
        );
        sink.show(summary.message());
        summary
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        let len = self.tasks.len();
        if index >= len {
            debug!("event=index_check module=store status=rejected index={index} len={len}");
            return Err(TaskStoreError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn task_mut(&mut self, index: usize) -> StoreResult<&mut TaskRecord> {
        self.check_index(index)?;
        Ok(&mut self.tasks[index])
    }

    fn commit(&self, event: &str, index: usize) {
        self.persistence.save(&self.tasks);
        info!(
            "event={event} module=store status=ok index={index} len={}",
            self.tasks.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{AddOutcome, TaskStore, TaskStoreError};
    use crate::model::task::{TaskList, TaskRecord};
    use crate::persistence::TaskPersistence;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPersistence {
        initial: TaskList,
        saves: RefCell<Vec<TaskList>>,
    }

    impl TaskPersistence for RecordingPersistence {
        fn load(&self) -> TaskList {
            self.initial.clone()
        }

        fn save(&self, tasks: &[TaskRecord]) {
            self.saves.borrow_mut().push(tasks.to_vec());
        }
    }

    #[test]
    fn add_saves_the_full_collection_once() {
        let mut store = TaskStore::open(RecordingPersistence::default());
        store.add("one");
        store.add("two");

        let saves = store.persistence().saves.borrow();
        assert_eq!(saves.len(), 2);
        assert_eq!(saves[1].len(), 2);
        assert_eq!(saves[1][0].text, "one");
    }

    #[test]
    fn rejected_add_keeps_input_and_skips_save() {
        let mut store = TaskStore::open(RecordingPersistence::default());
        store.set_input("   ");

        assert_eq!(store.submit_input(), AddOutcome::Rejected);
        assert_eq!(store.input(), "   ");
        assert!(store.persistence().saves.borrow().is_empty());
    }

    #[test]
    fn submit_input_clears_buffer_on_success() {
        let mut store = TaskStore::open(RecordingPersistence::default());
        store.set_input("  call mom ");

        assert_eq!(store.submit_input(), AddOutcome::Added { index: 0 });
        assert_eq!(store.input(), "");
        assert_eq!(store.tasks()[0].text, "call mom");
    }

    #[test]
    fn out_of_range_edit_does_not_save() {
        let mut store = TaskStore::open(RecordingPersistence::default());
        store.add("only");

        let err = store.edit(1, "nope").unwrap_err();
        assert_eq!(err, TaskStoreError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(store.persistence().saves.borrow().len(), 1);
        assert_eq!(store.tasks()[0].text, "only");
    }

    #[test]
    fn open_uses_loaded_collection() {
        let persistence = RecordingPersistence {
            initial: vec![TaskRecord {
                text: "carried over".to_string(),
                done: true,
            }],
            ..RecordingPersistence::default()
        };
        let store = TaskStore::open(persistence);

        assert_eq!(store.len(), 1);
        assert!(store.get(0).unwrap().done);
    }
}
