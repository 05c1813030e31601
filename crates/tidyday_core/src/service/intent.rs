//! UI intents and their dispatch onto the task store.

use crate::model::task::TaskRecord;
use crate::persistence::TaskPersistence;
use crate::service::summary::{DaySummary, MessageSink};
use crate::service::task_store::{AddOutcome, StoreResult, TaskStore};

/// User action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIntent {
    AddRequested(String),
    ToggleRequested(usize),
    EditRequested(usize, String),
    DeleteRequested(usize),
    SummaryRequested,
}

/// What a dispatched intent did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Add(AddOutcome),
    Toggled { index: usize, done: bool },
    Edited { index: usize },
    Deleted { index: usize, task: TaskRecord },
    Summarized(DaySummary),
}

impl<P: TaskPersistence> TaskStore<P> {
    /// Runs `intent` against the store.
    ///
    /// Summary messages go to `sink`; mutating intents never touch it.
    pub fn dispatch(
        &mut self,
        intent: TaskIntent,
        sink: &mut dyn MessageSink,
    ) -> StoreResult<DispatchOutcome> {
        let outcome = match intent {
            TaskIntent::AddRequested(text) => DispatchOutcome::Add(self.add(&text)),
            TaskIntent::ToggleRequested(index) => DispatchOutcome::Toggled {
                index,
                done: self.toggle_done(index)?,
            },
            TaskIntent::EditRequested(index, text) => {
                self.edit(index, text)?;
                DispatchOutcome::Edited { index }
            }
            TaskIntent::DeleteRequested(index) => DispatchOutcome::Deleted {
                index,
                task: self.delete(index)?,
            },
            TaskIntent::SummaryRequested => DispatchOutcome::Summarized(self.finish_day(sink)),
        };
        Ok(outcome)
    }
}
