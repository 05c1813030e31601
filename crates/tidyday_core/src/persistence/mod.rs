//! Task list persistence adapter.
//!
//! # Responsibility
//! - Define the `load`/`save` contract the task store depends on.
//! - Encode the whole collection into one cookie value and back.
//!
//! # Invariants
//! - `load` never fails; unreadable or missing state is an empty list.
//! - `save` is fire-and-forget; failures are logged, not returned.

pub mod codec;
pub mod cookie;

pub use codec::{decode_tasks, encode_tasks, CodecError};
pub use cookie::CookieTaskPersistence;

use crate::model::task::{TaskList, TaskRecord};

/// Durable home of the task collection.
pub trait TaskPersistence {
    /// Reads the last saved collection, or an empty one.
    fn load(&self) -> TaskList;
    /// Overwrites the stored collection with `tasks`.
    fn save(&self, tasks: &[TaskRecord]);
}

impl<T: TaskPersistence + ?Sized> TaskPersistence for &T {
    fn load(&self) -> TaskList {
        (**self).load()
    }

    fn save(&self, tasks: &[TaskRecord]) {
        (**self).save(tasks)
    }
}
