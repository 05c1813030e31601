//! Task list state and persistence engine for the tidyday widget.
//! Rendering, animation and the video panel live outside this crate.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{TaskList, TaskRecord, TaskValidationError};
pub use persistence::{CodecError, CookieTaskPersistence, TaskPersistence};
pub use repo::cookie_repo::{
    Cookie, CookieJar, MemoryCookieJar, RepoError, RepoResult, SqliteCookieJar,
};
pub use service::intent::{DispatchOutcome, TaskIntent};
pub use service::summary::{summarize, DaySummary, MessageSink};
pub use service::task_store::{AddOutcome, StoreResult, TaskStore, TaskStoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
