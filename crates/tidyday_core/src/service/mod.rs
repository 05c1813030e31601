//! Task list use-case services.
//!
//! # Responsibility
//! - Own the in-memory collection and route every mutation to persistence.
//! - Derive the end-of-day summary and hand it to a display sink.
//! - Translate UI intents into store operations.

pub mod intent;
pub mod summary;
pub mod task_store;
