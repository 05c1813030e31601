//! Task list domain model.
//!
//! # Responsibility
//! - Define the task record that the store mutates and persists.
//!
//! # Invariants
//! - Position in the owning collection is the only task identity.
//! - Newly created tasks always carry non-empty trimmed text.

pub mod task;
