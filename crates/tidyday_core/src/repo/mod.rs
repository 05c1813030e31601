//! Durable key-value storage behind the task list.
//!
//! # Responsibility
//! - Define the cookie jar contract the persistence adapter writes through.
//! - Keep SQL details out of the store and codec layers.
//!
//! # Invariants
//! - A cookie is addressed by `(name, path)`; a write replaces the old value.
//! - Expired cookies read as absent.

pub mod cookie_repo;
