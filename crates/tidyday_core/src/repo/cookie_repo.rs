//! Cookie jar contract with SQLite and in-memory implementations.
//!
//! # Responsibility
//! - Store one string value per `(name, path)` with a max-age retention window.
//! - Offer an in-memory jar so store behavior can be tested without SQLite.
//!
//! # Invariants
//! - `set` with `max_age_secs == 0` behaves as a delete.
//! - `get` never returns a value whose retention window has elapsed.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Cookie jar read/write failure.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Backend cannot be reached at all (e.g. storage disabled).
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(reason) => write!(f, "cookie jar unavailable: {reason}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// One cookie write: value plus scope and retention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    /// Scope of the cookie; `/` covers the whole application.
    pub path: String,
    /// Retention window counted from the moment of the write.
    pub max_age_secs: u32,
}

/// Key-value channel used by the task persistence adapter.
pub trait CookieJar {
    /// Returns the live value stored under `(name, path)`, if any.
    fn get(&self, name: &str, path: &str) -> RepoResult<Option<String>>;
    /// Replaces the value stored under `(cookie.name, cookie.path)`.
    fn set(&self, cookie: &Cookie) -> RepoResult<()>;
}

impl<T: CookieJar + ?Sized> CookieJar for &T {
    fn get(&self, name: &str, path: &str) -> RepoResult<Option<String>> {
        (**self).get(name, path)
    }

    fn set(&self, cookie: &Cookie) -> RepoResult<()> {
        (**self).set(cookie)
    }
}

/// SQLite-backed cookie jar.
pub struct SqliteCookieJar<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCookieJar<'conn> {
    /// Wraps a connection returned by `db::open_db*` (schema already applied).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CookieJar for SqliteCookieJar<'_> {
    fn get(&self, name: &str, path: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value
                 FROM cookies
                 WHERE name = ?1
                   AND path = ?2
                   AND expires_at > (strftime('%s', 'now') * 1000);",
                params![name, path],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, cookie: &Cookie) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO cookies (name, path, value, expires_at, updated_at)
             VALUES (
                ?1,
                ?2,
                ?3,
                (strftime('%s', 'now') + ?4) * 1000,
                strftime('%s', 'now') * 1000
             )
             ON CONFLICT (name, path) DO UPDATE SET
                value = excluded.value,
                expires_at = excluded.expires_at,
                updated_at = excluded.updated_at;",
            params![
                cookie.name.as_str(),
                cookie.path.as_str(),
                cookie.value.as_str(),
                i64::from(cookie.max_age_secs),
            ],
        )?;
        Ok(())
    }
}

/// In-memory cookie jar for tests and session-only use.
///
/// Retention is not tracked beyond the `max_age_secs == 0` delete rule.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    values: RefCell<HashMap<(String, String), String>>,
    writes: Cell<usize>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing write accounting.
    pub fn with_value(name: &str, path: &str, value: impl Into<String>) -> Self {
        let jar = Self::new();
        jar.values
            .borrow_mut()
            .insert((name.to_string(), path.to_string()), value.into());
        jar
    }

    /// Number of `set` calls observed so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw stored value without going through the trait.
    pub fn raw_value(&self, name: &str, path: &str) -> Option<String> {
        self.values
            .borrow()
            .get(&(name.to_string(), path.to_string()))
            .cloned()
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str, path: &str) -> RepoResult<Option<String>> {
        Ok(self.raw_value(name, path))
    }

    fn set(&self, cookie: &Cookie) -> RepoResult<()> {
        self.writes.set(self.writes.get() + 1);
        let key = (cookie.name.clone(), cookie.path.clone());
        let mut values = self.values.borrow_mut();
        if cookie.max_age_secs == 0 {
            values.remove(&key);
        } else {
            values.insert(key, cookie.value.clone());
        }
        Ok(())
    }
}
