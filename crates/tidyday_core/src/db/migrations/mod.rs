//! Ordered schema migrations for the cookie database.
//!
//! # Invariants
//! - Versions strictly increase; released entries are never edited.
//! - All pending steps run in one transaction.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_cookies.sql"),
}];

/// Latest schema version this build understands.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings `conn` up to `latest_version()`.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the file is newer than this build.
/// - `DbError::Sqlite` when a step fails; nothing is committed in that case.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let latest = latest_version();

    if current > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }

    let pending = MIGRATIONS.iter().filter(|m| m.version > current);
    let tx = conn.transaction()?;
    let mut applied = 0usize;
    for migration in pending {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
        applied += 1;
    }
    tx.commit()?;

    if applied > 0 {
        info!("event=db_migrate module=db status=ok from={current} to={latest} applied={applied}");
    }
    Ok(())
}
