//! Schema migrations, keyed on `PRAGMA user_version`.
//!
//! The schema has had a single version so far; migration 1 creates the
//! `log` table and its secondary index. A fresh database reports
//! user_version 0 and gets the full ladder applied.

use log::info;
use rusqlite::Connection;

use crate::errors::{AppError, AppResult};

/// Current schema version. Bumping this requires a new rung in
/// [`run_pending_migrations`].
pub const SCHEMA_VERSION: i64 = 1;

fn schema_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

fn set_schema_version(conn: &Connection, version: i64) -> AppResult<()> {
    // PRAGMA does not accept bound parameters.
    conn.execute_batch(&format!("PRAGMA user_version = {version}"))?;
    Ok(())
}

/// Migration 1: the `log` table, keyed by an auto-incrementing integer,
/// with a non-unique secondary index on `start_timestamp`.
fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            key             INTEGER PRIMARY KEY AUTOINCREMENT,
            start_timestamp INTEGER NOT NULL,
            end_timestamp   INTEGER NOT NULL,
            side            TEXT NOT NULL CHECK (side IN ('LEFT','RIGHT')),
            position        TEXT CHECK (position IN ('CRADLE','CLUTCH','LYING'))
        );

        CREATE INDEX IF NOT EXISTS idx_log_start_timestamp ON log(start_timestamp);
        "#,
    )?;
    Ok(())
}

/// Bring the database up to [`SCHEMA_VERSION`]. Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let mut version = schema_version(conn)?;

    if version > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {version} is newer than supported version {SCHEMA_VERSION}"
        )));
    }

    while version < SCHEMA_VERSION {
        match version {
            0 => migrate_to_v1(conn)?,
            v => {
                return Err(AppError::Migration(format!(
                    "no migration defined from schema version {v}"
                )));
            }
        }
        version += 1;
        set_schema_version(conn, version)?;
        info!("migrated database schema to version {version}");
    }

    Ok(())
}
