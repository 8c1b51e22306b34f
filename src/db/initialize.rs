//! Schema creation for the inventory database.

use rusqlite::{Connection, Result};

/// Initialize the database schema.
///
/// `inventory` holds the whole store as one JSON payload row keyed by
/// `root`. `kv_store` is the flat key-value area older app versions wrote
/// to, kept only as a one-time migration source. `audit_log` records
/// operations for `list --audit`.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS inventory (
            key       TEXT PRIMARY KEY,
            payload   TEXT NOT NULL,
            saved_at  TEXT NOT NULL      -- ISO 8601 timestamp
        );

        CREATE TABLE IF NOT EXISTS kv_store (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS audit_log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,     -- ISO 8601 timestamp
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}
