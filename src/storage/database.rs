//! SQLite connection and schema management
//!
//! Opens the database file and makes sure the expenses table exists.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{ExpenseError, ExpenseResult};

/// Schema for the single expenses table
const SCHEMA: &str = "
    BEGIN;

    CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        amount REAL NOT NULL,
        category TEXT NOT NULL,
        description TEXT
    );

    CREATE INDEX IF NOT EXISTS idx_expenses_date
        ON expenses (date);

    CREATE INDEX IF NOT EXISTS idx_expenses_category
        ON expenses (category);

    COMMIT;
";

/// Open (creating if needed) the database at `path`
pub fn open(path: &Path) -> ExpenseResult<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let conn = Connection::open(path).map_err(|e| {
        ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database with the schema applied
pub fn open_in_memory() -> ExpenseResult<Connection> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Create the expenses table and its indexes; idempotent
pub fn create_schema(conn: &Connection) -> ExpenseResult<()> {
    conn.execute_batch(SCHEMA)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create schema: {}", e)))
}
