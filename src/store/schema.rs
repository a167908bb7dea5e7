//! Schema bootstrap

use rusqlite::Connection;

use super::errors::StoreResult;

/// DDL for the `books` table. Idempotent.
pub(crate) const BOOKS_TABLE_DDL: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    subtitle TEXT,
    author TEXT NOT NULL,
    publisher TEXT,
    publication_date TEXT,
    read_date TEXT,
    review TEXT
)";

/// Create the `books` table if it does not exist yet.
///
/// There is no migration path; an existing table is left untouched.
pub(crate) fn ensure_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(BOOKS_TABLE_DDL)?;
    Ok(())
}
