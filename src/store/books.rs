//! Book operations
//!
//! One SQL statement per operation, each on a fresh connection.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, Row};
use tracing::{debug, info};

use crate::model::{Book, BookFields};

use super::errors::{StoreError, StoreResult};
use super::schema::ensure_schema;

const SELECT_COLUMNS: &str =
    "id, title, subtitle, author, publisher, publication_date, read_date, review";

/// Listing order shared by list and search
const ORDER_BY: &str = "ORDER BY read_date DESC, title ASC";

/// Handle to the books database file.
///
/// Holds only the path; connections are opened per operation and never
/// shared between calls.
#[derive(Debug, Clone)]
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    /// Open the store at `path`, creating the parent directory and the
    /// `books` table if they are missing.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self { path: path.into() };

        if let Some(parent) = store.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = store.connect()?;
        ensure_schema(&conn)?;
        info!(path = %store.path.display(), "book store ready");

        Ok(store)
    }

    /// Database file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> StoreResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// All books, newest `read_date` first, then by title.
    pub fn list(&self) -> StoreResult<Vec<Book>> {
        let conn = self.connect()?;
        let sql = format!("SELECT {} FROM books {}", SELECT_COLUMNS, ORDER_BY);
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![], book_from_row)?;

        let mut books = Vec::new();
        for row in rows {
            books.push(row?);
        }
        Ok(books)
    }

    /// Books whose title, author or review contains `query`, ignoring case.
    ///
    /// An empty query is the same as [`BookStore::list`].
    pub fn search(&self, query: &str) -> StoreResult<Vec<Book>> {
        if query.is_empty() {
            return self.list();
        }

        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));
        let conn = self.connect()?;
        let sql = format!(
            "SELECT {} FROM books \
             WHERE LOWER(title) LIKE ?1 ESCAPE '\\' \
                OR LOWER(author) LIKE ?1 ESCAPE '\\' \
                OR LOWER(review) LIKE ?1 ESCAPE '\\' \
             {}",
            SELECT_COLUMNS, ORDER_BY
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![pattern], book_from_row)?;

        let mut books = Vec::new();
        for row in rows {
            books.push(row?);
        }
        debug!(query, matches = books.len(), "searched books");
        Ok(books)
    }

    /// Insert a new book and return its assigned id.
    pub fn insert(&self, book: &BookFields) -> StoreResult<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO books (title, subtitle, author, publisher, publication_date, read_date, review)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                book.title,
                book.subtitle,
                book.author,
                book.publisher,
                book.publication_date,
                book.read_date,
                book.review
            ],
        )?;
        let id = conn.last_insert_rowid();
        info!(id, title = %book.title, "book added");
        Ok(id)
    }

    /// Overwrite every field of book `id`.
    ///
    /// Fails with [`StoreError::NotFound`] when the statement touched no row.
    pub fn update(&self, id: i64, book: &BookFields) -> StoreResult<()> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE books
             SET title = ?1, subtitle = ?2, author = ?3, publisher = ?4,
                 publication_date = ?5, read_date = ?6, review = ?7
             WHERE id = ?8",
            params![
                book.title,
                book.subtitle,
                book.author,
                book.publisher,
                book.publication_date,
                book.read_date,
                book.review,
                id
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        info!(id, "book updated");
        Ok(())
    }

    /// Remove book `id`.
    ///
    /// Fails with [`StoreError::NotFound`] when the statement touched no row.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        info!(id, "book deleted");
        Ok(())
    }
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        subtitle: row.get(2)?,
        author: row.get(3)?,
        publisher: row.get(4)?,
        publication_date: row.get(5)?,
        read_date: row.get(6)?,
        review: row.get(7)?,
    })
}

/// Escape LIKE wildcards so the query matches literally
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
