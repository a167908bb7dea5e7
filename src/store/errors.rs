//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Any failure reported by SQLite (locking, constraint, I/O inside the engine)
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Filesystem failure while preparing the database location
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// No row with the given id
    #[error("Book {0} not found")]
    NotFound(i64),
}

impl StoreError {
    /// Whether this error means the targeted row does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        assert!(StoreError::NotFound(7).is_not_found());
        assert!(!StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows).is_not_found());
    }

    #[test]
    fn test_sqlite_message_is_passed_through() {
        let err = StoreError::from(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(
            err.to_string(),
            rusqlite::Error::QueryReturnedNoRows.to_string()
        );
    }
}
