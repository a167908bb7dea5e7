//! Book records and request payloads
//!
//! `BookInput` is what clients send; it is validated exactly once into
//! `BookFields` before anything touches the store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored reading record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub author: String,
    pub publisher: Option<String>,
    /// `YYYY-MM-DD`, stored as given
    pub publication_date: Option<String>,
    /// `YYYY-MM-DD`, stored as given
    pub read_date: Option<String>,
    pub review: Option<String>,
}

/// Book payload as received on create and update.
///
/// Absent keys and JSON `null` both deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub read_date: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
}

/// Validated book payload, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub subtitle: Option<String>,
    pub author: String,
    pub publisher: Option<String>,
    pub publication_date: Option<String>,
    pub read_date: Option<String>,
    pub review: Option<String>,
}

/// Payload validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title and author are required.")]
    MissingRequiredFields,
}

impl BookInput {
    /// Check required fields and produce the writable field set.
    ///
    /// `title` and `author` must both be non-empty. Nothing else is checked;
    /// dates and empty optional strings are stored verbatim.
    pub fn validate(self) -> Result<BookFields, ValidationError> {
        let title = self.title.filter(|s| !s.is_empty());
        let author = self.author.filter(|s| !s.is_empty());

        match (title, author) {
            (Some(title), Some(author)) => Ok(BookFields {
                title,
                subtitle: self.subtitle,
                author,
                publisher: self.publisher,
                publication_date: self.publication_date,
                read_date: self.read_date,
                review: self.review,
            }),
            _ => Err(ValidationError::MissingRequiredFields),
        }
    }
}

impl BookFields {
    /// Minimal field set with only the required values
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            author: author.into(),
            publisher: None,
            publication_date: None,
            read_date: None,
            review: None,
        }
    }

    pub fn with_read_date(mut self, read_date: impl Into<String>) -> Self {
        self.read_date = Some(read_date.into());
        self
    }

    pub fn with_review(mut self, review: impl Into<String>) -> Self {
        self.review = Some(review.into());
        self
    }
}
