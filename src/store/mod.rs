//! Book store
//!
//! A single SQLite file holding the `books` table. Every operation opens its
//! own connection, runs one statement and drops the connection before
//! returning, on success and failure alike.

mod books;
mod errors;
mod schema;

pub use books::BookStore;
pub use errors::{StoreError, StoreResult};
