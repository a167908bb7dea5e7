//! booklog - a small self-hosted reading log
//!
//! One SQLite table of books behind a JSON API, plus a single-page front end.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod logging;
pub mod model;
pub mod store;

pub use config::Config;
pub use model::{Book, BookFields, BookInput, ValidationError};
pub use store::{BookStore, StoreError, StoreResult};
