//! # HTTP Server Module
//!
//! Axum server for the reading log.
//!
//! # Endpoints
//!
//! - `/` and `/static/script.js` - Front-end page
//! - `/health` - Health check
//! - `/api/books`, `/api/books/{id}`, `/api/search_books` - Book API

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod page_routes;
pub mod server;

pub use book_routes::BookState;
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
