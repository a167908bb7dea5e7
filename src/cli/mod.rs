//! CLI module for booklog
//!
//! Provides command-line interface for:
//! - init: Create the database file and `books` table
//! - serve: Bootstrap the schema and run the HTTP server

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, StoreArgs};
pub use commands::{init, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
pub use io::write_response;
