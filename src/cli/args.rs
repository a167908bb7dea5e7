//! CLI argument definitions using clap
//!
//! Commands:
//! - booklog init [--config <path>] [--database <path>]
//! - booklog serve [--config <path>] [--database <path>] [--host <host>] [--port <port>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// booklog - a small self-hosted reading log
#[derive(Parser, Debug)]
#[command(name = "booklog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Path to JSON configuration file (defaults are used when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SQLite database file, overrides `database_path` from the config
    #[arg(long)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database and `books` table if missing
    Init {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Serve the web page and JSON API
    Serve {
        #[command(flatten)]
        store: StoreArgs,

        /// Address to bind, overrides `http.host`
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides `http.port`
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "booklog",
            "serve",
            "--database",
            "/tmp/books.db",
            "--port",
            "8080",
        ])
        .unwrap();

        match cli.command {
            Command::Serve { store, host, port } => {
                assert_eq!(store.database, Some(PathBuf::from("/tmp/books.db")));
                assert_eq!(store.config, None);
                assert_eq!(host, None);
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["booklog", "init", "--config", "booklog.json"]).unwrap();
        assert!(matches!(cli.command, Command::Init { .. }));
    }
}
