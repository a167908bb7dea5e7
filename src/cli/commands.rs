//! CLI command implementations
//!
//! Both commands resolve configuration the same way: file (or defaults),
//! then command-line overrides, then validation.

use serde_json::json;
use tracing::info;

use crate::config::Config;
use crate::http_server::HttpServer;
use crate::logging;
use crate::store::BookStore;

use super::args::{Command, StoreArgs};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { store } => {
            let config = resolve_config(&store, None, None)?;
            init(&config)
        }
        Command::Serve { store, host, port } => {
            let config = resolve_config(&store, host, port)?;
            serve(&config)
        }
    }
}

/// Load configuration and apply command-line overrides
pub fn resolve_config(
    args: &StoreArgs,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())?;

    if let Some(database) = &args.database {
        config.database_path = database.to_string_lossy().into_owned();
    }
    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Create the database file and `books` table
///
/// Idempotent: an existing database is left as is.
pub fn init(config: &Config) -> CliResult<()> {
    logging::init(config.level()?);

    let store = BookStore::open(config.database_path())?;

    write_response(json!({
        "initialized": true,
        "database": store.path().display().to_string(),
    }))?;

    Ok(())
}

/// Bootstrap the schema and serve HTTP until interrupted
pub fn serve(config: &Config) -> CliResult<()> {
    logging::init(config.level()?);

    let store = BookStore::open(config.database_path())?;
    let server = HttpServer::new(config.http.clone(), store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("Failed to create tokio runtime: {}", e)))?;

    info!(addr = %server.socket_addr(), "starting HTTP server");

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::BootFailed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_win_over_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("booklog.json");
        fs::write(
            &config_path,
            r#"{"database_path": "from-file.db", "http": {"host": "0.0.0.0", "port": 9000}}"#,
        )
        .unwrap();

        let args = StoreArgs {
            config: Some(config_path),
            database: Some(PathBuf::from("from-flag.db")),
        };
        let config = resolve_config(&args, None, Some(7000)).unwrap();

        assert_eq!(config.database_path, "from-flag.db");
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 7000);
    }

    #[test]
    fn test_empty_host_override_rejected() {
        let err = resolve_config(&StoreArgs::default(), Some(String::new()), None).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_init_creates_database() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("data").join("books.db");
        let args = StoreArgs {
            config: None,
            database: Some(db_path.clone()),
        };

        let config = resolve_config(&args, None, None).unwrap();
        init(&config).unwrap();
        init(&config).unwrap();

        assert!(db_path.exists());
    }
}
