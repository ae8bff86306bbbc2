//! CLI command implementations
//!
//! Boot order for `serve`: load config, connect the database pool,
//! build the router, bind the listener. Any failure along the way is
//! fatal; there is no degraded mode.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::http_server::HttpServer;
use crate::store::SqlProductStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Write a default configuration file, refusing to overwrite
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized());
    }

    let config = AppConfig::default();
    let content = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::io_error(e.to_string()))?;
    fs::write(config_path, content)?;

    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Connect to the database and serve HTTP until the process is killed
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = AppConfig::load(config_path)?;

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_error(e.to_string()))?;

    runtime.block_on(async move {
        let store = SqlProductStore::connect(&config.database.connection_url())
            .await
            .map_err(|e| CliError::database_error(e.to_string()))?;

        let server = HttpServer::with_config(Arc::new(store), config.http);
        server
            .start()
            .await
            .map_err(|e| CliError::server_error(e.to_string()))
    })
}
