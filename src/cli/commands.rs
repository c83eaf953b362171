//! CLI command implementations
//!
//! `serve` loads configuration, initializes logging, seeds the store, and
//! runs the HTTP server to completion.

use std::fs;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::rest_api::{self, ServerConfig};
use crate::store::BookStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Start the HTTP server
pub fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port_override {
        config.port = port;
    }

    init_tracing();

    let store = BookStore::with_seed_catalog();
    tracing::info!(books = store.len(), "seed catalog loaded");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(rest_api::serve(&config, rest_api::shared(store)))?;

    Ok(())
}

/// Load configuration from file; a missing file means defaults, a malformed
/// one is a startup error.
fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bookdb=info,tower_http=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
