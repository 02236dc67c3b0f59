//! CLI command implementations
//!
//! The store handle is constructed here, injected into the HTTP server, and
//! lives until process exit. The memory store holds no external resources,
//! so teardown is the process exiting.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::MemoryStore;

use super::args::Command;
use super::errors::{CliError, CliResult};

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
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Start the author-catalog HTTP server
///
/// 1. Initialize structured logging (RUST_LOG-controlled, default info)
/// 2. Open the store handle and build the server
/// 3. Run the axum server on the tokio runtime until it exits
pub fn serve(host: String, port: u16) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = Arc::new(MemoryStore::new());

    let config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };
    let server = HttpServer::with_config(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    rt.block_on(async { server.start().await })?;

    Ok(())
}
