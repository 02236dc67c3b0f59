//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime construction failure
    #[error("Failed to start runtime: {0}")]
    Runtime(String),

    /// HTTP server failure
    #[error("HTTP server failed: {0}")]
    Server(#[from] std::io::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
