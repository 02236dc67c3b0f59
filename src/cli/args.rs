//! CLI argument definitions using clap
//!
//! Commands:
//! - anthology serve --host <addr> --port <port>

use clap::{Parser, Subcommand};

/// Anthology - a small author-catalog REST service
#[derive(Parser, Debug)]
#[command(name = "anthology")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the author-catalog HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
