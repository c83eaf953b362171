//! CLI argument definitions using clap
//!
//! Commands:
//! - bookdb serve [--config <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookdb - A minimal, in-memory book catalog HTTP service
#[derive(Parser, Debug)]
#[command(name = "bookdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the bookdb server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bookdb.json")]
        config: PathBuf,

        /// Port to bind to, overriding the configuration file
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
