//! CLI-specific error types
//!
//! All CLI errors are fatal: they surface on stderr and the process exits
//! non-zero.

use thiserror::Error;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file unreadable or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Runtime construction or server I/O failure
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
