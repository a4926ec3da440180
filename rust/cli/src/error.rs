//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; `run` maps any
//! error to exit code 2 after writing it to stderr.

use pokerhand_engine::errors::HandError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Hand construction or dealing failed
    #[error("Hand error: {0}")]
    Hand(#[from] HandError),
}
