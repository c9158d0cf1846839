//! Error handling module for the quillt CLI.
//!
//! Lexical errors in the files being scanned are not errors of the tool:
//! they are diagnostics, rendered and reflected in the exit status. The
//! types here cover the tool itself failing.

use thiserror::Error;

/// Main error type for the quillt CLI application.
#[derive(Error, Debug)]
pub enum QuilltError {
    /// Error when the configuration or logging setup is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a configuration file cannot be parsed.
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using QuilltError.
pub type Result<T> = std::result::Result<T, QuilltError>;
