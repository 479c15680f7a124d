//! Centralized error handling for ferrofetch

use std::io;
use thiserror::Error;

/// Error type shared by the collaborators behind every probe
#[derive(Debug, Error)]
pub enum FetchError {
    /// I/O errors (file reading, syscalls)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Parsing errors (invalid data format)
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    /// System detection errors
    #[error("Detection error: {0}")]
    Detection(String),
}

/// Type alias for Results in ferrofetch
pub type Result<T> = std::result::Result<T, FetchError>;
