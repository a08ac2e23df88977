//! Centralized error handling for displayfetch

use std::io;
use thiserror::Error;

/// Custom error type for displayfetch operations
#[derive(Error, Debug)]
pub enum DisplayfetchError {
    /// I/O errors (sysfs reads, command spawning)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Parsing errors (invalid data format)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    #[error("Config syntax error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Detection errors (backend had nothing usable to report)
    #[error("Detection error: {0}")]
    Detection(String),

    /// An external command ran past its deadline and was killed
    #[error("Command '{program}' timed out after {timeout_ms} ms")]
    Timeout { program: String, timeout_ms: u64 },
}

impl DisplayfetchError {
    pub fn detection<S: Into<String>>(msg: S) -> Self {
        DisplayfetchError::Detection(msg.into())
    }

    pub fn parse<S: Into<String>>(msg: S) -> Self {
        DisplayfetchError::Parse(msg.into())
    }
}

/// Type alias for Results in displayfetch
pub type Result<T> = std::result::Result<T, DisplayfetchError>;
