//! Error types for the coder_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for coder_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// BMI requested for a zero height
    #[error("Arithmetic error: division by zero (height is zero)")]
    DivisionByZero,

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed coder input from the command line or stdin
    #[error("Invalid coder input: {0}")]
    Input(String),
}

impl Error {
    /// True for the arithmetic failure raised by BMI computation
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Error::DivisionByZero)
    }
}
