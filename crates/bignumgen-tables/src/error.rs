//! Error types

use thiserror::Error;

/// Errors raised while writing generated output
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Output stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON record serialization failure
    #[cfg(feature = "json")]
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while parsing names and encoded results
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Encoded result is not exactly two ASCII digits
    #[error("Invalid encoded result {0:?}: expected two ASCII digits")]
    InvalidEncoding(String),

    /// Unknown section name
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Unknown or disabled output format
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}
