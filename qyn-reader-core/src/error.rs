//! Error types for the chapter reader

use thiserror::Error;

/// Result type alias using ReaderError
pub type Result<T> = std::result::Result<T, ReaderError>;

/// Message shown to the reader whenever a chapter cannot be loaded.
///
/// The underlying [`ServiceError`] is only logged.
pub const CONTENT_UNAVAILABLE: &str = "Content unavailable";

/// Top-level error type for reader operations
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Invalid {0}: identifiers must not be empty")]
    EmptyIdentifier(&'static str),

    #[error("Unknown font family: {0}")]
    UnknownFontFamily(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

/// Errors reported by a chapter service
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}
