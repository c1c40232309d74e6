//! Error types for the hand gesture estimation library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Landmark set has the wrong length or contains non-finite coordinates
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Gesture capture requested without a tracked pose or without a name
    #[error("Authoring precondition not met: {0}")]
    AuthoringPrecondition(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
