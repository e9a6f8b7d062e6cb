//! Error types for the gesture control library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Classifier construction or processing error
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Landmark source error (open, decode, or close failure)
    #[error("Landmark source error: {0}")]
    Source(String),

    /// Action delivery to the sink failed
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// Session lifecycle error
    #[error("Session error: {0}")]
    Session(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
