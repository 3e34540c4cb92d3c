//! Error types for Turnover.

use thiserror::Error;

/// Main error type for Turnover operations.
#[derive(Error, Debug)]
pub enum TurnoverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid timeline item: {0}")]
    InvalidItem(String),

    #[error("Unresolvable media: {0}")]
    UnresolvableMedia(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Turnover operations.
pub type Result<T> = std::result::Result<T, TurnoverError>;
