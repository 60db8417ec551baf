//! Error types for the Love Week Card engine

use thiserror::Error;

/// Main error type for card engine operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Easing name not understood (e.g. "power9.out")
    #[error("Invalid ease: {0}")]
    InvalidEase(String),

    /// Trigger start/end expression not understood (e.g. "top sideways")
    #[error("Invalid trigger point: {0}")]
    InvalidTriggerPoint(String),

    /// Timeline position expression not understood (e.g. "~=0.2")
    #[error("Invalid timeline position: {0}")]
    InvalidPosition(String),

    /// Configuration file could not be parsed or holds invalid values
    #[error("Config error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Operation attempted on a session that has been torn down
    #[error("Session torn down: {0}")]
    SessionClosed(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
