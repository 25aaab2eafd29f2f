// Rust guideline compliant 2026-10-19

//! Error types for the Commit Awards core library.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Storage key is empty or contains characters unusable in a file name.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Commit not found.
    #[error("Commit not found: {0}")]
    NotFound(String),

    /// Configuration file or override is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
