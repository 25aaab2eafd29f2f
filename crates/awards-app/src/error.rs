// Rust guideline compliant 2026-10-19

//! Error handling for Commit Awards application services.

use awards_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The uploaded file is not a JSON array.
    ParseError,
    /// Array elements lack required fields or have the wrong types.
    SchemaError,
    /// An action ran before the data it needs was imported.
    PreconditionError,
    /// The requested commit was not found.
    NotFound,
    /// The request included invalid inputs.
    InvalidInput,
    /// The workspace has not been initialized.
    NotInitialized,
    /// Configuration is invalid.
    ConfigError,
    /// IO failure while reading or writing workspace data.
    IoError,
    /// JSON serialization or parsing of persisted data failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Workspace is missing or not initialized.
    #[error("Awards workspace not initialized at {path}. Run 'awards init' first.")]
    NotInitialized {
        /// Path where `.awards` was expected.
        path: PathBuf,
    },

    /// Input file is not valid JSON or not a top-level array.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input array elements do not have the expected shape.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The operation requires data that has not been imported yet.
    #[error("{0}")]
    Precondition(String),

    /// A sha prefix matched more than one commit.
    #[error("Ambiguous sha: {prefix} matches {matches:?}")]
    AmbiguousSha {
        /// The prefix that was looked up.
        prefix: String,
        /// Every sha starting with the prefix.
        matches: Vec<String>,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotInitialized { .. } => ErrorCode::NotInitialized,
            AppError::Parse(_) => ErrorCode::ParseError,
            AppError::Schema(_) => ErrorCode::SchemaError,
            AppError::Precondition(_) => ErrorCode::PreconditionError,
            AppError::AmbiguousSha { .. } => ErrorCode::InvalidInput,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::InvalidKey(_) => ErrorCode::InvalidInput,
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::Config(_) => ErrorCode::ConfigError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::NotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::AmbiguousSha { prefix, matches } => Some(serde_json::json!({
                "prefix": prefix,
                "matches": matches,
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_for_import_taxonomy() {
        assert_eq!(AppError::Parse("x".into()).code(), ErrorCode::ParseError);
        assert_eq!(AppError::Schema("x".into()).code(), ErrorCode::SchemaError);
        assert_eq!(
            AppError::Precondition("x".into()).code(),
            ErrorCode::PreconditionError
        );
    }

    #[test]
    fn test_core_errors_keep_their_codes() {
        let err = AppError::from(CoreError::NotFound("abc".into()));
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Commit not found: abc");
    }

    #[test]
    fn test_ambiguous_details() {
        let err = AppError::AmbiguousSha {
            prefix: "ab".into(),
            matches: vec!["ab1".into(), "ab2".into()],
        };
        let details = err.details().unwrap();
        assert_eq!(details["matches"][1], "ab2");
    }
}
