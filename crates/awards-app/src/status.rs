// Rust guideline compliant 2026-10-19

//! User-facing status messages and error envelopes.
//!
//! Import and apply failures never escape as raw errors: the boundary turns
//! every outcome into an [`ImportStatus`] for display.

use crate::error::{AppError, ErrorCode};
use crate::importer::ImportKind;
use serde::Serialize;

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// The operation succeeded.
    Success,
    /// The operation failed and changed nothing.
    Error,
    /// Informational message.
    Info,
}

/// A transient status line shown after an import or apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportStatus {
    /// Severity.
    pub kind: StatusKind,
    /// Human-readable message.
    pub message: String,
}

impl ImportStatus {
    /// Creates an informational status.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    /// Converts the outcome of a file import into a status.
    #[must_use]
    pub fn from_import(kind: ImportKind, outcome: &Result<usize, AppError>) -> Self {
        match (kind, outcome) {
            (ImportKind::Commits, Ok(count)) => Self {
                kind: StatusKind::Success,
                message: format!("{} commits imported successfully!", count),
            },
            (ImportKind::Authors, Ok(count)) => Self {
                kind: StatusKind::Success,
                message: format!(
                    "{} author records imported successfully! Usernames extracted automatically.",
                    count
                ),
            },
            (_, Err(err)) => Self {
                kind: StatusKind::Error,
                message: format!("Import failed: {}", err),
            },
        }
    }

    /// Converts the outcome of an apply into a status.
    #[must_use]
    pub fn from_apply(outcome: &Result<usize, AppError>) -> Self {
        match outcome {
            Ok(count) => Self {
                kind: StatusKind::Success,
                message: format!("Applied! {} commits are now available.", count),
            },
            Err(err @ AppError::Precondition(_)) => Self {
                kind: StatusKind::Error,
                message: err.to_string(),
            },
            Err(err) => Self {
                kind: StatusKind::Error,
                message: format!("Failed to apply data: {}", err),
            },
        }
    }

    /// Returns true for error statuses.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// Snapshot of a workspace's staged and applied data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceSummary {
    /// Number of staged commits, if a commits file is staged.
    pub staged_commits: Option<usize>,
    /// Number of staged author records, if an author-details file is staged.
    pub staged_authors: Option<usize>,
    /// Whether `apply` would succeed.
    pub can_apply: bool,
    /// Number of commits in the applied dataset.
    pub applied_commits: usize,
    /// Number of favorite shas.
    pub favorites: usize,
    /// Number of shas with a recorded vote.
    pub voted: usize,
}

/// Standard error envelope for JSON command output.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}
