// Rust guideline compliant 2026-10-19

//! Application services for Commit Awards.
//!
//! This crate provides the non-CLI-specific pieces: the importer that
//! validates and merges the two JSON datasets, the store that derives the
//! filtered and sorted view, award rankings, status messages and workspace
//! discovery.

pub mod awards;
pub mod error;
pub mod importer;
pub mod options;
pub mod status;
pub mod store;
pub mod workspace;

pub use awards::{compute_awards, Awards};
pub use error::{AppError, ErrorCode, Result};
pub use importer::{merge_commits, parse_author_details, parse_commits, ImportKind, Importer};
pub use options::{parse_filter_type, parse_sort_by, parse_sort_order};
pub use status::{ErrorEnvelope, ImportStatus, StatusKind, WorkspaceSummary};
pub use store::{filter_views, sort_views, Store};
pub use workspace::Workspace;
