// Rust guideline compliant 2026-10-19

//! Commit Awards Core Library
//!
//! This crate provides the foundational components for Commit Awards:
//! - Data models (Commit, AuthorDetail, overlays and view options)
//! - Username extraction from repository names
//! - Key-value persistence (file-backed and in-memory)
//! - Configuration loading
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod username;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use models::{
    humor_label, Author, AuthorDetail, Commit, CommitView, FilterType, Repo, SortBy, SortOrder,
    Stats, ViewOptions,
};
pub use storage::{FileKvStore, KvStore, MemoryKvStore};
pub use username::extract_username;
