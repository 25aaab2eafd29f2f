// Rust guideline compliant 2026-10-19

//! Command implementations for the Commit Awards CLI.

pub mod init;
pub mod import;
pub mod apply;
pub mod list;
pub mod show;
pub mod favorite;
pub mod vote;
pub mod stats;
pub mod awards;
pub mod status;
