// Rust guideline compliant 2026-10-19

//! Implementation of the `awards stats` command.

use crate::OutputFormatter;
use anyhow::Result;
use awards_app::Workspace;
use std::path::Path;

/// Prints total, funny, serious and favorite counts.
///
/// Counts cover the whole applied dataset regardless of filters.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized.
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let workspace = Workspace::discover(root)?;
    let store = workspace.open_store()?;
    println!("{}", formatter.format_stats(&store.stats()));
    Ok(())
}
