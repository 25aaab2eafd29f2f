// Rust guideline compliant 2026-10-19

//! Implementation of the `awards show` command.

use crate::OutputFormatter;
use anyhow::Result;
use awards_app::Workspace;
use std::path::Path;

/// Shows one commit by full sha or unique prefix.
///
/// The lookup ignores the configured filter.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - No commit matches, or the prefix is ambiguous
pub fn execute(root: Option<&Path>, sha: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let workspace = Workspace::discover(root)?;
    let store = workspace.open_store()?;
    let view = store.commit(sha)?;
    println!("{}", formatter.format_commit(&view));
    Ok(())
}
