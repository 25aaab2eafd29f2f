// Rust guideline compliant 2026-10-19

//! Implementation of the `awards favorite` command.

use crate::OutputFormatter;
use anyhow::Result;
use awards_app::Workspace;
use std::path::Path;

/// Toggles the favorite flag of a commit and prints the updated commit.
///
/// # Arguments
///
/// * `root` - Optional workspace root
/// * `sha` - Full sha or unique prefix of an applied commit
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The sha does not resolve to exactly one commit
/// - The favorites cannot be saved
pub fn execute(root: Option<&Path>, sha: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let workspace = Workspace::discover(root)?;
    let mut store = workspace.open_store()?;

    let full_sha = store.commit(sha)?.commit.sha;
    store.toggle_favorite(&full_sha)?;

    let view = store.commit(&full_sha)?;
    println!("{}", formatter.format_commit(&view));
    Ok(())
}
