// Rust guideline compliant 2026-10-19

//! Implementation of the `awards vote` command.

use crate::OutputFormatter;
use anyhow::Result;
use awards_app::Workspace;
use std::path::Path;

/// Returns the signed vote delta for `by` votes.
pub fn vote_delta(by: u32, down: bool) -> i64 {
    let amount = i64::from(by);
    if down {
        -amount
    } else {
        amount
    }
}

/// Adds votes to a commit and prints the updated commit.
///
/// # Arguments
///
/// * `root` - Optional workspace root
/// * `sha` - Full sha or unique prefix of an applied commit
/// * `down` - Subtract instead of add
/// * `by` - Number of votes
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The sha does not resolve to exactly one commit
/// - The votes cannot be saved
pub fn execute(
    root: Option<&Path>,
    sha: &str,
    down: bool,
    by: u32,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::discover(root)?;
    let mut store = workspace.open_store()?;

    let full_sha = store.commit(sha)?.commit.sha;
    store.vote_for_commit(&full_sha, vote_delta(by, down))?;

    let view = store.commit(&full_sha)?;
    println!("{}", formatter.format_commit(&view));
    Ok(())
}
