// Rust guideline compliant 2026-10-19

//! Implementation of the `awards status` command.

use crate::OutputFormatter;
use anyhow::Result;
use awards_app::Workspace;
use std::path::Path;

/// Prints staged-import counts, whether `apply` is possible, and the size of
/// the applied dataset.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized.
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let workspace = Workspace::discover(root)?;
    let summary = workspace.summary()?;
    println!("{}", formatter.format_summary(&summary));
    Ok(())
}
