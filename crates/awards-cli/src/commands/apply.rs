// Rust guideline compliant 2026-10-19

//! Implementation of the `awards apply` command.
//!
//! Merges the staged commits with any staged author details, replaces the
//! applied dataset and clears the staging area.

use crate::OutputFormatter;
use anyhow::Result;
use awards_app::{ImportStatus, Workspace};
use std::path::Path;

/// Applies staged data.
///
/// Favorites and votes are kept across applies. When no author-details file
/// was staged, an informational status follows the success line.
///
/// # Arguments
///
/// * `root` - Optional workspace root
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - No commits file has been imported
/// - The merged dataset cannot be saved
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let workspace = Workspace::discover(root)?;
    let mut importer = workspace.open_importer()?;
    let mut store = workspace.open_store()?;

    let authors_staged = importer.staged_authors().is_some();
    let outcome = importer.apply(&mut store);
    let status = ImportStatus::from_apply(&outcome);
    match outcome {
        Ok(_) => {
            workspace.save_dataset(&mut store)?;
            workspace.save_importer(&importer)?;
            println!("{}", formatter.format_status(&status));
            if !authors_staged {
                let note = ImportStatus::info("No author details imported; usernames were not merged.");
                println!("{}", formatter.format_status(&note));
            }
            Ok(())
        }
        Err(err) => Err(anyhow::Error::new(err).context(status.message)),
    }
}
