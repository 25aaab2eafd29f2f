// Rust guideline compliant 2026-10-19

//! Implementation of the `awards import` command.
//!
//! Validates a commits or author-details file and stages it for `apply`.
//! A rejected file leaves whatever was staged before untouched.

use crate::OutputFormatter;
use anyhow::Result;
use awards_app::{ImportKind, ImportStatus, Workspace};
use std::path::Path;

/// Imports one data file into the staging area.
///
/// # Arguments
///
/// * `root` - Optional workspace root
/// * `kind` - Which dataset the file holds
/// * `path` - Path to the `.json` file
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The file is not a `.json` file, cannot be read, or fails validation
/// - The staged data cannot be saved
pub fn execute(
    root: Option<&Path>,
    kind: ImportKind,
    path: &Path,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::discover(root)?;
    let mut importer = workspace.open_importer()?;

    let outcome = importer.import_file(kind, path);
    let status = ImportStatus::from_import(kind, &outcome);
    match outcome {
        Ok(_) => {
            workspace.save_importer(&importer)?;
            println!("{}", formatter.format_status(&status));
            Ok(())
        }
        Err(err) => Err(anyhow::Error::new(err).context(status.message)),
    }
}
