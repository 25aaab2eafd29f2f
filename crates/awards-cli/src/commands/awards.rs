// Rust guideline compliant 2026-10-19

//! Implementation of the `awards awards` command.

use crate::OutputFormatter;
use anyhow::Result;
use awards_app::{AppError, Workspace};
use std::path::Path;

/// Prints the funniest, most voted and favorite commits.
///
/// The lists are drawn from the view produced by the configured default
/// filter and sort.
///
/// # Arguments
///
/// * `root` - Optional workspace root
/// * `limit` - Top-list length; defaults to `awards_limit` from config
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The configuration is invalid
/// - `limit` is zero
pub fn execute(root: Option<&Path>, limit: Option<usize>, formatter: &dyn OutputFormatter) -> Result<()> {
    let workspace = Workspace::discover(root)?;
    let config = workspace.load_config()?;

    let limit = limit.unwrap_or(config.awards_limit);
    if limit == 0 {
        return Err(AppError::InvalidInput("limit must be greater than 0".to_string()).into());
    }

    let mut store = workspace.open_store()?;
    store.set_options(config.view_options());
    println!("{}", formatter.format_awards(&store.awards(limit)));
    Ok(())
}
