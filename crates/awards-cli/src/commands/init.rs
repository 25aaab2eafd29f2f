// Rust guideline compliant 2026-10-19

//! Implementation of the `awards init` command.
//!
//! Creates the `.awards` directory and a default `config.toml`.

use anyhow::Result;
use awards_app::Workspace;
use std::path::Path;

/// Initializes a Commit Awards workspace.
///
/// Existing files are left alone, so running it twice is harmless.
///
/// # Arguments
///
/// * `root` - Optional workspace root; defaults to the current directory
///
/// # Errors
///
/// Returns an error if:
/// - The `.awards` directory cannot be created
/// - The configuration file cannot be written
pub fn execute(root: Option<&Path>) -> Result<()> {
    let (workspace, created) = Workspace::init(root)?;

    if created {
        println!(
            "✓ Commit Awards workspace initialized at {}",
            workspace.awards_dir().display()
        );
        println!("  - Created {}", workspace.config_path().display());
    } else {
        println!(
            "Commit Awards workspace already initialized at {}",
            workspace.awards_dir().display()
        );
    }

    Ok(())
}
