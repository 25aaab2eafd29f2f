// Rust guideline compliant 2026-10-19

//! Workspace discovery and session persistence.
//!
//! A workspace is a directory containing `.awards/`. The key-value files for
//! favorites, votes, staged imports and the applied dataset all live there.

use crate::error::{AppError, Result};
use crate::importer::Importer;
use crate::status::WorkspaceSummary;
use crate::store::Store;
use awards_core::storage::keys;
use awards_core::{AuthorDetail, Commit, Config, FileKvStore, KvStore};
use std::path::{Path, PathBuf};

/// Name of the per-workspace state directory.
pub const AWARDS_DIR: &str = ".awards";

/// Path metadata for a Commit Awards workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    awards_dir: PathBuf,
    config_path: PathBuf,
}

/// Resolves the workspace root, defaulting to the current directory.
fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

impl Workspace {
    fn at(root: PathBuf) -> Self {
        let awards_dir = root.join(AWARDS_DIR);
        Self {
            config_path: awards_dir.join("config.toml"),
            awards_dir,
            root,
        }
    }

    /// Discovers a workspace starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional workspace root to pin discovery
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.awards` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let workspace = Self::at(resolve_root(root)?);
        if !workspace.awards_dir.exists() {
            return Err(AppError::NotInitialized {
                path: workspace.awards_dir,
            });
        }
        Ok(workspace)
    }

    /// Creates `.awards/` and a default `config.toml` if they are missing.
    ///
    /// # Returns
    ///
    /// The workspace and whether anything was created.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or config file cannot be written.
    pub fn init(root: Option<&Path>) -> Result<(Self, bool)> {
        let workspace = Self::at(resolve_root(root)?);
        let mut created = false;

        if !workspace.awards_dir.exists() {
            std::fs::create_dir_all(&workspace.awards_dir)?;
            created = true;
        }
        if !workspace.config_path.exists() {
            Config::default().save(&workspace.awards_dir)?;
            created = true;
        }

        tracing::info!(path = %workspace.awards_dir.display(), created, "initialized workspace");
        Ok((workspace, created))
    }

    /// Returns the workspace root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.awards` directory path.
    #[must_use]
    pub fn awards_dir(&self) -> &Path {
        self.awards_dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the key-value store backing this workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn open_kv(&self) -> Result<FileKvStore> {
        Ok(FileKvStore::new(self.awards_dir.clone())?)
    }

    /// Loads workspace configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(&self.awards_dir)?)
    }

    /// Opens the store with the last applied dataset restored.
    ///
    /// An unreadable dataset is logged and treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the key-value store cannot be opened.
    pub fn open_store(&self) -> Result<Store<FileKvStore>> {
        let mut store = Store::open(self.open_kv()?);
        match store.kv().load_as::<Vec<Commit>>(keys::APPLIED_COMMITS) {
            Ok(Some(commits)) => store.replace_commits(commits),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable applied dataset");
            }
        }
        Ok(store)
    }

    /// Persists the store's current dataset as the applied dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be written.
    pub fn save_dataset(&self, store: &mut Store<FileKvStore>) -> Result<()> {
        let commits = store.raw_commits().to_vec();
        store.kv_mut().save_as(keys::APPLIED_COMMITS, &commits)?;
        Ok(())
    }

    /// Restores the importer from staged session data.
    ///
    /// Unreadable staged data is logged and treated as not staged.
    ///
    /// # Errors
    ///
    /// Returns an error if the key-value store cannot be opened.
    pub fn open_importer(&self) -> Result<Importer> {
        let kv = self.open_kv()?;
        let commits = load_staged::<Vec<Commit>>(&kv, keys::STAGED_COMMITS);
        let authors = load_staged::<Vec<AuthorDetail>>(&kv, keys::STAGED_AUTHORS);
        Ok(Importer::with_staged(commits, authors))
    }

    /// Writes the importer's staged data, removing keys with nothing staged.
    ///
    /// # Errors
    ///
    /// Returns an error if the staged data cannot be written or removed.
    pub fn save_importer(&self, importer: &Importer) -> Result<()> {
        let mut kv = self.open_kv()?;
        match importer.staged_commits() {
            Some(commits) => kv.save_as(keys::STAGED_COMMITS, &commits)?,
            None => kv.remove(keys::STAGED_COMMITS)?,
        }
        match importer.staged_authors() {
            Some(authors) => kv.save_as(keys::STAGED_AUTHORS, &authors)?,
            None => kv.remove(keys::STAGED_AUTHORS)?,
        }
        Ok(())
    }

    /// Summarizes staged imports and the applied dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the key-value store cannot be opened.
    pub fn summary(&self) -> Result<WorkspaceSummary> {
        let importer = self.open_importer()?;
        let store = self.open_store()?;
        Ok(WorkspaceSummary {
            staged_commits: importer.staged_commits().map(<[_]>::len),
            staged_authors: importer.staged_authors().map(<[_]>::len),
            can_apply: importer.can_apply(),
            applied_commits: store.raw_commits().len(),
            favorites: store.favorites().len(),
            voted: store.votes().len(),
        })
    }
}

fn load_staged<T: serde::de::DeserializeOwned>(kv: &FileKvStore, key: &str) -> Option<T> {
    match kv.load_as::<T>(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding unreadable staged data");
            None
        }
    }
}
