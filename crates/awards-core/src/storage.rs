// Rust guideline compliant 2026-10-19

//! Key-value persistence for favorites, votes and session data.
//!
//! Values are JSON documents stored under short string keys. The file-backed
//! store keeps one `<key>.json` file per key in a directory and writes through
//! a temp file and atomic rename while holding an exclusive lock.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Well-known storage keys.
pub mod keys {
    /// Ordered list of favorite commit shas.
    pub const FAVORITES: &str = "commitFavorites";
    /// Map of commit sha to vote total.
    pub const VOTES: &str = "commitVotes";
    /// Commits validated by `import commits` and waiting for `apply`.
    pub const STAGED_COMMITS: &str = "stagedCommits";
    /// Author details validated by `import authors` and waiting for `apply`.
    pub const STAGED_AUTHORS: &str = "stagedAuthors";
    /// The merged dataset produced by the last `apply`.
    pub const APPLIED_COMMITS: &str = "appliedCommits";
}

/// A string-keyed store of JSON values.
pub trait KvStore {
    /// Loads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid, the backing data cannot be
    /// read, or the stored data is not valid JSON.
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the value cannot be written.
    fn save(&mut self, key: &str, value: &serde_json::Value) -> Result<()>;

    /// Removes the value stored under `key`. Removing a missing key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backing data cannot be
    /// removed.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Loads and deserializes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the value has the wrong shape.
    fn load_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        match self.load(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Serializes and stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or saving fails.
    fn save_as<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(value)?;
        self.save(key, &value)
    }
}

/// Rejects keys that cannot be used as a file stem.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidKey(key.to_string()))
    }
}

/// Directory-backed key-value store.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    /// Directory holding one JSON file per key.
    dir: PathBuf,
}

impl FileKvStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { dir })
    }

    /// Returns the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Executes a closure with an exclusive lock on the store directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired or the closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        std::fs::create_dir_all(&self.dir)?;
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.dir.join(".lock"))?;

        lock_file.lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }
}

impl KvStore for FileKvStore {
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&mut self, key: &str, value: &serde_json::Value) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        self.with_lock(|| {
            {
                let mut file = File::create(&temp_path)?;
                let json = serde_json::to_string(value)?;
                file.write_all(json.as_bytes())?;
                file.sync_all()?;
            }
            std::fs::rename(&temp_path, &path)?;
            Ok(())
        })?;

        tracing::debug!(key, path = %path.display(), "saved value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.with_lock(|| match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        })
    }
}

/// In-process key-value store.
///
/// Values are kept as serialized text so that a store seeded with raw strings
/// behaves like a file store holding the same bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
}

impl MemoryKvStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw text under `key`, bypassing JSON serialization.
    pub fn insert_raw(&mut self, key: &str, raw: &str) {
        self.entries.insert(key.to_string(), raw.to_string());
    }

    /// Returns the raw text stored under `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KvStore for MemoryKvStore {
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>> {
        validate_key(key)?;
        match self.entries.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, value: &serde_json::Value) -> Result<()> {
        validate_key(key)?;
        self.entries
            .insert(key.to_string(), serde_json::to_string(value)?);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}
