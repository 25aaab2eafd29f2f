// Rust guideline compliant 2026-10-19

//! Import and merge of the commits and author-details datasets.
//!
//! Both files are top-level JSON arrays. Validation is all-or-nothing: one bad
//! element rejects the whole file and leaves previously staged data alone.
//! Staged arrays are merged into the store only by an explicit apply.

use crate::error::{AppError, Result};
use crate::store::Store;
use awards_core::{extract_username, AuthorDetail, Commit, KvStore};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Fields every element of a commits file must have.
pub const COMMIT_FIELDS: [&str; 4] = ["sha", "message", "probability", "is_funny"];

/// Fields every element of an author-details file must have.
pub const AUTHOR_FIELDS: [&str; 3] = ["sha", "author", "repo"];

/// Overlay keys that imported commits must not carry.
const OVERLAY_KEYS: [&str; 2] = ["isFavorite", "userVotes"];

/// Which of the two datasets a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// Classified commit messages.
    Commits,
    /// Author and repository metadata.
    Authors,
}

impl ImportKind {
    fn noun(self) -> &'static str {
        match self {
            ImportKind::Commits => "commits",
            ImportKind::Authors => "authors",
        }
    }
}

fn parse_array(text: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| AppError::Parse(format!("invalid JSON: {}", e)))?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(AppError::Parse(
            "the JSON file must contain an array".to_string(),
        )),
    }
}

fn schema_error(kind: ImportKind, fields: &[&str], index: usize, detail: &str) -> AppError {
    AppError::Schema(format!(
        "invalid {} format, every entry must have: {} (entry {}: {})",
        kind.noun(),
        fields.join(", "),
        index,
        detail
    ))
}

/// Checks required keys and deserializes every element, failing on the first
/// bad one.
fn parse_entries<T: DeserializeOwned>(
    text: &str,
    kind: ImportKind,
    fields: &[&str],
) -> Result<Vec<T>> {
    let items = parse_array(text)?;
    let mut entries = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let object = item
            .as_object()
            .ok_or_else(|| schema_error(kind, fields, index, "not an object"))?;
        if let Some(missing) = fields.iter().find(|field| !object.contains_key(**field)) {
            return Err(schema_error(
                kind,
                fields,
                index,
                &format!("missing `{}`", missing),
            ));
        }
        let entry = serde_json::from_value(item)
            .map_err(|e| schema_error(kind, fields, index, &e.to_string()))?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Parses and validates a commits file.
///
/// # Errors
///
/// Returns `Parse` if the text is not a JSON array and `Schema` if any element
/// lacks `sha`, `message`, `probability` or `is_funny` or has the wrong types.
pub fn parse_commits(text: &str) -> Result<Vec<Commit>> {
    let mut commits: Vec<Commit> = parse_entries(text, ImportKind::Commits, &COMMIT_FIELDS)?;
    for commit in &mut commits {
        for key in OVERLAY_KEYS {
            commit.extra.remove(key);
        }
    }
    Ok(commits)
}

/// Parses and validates an author-details file.
///
/// The author display name is replaced by the login extracted from
/// `repo.name` when the repository follows the `<login>_c...` convention.
///
/// # Errors
///
/// Returns `Parse` if the text is not a JSON array and `Schema` if any element
/// lacks `sha`, `author` or `repo` or has the wrong types.
pub fn parse_author_details(text: &str) -> Result<Vec<AuthorDetail>> {
    let mut details: Vec<AuthorDetail> =
        parse_entries(text, ImportKind::Authors, &AUTHOR_FIELDS)?;
    for detail in &mut details {
        detail.extracted_username = extract_username(&detail.repo.name);
        if let Some(username) = &detail.extracted_username {
            detail.author.name = username.clone();
        }
    }
    Ok(details)
}

/// Joins author details onto commits by sha.
///
/// When several details share a sha the last one wins. Commits without a
/// detail pass through unchanged.
pub fn merge_commits(commits: Vec<Commit>, details: &[AuthorDetail]) -> Vec<Commit> {
    let by_sha: HashMap<&str, &AuthorDetail> = details
        .iter()
        .map(|detail| (detail.sha.as_str(), detail))
        .collect();

    commits
        .into_iter()
        .map(|mut commit| {
            if let Some(detail) = by_sha.get(commit.sha.as_str()) {
                commit.author = Some(detail.author.clone());
                commit.committer = detail.committer.clone();
                commit.repo = Some(detail.repo.clone());
                commit.username = Some(
                    detail
                        .extracted_username
                        .clone()
                        .unwrap_or_else(|| detail.author.name.clone()),
                );
            }
            commit
        })
        .collect()
}

/// Staging area for the two datasets.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    commits: Option<Vec<Commit>>,
    authors: Option<Vec<AuthorDetail>>,
}

impl Importer {
    /// Creates an importer with nothing staged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an importer from previously staged data.
    pub fn with_staged(commits: Option<Vec<Commit>>, authors: Option<Vec<AuthorDetail>>) -> Self {
        Self { commits, authors }
    }

    /// Returns the staged commits.
    pub fn staged_commits(&self) -> Option<&[Commit]> {
        self.commits.as_deref()
    }

    /// Returns the staged author details.
    pub fn staged_authors(&self) -> Option<&[AuthorDetail]> {
        self.authors.as_deref()
    }

    /// Returns true when a commits file has been staged.
    pub fn can_apply(&self) -> bool {
        self.commits.is_some()
    }

    /// Validates and stages a commits file from text.
    ///
    /// # Returns
    ///
    /// The number of commits staged.
    ///
    /// # Errors
    ///
    /// Returns `Parse` or `Schema` errors; staged commits are left untouched.
    pub fn import_commits(&mut self, text: &str) -> Result<usize> {
        let commits = parse_commits(text)?;
        let count = commits.len();
        self.commits = Some(commits);
        tracing::info!(count, "staged commits");
        Ok(count)
    }

    /// Validates and stages an author-details file from text.
    ///
    /// # Returns
    ///
    /// The number of author records staged.
    ///
    /// # Errors
    ///
    /// Returns `Parse` or `Schema` errors; staged authors are left untouched.
    pub fn import_authors(&mut self, text: &str) -> Result<usize> {
        let authors = parse_author_details(text)?;
        let count = authors.len();
        let extracted = authors
            .iter()
            .filter(|a| a.extracted_username.is_some())
            .count();
        self.authors = Some(authors);
        tracing::info!(count, extracted, "staged author details");
        Ok(count)
    }

    /// Reads, validates and stages a file.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which dataset the file holds
    /// * `path` - Path to a `.json` file
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the path does not name a `.json` file, `Io` if it
    /// cannot be read, and any validation error from the parse.
    pub fn import_file(&mut self, kind: ImportKind, path: &Path) -> Result<usize> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json {
            return Err(AppError::Parse(format!(
                "please select a valid JSON file: {}",
                path.display()
            )));
        }

        let text = std::fs::read_to_string(path)?;
        match kind {
            ImportKind::Commits => self.import_commits(&text),
            ImportKind::Authors => self.import_authors(&text),
        }
    }

    /// Merges the staged commits with any staged author details.
    ///
    /// # Errors
    ///
    /// Returns `Precondition` if no commits file has been staged.
    pub fn merge(&self) -> Result<Vec<Commit>> {
        let commits = self.commits.clone().ok_or_else(|| {
            AppError::Precondition("Please import the commits data first.".to_string())
        })?;

        Ok(match &self.authors {
            Some(authors) => merge_commits(commits, authors),
            None => commits,
        })
    }

    /// Merges staged data into the store and clears the staging area.
    ///
    /// # Returns
    ///
    /// The number of commits now available in the store.
    ///
    /// # Errors
    ///
    /// Returns `Precondition` if no commits file has been staged; nothing is
    /// changed in that case.
    pub fn apply<S: KvStore>(&mut self, store: &mut Store<S>) -> Result<usize> {
        let merged = self.merge()?;
        let count = merged.len();
        store.replace_commits(merged);
        self.clear();
        tracing::info!(count, "applied imported data");
        Ok(count)
    }

    /// Drops everything staged.
    pub fn clear(&mut self) {
        self.commits = None;
        self.authors = None;
    }
}
