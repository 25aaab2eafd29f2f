// Rust guideline compliant 2026-10-19

//! Core data models for Commit Awards.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Author identity attached to a commit by the author-details import.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    /// Display name (replaced by the extracted username when one exists).
    /// A JSON `null` reads as an empty name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Author e-mail address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// ISO-8601 authoring date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Repository a commit was collected from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Repo {
    /// Owning organization.
    #[serde(default)]
    pub org: String,
    /// Repository name, usually `<login>_c<exercise>`.
    #[serde(default)]
    pub name: String,
}

/// One classified commit message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit hash, unique within a dataset.
    pub sha: String,
    /// Commit message text.
    pub message: String,
    /// Classifier confidence that the message is humorous, in `[0, 1]`.
    pub probability: f64,
    /// Classifier's thresholded decision.
    pub is_funny: bool,
    /// Author, supplied by the merge with author details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Committer object, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer: Option<serde_json::Value>,
    /// Repository, supplied by the merge with author details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<Repo>,
    /// Username derived from the repository name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Fields present in the input that the model does not know about.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Commit {
    /// Creates a commit with only the classifier fields set.
    pub fn new(sha: impl Into<String>, message: impl Into<String>, probability: f64, is_funny: bool) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            probability,
            is_funny,
            author: None,
            committer: None,
            repo: None,
            username: None,
            extra: BTreeMap::new(),
        }
    }

    /// Returns the author display name, or an empty string.
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map(|a| a.name.as_str()).unwrap_or("")
    }

    /// Returns the username, or an empty string.
    pub fn username_or_empty(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }

    /// Returns the authoring date as Unix milliseconds.
    ///
    /// Missing and unparsable dates collapse to the epoch.
    pub fn date_millis(&self) -> i64 {
        self.author
            .as_ref()
            .and_then(|a| a.date.as_deref())
            .and_then(parse_timestamp_millis)
            .unwrap_or(0)
    }

    /// Returns true if `needle` (already lowercased) occurs in the message,
    /// author name or username, ignoring case.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [self.message.as_str(), self.author_name(), self.username_or_empty()]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(needle))
    }
}

/// Parses an ISO-8601 date into Unix milliseconds.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) or a
/// bare `YYYY-MM-DD`.
pub fn parse_timestamp_millis(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// A commit with the favorite/vote overlay applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitView {
    /// The underlying commit.
    #[serde(flatten)]
    pub commit: Commit,
    /// Whether the sha is in the favorites set.
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
    /// Accumulated user votes for the sha.
    #[serde(rename = "userVotes")]
    pub user_votes: i64,
}

impl From<Commit> for CommitView {
    fn from(commit: Commit) -> Self {
        Self {
            commit,
            is_favorite: false,
            user_votes: 0,
        }
    }
}

/// Author and repository metadata joined to a commit by sha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDetail {
    /// Sha of the commit this detail belongs to.
    pub sha: String,
    /// Commit author.
    pub author: Author,
    /// Optional committer object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer: Option<serde_json::Value>,
    /// Source repository.
    pub repo: Repo,
    /// Username extracted from `repo.name` at import time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_username: Option<String>,
}

/// Which commits the derived view keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Keep every commit.
    #[default]
    All,
    /// Keep commits flagged funny.
    Funny,
    /// Keep commits not flagged funny.
    Serious,
}

impl FilterType {
    /// Parses a filter name.
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "funny" => Some(Self::Funny),
            "serious" => Some(Self::Serious),
            _ => None,
        }
    }

    /// Returns the canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Funny => "funny",
            Self::Serious => "serious",
        }
    }

    /// Returns true if the commit passes the filter.
    pub fn matches(self, commit: &Commit) -> bool {
        match self {
            Self::All => true,
            Self::Funny => commit.is_funny,
            Self::Serious => !commit.is_funny,
        }
    }
}

/// Sort key for the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Classifier probability.
    #[default]
    Probability,
    /// Author date.
    Date,
    /// Accumulated user votes.
    Votes,
}

impl SortBy {
    /// Parses a sort field name.
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "probability" => Some(Self::Probability),
            "date" => Some(Self::Date),
            "votes" => Some(Self::Votes),
            _ => None,
        }
    }

    /// Returns the canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Probability => "probability",
            Self::Date => "date",
            Self::Votes => "votes",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

impl SortOrder {
    /// Parses a sort order name.
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Returns the canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Filter and sort controls for the derived view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Funny/serious filter.
    #[serde(default)]
    pub filter_type: FilterType,
    /// Case-insensitive search over message, author name and username.
    #[serde(default)]
    pub search_term: String,
    /// Sort key.
    #[serde(default)]
    pub sort_by: SortBy,
    /// Sort direction.
    #[serde(default)]
    pub sort_order: SortOrder,
}

/// Aggregate counts over the raw merged dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Number of commits.
    pub total: usize,
    /// Commits flagged funny.
    pub funny: usize,
    /// Commits not flagged funny.
    pub serious: usize,
    /// Size of the favorites set.
    pub favorites: usize,
}

/// Human-readable label for a humor probability.
pub fn humor_label(probability: f64) -> &'static str {
    if probability >= 0.8 {
        "Very funny"
    } else if probability >= 0.6 {
        "Funny"
    } else if probability >= 0.4 {
        "Amusing"
    } else if probability >= 0.2 {
        "Barely funny"
    } else {
        "Serious"
    }
}
