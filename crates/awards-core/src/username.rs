// Rust guideline compliant 2026-10-19

//! Username extraction from repository names.
//!
//! Exam and piscine repositories are named `<login>_c<exercise>...`; the login
//! is the leading run of non-underscore characters immediately followed by
//! the `_c` marker.

use regex::Regex;
use std::sync::LazyLock;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^_]+)_c").expect("username pattern is valid"));

/// Extracts the login from a repository name.
///
/// # Arguments
///
/// * `repo_name` - The repository name
///
/// # Returns
///
/// The login if the name starts with `<login>_c`, None otherwise.
pub fn extract_username(repo_name: &str) -> Option<String> {
    USERNAME_PATTERN
        .captures(repo_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
