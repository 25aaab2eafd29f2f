// Rust guideline compliant 2026-10-19

//! Award rankings over the derived view.

use awards_core::CommitView;
use serde::Serialize;

/// The three award categories.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Awards {
    /// Every favorite in the view, in view order.
    pub favorites: Vec<CommitView>,
    /// Funny commits with the highest probability.
    pub top_funny: Vec<CommitView>,
    /// Commits with the most positive votes.
    pub top_voted: Vec<CommitView>,
}

/// Computes award lists from an already derived view.
///
/// # Arguments
///
/// * `view` - The overlaid, filtered and sorted commits
/// * `limit` - Maximum length of each top list
pub fn compute_awards(view: &[CommitView], limit: usize) -> Awards {
    let favorites = view.iter().filter(|v| v.is_favorite).cloned().collect();

    let mut top_funny: Vec<CommitView> = view.iter().filter(|v| v.commit.is_funny).cloned().collect();
    top_funny.sort_by(|a, b| b.commit.probability.total_cmp(&a.commit.probability));
    top_funny.truncate(limit);

    let mut top_voted: Vec<CommitView> = view.iter().filter(|v| v.user_votes > 0).cloned().collect();
    top_voted.sort_by(|a, b| b.user_votes.cmp(&a.user_votes));
    top_voted.truncate(limit);

    Awards {
        favorites,
        top_funny,
        top_voted,
    }
}
