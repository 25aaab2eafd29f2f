// Rust guideline compliant 2026-10-19

//! The commit store and its derivation pipeline.
//!
//! The store owns the raw merged dataset, the favorites and votes overlays and
//! the view controls. Every read of [`Store::commits`] recomputes the overlay,
//! filter and sort from scratch, so the result always reflects the latest
//! mutation.

use crate::awards::{compute_awards, Awards};
use crate::error::{AppError, Result};
use awards_core::storage::keys;
use awards_core::{
    extract_username, Commit, CommitView, Error as CoreError, FilterType, KvStore, SortBy,
    SortOrder, Stats, ViewOptions,
};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashSet};

/// In-memory commit store backed by a key-value store for its overlays.
#[derive(Debug)]
pub struct Store<S: KvStore> {
    kv: S,
    commits: Vec<Commit>,
    favorites: Vec<String>,
    votes: BTreeMap<String, i64>,
    options: ViewOptions,
}

/// Loads a persisted value, treating missing or unreadable data as empty.
fn load_or_default<S: KvStore, T: DeserializeOwned + Default>(kv: &S, key: &str) -> T {
    match kv.load_as::<T>(key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding unreadable persisted state");
            T::default()
        }
    }
}

impl<S: KvStore> Store<S> {
    /// Opens a store over `kv`, loading favorites and votes.
    ///
    /// Corrupt persisted values are logged and replaced by empty ones.
    pub fn open(kv: S) -> Self {
        let stored: Vec<String> = load_or_default(&kv, keys::FAVORITES);
        let mut seen = HashSet::new();
        let favorites = stored
            .into_iter()
            .filter(|sha| seen.insert(sha.clone()))
            .collect();
        let votes = load_or_default(&kv, keys::VOTES);

        Self {
            kv,
            commits: Vec::new(),
            favorites,
            votes,
            options: ViewOptions::default(),
        }
    }

    /// Returns the backing key-value store.
    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Returns the backing key-value store mutably.
    pub fn kv_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    /// Replaces the raw dataset. Favorites and votes are kept.
    pub fn replace_commits(&mut self, commits: Vec<Commit>) {
        self.commits = commits;
    }

    /// Returns the raw merged dataset.
    pub fn raw_commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Returns the favorite shas in the order they were added.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Returns the vote totals.
    pub fn votes(&self) -> &BTreeMap<String, i64> {
        &self.votes
    }

    /// Returns true if `sha` is a favorite.
    pub fn is_favorite(&self, sha: &str) -> bool {
        self.favorites.iter().any(|f| f == sha)
    }

    /// Returns the vote total for `sha`.
    pub fn votes_for(&self, sha: &str) -> i64 {
        self.votes.get(sha).copied().unwrap_or(0)
    }

    /// Returns the current view controls.
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Replaces all view controls.
    pub fn set_options(&mut self, options: ViewOptions) {
        self.options = options;
    }

    /// Sets the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.options.search_term = term.into();
    }

    /// Sets the funny/serious filter.
    pub fn set_filter_type(&mut self, filter_type: FilterType) {
        self.options.filter_type = filter_type;
    }

    /// Sets the sort key.
    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.options.sort_by = sort_by;
    }

    /// Sets the sort direction.
    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.options.sort_order = sort_order;
    }

    /// Selects a sort key the way a column header does: picking the current
    /// key flips the direction, picking another key sorts it descending.
    pub fn select_sort(&mut self, sort_by: SortBy) {
        if self.options.sort_by == sort_by {
            self.options.sort_order = self.options.sort_order.toggled();
        } else {
            self.options.sort_by = sort_by;
            self.options.sort_order = SortOrder::Desc;
        }
    }

    /// Flips favorite membership for `sha` and persists the set.
    ///
    /// # Returns
    ///
    /// Whether `sha` is a favorite after the call.
    ///
    /// # Errors
    ///
    /// Returns an error if the favorites cannot be persisted; the in-memory
    /// set is unchanged in that case.
    pub fn toggle_favorite(&mut self, sha: &str) -> Result<bool> {
        let now_favorite = !self.is_favorite(sha);
        let next: Vec<String> = if now_favorite {
            self.favorites
                .iter()
                .cloned()
                .chain(std::iter::once(sha.to_string()))
                .collect()
        } else {
            self.favorites.iter().filter(|f| *f != sha).cloned().collect()
        };

        self.kv.save_as(keys::FAVORITES, &next)?;
        self.favorites = next;
        tracing::debug!(sha, favorite = now_favorite, "toggled favorite");
        Ok(now_favorite)
    }

    /// Adds `delta` to the vote total for `sha` and persists the map.
    ///
    /// # Returns
    ///
    /// The new vote total.
    ///
    /// # Errors
    ///
    /// Returns an error if the votes cannot be persisted; the in-memory map is
    /// unchanged in that case.
    pub fn vote_for_commit(&mut self, sha: &str, delta: i64) -> Result<i64> {
        let total = self.votes_for(sha).saturating_add(delta);
        let mut next = self.votes.clone();
        next.insert(sha.to_string(), total);

        self.kv.save_as(keys::VOTES, &next)?;
        self.votes = next;
        tracing::debug!(sha, delta, total, "recorded vote");
        Ok(total)
    }

    /// Applies the favorite/vote overlay and username back-fill to a commit.
    fn overlay(&self, mut commit: Commit, favorites: &HashSet<&str>) -> CommitView {
        if commit.username.is_none() {
            if let Some(repo) = &commit.repo {
                commit.username = extract_username(&repo.name);
            }
        }
        let is_favorite = favorites.contains(commit.sha.as_str());
        let user_votes = self.votes_for(&commit.sha);
        CommitView {
            commit,
            is_favorite,
            user_votes,
        }
    }

    /// Returns the derived view: overlaid, filtered and sorted.
    pub fn commits(&self) -> Vec<CommitView> {
        let favorites: HashSet<&str> = self.favorites.iter().map(String::as_str).collect();
        let views: Vec<CommitView> = self
            .commits
            .iter()
            .cloned()
            .map(|commit| self.overlay(commit, &favorites))
            .collect();

        let mut views = filter_views(views, self.options.filter_type, &self.options.search_term);
        sort_views(&mut views, self.options.sort_by, self.options.sort_order);
        views
    }

    /// Looks up one commit by full sha or unique sha prefix, ignoring the
    /// current filter.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing matches and `AmbiguousSha` if the prefix
    /// matches several commits.
    pub fn commit(&self, sha: &str) -> Result<CommitView> {
        let found = match self.commits.iter().find(|c| c.sha == sha) {
            Some(commit) => commit,
            None => {
                let matches: Vec<&Commit> = if sha.is_empty() {
                    Vec::new()
                } else {
                    self.commits.iter().filter(|c| c.sha.starts_with(sha)).collect()
                };
                match matches.as_slice() {
                    [] => return Err(CoreError::NotFound(sha.to_string()).into()),
                    [single] => *single,
                    many => {
                        return Err(AppError::AmbiguousSha {
                            prefix: sha.to_string(),
                            matches: many.iter().map(|c| c.sha.clone()).collect(),
                        })
                    }
                }
            }
        };

        let favorites: HashSet<&str> = self.favorites.iter().map(String::as_str).collect();
        Ok(self.overlay(found.clone(), &favorites))
    }

    /// Returns aggregate counts over the raw dataset.
    pub fn stats(&self) -> Stats {
        let funny = self.commits.iter().filter(|c| c.is_funny).count();
        Stats {
            total: self.commits.len(),
            funny,
            serious: self.commits.len() - funny,
            favorites: self.favorites.len(),
        }
    }

    /// Returns the award lists computed from the current derived view.
    pub fn awards(&self, limit: usize) -> Awards {
        compute_awards(&self.commits(), limit)
    }
}

/// Keeps the views that pass the filter and contain the search term.
pub fn filter_views(views: Vec<CommitView>, filter_type: FilterType, search_term: &str) -> Vec<CommitView> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let needle = search_term.to_lowercase();
    let predicate =
        |view: &CommitView| filter_type.matches(&view.commit) && view.commit.matches_search(&needle);

    if views.len() >= PARALLEL_THRESHOLD {
        views.into_par_iter().filter(|v| predicate(v)).collect()
    } else {
        views.into_iter().filter(predicate).collect()
    }
}

/// Sorts views in place. Equal keys keep their relative order.
pub fn sort_views(views: &mut [CommitView], sort_by: SortBy, sort_order: SortOrder) {
    views.sort_by(|a, b| {
        let ordering = match sort_by {
            SortBy::Probability => a.commit.probability.total_cmp(&b.commit.probability),
            SortBy::Date => a.commit.date_millis().cmp(&b.commit.date_millis()),
            SortBy::Votes => a.user_votes.cmp(&b.user_votes),
        };
        match sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
