// Rust guideline compliant 2026-10-19

//! Integration tests for the commit store.
//!
//! These tests validate overlay, filter, search and sort behavior along with
//! persistence of favorites and votes.

use awards_app::Store;
use awards_core::storage::keys;
use awards_core::{Author, Commit, FileKvStore, FilterType, KvStore, MemoryKvStore, SortBy, SortOrder};
use tempfile::TempDir;

fn commit(sha: &str, message: &str, probability: f64, is_funny: bool) -> Commit {
    Commit::new(sha, message, probability, is_funny)
}

fn five_commits() -> Vec<Commit> {
    vec![
        commit("a1", "fix login bug", 0.91, true),
        commit("b2", "Refactor parser", 0.12, false),
        commit("c3", "FIX the fix of the fix", 0.77, true),
        commit("d4", "update readme", 0.05, false),
        commit("e5", "bump deps", 0.33, false),
    ]
}

fn memory_store(commits: Vec<Commit>) -> Store<MemoryKvStore> {
    let mut store = Store::open(MemoryKvStore::new());
    store.replace_commits(commits);
    store
}

#[test]
fn test_toggle_favorite_twice_restores_state() {
    let mut store = memory_store(five_commits());

    assert!(store.toggle_favorite("b2").expect("Failed to toggle"));
    assert!(store.commit("b2").expect("Missing commit").is_favorite);
    assert_eq!(store.stats().favorites, 1);

    assert!(!store.toggle_favorite("b2").expect("Failed to toggle"));
    assert!(!store.commit("b2").expect("Missing commit").is_favorite);
    assert!(store.favorites().is_empty());
}

#[test]
fn test_vote_up_then_down_nets_zero() {
    let mut store = memory_store(five_commits());
    assert_eq!(store.vote_for_commit("a1", 1).expect("Failed to vote"), 1);
    assert_eq!(store.vote_for_commit("a1", -1).expect("Failed to vote"), 0);
    assert_eq!(store.commit("a1").expect("Missing commit").user_votes, 0);
}

#[test]
fn test_votes_can_go_negative() {
    let mut store = memory_store(five_commits());
    store.vote_for_commit("d4", -1).expect("Failed to vote");
    store.vote_for_commit("d4", -1).expect("Failed to vote");
    assert_eq!(store.votes_for("d4"), -2);
}

#[test]
fn test_probability_sort_orders() {
    let mut store = memory_store(vec![
        commit("x", "m", 0.1, false),
        commit("y", "m", 0.9, true),
        commit("z", "m", 0.5, true),
    ]);
    store.set_sort_by(SortBy::Probability);

    store.set_sort_order(SortOrder::Desc);
    let desc: Vec<f64> = store.commits().iter().map(|v| v.commit.probability).collect();
    assert_eq!(desc, vec![0.9, 0.5, 0.1]);

    store.set_sort_order(SortOrder::Asc);
    let asc: Vec<f64> = store.commits().iter().map(|v| v.commit.probability).collect();
    assert_eq!(asc, vec![0.1, 0.5, 0.9]);
}

#[test]
fn test_funny_and_serious_filters_partition() {
    let mut store = memory_store(five_commits());

    store.set_filter_type(FilterType::Funny);
    let funny = store.commits();
    assert_eq!(funny.len(), 2);
    assert!(funny.iter().all(|v| v.commit.is_funny));

    store.set_filter_type(FilterType::Serious);
    assert_eq!(store.commits().len(), 3);

    store.set_filter_type(FilterType::All);
    assert_eq!(store.commits().len(), 5);
}

#[test]
fn test_search_is_case_insensitive() {
    let mut store = memory_store(five_commits());
    store.set_search_term("fix");

    let shas: Vec<String> = store.commits().into_iter().map(|v| v.commit.sha).collect();
    assert_eq!(shas, vec!["a1", "c3"]);
}

#[test]
fn test_search_matches_author_name() {
    let mut with_author = commit("f6", "misc", 0.2, false);
    with_author.author = Some(Author {
        name: "Grace Hopper".to_string(),
        email: None,
        date: None,
    });
    let mut store = memory_store(vec![with_author, commit("g7", "misc", 0.2, false)]);

    store.set_search_term("hopper");
    let view = store.commits();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].commit.sha, "f6");
}

#[test]
fn test_filter_and_search_compose() {
    let mut store = memory_store(five_commits());
    store.set_filter_type(FilterType::Serious);
    store.set_search_term("fix");
    assert!(store.commits().is_empty());
}

#[test]
fn test_stats_ignore_filters() {
    let mut store = memory_store(five_commits());
    store.set_filter_type(FilterType::Funny);
    store.set_search_term("nothing matches this");

    let stats = store.stats();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.funny, 2);
    assert_eq!(stats.serious, 3);
}

#[test]
fn test_overlay_state_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let kv = FileKvStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");
    let mut store = Store::open(kv);
    store.replace_commits(five_commits());
    store.toggle_favorite("c3").expect("Failed to favorite");
    store.toggle_favorite("a1").expect("Failed to favorite");
    store.vote_for_commit("e5", 4).expect("Failed to vote");

    let kv = FileKvStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");
    let mut reopened = Store::open(kv);
    assert_eq!(reopened.favorites(), &["c3".to_string(), "a1".to_string()]);
    assert_eq!(reopened.votes_for("e5"), 4);

    reopened.replace_commits(five_commits());
    assert!(reopened.commit("c3").expect("Missing commit").is_favorite);
}

#[test]
fn test_persisted_shapes() {
    let mut store = memory_store(five_commits());
    store.toggle_favorite("a1").expect("Failed to favorite");
    store.vote_for_commit("b2", 3).expect("Failed to vote");

    assert_eq!(store.kv().raw(keys::FAVORITES), Some(r#"["a1"]"#));
    assert_eq!(store.kv().raw(keys::VOTES), Some(r#"{"b2":3}"#));
}

#[test]
fn test_overlay_for_unknown_sha_is_kept() {
    let mut kv = MemoryKvStore::new();
    kv.save_as(keys::FAVORITES, &vec!["gone"]).expect("Failed to seed");
    let mut store = Store::open(kv);
    store.replace_commits(five_commits());

    assert_eq!(store.stats().favorites, 1);
    assert!(store.commits().iter().all(|v| !v.is_favorite));
}

#[test]
fn test_awards_follow_view() {
    let mut store = memory_store(five_commits());
    store.toggle_favorite("d4").expect("Failed to favorite");
    store.vote_for_commit("b2", 5).expect("Failed to vote");
    store.vote_for_commit("a1", 1).expect("Failed to vote");

    let awards = store.awards(1);
    assert_eq!(awards.favorites.len(), 1);
    assert_eq!(awards.top_funny.len(), 1);
    assert_eq!(awards.top_funny[0].commit.sha, "a1");
    assert_eq!(awards.top_voted[0].commit.sha, "b2");

    store.set_filter_type(FilterType::Funny);
    let awards = store.awards(10);
    assert!(awards.favorites.is_empty());
    assert_eq!(awards.top_voted.len(), 1);
}
