// Rust guideline compliant 2026-10-19

//! Property-based tests for the derived view.
//!
//! These tests validate properties that should hold for any dataset and any
//! combination of view controls.

use awards_app::{Importer, Store};
use awards_core::{Commit, FilterType, MemoryKvStore, SortBy, SortOrder};
use proptest::prelude::*;
use std::collections::HashSet;

/// Generates a dataset with unique shas.
fn arb_commits() -> impl Strategy<Value = Vec<Commit>> {
    prop::collection::vec(
        (
            prop::string::string_regex("[a-z ]{0,30}").unwrap(),
            0.0f64..=1.0f64,
            any::<bool>(),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (message, probability, is_funny))| {
                Commit::new(format!("sha{:04}", i), message, probability, is_funny)
            })
            .collect()
    })
}

fn arb_filter() -> impl Strategy<Value = FilterType> {
    prop_oneof![
        Just(FilterType::All),
        Just(FilterType::Funny),
        Just(FilterType::Serious),
    ]
}

fn arb_sort_by() -> impl Strategy<Value = SortBy> {
    prop_oneof![Just(SortBy::Probability), Just(SortBy::Date), Just(SortBy::Votes)]
}

fn arb_sort_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)]
}

fn store_with(commits: Vec<Commit>) -> Store<MemoryKvStore> {
    let mut store = Store::open(MemoryKvStore::new());
    store.replace_commits(commits);
    store
}

proptest! {
    #[test]
    fn prop_view_is_subset_of_dataset(
        commits in arb_commits(),
        filter in arb_filter(),
        search in prop::string::string_regex("[a-z]{0,3}").unwrap(),
        sort_by in arb_sort_by(),
        sort_order in arb_sort_order(),
    ) {
        let mut store = store_with(commits);
        store.set_filter_type(filter);
        store.set_search_term(search);
        store.set_sort_by(sort_by);
        store.set_sort_order(sort_order);

        let dataset: HashSet<&str> = store.raw_commits().iter().map(|c| c.sha.as_str()).collect();
        let view = store.commits();
        prop_assert!(view.len() <= dataset.len());
        let mut seen = HashSet::new();
        for entry in &view {
            prop_assert!(dataset.contains(entry.commit.sha.as_str()));
            prop_assert!(seen.insert(entry.commit.sha.clone()), "view repeats a sha");
            prop_assert!(filter.matches(&entry.commit));
        }
    }

    #[test]
    fn prop_funny_and_serious_partition_all(commits in arb_commits()) {
        let mut store = store_with(commits);
        store.set_filter_type(FilterType::Funny);
        let funny = store.commits().len();
        store.set_filter_type(FilterType::Serious);
        let serious = store.commits().len();
        store.set_filter_type(FilterType::All);
        prop_assert_eq!(funny + serious, store.commits().len());
    }

    #[test]
    fn prop_probability_sort_is_ordered(
        commits in arb_commits(),
        sort_order in arb_sort_order(),
    ) {
        let mut store = store_with(commits);
        store.set_sort_by(SortBy::Probability);
        store.set_sort_order(sort_order);

        let probabilities: Vec<f64> = store.commits().iter().map(|v| v.commit.probability).collect();
        for pair in probabilities.windows(2) {
            match sort_order {
                SortOrder::Asc => prop_assert!(pair[0] <= pair[1]),
                SortOrder::Desc => prop_assert!(pair[0] >= pair[1]),
            }
        }
    }

    #[test]
    fn prop_votes_accumulate(deltas in prop::collection::vec(-5i64..=5i64, 0..20)) {
        let mut store = store_with(vec![Commit::new("a", "m", 0.5, true)]);
        for delta in &deltas {
            store.vote_for_commit("a", *delta).unwrap();
        }
        prop_assert_eq!(store.votes_for("a"), deltas.iter().sum::<i64>());
    }

    #[test]
    fn prop_even_toggles_restore_favorites(toggles in 0usize..8) {
        let mut store = store_with(vec![Commit::new("a", "m", 0.5, true)]);
        for _ in 0..toggles * 2 {
            store.toggle_favorite("a").unwrap();
        }
        prop_assert!(store.favorites().is_empty());
    }

    #[test]
    fn prop_apply_without_authors_is_identity(commits in arb_commits()) {
        let text = serde_json::to_string(&commits).unwrap();
        let mut importer = Importer::new();
        let mut store = Store::open(MemoryKvStore::new());
        importer.import_commits(&text).unwrap();
        importer.apply(&mut store).unwrap();

        prop_assert_eq!(store.raw_commits().len(), commits.len());
        for (applied, original) in store.raw_commits().iter().zip(&commits) {
            prop_assert_eq!(&applied.sha, &original.sha);
            prop_assert_eq!(&applied.message, &original.message);
            prop_assert_eq!(applied.is_funny, original.is_funny);
            prop_assert!((applied.probability - original.probability).abs() < 1e-12);
        }
    }
}
