// Rust guideline compliant 2026-10-19

use awards_app::{merge_commits, Importer, Store};
use awards_core::{AuthorDetail, Author, Commit, MemoryKvStore, Repo, SortBy};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn build_commits(count: usize) -> Vec<Commit> {
    (0..count)
        .map(|i| {
            let probability = (i % 100) as f64 / 100.0;
            Commit::new(
                format!("{:040x}", i),
                format!("commit message {} fix", i),
                probability,
                probability >= 0.5,
            )
        })
        .collect()
}

fn build_details(count: usize) -> Vec<AuthorDetail> {
    (0..count)
        .map(|i| AuthorDetail {
            sha: format!("{:040x}", i),
            author: Author {
                name: format!("user{}", i % 37),
                email: None,
                date: Some(format!("2025-07-{:02}T12:00:00+02:00", 1 + i % 28)),
            },
            committer: None,
            repo: Repo {
                org: "exam".to_string(),
                name: format!("user{}_c-piscine", i % 37),
            },
            extracted_username: Some(format!("user{}", i % 37)),
        })
        .collect()
}

fn setup_store(count: usize) -> Store<MemoryKvStore> {
    let merged = merge_commits(build_commits(count), &build_details(count));
    let mut store = Store::open(MemoryKvStore::new());
    store.replace_commits(merged);
    for i in (0..count).step_by(7) {
        store
            .vote_for_commit(&format!("{:040x}", i), (i % 5) as i64)
            .expect("Failed to vote");
    }
    store
}

fn bench_derive_view(c: &mut Criterion) {
    let store = setup_store(5000);
    c.bench_function("derive_view_5000", |b| b.iter(|| black_box(store.commits())));
}

fn bench_search_and_date_sort(c: &mut Criterion) {
    let mut store = setup_store(5000);
    store.set_search_term("user3");
    store.set_sort_by(SortBy::Date);
    c.bench_function("search_date_sort_5000", |b| {
        b.iter(|| black_box(store.commits()))
    });
}

fn bench_apply(c: &mut Criterion) {
    let commits = serde_json::to_string(&build_commits(1000)).expect("Failed to encode commits");
    c.bench_function("import_apply_1000", |b| {
        b.iter_batched(
            || (Importer::new(), Store::open(MemoryKvStore::new())),
            |(mut importer, mut store)| {
                importer
                    .import_commits(&commits)
                    .expect("Failed to import commits");
                black_box(importer.apply(&mut store)).expect("Failed to apply");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_derive_view,
    bench_search_and_date_sort,
    bench_apply
);
criterion_main!(benches);
