// Rust guideline compliant 2026-10-19

//! End-to-end tests that drive the `awards` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const COMMITS: &str = r#"[
    {"sha": "aaa111", "message": "Fix the build, again", "probability": 0.92, "is_funny": true},
    {"sha": "bbb222", "message": "add tests", "probability": 0.15, "is_funny": false},
    {"sha": "ccc333", "message": "it works, do not ask", "probability": 0.71, "is_funny": true},
    {"sha": "ddd444", "message": "bump version", "probability": 0.05, "is_funny": false},
    {"sha": "eee555", "message": "update docs", "probability": 0.30, "is_funny": false}
]"#;

fn awards(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_awards"))
        .arg("--dir")
        .arg(root)
        .args(args)
        .env_remove("AWARDS_OUTPUT_FORMAT")
        .env_remove("AWARDS_DEFAULT_FILTER")
        .env_remove("AWARDS_DEFAULT_SORT_BY")
        .env_remove("AWARDS_DEFAULT_SORT_ORDER")
        .env_remove("AWARDS_AWARDS_LIMIT")
        .env_remove("AWARDS_LOG")
        .output()
        .expect("run awards")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, got status: {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn json_stdout(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|err| {
        panic!(
            "expected JSON output ({}), got:\n{}",
            err,
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn applied_workspace() -> TempDir {
    let temp_dir = TempDir::new().expect("temp dir");
    let root = temp_dir.path();
    let commits = root.join("commits.json");
    fs::write(&commits, COMMITS).expect("write commits");

    assert_success(&awards(root, &["init"]));
    assert_success(&awards(
        root,
        &["import", "commits", commits.to_str().expect("utf-8 path")],
    ));
    assert_success(&awards(root, &["apply"]));
    temp_dir
}

#[test]
fn awards_list_json_flag_outputs_json() {
    let temp_dir = applied_workspace();
    let output = awards(temp_dir.path(), &["list", "--json"]);
    assert_success(&output);

    let value = json_stdout(&output);
    assert_eq!(value["total"], 5);
    assert_eq!(value["commits"][0]["sha"], "aaa111");
    assert_eq!(value["commits"][0]["userVotes"], 0);
}

#[test]
fn awards_list_filters_and_searches() {
    let temp_dir = applied_workspace();

    let funny = json_stdout(&awards(temp_dir.path(), &["list", "--json", "--filter", "funny"]));
    assert_eq!(funny["total"], 2);

    let search = json_stdout(&awards(temp_dir.path(), &["list", "--json", "--search", "fix"]));
    assert_eq!(search["total"], 1);
    assert_eq!(search["commits"][0]["sha"], "aaa111");

    let asc = json_stdout(&awards(
        temp_dir.path(),
        &["list", "--json", "--order", "asc", "--limit", "2"],
    ));
    assert_eq!(asc["total"], 2);
    assert_eq!(asc["commits"][0]["sha"], "ddd444");
}

#[test]
fn awards_vote_and_favorite_flow() {
    let temp_dir = applied_workspace();
    let root = temp_dir.path();

    assert_success(&awards(root, &["vote", "bbb", "--by", "2"]));
    assert_success(&awards(root, &["favorite", "ddd444"]));

    let shown = json_stdout(&awards(root, &["show", "bbb222", "--json"]));
    assert_eq!(shown["userVotes"], 2);

    let stats = json_stdout(&awards(root, &["stats", "--json"]));
    assert_eq!(stats["total"], 5);
    assert_eq!(stats["funny"], 2);
    assert_eq!(stats["favorites"], 1);

    let by_votes = json_stdout(&awards(root, &["list", "--json", "--sort", "votes"]));
    assert_eq!(by_votes["commits"][0]["sha"], "bbb222");

    let prizes = json_stdout(&awards(root, &["awards", "--json", "--limit", "1"]));
    assert_eq!(prizes["top_funny"][0]["sha"], "aaa111");
    assert_eq!(prizes["top_voted"][0]["sha"], "bbb222");
    assert_eq!(prizes["favorites"][0]["sha"], "ddd444");
}

#[test]
fn awards_apply_without_import_fails_with_code() {
    let temp_dir = TempDir::new().expect("temp dir");
    assert_success(&awards(temp_dir.path(), &["init"]));

    let output = awards(temp_dir.path(), &["apply", "--json"]);
    assert!(!output.status.success());
    let value = json_stdout(&output);
    assert_eq!(value["error"]["code"], "precondition_error");
}

#[test]
fn awards_uninitialized_reports_error() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = awards(temp_dir.path(), &["list"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("awards init"));
}

#[test]
fn awards_plain_errors_go_through_formatter() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = awards(temp_dir.path(), &["list", "--format", "plain"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|line| line.starts_with("Error: "))
        .expect("error line on stderr");
    assert!(line.contains("awards init"));
    assert!(output.stdout.is_empty());
}

#[test]
fn awards_apply_without_authors_adds_info_line() {
    let temp_dir = TempDir::new().expect("temp dir");
    let root = temp_dir.path();
    let commits = root.join("commits.json");
    fs::write(&commits, COMMITS).expect("write commits");
    assert_success(&awards(root, &["init"]));
    assert_success(&awards(
        root,
        &["import", "commits", commits.to_str().expect("utf-8 path")],
    ));

    let output = awards(root, &["apply", "--json"]);
    assert_success(&output);
    let statuses: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("status line is JSON"))
        .collect();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0]["kind"], "success");
    assert_eq!(statuses[1]["kind"], "info");
}

#[test]
fn awards_apply_with_authors_has_no_info_line() {
    let temp_dir = TempDir::new().expect("temp dir");
    let root = temp_dir.path();
    let commits = root.join("commits.json");
    let authors = root.join("authors.json");
    fs::write(&commits, COMMITS).expect("write commits");
    fs::write(
        &authors,
        r#"[{"sha": "aaa111", "author": {"name": "Ada"}, "repo": {"org": "school", "name": "ada_c3"}}]"#,
    )
    .expect("write authors");
    assert_success(&awards(root, &["init"]));
    assert_success(&awards(
        root,
        &["import", "commits", commits.to_str().expect("utf-8 path")],
    ));
    assert_success(&awards(
        root,
        &["import", "authors", authors.to_str().expect("utf-8 path")],
    ));

    let output = awards(root, &["apply", "--format", "plain"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Applied! 5 commits"));
}
