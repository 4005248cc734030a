//! End-to-end publishing against a mock GitHub

use predicates::prelude::*;

use super::{smellpost, with_credentials};
use crate::common::{MockGitHub, TestWorkspace};

#[test]
fn test_publishes_one_issue_per_chunk() {
    let ws = TestWorkspace::new();
    ws.add_numbered_report("long_method.csv", 501);
    ws.add_numbered_report("god_class.csv", 3);
    ws.add_report("notes.txt", "not a report");
    let mock = MockGitHub::start();

    let mut cmd = smellpost();
    with_credentials(&mut cmd, mock.url());
    cmd.arg("abc123")
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 issue(s) created for commit abc123"));

    let titles: Vec<String> = mock
        .requests()
        .iter()
        .map(|r| r.json()["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        titles,
        [
            "god_class for commit - abc123",
            "long_method for commit - abc123 (Part 1)",
            "long_method for commit - abc123 (Part 2)",
        ]
    );

    let last = &mock.requests()[2];
    assert_eq!(last.header("Authorization"), Some("Bearer ghp_secret"));
    assert_eq!(last.url, "/repos/octo/widgets/issues");
    let body = last.json()["body"].as_str().unwrap().to_string();
    assert!(body.starts_with("| id  | smell     |\n"));
    assert!(body.contains("| 501 | smell 501 |"));
}

#[test]
fn test_remote_failure_aborts_and_logs_status_and_body() {
    let ws = TestWorkspace::new();
    ws.add_numbered_report("a.csv", 1);
    ws.add_numbered_report("b.csv", 1);
    let mock = MockGitHub::with_statuses(vec![401]);

    let mut cmd = smellpost();
    with_credentials(&mut cmd, mock.url());
    cmd.arg("abc123")
        .current_dir(ws.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error creating issue: 401"))
        .stdout(predicate::str::contains("Response: {\"message\": \"Bad credentials\"}"))
        .stdout(predicate::str::contains("Error processing file a.csv"));

    // b.csv is never started
    assert_eq!(mock.requests().len(), 1);
}

#[test]
fn test_keep_going_publishes_remaining_reports() {
    let ws = TestWorkspace::new();
    ws.add_numbered_report("a.csv", 1);
    ws.add_report("b.csv", "");
    ws.add_numbered_report("c.csv", 1);
    let mock = MockGitHub::start();

    let mut cmd = smellpost();
    with_credentials(&mut cmd, mock.url());
    cmd.args(["abc123", "--keep-going", "--json"])
        .current_dir(ws.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"status\": \"input_error\""))
        .stderr(predicate::str::contains("1 report(s) failed"));

    assert_eq!(mock.requests().len(), 2);
}

#[test]
fn test_dry_run_keep_going_reports_failures() {
    let ws = TestWorkspace::new();
    ws.add_numbered_report("a.csv", 1);
    ws.add_report("b.csv", "");

    smellpost()
        .args(["abc123", "--dry-run", "--keep-going"])
        .current_dir(ws.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Dry run: 1 issue(s) not sent"))
        .stdout(predicate::str::contains("b.csv: FAILED"))
        .stdout(predicate::str::contains("Created issue").not())
        .stderr(predicate::str::contains("1 report(s) failed to publish"));
}

#[test]
fn test_dry_run_keep_going_json_lists_failures() {
    let ws = TestWorkspace::new();
    ws.add_numbered_report("a.csv", 1);
    ws.add_report("b.csv", "");

    smellpost()
        .args(["abc123", "--dry-run", "--keep-going", "--json"])
        .current_dir(ws.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"failed\": ["))
        .stdout(predicate::str::contains("\"status\": \"input_error\""));
}

#[test]
fn test_config_file_sets_chunk_size() {
    let ws = TestWorkspace::new();
    ws.add_numbered_report("dup.csv", 5);
    ws.add_file("smellpost.toml", "[reports]\nchunk_size = 2\n");
    let mock = MockGitHub::start();

    let mut cmd = smellpost();
    with_credentials(&mut cmd, mock.url());
    cmd.arg("abc123").current_dir(ws.path()).assert().success();

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[2].json()["title"], "dup for commit - abc123 (Part 3)");
}

#[test]
fn test_chunk_size_flag_overrides_config() {
    let ws = TestWorkspace::new();
    ws.add_numbered_report("dup.csv", 5);
    ws.add_file("smellpost.toml", "[reports]\nchunk_size = 2\n");
    let mock = MockGitHub::start();

    let mut cmd = smellpost();
    with_credentials(&mut cmd, mock.url());
    cmd.args(["abc123", "--chunk-size", "10"])
        .current_dir(ws.path())
        .assert()
        .success();

    assert_eq!(mock.requests().len(), 1);
}
