//! Integration tests for the `callsheet` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to run the summary, who, and
//! validate subcommands through the actual binary, covering stdin and file
//! input, file output, the `--today` override, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn roster_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/roster.json")
}

fn invalid_date_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid_date.json")
}

fn duplicate_id_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/duplicate_id.json")
}

fn roster_json() -> String {
    std::fs::read_to_string(roster_path()).expect("roster.json fixture must exist")
}

fn summary_for(args: &[&str]) -> serde_json::Value {
    let output = Command::cargo_bin("callsheet")
        .unwrap()
        .args(args)
        .output()
        .expect("summary should run");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("summary output must be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// summary
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn summary_from_file() {
    let json = summary_for(&["--today", "2025-05-01", "summary", "-i", roster_path()]);

    assert_eq!(json["roster_size"], 4);
    assert_eq!(json["scheduled_members"], 3);
    assert_eq!(json["date_counts"]["2025-06-01"], 1);
    assert_eq!(json["common_dates"].as_array().unwrap().len(), 2);
    assert_eq!(json["best_date"]["date"], "2025-06-03");
    assert_eq!(json["best_date"]["count"], 3);
    assert_eq!(json["ranges"][0]["start"]["date"], "2025-06-02");
    assert_eq!(json["ranges"][0]["end"]["date"], "2025-06-03");
    assert_eq!(json["ranges"][0]["min_count"], 2);
    assert_eq!(json["ranges"][0]["max_count"], 3);
}

#[test]
fn summary_from_stdin() {
    let output = Command::cargo_bin("callsheet")
        .unwrap()
        .args(["--today", "2025-05-01", "summary"])
        .write_stdin(roster_json())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["best_date"]["date"], "2025-06-03");
}

#[test]
fn today_after_window_leaves_nothing() {
    let json = summary_for(&["--today", "2025-06-04", "summary", "-i", roster_path()]);

    assert!(json["date_counts"].as_object().unwrap().is_empty());
    assert!(json["common_dates"].as_array().unwrap().is_empty());
    assert!(json["best_date"].is_null());
}

#[test]
fn today_from_environment() {
    let output = Command::cargo_bin("callsheet")
        .unwrap()
        .env("CALLSHEET_TODAY", "2025-06-03")
        .args(["summary", "-i", roster_path()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["common_dates"].as_array().unwrap().len(), 1);
    assert_eq!(json["best_date"]["date"], "2025-06-03");
}

#[test]
fn summary_to_file_pretty() {
    let output_path = std::env::temp_dir().join("callsheet-test-summary.json");
    let _ = std::fs::remove_file(&output_path);

    Command::cargo_bin("callsheet")
        .unwrap()
        .args(["--today", "2025-05-01", "summary", "--pretty", "-i", roster_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.contains('\n'), "pretty output should be multi-line");
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["best_date"]["count"], 3);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn invalid_today_fails() {
    Command::cargo_bin("callsheet")
        .unwrap()
        .args(["--today", "05/01/2025", "summary", "-i", roster_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

// ─────────────────────────────────────────────────────────────────────────────
// who
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn who_lists_names_with_roles() {
    Command::cargo_bin("callsheet")
        .unwrap()
        .args(["who", "-i", roster_path(), "--date", "2025-06-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Rao (Lead Actor)"))
        .stdout(predicate::str::contains("Bob Mehta\n"))
        .stdout(predicate::str::contains("Carol Fernandes (DP)"))
        .stdout(predicate::str::contains("Dev Iyer").not());
}

#[test]
fn who_reports_nobody() {
    Command::cargo_bin("callsheet")
        .unwrap()
        .args(["who", "-i", roster_path(), "--date", "2025-07-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nobody is available on 2025-07-01"));
}

// ─────────────────────────────────────────────────────────────────────────────
// validate and errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validate_ok() {
    Command::cargo_bin("callsheet")
        .unwrap()
        .args(["validate", "-i", roster_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 4 entries (3 with available dates)"));
}

#[test]
fn validate_rejects_bad_date() {
    Command::cargo_bin("callsheet")
        .unwrap()
        .args(["validate", "-i", invalid_date_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load roster"))
        .stderr(predicate::str::contains("2025-02-30"));
}

#[test]
fn validate_rejects_duplicate_ids() {
    Command::cargo_bin("callsheet")
        .unwrap()
        .args(["validate", "-i", duplicate_id_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load roster"))
        .stderr(predicate::str::contains("Duplicate entry id: c1"));
}

#[test]
fn summary_rejects_duplicate_ids() {
    Command::cargo_bin("callsheet")
        .unwrap()
        .args(["--today", "2025-05-01", "summary", "-i", duplicate_id_path()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_json_fails() {
    Command::cargo_bin("callsheet")
        .unwrap()
        .arg("summary")
        .write_stdin("not json [[")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load roster"));
}

#[test]
fn missing_file_fails() {
    Command::cargo_bin("callsheet")
        .unwrap()
        .args(["summary", "-i", "/nonexistent/roster.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("callsheet")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("who"))
        .stdout(predicate::str::contains("validate"));
}
