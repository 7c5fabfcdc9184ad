//! End-to-end tests for the trusty CLI
//!
//! These tests verify:
//! - Report summaries in text and JSON form
//! - Exit codes for clean, flagged and unreadable reports
//! - Dependency diff output

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn trusty_cmd() -> Command {
    let mut cmd = Command::cargo_bin("trusty").expect("trusty binary not found");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Create a directory holding two dependency snapshots
fn create_snapshots() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

    let old = r#"[
  {"name": "lodash", "version": "4.17.20", "ecosystem": 1},
  {"name": "chalk", "version": "4.1.2", "ecosystem": 1}
]"#;
    let new = r#"[
  {"name": "lodash", "version": "4.17.21", "ecosystem": 1},
  {"name": "axios", "version": "1.6.7", "ecosystem": 1}
]"#;
    fs::write(temp_dir.path().join("old.json"), old).unwrap();
    fs::write(temp_dir.path().join("new.json"), new).unwrap();

    temp_dir
}

#[test]
fn test_report_text() {
    trusty_cmd()
        .args(["report", "--no-color"])
        .arg(fixture("reply_complete.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("requests@2.31.0 (pypi) — complete"))
        .stdout(predicate::str::contains("Alternatives:"))
        .stdout(predicate::str::contains("httpx"));
}

#[test]
fn test_report_json() {
    let output = trusty_cmd()
        .args(["report", "--json"])
        .arg(fixture("reply_complete.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["package_name"], "requests");
    assert_eq!(parsed["score"], 8.4);
    assert_eq!(parsed["updated_at"], "2024-02-05T10:11:12.345678");
}

#[test]
fn test_report_malicious_exit_code() {
    trusty_cmd()
        .args(["report", "--no-color"])
        .arg(fixture("reply_malicious.json"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("malicious: Malicious code in reqeusts"));
}

#[test]
fn test_report_missing_file() {
    trusty_cmd()
        .args(["report", "/nonexistent/reply.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read report"));
}

#[test]
fn test_diff_additions_only() {
    let dir = create_snapshots();
    trusty_cmd()
        .args(["diff", "--no-color"])
        .arg(dir.path().join("old.json"))
        .arg(dir.path().join("new.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("+ axios 1.6.7"))
        .stdout(predicate::str::contains("lodash").not())
        .stdout(predicate::str::contains("chalk").not())
        .stdout(predicate::str::contains("# 1 new dependency(ies)"));
}

#[test]
fn test_diff_all() {
    let dir = create_snapshots();
    trusty_cmd()
        .args(["diff", "--all", "--no-color"])
        .arg(dir.path().join("old.json"))
        .arg(dir.path().join("new.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("+ axios 1.6.7"))
        .stdout(predicate::str::contains("- chalk 4.1.2"))
        .stdout(predicate::str::contains("~ lodash 4.17.20 -> 4.17.21 [patch]"));
}

#[test]
fn test_diff_json() {
    let dir = create_snapshots();
    let output = trusty_cmd()
        .args(["diff", "--json"])
        .arg(dir.path().join("old.json"))
        .arg(dir.path().join("new.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["added"]["axios"], "1.6.7");
}

#[test]
fn test_diff_invalid_snapshot() {
    let dir = create_snapshots();
    fs::write(dir.path().join("bad.json"), "not json").unwrap();

    trusty_cmd()
        .arg("diff")
        .arg(dir.path().join("old.json"))
        .arg(dir.path().join("bad.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse dependency list"));
}

#[test]
fn test_version_flag() {
    trusty_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trusty"));
}
