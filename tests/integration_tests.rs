//! Integration tests for the parsieve CLI

use assert_cmd::Command;
use predicates::prelude::*;

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("parsieve").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prime sieve"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("parsieve").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("parsieve"));
}

/// Test missing positional arguments show a usage error
#[test]
fn test_missing_arguments() {
    let mut cmd = Command::cargo_bin("parsieve").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// Test the full listing display mode against known primes
#[test]
fn test_listing_ground_truth() {
    let mut cmd = Command::cargo_bin("parsieve").unwrap();
    cmd.args(["2", "30", "--display", "list", "--threads", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 10 primes"))
        .stdout(predicate::str::contains("29"));
}

/// Test every strategy is selectable and agrees on the count
#[test]
fn test_strategy_selection() {
    for strategy in ["domain", "functional", "divisive"] {
        let mut cmd = Command::cargo_bin("parsieve").unwrap();
        cmd.args(["2", "30", "--strategy", strategy, "--threads", "4"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 10 primes"));
    }
}

/// Test JSON output carries the structured report
#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("parsieve").unwrap();
    cmd.args(["2", "30", "--format", "json", "--threads", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 10"))
        .stdout(predicate::str::contains("\"strategy\": \"domain\""));
}

/// Test an inverted interval is rejected before any work starts
#[test]
fn test_inverted_range_rejected() {
    let mut cmd = Command::cargo_bin("parsieve").unwrap();
    cmd.args(["10", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
}

/// Test a span smaller than the worker count is rejected
#[test]
fn test_tiny_span_rejected() {
    let mut cmd = Command::cargo_bin("parsieve").unwrap();
    cmd.args(["2", "5", "--threads", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot split"));
}
