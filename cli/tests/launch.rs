//! # aloefs CLI Launch Integration Tests
//!
//! File: cli/tests/launch.rs
//!
//! Integration tests for `aloefs launch`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_unconfigured_action_fails() {
    let sandbox = tempdir().unwrap();

    aloefs_in(sandbox.path())
        .args(["launch", "dial", "5551234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no command configured"));
}

#[test]
fn test_invalid_action_kind_rejected() {
    let sandbox = tempdir().unwrap();

    aloefs_in(sandbox.path())
        .args(["launch", "teleport", "somewhere"])
        .assert()
        .failure();
}

#[cfg(unix)]
#[test]
fn test_configured_action_runs_host_command() {
    use std::fs;
    use std::time::{Duration, Instant};

    let sandbox = tempdir().unwrap();
    fs::write(
        sandbox.path().join(".aloefs.toml"),
        "[launch]\ncall = [\"sh\", \"-c\", \"printf %s \\\"$0\\\" > launched.txt\"]\n",
    )
    .unwrap();

    aloefs_in(sandbox.path())
        .args(["launch", "call", "5551234"])
        .assert()
        .success();

    let marker = sandbox.path().join("launched.txt");
    let deadline = Instant::now() + Duration::from_secs(10);
    while fs::read_to_string(&marker).unwrap_or_default() != "tel:5551234" {
        assert!(Instant::now() < deadline, "launched command never ran");
        std::thread::sleep(Duration::from_millis(20));
    }
}
