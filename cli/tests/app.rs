//! # aloefs CLI App Files Integration Tests
//!
//! File: cli/tests/app.rs
//!
//! Integration tests for `aloefs app read|write`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_write_and_read_in_configured_area() {
    let sandbox = tempdir().unwrap();
    fs::write(
        sandbox.path().join(".aloefs.toml"),
        "[app_files]\ndirectory = \"area\"\n",
    )
    .unwrap();

    aloefs_in(sandbox.path())
        .args(["app", "write", "notes.txt", "one\ntwo"])
        .assert()
        .success();
    aloefs_in(sandbox.path())
        .args(["app", "write", "-a", "notes.txt", "\nthree"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(sandbox.path().join("area/notes.txt")).unwrap(),
        "one\ntwo\nthree"
    );
    aloefs_in(sandbox.path())
        .args(["app", "read", "notes.txt"])
        .assert()
        .success()
        .stdout("onetwothree\n");
}

#[test]
fn test_read_missing_app_file() {
    let sandbox = tempdir().unwrap();
    fs::write(
        sandbox.path().join(".aloefs.toml"),
        "[app_files]\ndirectory = \"area\"\n",
    )
    .unwrap();

    aloefs_in(sandbox.path())
        .args(["app", "read", "absent.txt"])
        .assert()
        .success()
        .stdout("");
    aloefs_in(sandbox.path())
        .args(["app", "read", "--strict", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read app file 'absent.txt'"));
}

#[test]
fn test_rejects_names_outside_area() {
    let sandbox = tempdir().unwrap();

    aloefs_in(sandbox.path())
        .args(["app", "write", "--strict", "../escape.txt", "x"])
        .assert()
        .failure();
    assert!(!sandbox.path().join("escape.txt").exists());
}
