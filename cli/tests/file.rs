//! # aloefs CLI File Integration Tests
//!
//! File: cli/tests/file.rs
//!
//! Integration tests for `aloefs file read|write`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_write_then_read_joins_lines() {
    let sandbox = tempdir().unwrap();

    aloefs_in(sandbox.path())
        .args(["file", "write", "notes.txt", "a\nb\nc"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(sandbox.path().join("notes.txt")).unwrap(),
        "a\nb\nc"
    );

    aloefs_in(sandbox.path())
        .args(["file", "read", "notes.txt"])
        .assert()
        .success()
        .stdout("abc\n");

    aloefs_in(sandbox.path())
        .args(["file", "read", "--keep-line-endings", "notes.txt"])
        .assert()
        .success()
        .stdout("a\nb\nc");
}

#[test]
fn test_append_after_existing_content() {
    let sandbox = tempdir().unwrap();
    fs::write(sandbox.path().join("log.txt"), "y").unwrap();

    aloefs_in(sandbox.path())
        .args(["file", "write", "--append", "log.txt", "x"])
        .assert()
        .success();

    aloefs_in(sandbox.path())
        .args(["file", "read", "log.txt"])
        .assert()
        .success()
        .stdout("yx\n");
}

#[test]
fn test_read_missing_file() {
    let sandbox = tempdir().unwrap();

    aloefs_in(sandbox.path())
        .args(["file", "read", "nonexistent"])
        .assert()
        .success()
        .stdout("");

    aloefs_in(sandbox.path())
        .args(["file", "read", "--strict", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_write_into_missing_directory() {
    let sandbox = tempdir().unwrap();

    aloefs_in(sandbox.path())
        .args(["file", "write", "no/such/dir.txt", "lost"])
        .assert()
        .success();
    assert!(!sandbox.path().join("no").exists());

    aloefs_in(sandbox.path())
        .args(["file", "write", "--strict", "no/such/dir.txt", "lost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write file"));
}

#[test]
fn test_line_endings_from_project_config() {
    let sandbox = tempdir().unwrap();
    fs::write(
        sandbox.path().join(".aloefs.toml"),
        "[fs]\nline_endings = \"preserve\"\n",
    )
    .unwrap();
    fs::write(sandbox.path().join("two.txt"), "one\ntwo\n").unwrap();

    aloefs_in(sandbox.path())
        .args(["file", "read", "two.txt"])
        .assert()
        .success()
        .stdout("one\ntwo\n");
}

#[test]
fn test_invalid_project_config_fails() {
    let sandbox = tempdir().unwrap();
    fs::write(sandbox.path().join(".aloefs.toml"), "[fs]\nbogus = 1\n").unwrap();

    aloefs_in(sandbox.path())
        .args(["file", "read", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}
