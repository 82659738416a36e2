//! # aloefs CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! Top-level behavior of the `aloefs` binary: `--help`, `--version`, and
//! rejection of unknown subcommands.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_main_help_flag() {
    aloefs_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dir"))
        .stdout(predicate::str::contains("file"))
        .stdout(predicate::str::contains("settings"));
}

#[test]
fn test_main_version_flag() {
    aloefs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    aloefs_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_subcommand_help() {
    aloefs_cmd()
        .args(["dir", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remove"));
}
