//! # aloefs CLI Settings Integration Tests
//!
//! File: cli/tests/settings.rs
//!
//! Integration tests for `aloefs settings get|set` against a settings file in
//! the sandbox.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_set_brightness_then_get() {
    let sandbox = tempdir().unwrap();
    fs::write(sandbox.path().join("s.toml"), "screen-brightness-mode = 1\n").unwrap();

    aloefs_in(sandbox.path())
        .args(["settings", "set", "screen-brightness", "200", "--file", "s.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("screen-brightness = 200"));

    aloefs_in(sandbox.path())
        .args(["settings", "get", "screen-brightness", "--file", "s.toml"])
        .assert()
        .success()
        .stdout("200\n");

    // Setting the brightness switches the mode back to manual.
    aloefs_in(sandbox.path())
        .args(["settings", "get", "screen-brightness-mode", "--file", "s.toml"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_get_unset_key_prints_default() {
    let sandbox = tempdir().unwrap();

    aloefs_in(sandbox.path())
        .args(["settings", "get", "screen-off-timeout", "--file", "absent.toml"])
        .assert()
        .success()
        .stdout("0\n");
    assert!(!sandbox.path().join("absent.toml").exists());
}

#[test]
fn test_settings_file_from_project_config() {
    let sandbox = tempdir().unwrap();
    fs::write(
        sandbox.path().join(".aloefs.toml"),
        "[settings]\nfile = \"conf/settings.toml\"\n",
    )
    .unwrap();

    aloefs_in(sandbox.path())
        .args(["settings", "set", "screen-off-timeout", "5"])
        .assert()
        .success();

    let stored = fs::read_to_string(sandbox.path().join("conf/settings.toml")).unwrap();
    assert!(stored.contains("screen-off-timeout = 5"));
}

#[test]
fn test_set_out_of_range_fails() {
    let sandbox = tempdir().unwrap();

    aloefs_in(sandbox.path())
        .args(["settings", "set", "screen-brightness", "300", "--file", "s.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    aloefs_in(sandbox.path())
        .args(["settings", "set", "screen-off-timeout", "-1", "--file", "s.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    assert!(!sandbox.path().join("s.toml").exists());
}

#[test]
fn test_unknown_key_fails() {
    let sandbox = tempdir().unwrap();

    aloefs_in(sandbox.path())
        .args(["settings", "get", "volume", "--file", "s.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting 'volume'"));
}
