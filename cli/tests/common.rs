//! # aloefs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the compiled `aloefs` binary inside a throwaway sandbox directory, with
//! `HOME` and the XDG directories pointed into it, so that no user or
//! project configuration on the host leaks into the run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Command for the `aloefs` binary with no sandboxing.
pub fn aloefs_cmd() -> Command {
    Command::cargo_bin("aloefs").expect("Failed to find aloefs binary for testing")
}

/// Command for the `aloefs` binary running in `sandbox`, with `sandbox` as
/// home and config/data directories beneath it.
pub fn aloefs_in(sandbox: &Path) -> Command {
    let mut cmd = aloefs_cmd();
    cmd.current_dir(sandbox)
        .env("HOME", sandbox)
        .env("XDG_CONFIG_HOME", sandbox.join(".config"))
        .env("XDG_DATA_HOME", sandbox.join(".local/share"))
        .env_remove("RUST_LOG");
    cmd
}
