//! # aloefs
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Filesystem utilities with two error-handling contracts side by side:
//! *absorbing* operations that log failures and return a benign default, and
//! *propagating* operations (`try_*`, `*_scoped`) that return typed errors.
//!
//! - `common::fs::path::join`: directory + name path construction
//! - `common::fs::dir`: `ensure_dir`, `create_fresh_file`, `delete_tree`, ...
//! - `common::fs::io`: `read_all`, `write_overwrite`, `write_append`, ...
//!
//! The `aloefs` binary (`main.rs`) exposes these through `commands`.
//!
pub mod commands;
pub mod common;
pub mod core;
