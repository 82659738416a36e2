//! # aloefs Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Aggregates the command groups of the `aloefs` CLI. Each group defines its
//! own clap arguments and a `handle_*` function; handlers load configuration,
//! call into `common::`, and print results.
//!
//! ## Command Groups
//!
//! - `app`: read and write files in the private app files area
//! - `dir`: create, freshen, remove and list directories
//! - `file`: read and write text files
//! - `settings`: get and set screen settings in the file-backed store
//! - `launch`: hand a target to a configured host command
//!

/// App files area: `read`, `write`.
pub mod app;
/// Directory commands: `make`, `fresh`, `remove`, `tree`.
pub mod dir;
/// Text file commands: `read`, `write`.
pub mod file;
/// External action launching.
pub mod launch;
/// Screen settings: `get`, `set`.
pub mod settings;
