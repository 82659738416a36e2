//! # aloefs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the library and the command-line front end:
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types (`FsError`, `SettingsError`, `AloeError`) and the `Result` alias
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{AloeError, FsError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
