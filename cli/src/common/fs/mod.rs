//! # aloefs Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Entry point for the filesystem utilities. Every operation is synchronous,
//! keeps no state between calls, and releases any file handle it opens before
//! returning.
//!
//! ## Architecture
//!
//! - **`path`**: builds a path from a directory and a name (`join`).
//! - **`dir`**: idempotent directory creation, fresh-file creation, listing, recursive deletion.
//! - **`io`**: line-oriented text reads and overwrite/append writes.
//! - **`appdata`**: a private files area addressed by bare file name.
//!
//! Most operations come in two flavours: an *absorbing* one that logs
//! failures and returns a benign default, and a *propagating* one
//! (`try_*` / `*_scoped`) that returns `FsError`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aloefs::common::fs::{dir, io, path};
//! use std::path::Path;
//!
//! let out = dir::ensure_dir(Path::new("./out"));
//! let file = path::join(&out, "report.txt");
//! io::write_overwrite(&file, "done");
//! assert_eq!(io::read_all(&file), "done");
//! dir::delete_tree(&out);
//! ```
//!

/// Private per-application files area (`AppFiles`).
pub mod appdata;
/// Directory creation, listing and recursive deletion.
pub mod dir;
/// Text file reads and writes with scoped handles.
pub mod io;
/// Directory + name path construction.
pub mod path;
