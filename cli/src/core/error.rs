//! # aloefs Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout aloefs. There are three
//! layers:
//!
//! - `FsError` / `FsResult<T>`: typed errors returned by the *propagating*
//!   filesystem operations (`try_*`, `*_scoped`). Callers can match on the
//!   variant to decide what to do (e.g. treat `NotFound` as "nothing to do").
//! - `SettingsError`: failures of an injected settings store.
//! - `AloeError` + `Result<T>`: application-level errors (configuration,
//!   unknown setting keys, launching, argument handling) carried through
//!   `anyhow` so command handlers can attach context. `FsError` and
//!   `SettingsError` also convert into `anyhow::Error` directly.
//!
//! The *absorbing* filesystem operations never return these errors; they log
//! them and fall back to a benign default.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use aloefs::core::error::FsError;
//!
//! match aloefs::common::fs::dir::try_ensure_dir(path) {
//!     Ok(dir) => println!("ready: {:?}", dir),
//!     Err(FsError::AlreadyExists { path }) => eprintln!("{:?} is a file", path),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Typed error for the propagating filesystem operations.
#[derive(Error, Debug)]
pub enum FsError {
    /// The target path was absent when its presence was required.
    #[error("Path not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Permission denied: {path:?}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Something already occupies the path with the wrong kind
    /// (e.g. a file where a directory is wanted).
    #[error("Path already exists with a conflicting kind: {path:?}")]
    AlreadyExists { path: PathBuf },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A tree deletion finished but some entries could not be removed.
    #[error("Failed to remove {} entries under {root:?}: {failed:?}", .failed.len())]
    IncompleteDelete { root: PathBuf, failed: Vec<PathBuf> },
}

impl FsError {
    /// Maps an `io::Error` raised while operating on `path` to the matching variant.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path, source },
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path },
            _ => FsError::Io { path, source },
        }
    }

    /// True for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }
}

/// Result type for the propagating filesystem operations.
pub type FsResult<T> = std::result::Result<T, FsError>;

/// Failures reported by a settings store.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Setting not found: {0}")]
    NotFound(String),

    #[error("Invalid value {value} for setting '{key}'")]
    InvalidValue { key: String, value: i64 },

    #[error("Settings storage error: {source}")]
    Storage {
        #[from]
        source: FsError,
    },

    #[error("Failed to parse settings file: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {source}")]
    Serialize {
        #[from]
        source: toml::ser::Error,
    },
}

/// Application-level error type for aloefs.
#[derive(Error, Debug)]
pub enum AloeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown setting '{0}'. Expected one of: screen-brightness, screen-brightness-mode, screen-off-timeout.")]
    UnknownSetting(String),

    #[error("Launch failed: {0}")]
    Launch(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error, used by command handlers and config loading.
pub type Result<T> = anyhow::Result<T>;
