//! # aloefs Application Files Area
//!
//! File: cli/src/common/fs/appdata.rs
//!
//! ## Overview
//!
//! A private per-application directory for small text files, addressed by
//! bare file name. By default it lives under the platform data directory
//! (e.g. `~/.local/share/aloefs/files` on Linux) as resolved by the
//! `directories` crate; `AppFiles::at` roots it anywhere else.
//!
//! Names must be a single path component. Anything that could escape the
//! root (`..`, separators) is rejected with `FsError::InvalidPath`, so this
//! area is safe to use with externally-sourced names.
//!
use crate::common::fs::dir::try_ensure_dir;
use crate::common::fs::io::{read_all, read_all_scoped, write_scoped, LineEndings, WriteMode};
use crate::common::fs::path::join;
use crate::core::error::{FsError, FsResult};
use directories::ProjectDirs;
use std::path::{is_separator, Path, PathBuf};
use tracing::warn;

/// Private files area rooted at a single directory.
#[derive(Debug, Clone)]
pub struct AppFiles {
    root: PathBuf,
}

impl AppFiles {
    /// Uses `root` as the files directory. It is created on first write.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Uses `<platform data dir>/files`, or `None` if no home directory can be found.
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("com", "Aloe", "aloefs").map(|dirs| Self::at(dirs.data_dir().join("files")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` inside the files area.
    ///
    /// # Errors
    ///
    /// `FsError::InvalidPath` if `name` is empty, `.`, `..`, or contains a separator.
    pub fn path_for(&self, name: &str) -> FsResult<PathBuf> {
        if name.is_empty() || name == "." || name == ".." || name.contains(is_separator) {
            return Err(FsError::InvalidPath(format!(
                "'{}' is not a plain file name",
                name
            )));
        }
        Ok(join(&self.root, name))
    }

    /// Writes `content` to `name`, creating the files area if needed.
    pub fn try_write(&self, name: &str, content: &str, mode: WriteMode) -> FsResult<()> {
        let path = self.path_for(name)?;
        try_ensure_dir(&self.root)?;
        write_scoped(&path, content, mode)
    }

    /// Best-effort [`AppFiles::try_write`]; failures are logged and ignored.
    pub fn write(&self, name: &str, content: &str, mode: WriteMode) {
        if let Err(e) = self.try_write(name, content, mode) {
            warn!("Failed to write app file '{}': {}", name, e);
        }
    }

    /// Reads `name` in full with the requested line-ending handling.
    pub fn try_read(&self, name: &str, endings: LineEndings) -> FsResult<String> {
        read_all_scoped(&self.path_for(name)?, endings)
    }

    /// Reads `name` with line terminators stripped; empty on any failure.
    pub fn read(&self, name: &str) -> String {
        match self.path_for(name) {
            Ok(path) => read_all(&path),
            Err(e) => {
                warn!("Refusing to read app file: {}", e);
                String::new()
            }
        }
    }
}
