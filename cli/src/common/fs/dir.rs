//! # aloefs Directory Operations
//!
//! File: cli/src/common/fs/dir.rs
//!
//! ## Overview
//!
//! Directory management: idempotent creation of directory trees, fresh
//! (empty) file creation, directory listing, and recursive tree deletion.
//!
//! ## Architecture
//!
//! Most operations come as a pair:
//! - **Absorbing** (`ensure_dir`, `delete_tree`): never fail. Problems are
//!   logged through `tracing` and the call completes without effect.
//! - **Propagating** (`try_ensure_dir`, `try_delete_tree`): surface problems
//!   as `FsError` (or, for deletion, a `DeleteReport` that records every
//!   removed path and every failure).
//!
//! Tree deletion is a depth-first post-order traversal. Each level lists its
//! own entries fresh and consumes them by value; nothing is held across the
//! recursive call. Symbolic links are never followed: a link inside the tree
//! is unlinked as a leaf, and a link passed as the root is treated as a
//! non-directory (no-op).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aloefs::common::fs::dir;
//! use std::path::Path;
//!
//! let cache = dir::ensure_dir(Path::new("/tmp/app/cache"));
//! let log = dir::create_fresh_file(&cache, "run.log")?;
//!
//! let report = dir::try_delete_tree(&cache);
//! println!("removed {} entries", report.removed.len());
//! ```
//!
use crate::common::fs::path::join;
use crate::core::error::{FsError, FsResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Kind of a listed directory entry. Symbolic links are reported as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

impl EntryKind {
    fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// A path discovered by listing a directory, paired with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Ensures a directory exists at `path`, creating missing ancestors.
///
/// Best-effort: if `path` is occupied by a non-directory, or creation fails,
/// the problem is logged at `warn` and swallowed. Use [`try_ensure_dir`] to
/// get the error instead.
pub fn ensure_dir(path: &Path) -> PathBuf {
    if let Err(e) = try_ensure_dir(path) {
        warn!("Could not ensure directory {:?}: {}", path, e);
    }
    path.to_path_buf()
}

/// Ensures a directory exists at `path` (like `mkdir -p`).
///
/// # Errors
///
/// - `FsError::InvalidPath` if `path` is empty.
/// - `FsError::AlreadyExists` if `path` exists but is not a directory.
/// - Any other error from inspecting or creating the directory.
pub fn try_ensure_dir(path: &Path) -> FsResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(FsError::InvalidPath("empty directory path".to_string()));
    }
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            debug!("Directory already exists: {:?}", path);
            Ok(path.to_path_buf())
        }
        Ok(_) => Err(FsError::AlreadyExists {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))?;
            info!("Created directory: {:?}", path);
            Ok(path.to_path_buf())
        }
        Err(e) => Err(FsError::from_io(path, e)),
    }
}

/// Best-effort [`ensure_dir`] on `join(dir, name)`.
pub fn ensure_dir_in(dir: &Path, name: &str) -> PathBuf {
    ensure_dir(&join(dir, name))
}

/// Propagating [`try_ensure_dir`] on `join(dir, name)`.
pub fn try_ensure_dir_in(dir: &Path, name: &str) -> FsResult<PathBuf> {
    try_ensure_dir(&join(dir, name))
}

/// Leaves exactly one empty file at `join(dir, name)`, replacing any existing file.
///
/// The empty file is staged as a temporary file next to the target and then
/// renamed over it, so the path never goes missing in between. If the rename
/// fails, the old file (if any) is still in place and the error is returned.
/// The new file is created with owner-only permissions on Unix.
///
/// # Errors
///
/// - `FsError::AlreadyExists` if a directory occupies the target path.
/// - `FsError::NotFound` if the containing directory does not exist.
/// - Any other error from staging or renaming the file.
pub fn create_fresh_file(dir: &Path, name: &str) -> FsResult<PathBuf> {
    let target = join(dir, name);
    match fs::symlink_metadata(&target) {
        Ok(meta) if meta.is_dir() => return Err(FsError::AlreadyExists { path: target }),
        Ok(_) => debug!("Replacing existing file: {:?}", target),
        Err(_) => {}
    }

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let staged = tempfile::Builder::new()
        .prefix(".aloefs-")
        .tempfile_in(&parent)
        .map_err(|e| FsError::from_io(&parent, e))?;
    staged
        .persist(&target)
        .map_err(|e| FsError::from_io(&target, e.error))?;

    info!("Created fresh file: {:?}", target);
    Ok(target)
}

/// Lists the immediate entries of `dir`, without following symbolic links.
pub fn list_entries(dir: &Path) -> FsResult<Vec<DirEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| FsError::from_io(dir, e))?;
    read_dir
        .map(|entry| {
            let entry = entry.map_err(|e| FsError::from_io(dir, e))?;
            let path = entry.path();
            let kind = entry
                .file_type()
                .map(EntryKind::from_file_type)
                .map_err(|e| FsError::from_io(&path, e))?;
            Ok(DirEntry { path, kind })
        })
        .collect()
}

/// Lists everything beneath `root` recursively, children before their parent.
///
/// The root itself is not included, and symbolic links are not followed.
/// A non-directory root yields an empty list.
pub fn walk_tree(root: &Path) -> FsResult<Vec<DirEntry>> {
    let meta = fs::symlink_metadata(root).map_err(|e| FsError::from_io(root, e))?;
    if !meta.is_dir() {
        debug!("Not a directory, nothing to walk: {:?}", root);
        return Ok(Vec::new());
    }
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .follow_root_links(false)
        .contents_first(true)
        .into_iter()
        .map(|entry| {
            let entry = entry.map_err(|e| walk_error(root, e))?;
            Ok(DirEntry {
                path: entry.path().to_path_buf(),
                kind: EntryKind::from_file_type(entry.file_type()),
            })
        })
        .collect()
}

fn walk_error(root: &Path, err: walkdir::Error) -> FsError {
    let path = err.path().unwrap_or(root).to_path_buf();
    match err.into_io_error() {
        Some(source) => FsError::from_io(&path, source),
        None => FsError::Io {
            path,
            source: io::Error::other("filesystem loop detected"),
        },
    }
}

/// One entry that could not be removed during tree deletion.
#[derive(Debug)]
pub struct DeleteFailure {
    pub path: PathBuf,
    pub error: FsError,
}

/// Outcome of [`try_delete_tree`]: what was removed and what was not.
#[derive(Debug)]
pub struct DeleteReport {
    pub root: PathBuf,
    /// Removed paths in removal order (the root last, if it was removed).
    pub removed: Vec<PathBuf>,
    pub failed: Vec<DeleteFailure>,
}

impl DeleteReport {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            removed: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// True when nothing failed (including the no-op case).
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Converts the report into the number of removed entries, or
    /// `FsError::IncompleteDelete` naming every path that failed.
    pub fn into_result(self) -> FsResult<usize> {
        if self.failed.is_empty() {
            Ok(self.removed.len())
        } else {
            Err(FsError::IncompleteDelete {
                root: self.root,
                failed: self.failed.into_iter().map(|f| f.path).collect(),
            })
        }
    }

    fn record(&mut self, path: PathBuf, outcome: io::Result<()>) {
        match outcome {
            Ok(()) => self.removed.push(path),
            Err(e) => {
                let error = FsError::from_io(&path, e);
                self.failed.push(DeleteFailure { path, error });
            }
        }
    }
}

/// Recursively deletes the directory tree at `path`. Never fails.
///
/// A missing or non-directory `path` is a no-op. Entries that cannot be
/// removed do not stop the traversal; each one is logged at `warn`.
pub fn delete_tree(path: &Path) {
    let report = try_delete_tree(path);
    for failure in &report.failed {
        warn!("Failed to remove {:?}: {}", failure.path, failure.error);
    }
    if !report.is_complete() {
        warn!(
            "Tree deletion under {:?} incomplete: {} removed, {} failed",
            path,
            report.removed.len(),
            report.failed.len()
        );
    } else if !report.removed.is_empty() {
        info!(
            "Deleted tree {:?} ({} entries)",
            path,
            report.removed.len()
        );
    }
}

/// Recursively deletes the directory tree at `path`, reporting every outcome.
///
/// Removal continues past failures; a directory whose contents could not all
/// be removed is itself reported as failed. A missing or non-directory
/// `path` yields an empty, complete report.
pub fn try_delete_tree(path: &Path) -> DeleteReport {
    let mut report = DeleteReport::new(path);
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => remove_tree(path.to_path_buf(), &mut report),
        Ok(_) => debug!("Not a directory, nothing to delete: {:?}", path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Directory does not exist, nothing to delete: {:?}", path)
        }
        Err(e) => report.record(path.to_path_buf(), Err(e)),
    }
    report
}

fn remove_tree(dir: PathBuf, report: &mut DeleteReport) {
    let entries = match list_entries(&dir) {
        Ok(entries) => entries,
        Err(error) => {
            report.failed.push(DeleteFailure { path: dir, error });
            return;
        }
    };

    for entry in entries {
        match entry.kind {
            EntryKind::Directory => remove_tree(entry.path, report),
            EntryKind::File | EntryKind::Other => {
                let outcome = fs::remove_file(&entry.path);
                report.record(entry.path, outcome);
            }
        }
    }

    let outcome = fs::remove_dir(&dir);
    report.record(dir, outcome);
}
