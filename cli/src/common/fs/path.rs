//! # aloefs Path Construction
//!
//! File: cli/src/common/fs/path.rs
//!
//! ## Overview
//!
//! Builds a filesystem path from a directory and a single name component.
//! This is plain concatenation with exactly one separator at the seam; no
//! canonicalization, no existence checks, and no validation of `name`.
//!
//! **Note:** `name` is passed through verbatim, including `..` sequences.
//! Callers handling externally-sourced names must sanitize them first.
//!
use std::ffi::{OsStr, OsString};
use std::path::{is_separator, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Joins `dir` and `name` with a single separator.
///
/// Unlike `Path::join`, an absolute `name` is appended to `dir` instead of
/// replacing it. Trailing separators on `dir` and leading separators on
/// `name` collapse into one. An empty `dir` yields `name` unchanged.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(join("/tmp/", "a.txt"), PathBuf::from("/tmp/a.txt"));
/// assert_eq!(join("/tmp", "/a.txt"), PathBuf::from("/tmp/a.txt"));
/// ```
pub fn join(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    let dir = dir.as_ref();
    let name = name.trim_start_matches(is_separator);
    if dir.as_os_str().is_empty() {
        return PathBuf::from(name);
    }

    // Non-UTF-8 directories keep their trailing separators untouched.
    let mut joined: OsString = match dir.to_str() {
        Some(s) => s.trim_end_matches(is_separator).into(),
        None => dir.as_os_str().to_owned(),
    };
    if !ends_with_separator(&joined) {
        joined.push(MAIN_SEPARATOR_STR);
    }
    joined.push(name);
    PathBuf::from(joined)
}

fn ends_with_separator(s: &OsStr) -> bool {
    s.as_encoded_bytes()
        .last()
        .is_some_and(|b| is_separator(*b as char))
}

// --- Unit Tests ---
#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_join_inserts_single_separator() {
        assert_eq!(join("/tmp", "a.txt"), PathBuf::from("/tmp/a.txt"));
        assert_eq!(join("/tmp/", "a.txt"), PathBuf::from("/tmp/a.txt"));
        assert_eq!(join("/tmp//", "//a.txt"), PathBuf::from("/tmp/a.txt"));
        assert_eq!(join("relative/dir", "b"), PathBuf::from("relative/dir/b"));
    }

    #[test]
    fn test_join_root_and_empty_dir() {
        assert_eq!(join("/", "etc"), PathBuf::from("/etc"));
        assert_eq!(join("", "name"), PathBuf::from("name"));
    }

    #[test]
    fn test_join_does_not_replace_with_absolute_name() {
        // Path::join would return "/etc/passwd" here.
        assert_eq!(join("/srv/data", "/etc/passwd"), PathBuf::from("/srv/data/etc/passwd"));
    }

    #[test]
    fn test_join_passes_traversal_through() {
        assert_eq!(join("/srv/data", "../x"), PathBuf::from("/srv/data/../x"));
    }
}
