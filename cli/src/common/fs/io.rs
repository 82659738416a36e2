//! # aloefs Text File I/O
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Reading and writing text files with the file handle released on every exit
//! path. Handles are owned by the calling function (`File`, `BufReader`,
//! `BufWriter`) and dropped when it returns, whether that is a normal return,
//! an early `?` return, or an unwinding panic. No handle outlives a call.
//!
//! ## Architecture
//!
//! - **`for_each_line`**: streaming primitive. Yields each raw line (with its
//!   terminator) to a callback.
//! - **`read_all_scoped`** / **`write_scoped`**: propagating variants that
//!   return `FsError` on any failure.
//! - **`read_all`**, **`write_overwrite`**, **`write_append`**: absorbing
//!   variants that log failures and fall back to a benign default.
//!
//! `read_all` concatenates lines with their terminators removed, so
//! `"a\nb\nc"` reads back as `"abc"`. `\n`, `\r\n` and a lone `\r` all
//! count as terminators. Pass `LineEndings::Preserve` to `read_all_scoped`
//! to get the content back verbatim.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aloefs::common::fs::io::{self, LineEndings, WriteMode};
//! use std::path::Path;
//!
//! let log = Path::new("./run.log");
//! io::write_scoped(log, "started\n", WriteMode::Overwrite)?;
//! io::write_append(log, "finished\n");
//! assert_eq!(io::read_all(log), "startedfinished");
//! assert_eq!(io::read_all_scoped(log, LineEndings::Preserve)?, "started\nfinished\n");
//! ```
//!
use crate::core::error::{FsError, FsResult};
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// How a write treats existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file, or truncate it if it exists.
    Overwrite,
    /// Create the file if absent, then write after existing content.
    Append,
}

/// What happens to line terminators when reading a whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndings {
    /// Remove terminators and concatenate lines.
    #[default]
    Strip,
    /// Keep the content byte-for-byte.
    Preserve,
}

/// Streams `path` line by line, passing each raw line (terminator included)
/// to `on_line`. Returns the number of lines seen.
///
/// The file handle lives only for the duration of this call.
///
/// # Errors
///
/// Returns an `FsError` if the file cannot be opened or a read fails partway
/// (including invalid UTF-8). Lines already passed to `on_line` stay delivered.
pub fn for_each_line<F>(path: &Path, mut on_line: F) -> FsResult<usize>
where
    F: FnMut(&str),
{
    let file = File::open(path).map_err(|e| FsError::from_io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let mut count = 0;
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| FsError::from_io(path, e))?;
        if read == 0 {
            break;
        }
        on_line(&line);
        count += 1;
    }
    debug!("Read {} lines from {:?}", count, path);
    Ok(count)
}

/// Reads the whole file at `path` into one `String`.
///
/// # Errors
///
/// Returns an `FsError` if the file cannot be opened or read. Nothing partial
/// is returned on failure.
pub fn read_all_scoped(path: &Path, endings: LineEndings) -> FsResult<String> {
    let mut content = String::new();
    for_each_line(path, |line| match endings {
        LineEndings::Preserve => content.push_str(line),
        LineEndings::Strip => content.extend(line.split(['\r', '\n'])),
    })?;
    Ok(content)
}

/// Reads the file at `path` with line terminators stripped. Never fails.
///
/// Returns an empty string if the file does not exist or any read error
/// occurs, including one partway through the file.
pub fn read_all(path: &Path) -> String {
    match read_all_scoped(path, LineEndings::Strip) {
        Ok(content) => content,
        Err(FsError::NotFound { .. }) => {
            debug!("File not found, reading as empty: {:?}", path);
            String::new()
        }
        Err(e) => {
            warn!("Failed to read {:?}, reading as empty: {}", path, e);
            String::new()
        }
    }
}

/// Writes `content` to `path` in the given mode.
///
/// Parent directories are not created. The writer is flushed explicitly so
/// that late write errors are reported rather than lost on drop.
///
/// # Errors
///
/// - `FsError::InvalidPath` if `path` is a directory.
/// - `FsError::NotFound` if the parent directory does not exist.
/// - Any other error from opening, writing or flushing the file.
pub fn write_scoped(path: &Path, content: &str, mode: WriteMode) -> FsResult<()> {
    let file = open_for_write(path, mode)?;
    write_to(file, path, content, mode)
}

fn open_for_write(path: &Path, mode: WriteMode) -> FsResult<File> {
    if path.is_dir() {
        return Err(FsError::InvalidPath(format!(
            "{:?} is a directory, not a file",
            path
        )));
    }
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Overwrite => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };
    options.open(path).map_err(|e| FsError::from_io(path, e))
}

fn write_to(file: File, path: &Path, content: &str, mode: WriteMode) -> FsResult<()> {
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| FsError::from_io(path, e))?;
    debug!("Wrote {} bytes to {:?} ({:?})", content.len(), path, mode);
    Ok(())
}

/// Overwrites `path` with `content`. Never fails.
///
/// If the file cannot be opened (missing parent directory, no permission),
/// this is a silent no-op.
pub fn write_overwrite(path: &Path, content: &str) {
    write_absorbing(path, content, WriteMode::Overwrite);
}

/// Appends `content` to `path`, creating it if absent. Never fails.
pub fn write_append(path: &Path, content: &str) {
    write_absorbing(path, content, WriteMode::Append);
}

/// What an absorbing write ended up doing.
#[derive(Debug, PartialEq, Eq)]
enum AbsorbedWrite {
    Written,
    /// The file could not be opened; nothing was written.
    Skipped,
    /// The file opened but writing or flushing failed.
    Failed,
}

fn write_absorbing(path: &Path, content: &str, mode: WriteMode) -> AbsorbedWrite {
    let file = match open_for_write(path, mode) {
        Ok(file) => file,
        Err(e) => {
            debug!("Could not open {:?} for writing, skipping: {}", path, e);
            return AbsorbedWrite::Skipped;
        }
    };
    match write_to(file, path, content, mode) {
        Ok(()) => AbsorbedWrite::Written,
        Err(e) => {
            warn!("Failed to write {:?}: {}", path, e);
            AbsorbedWrite::Failed
        }
    }
}
