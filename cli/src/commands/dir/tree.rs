//! # aloefs Dir Tree Handler
//!
//! File: cli/src/commands/dir/tree.rs
//!
//! Implements `aloefs dir tree`: prints one `<kind>\t<path>` line per entry
//! beneath the root, children before their parent directory.
//!
use crate::common::fs::dir::{walk_tree, EntryKind};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Directory to list.
    path: PathBuf,
}

pub fn handle_tree(args: TreeArgs) -> Result<()> {
    let entries =
        walk_tree(&args.path).with_context(|| format!("Failed to list {:?}", args.path))?;
    for entry in entries {
        let kind = match entry.kind {
            EntryKind::File => "file",
            EntryKind::Directory => "dir",
            EntryKind::Other => "other",
        };
        println!("{}\t{}", kind, entry.path.display());
    }
    Ok(())
}
