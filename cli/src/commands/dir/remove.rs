//! # aloefs Dir Remove Handler
//!
//! File: cli/src/commands/dir/remove.rs
//!
//! Implements `aloefs dir remove`. A missing path, or one that is not a
//! directory, is a no-op in both modes. In strict mode every entry that could
//! not be removed is printed and the command fails. Otherwise failures are
//! only logged.
//!
use crate::common::fs::dir::{delete_tree, try_delete_tree};
use crate::core::{config, error::Result};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Root of the tree to delete.
    path: PathBuf,

    /// Report entries that could not be removed and exit with an error.
    #[arg(long)]
    strict: bool,
}

pub fn handle_remove(args: RemoveArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let strict = args.strict || cfg.strict();
    info!("Handling dir remove (Path: {:?}, Strict: {})", args.path, strict);

    if !strict {
        delete_tree(&args.path);
        return Ok(());
    }

    let report = try_delete_tree(&args.path);
    for failure in &report.failed {
        eprintln!("- {}: {}", failure.path.display(), failure.error);
    }
    let removed = report
        .into_result()
        .with_context(|| format!("Failed to delete tree {:?}", args.path))?;
    println!("Removed {} entries under {}", removed, args.path.display());
    Ok(())
}
