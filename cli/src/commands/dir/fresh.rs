//! # aloefs Dir Fresh Handler
//!
//! File: cli/src/commands/dir/fresh.rs
//!
//! Implements `aloefs dir fresh <DIR> <NAME>`: leaves exactly one empty file
//! at `DIR/NAME`, replacing any existing file. Always strict, since a
//! missing result file is never acceptable.
//!
use crate::common::fs::dir::create_fresh_file;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct FreshArgs {
    /// Directory that will contain the file. Must exist.
    dir: PathBuf,
    /// File name, including any extension.
    name: String,
}

pub fn handle_fresh(args: FreshArgs) -> Result<()> {
    let path = create_fresh_file(&args.dir, &args.name).with_context(|| {
        format!("Failed to create fresh file '{}' in {:?}", args.name, args.dir)
    })?;
    println!("{}", path.display());
    Ok(())
}
