//! # aloefs File Read Handler
//!
//! File: cli/src/commands/file/read.rs
//!
//! Implements `aloefs file read`. Without `--strict`, a missing or
//! unreadable file prints nothing and the command succeeds.
//!
use crate::common::fs::io::{read_all, read_all_scoped, LineEndings};
use crate::core::{config, error::Result};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// File to read.
    path: PathBuf,

    /// Fail if the file is missing or cannot be read.
    #[arg(long)]
    strict: bool,

    /// Print the content verbatim instead of joining lines.
    #[arg(long)]
    keep_line_endings: bool,
}

pub fn handle_read(args: ReadArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let strict = args.strict || cfg.strict();
    let endings = if args.keep_line_endings {
        LineEndings::Preserve
    } else {
        cfg.line_endings()
    };
    info!(
        "Handling file read (Path: {:?}, Strict: {}, Line endings: {:?})",
        args.path, strict, endings
    );

    let content = match (strict, endings) {
        (true, _) => read_all_scoped(&args.path, endings)
            .with_context(|| format!("Failed to read file {:?}", args.path))?,
        (false, LineEndings::Strip) => read_all(&args.path),
        (false, LineEndings::Preserve) => read_all_scoped(&args.path, endings)
            .unwrap_or_else(|e| {
                warn!("Failed to read {:?}, reading as empty: {}", args.path, e);
                String::new()
            }),
    };

    match endings {
        LineEndings::Strip if !content.is_empty() => println!("{}", content),
        _ => print!("{}", content),
    }
    Ok(())
}
