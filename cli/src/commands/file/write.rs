//! # aloefs File Write Handler
//!
//! File: cli/src/commands/file/write.rs
//!
//! Implements `aloefs file write`. Parent directories are never created.
//! Without `--strict`, a file that cannot be opened is silently skipped.
//!
use crate::common::fs::io::{write_append, write_overwrite, write_scoped, WriteMode};
use crate::core::{config, error::Result};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// File to write.
    path: PathBuf,

    /// Text to write, as-is (no newline is added).
    #[arg(allow_hyphen_values = true)]
    content: String,

    /// Append instead of overwriting.
    #[arg(long, short)]
    append: bool,

    /// Fail if the file cannot be opened or written.
    #[arg(long)]
    strict: bool,
}

pub fn handle_write(args: WriteArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let strict = args.strict || cfg.strict();
    let mode = if args.append {
        WriteMode::Append
    } else {
        WriteMode::Overwrite
    };
    info!(
        "Handling file write (Path: {:?}, Mode: {:?}, Strict: {})",
        args.path, mode, strict
    );

    if strict {
        write_scoped(&args.path, &args.content, mode)
            .with_context(|| format!("Failed to write file {:?}", args.path))?;
    } else {
        match mode {
            WriteMode::Overwrite => write_overwrite(&args.path, &args.content),
            WriteMode::Append => write_append(&args.path, &args.content),
        }
    }
    Ok(())
}
