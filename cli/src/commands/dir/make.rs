//! # aloefs Dir Make Handler
//!
//! File: cli/src/commands/dir/make.rs
//!
//! Implements `aloefs dir make`. By default a path occupied by a file is
//! left alone and the command still succeeds. With `--strict` (or
//! `fs.strict = true` in config) that conflict, or any creation failure, is
//! an error.
//!
use crate::common::fs::dir::{ensure_dir, try_ensure_dir};
use crate::core::{config, error::Result};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct MakeArgs {
    /// Directory to create.
    path: PathBuf,

    /// Fail if the path is taken by a non-directory or cannot be created.
    #[arg(long)]
    strict: bool,
}

pub fn handle_make(args: MakeArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let strict = args.strict || cfg.strict();
    info!("Handling dir make (Path: {:?}, Strict: {})", args.path, strict);

    let dir = if strict {
        try_ensure_dir(&args.path)
            .with_context(|| format!("Failed to create directory {:?}", args.path))?
    } else {
        ensure_dir(&args.path)
    };
    println!("{}", dir.display());
    Ok(())
}
