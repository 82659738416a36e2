//! # aloefs App Files Commands
//!
//! File: cli/src/commands/app.rs
//!
//! ## Overview
//!
//! Implements `aloefs app read|write`, which address files in the private
//! app files area by bare name. The area is `[app_files] directory` from
//! config, or `files/` under the platform data directory. Names that could
//! escape the area (`..`, separators) are rejected.
//!
//! ```bash
//! aloefs app write notes.txt "hello"
//! aloefs app write --append notes.txt " again"
//! aloefs app read notes.txt
//! ```
//!
use crate::common::fs::appdata::AppFiles;
use crate::common::fs::io::{LineEndings, WriteMode};
use crate::core::{
    config,
    error::{AloeError, Result},
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

/// Top-level arguments for the 'app' command group.
#[derive(Parser, Debug)]
pub struct AppArgs {
    #[command(subcommand)]
    command: AppCommand,

    /// Fail instead of printing nothing / skipping the write.
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
enum AppCommand {
    /// Print an app file
    Read {
        name: String,
    },
    /// Write text to an app file
    Write {
        name: String,
        #[arg(allow_hyphen_values = true)]
        content: String,
        /// Append instead of overwriting.
        #[arg(long, short)]
        append: bool,
    },
}

/// Main handler function for the 'app' command group.
pub fn handle_app(args: AppArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let strict = args.strict || cfg.strict();
    let files = cfg
        .app_files_dir()
        .map(AppFiles::at)
        .or_else(AppFiles::from_project_dirs)
        .ok_or_else(|| {
            AloeError::Config("Could not determine an app files directory.".to_string())
        })?;
    info!("Using app files area {:?} (Strict: {})", files.root(), strict);

    match args.command {
        AppCommand::Read { name } => {
            let endings = cfg.line_endings();
            let content = match (strict, endings) {
                (true, _) => files
                    .try_read(&name, endings)
                    .with_context(|| format!("Failed to read app file '{}'", name))?,
                (false, LineEndings::Strip) => files.read(&name),
                (false, LineEndings::Preserve) => {
                    files.try_read(&name, endings).unwrap_or_else(|e| {
                        warn!("Failed to read app file '{}', reading as empty: {}", name, e);
                        String::new()
                    })
                }
            };
            match endings {
                LineEndings::Strip if !content.is_empty() => println!("{}", content),
                _ => print!("{}", content),
            }
        }
        AppCommand::Write {
            name,
            content,
            append,
        } => {
            let mode = if append {
                WriteMode::Append
            } else {
                WriteMode::Overwrite
            };
            if strict {
                files
                    .try_write(&name, &content, mode)
                    .with_context(|| format!("Failed to write app file '{}'", name))?;
            } else {
                files.write(&name, &content, mode);
            }
        }
    }
    Ok(())
}
