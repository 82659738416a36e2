//! # aloefs File Command Group
//!
//! File: cli/src/commands/file/mod.rs
//!
//! ## Overview
//!
//! Routes the `aloefs file` subcommands.
//!
//! ```bash
//! aloefs file write notes.txt "first line"        # overwrite
//! aloefs file write --append notes.txt "more"     # append
//! aloefs file read notes.txt                      # line terminators stripped
//! aloefs file read --keep-line-endings notes.txt  # verbatim
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod read;
mod write;

/// Top-level arguments for the 'file' command group.
#[derive(Parser, Debug)]
pub struct FileArgs {
    #[command(subcommand)]
    command: FileCommand,
}

/// Enum defining all subcommands under 'aloefs file'.
#[derive(Subcommand, Debug)]
enum FileCommand {
    /// Print a text file
    Read(read::ReadArgs),
    /// Write text to a file (overwrite or append)
    Write(write::WriteArgs),
}

/// Main handler function for the 'file' command group.
pub fn handle_file(args: FileArgs) -> Result<()> {
    match args.command {
        FileCommand::Read(args) => read::handle_read(args),
        FileCommand::Write(args) => write::handle_write(args),
    }
}
