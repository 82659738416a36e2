//! # aloefs Dir Command Group
//!
//! File: cli/src/commands/dir/mod.rs
//!
//! ## Overview
//!
//! Routes the `aloefs dir` subcommands.
//!
//! ```bash
//! aloefs dir make ./build/cache          # mkdir -p, no error on conflicts
//! aloefs dir make --strict ./build/cache # report a file in the way
//! aloefs dir fresh ./build run.log       # leave one empty run.log
//! aloefs dir remove ./build              # recursive delete
//! aloefs dir tree ./build                # list everything below
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod fresh;
mod make;
mod remove;
mod tree;

/// Top-level arguments for the 'dir' command group.
#[derive(Parser, Debug)]
pub struct DirArgs {
    #[command(subcommand)]
    command: DirCommand,
}

/// Enum defining all subcommands under 'aloefs dir'.
#[derive(Subcommand, Debug)]
enum DirCommand {
    /// Create a directory and any missing parents
    Make(make::MakeArgs),
    /// Replace a file in a directory with a new empty one
    Fresh(fresh::FreshArgs),
    /// Recursively delete a directory tree
    #[command(alias = "rm")]
    Remove(remove::RemoveArgs),
    /// List everything beneath a directory
    Tree(tree::TreeArgs),
}

/// Main handler function for the 'dir' command group.
pub fn handle_dir(args: DirArgs) -> Result<()> {
    match args.command {
        DirCommand::Make(args) => make::handle_make(args),
        DirCommand::Fresh(args) => fresh::handle_fresh(args),
        DirCommand::Remove(args) => remove::handle_remove(args),
        DirCommand::Tree(args) => tree::handle_tree(args),
    }
}
