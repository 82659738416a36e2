//! # aloefs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `aloefs` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command group handlers in `aloefs::commands`
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! aloefs --help
//!
//! # Run a command with increased verbosity
//! aloefs -vv dir remove ./build
//! ```
//!
//! Logs go to stderr at `warn` by default; each `-v` raises the level
//! (info, debug, trace). `RUST_LOG` overrides the flag entirely.
//!
use aloefs::commands;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "aloefs",
    about = "Filesystem utilities: idempotent directories, recursive deletion, scoped text I/O",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create, freshen, remove and list directories
    #[command(alias = "d")]
    Dir(commands::dir::DirArgs),
    /// Read and write text files
    #[command(alias = "f")]
    File(commands::file::FileArgs),
    /// Read and write files in the private app files area
    App(commands::app::AppArgs),
    /// Get and set screen settings
    Settings(commands::settings::SettingsArgs),
    /// Hand a file or phone number to a host command
    Launch(commands::launch::LaunchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Dir(args) => commands::dir::handle_dir(args),
        Commands::File(args) => commands::file::handle_file(args),
        Commands::App(args) => commands::app::handle_app(args),
        Commands::Settings(args) => commands::settings::handle_settings(args),
        Commands::Launch(args) => commands::launch::handle_launch(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
