//! # aloefs Launch Command
//!
//! File: cli/src/commands/launch.rs
//!
//! Implements `aloefs launch <view|call|dial> <TARGET>`. The configured host
//! command is started and not waited for. An action kind with no configured
//! command is an error here, since the user asked for it explicitly.
//!
//! ```bash
//! aloefs launch view ./downloads/app.apk
//! aloefs launch dial 5551234
//! ```
//!
use crate::common::launch::{ActionKind, CommandLauncher, LaunchRequest, Launcher};
use crate::core::{
    config,
    error::{AloeError, Result},
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct LaunchArgs {
    /// What to do with the target.
    #[arg(value_enum)]
    kind: ActionKind,
    /// File path (view) or phone number (call, dial).
    target: String,
}

pub fn handle_launch(args: LaunchArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let launcher = CommandLauncher::new(cfg.launch_commands());
    if launcher.command_for(args.kind).is_none() {
        return Err(AloeError::Launch(format!(
            "no command configured for {:?} actions; set it under [launch] in the config",
            args.kind
        ))
        .into());
    }

    let request = LaunchRequest::new(args.kind, args.target);
    info!("Launching {:?} for '{}'", request.kind, request.target);
    launcher.launch(&request);
    Ok(())
}
