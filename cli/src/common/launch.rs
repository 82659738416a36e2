//! # aloefs External Action Launcher
//!
//! File: cli/src/common/launch.rs
//!
//! ## Overview
//!
//! Asks the host environment to perform an action on a target: view (or
//! install) a file, place a call, or open a dialer. Launching is
//! fire-and-forget; nothing about the outcome flows back to the caller.
//!
//! ## Architecture
//!
//! - **`Launcher`**: the injected interface.
//! - **`CommandLauncher`**: runs a configured host command per action kind
//!   (the `[launch]` config section), with the target appended as the last
//!   argument. Call and dial targets are passed as `tel:` URIs. The child
//!   process is spawned and left running; a missing command or a spawn
//!   failure is logged and otherwise ignored.
//!
use crate::core::config::LaunchConfig;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// What the host should do with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ActionKind {
    /// Open (view or install) a file.
    View,
    /// Call a phone number directly.
    Call,
    /// Open the dialer with a phone number filled in.
    Dial,
}

/// A single launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub kind: ActionKind,
    pub target: String,
}

impl LaunchRequest {
    pub fn new(kind: ActionKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }

    /// The argument handed to the host: the file path for `View`, a `tel:` URI otherwise.
    pub fn uri(&self) -> String {
        match self.kind {
            ActionKind::View => self.target.clone(),
            ActionKind::Call | ActionKind::Dial if self.target.starts_with("tel:") => {
                self.target.clone()
            }
            ActionKind::Call | ActionKind::Dial => format!("tel:{}", self.target),
        }
    }
}

/// Performs launch requests. Implementations must not block on the launched action.
pub trait Launcher {
    fn launch(&self, request: &LaunchRequest);
}

/// Launcher that spawns configured host commands.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    commands: LaunchConfig,
}

impl CommandLauncher {
    pub fn new(commands: LaunchConfig) -> Self {
        Self { commands }
    }

    /// The configured command for `kind`, or `None` if none is configured.
    pub fn command_for(&self, kind: ActionKind) -> Option<&[String]> {
        let command = match kind {
            ActionKind::View => &self.commands.view,
            ActionKind::Call => &self.commands.call,
            ActionKind::Dial => &self.commands.dial,
        };
        (!command.is_empty()).then_some(command.as_slice())
    }
}

impl Launcher for CommandLauncher {
    fn launch(&self, request: &LaunchRequest) {
        let Some((program, args)) = self.command_for(request.kind).and_then(|c| c.split_first())
        else {
            warn!("No command configured for {:?} actions; ignoring", request.kind);
            return;
        };

        let spawned = Command::new(program)
            .args(args)
            .arg(request.uri())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => info!(
                "Launched {:?} action for '{}' via '{}' (pid {})",
                request.kind,
                request.target,
                program,
                child.id()
            ),
            Err(e) => warn!(
                "Failed to launch {:?} action via '{}': {}",
                request.kind, program, e
            ),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_for_each_kind() {
        assert_eq!(
            LaunchRequest::new(ActionKind::View, "/tmp/app.apk").uri(),
            "/tmp/app.apk"
        );
        assert_eq!(
            LaunchRequest::new(ActionKind::Call, "5551234").uri(),
            "tel:5551234"
        );
        assert_eq!(
            LaunchRequest::new(ActionKind::Dial, "tel:5551234").uri(),
            "tel:5551234"
        );
    }

    #[test]
    fn test_unconfigured_kind_is_ignored() {
        let launcher = CommandLauncher::new(LaunchConfig {
            view: vec![],
            call: vec![],
            dial: vec![],
        });
        assert!(launcher.command_for(ActionKind::Dial).is_none());
        // Must not panic or block.
        launcher.launch(&LaunchRequest::new(ActionKind::Dial, "5551234"));
    }

    #[test]
    fn test_missing_program_is_ignored() {
        let launcher = CommandLauncher::new(LaunchConfig {
            view: vec!["aloefs-no-such-program".into()],
            call: vec![],
            dial: vec![],
        });
        launcher.launch(&LaunchRequest::new(ActionKind::View, "file.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_spawns_configured_command_with_target() -> crate::core::error::Result<()> {
        use std::time::{Duration, Instant};

        let base = tempfile::tempdir()?;
        let marker = base.path().join("launched.txt");
        let script = format!("printf %s \"$0\" > '{}'", marker.display());
        let launcher = CommandLauncher::new(LaunchConfig {
            view: vec![],
            call: vec!["sh".into(), "-c".into(), script],
            dial: vec![],
        });

        launcher.launch(&LaunchRequest::new(ActionKind::Call, "5551234"));

        let deadline = Instant::now() + Duration::from_secs(10);
        while std::fs::read_to_string(&marker).unwrap_or_default() != "tel:5551234" {
            assert!(Instant::now() < deadline, "launched command never ran");
            std::thread::sleep(Duration::from_millis(20));
        }
        Ok(())
    }
}
