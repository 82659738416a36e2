//! # aloefs Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads, merges, and validates aloefs configuration. Configuration only
//! chooses defaults for the command-line front end (strict vs. absorbing
//! error handling, line-ending handling, where settings and app files live,
//! which host commands launch actions). The library functions themselves
//! take everything as arguments and never read configuration.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.aloefs.toml` in the current directory or an ancestor
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/aloefs/config.toml`)
//! 3. Default values defined in the code
//!
//! After merging, `~` in paths is expanded and the result is validated.
//!
//! ## Examples
//!
//! ```toml
//! [fs]
//! strict = true
//! line_endings = "preserve"
//!
//! [settings]
//! file = "~/.config/aloefs/settings.toml"
//!
//! [app_files]
//! directory = "~/aloefs-files"
//!
//! [launch]
//! view = ["xdg-open"]
//! dial = ["my-dialer", "--number"]
//! ```
//!
use crate::common::fs::io::{read_all_scoped, LineEndings};
use crate::core::error::{AloeError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fs: FsConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub app_files: AppFilesConfig,
    #[serde(default)]
    pub launch: LaunchSection,
}

/// Defaults for the filesystem commands. Unset fields defer to the next source.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FsConfig {
    /// Report failures as errors instead of absorbing them.
    pub strict: Option<bool>,
    /// Line-ending handling for `file read`.
    pub line_endings: Option<LineEndings>,
}

/// Location of the file-backed settings store.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    /// Path to the settings TOML file (can use ~). Will be expanded.
    pub file: Option<String>,
}

/// Location of the private application files area.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct AppFilesConfig {
    /// Directory for app files (can use ~). Will be expanded.
    pub directory: Option<String>,
}

/// The `[launch]` section as written. Unset fields defer to the next source;
/// an empty list disables that action.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct LaunchSection {
    pub view: Option<Vec<String>>,
    pub call: Option<Vec<String>>,
    pub dial: Option<Vec<String>>,
}

/// Resolved host commands used to launch external actions. The target is
/// appended as the last argument. An empty list means the action is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub view: Vec<String>,
    pub call: Vec<String>,
    pub dial: Vec<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            view: default_view_command(),
            call: Vec::new(),
            dial: Vec::new(),
        }
    }
}

fn default_view_command() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["open".to_string()]
    } else if cfg!(windows) {
        vec!["explorer".to_string()]
    } else {
        vec!["xdg-open".to_string()]
    }
}

impl Config {
    pub fn strict(&self) -> bool {
        self.fs.strict.unwrap_or(false)
    }

    pub fn line_endings(&self) -> LineEndings {
        self.fs.line_endings.unwrap_or_default()
    }

    /// Configured settings file, else `settings.toml` in the platform config directory.
    pub fn settings_file(&self) -> Option<PathBuf> {
        self.settings
            .file
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| project_dirs().map(|d| d.config_dir().join("settings.toml")))
    }

    /// Launch commands with unset actions filled from the built-in defaults.
    pub fn launch_commands(&self) -> LaunchConfig {
        let defaults = LaunchConfig::default();
        LaunchConfig {
            view: self.launch.view.clone().unwrap_or(defaults.view),
            call: self.launch.call.clone().unwrap_or(defaults.call),
            dial: self.launch.dial.clone().unwrap_or(defaults.dial),
        }
    }

    /// Configured app files directory, if any.
    pub fn app_files_dir(&self) -> Option<PathBuf> {
        self.app_files.directory.as_ref().map(PathBuf::from)
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".aloefs.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Aloe", "aloefs")
}

/// Loads the merged, expanded and validated configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = project_dirs() {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.aloefs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    Ok(find_project_config_from(&current_dir))
}

fn find_project_config_from(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = read_all_scoped(path, LineEndings::Preserve)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        fs: FsConfig {
            strict: project_cfg.fs.strict.or(user.fs.strict),
            line_endings: project_cfg.fs.line_endings.or(user.fs.line_endings),
        },
        settings: SettingsConfig {
            file: project_cfg.settings.file.or(user.settings.file),
        },
        app_files: AppFilesConfig {
            directory: project_cfg.app_files.directory.or(user.app_files.directory),
        },
        launch: LaunchSection {
            view: project_cfg.launch.view.or(user.launch.view),
            call: project_cfg.launch.call.or(user.launch.call),
            dial: project_cfg.launch.dial.or(user.launch.dial),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    if let Some(file) = config.settings.file.as_mut() {
        *file = shellexpand::tilde(file.as_str()).into_owned();
        debug!("Expanded settings file: {}", file);
    }
    if let Some(dir) = config.app_files.directory.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded app files directory: {}", dir);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if let Some(file) = &config.settings.file {
        if file.is_empty() {
            return Err(anyhow!(AloeError::Config(
                "Settings file path cannot be empty.".to_string()
            )));
        }
        if Path::new(file).is_dir() {
            return Err(anyhow!(AloeError::Config(format!(
                "Configured settings file '{}' is a directory.",
                file
            ))));
        }
    }
    if let Some(dir) = &config.app_files.directory {
        let dir = Path::new(dir);
        if dir.exists() && !dir.is_dir() {
            return Err(anyhow!(AloeError::Config(format!(
                "Configured app files path '{}' exists but is not a directory.",
                dir.display()
            ))));
        }
    }
    let launch = config.launch_commands();
    for (action, command) in [
        ("view", &launch.view),
        ("call", &launch.call),
        ("dial", &launch.dial),
    ] {
        if command.iter().any(|part| part.trim().is_empty()) {
            return Err(anyhow!(AloeError::Config(format!(
                "Launch command for '{}' contains an empty argument: {:?}",
                action, command
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
