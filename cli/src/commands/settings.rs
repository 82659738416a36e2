//! # aloefs Settings Commands
//!
//! File: cli/src/commands/settings.rs
//!
//! ## Overview
//!
//! Implements `aloefs settings get|set` against the file-backed settings
//! store (`[settings] file` in config, or `--file`). Reads go through
//! `ScreenSettings`, so unset keys print their default (0). Writes are
//! validated against the key's range before anything is stored.
//!
//! ```bash
//! aloefs settings set screen-brightness 200   # also switches the mode to manual (0)
//! aloefs settings get screen-brightness-mode  # -> 0
//! aloefs settings set screen-off-timeout 5 --file ./settings.toml
//! ```
//!
use crate::common::settings::{BrightnessMode, FileSettings, ScreenSettings, SettingKey};
use crate::core::{
    config,
    error::{AloeError, Result},
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Top-level arguments for the 'settings' command group.
#[derive(Parser, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,

    /// Settings file to use instead of the configured one.
    #[arg(long, global = true)]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// Print the value of a setting (0 if unset)
    Get {
        /// screen-brightness, screen-brightness-mode, or screen-off-timeout
        key: String,
    },
    /// Store a new value for a setting
    Set {
        /// screen-brightness, screen-brightness-mode, or screen-off-timeout
        key: String,
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },
}

/// Main handler function for the 'settings' command group.
pub fn handle_settings(args: SettingsArgs) -> Result<()> {
    let file = match args.file {
        Some(file) => file,
        None => config::load_config()?.settings_file().ok_or_else(|| {
            AloeError::Config("Could not determine a settings file location.".to_string())
        })?,
    };
    let mut screen = ScreenSettings::new(FileSettings::new(&file));
    screen.subscribe(|key| info!("Setting '{}' changed", key));

    match args.command {
        SettingsCommand::Get { key } => {
            let value = match key.parse::<SettingKey>()? {
                SettingKey::ScreenBrightness => i64::from(screen.brightness()),
                SettingKey::ScreenBrightnessMode => screen.brightness_mode() as i64,
                SettingKey::ScreenOffTimeout => i64::from(screen.screen_off_timeout()),
            };
            println!("{}", value);
        }
        SettingsCommand::Set { key, value } => {
            let key = key.parse::<SettingKey>()?;
            let out_of_range =
                || AloeError::ArgumentParsing(format!("{} is out of range for '{}'", value, key));
            let stored = match key {
                SettingKey::ScreenBrightness => {
                    screen.set_brightness(u8::try_from(value).map_err(|_| out_of_range())?)
                }
                SettingKey::ScreenBrightnessMode => screen.set_brightness_mode(
                    BrightnessMode::try_from(value).map_err(|_| out_of_range())?,
                ),
                SettingKey::ScreenOffTimeout => {
                    screen.set_screen_off_timeout(u32::try_from(value).map_err(|_| out_of_range())?)
                }
            };
            stored.with_context(|| format!("Failed to store '{}' in {:?}", key, file))?;
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}
