//! # aloefs Settings Store (`common::settings`)
//!
//! File: cli/src/common/settings/mod.rs
//!
//! ## Overview
//!
//! Display and power settings (screen brightness, brightness mode, screen-off
//! timeout) are held by an external key-value store. This module models that
//! store as an injected `SettingsStore` trait rather than global state, so
//! callers decide where settings live and tests can use an in-memory store.
//!
//! ## Architecture
//!
//! - **`SettingKey`**: the known keys and their wire names (`screen-brightness`, ...).
//! - **`SettingsStore`**: minimal integer get/put interface.
//! - **`store`**: `MemorySettings` (a map) and `FileSettings` (a TOML file).
//! - **`screen`**: `ScreenSettings`, a typed facade over any store that
//!   supplies defaults for missing keys and notifies observers after writes.
//!
use crate::core::error::{AloeError, SettingsError};
use std::fmt;
use std::str::FromStr;

pub mod screen;
pub mod store;

pub use screen::{BrightnessMode, ScreenSettings};
pub use store::{FileSettings, MemorySettings};

/// Keys understood by the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Integer 0–255.
    ScreenBrightness,
    /// `BrightnessMode` as 0 (manual) or 1 (automatic).
    ScreenBrightnessMode,
    /// Minutes before the screen turns off.
    ScreenOffTimeout,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::ScreenBrightness,
        SettingKey::ScreenBrightnessMode,
        SettingKey::ScreenOffTimeout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::ScreenBrightness => "screen-brightness",
            SettingKey::ScreenBrightnessMode => "screen-brightness-mode",
            SettingKey::ScreenOffTimeout => "screen-off-timeout",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = AloeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AloeError::UnknownSetting(s.to_string()))
    }
}

/// Integer key-value store for platform settings.
///
/// `get_int` returns `SettingsError::NotFound` for a key that was never written.
pub trait SettingsStore {
    fn get_int(&self, key: SettingKey) -> Result<i64, SettingsError>;
    fn put_int(&mut self, key: SettingKey, value: i64) -> Result<(), SettingsError>;
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_key_round_trips_through_str() {
        for key in SettingKey::ALL {
            assert_eq!(key.as_str().parse::<SettingKey>().unwrap(), key);
        }
        assert_eq!(SettingKey::ScreenOffTimeout.to_string(), "screen-off-timeout");
    }

    #[test]
    fn test_unknown_setting_key() {
        let err = "volume".parse::<SettingKey>().unwrap_err();
        assert!(matches!(err, AloeError::UnknownSetting(ref k) if k == "volume"));
    }
}
