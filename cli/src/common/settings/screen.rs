//! # aloefs Screen Settings
//!
//! File: cli/src/common/settings/screen.rs
//!
//! ## Overview
//!
//! Typed access to the display/power keys of an injected `SettingsStore`.
//!
//! - Getters never fail. A missing key, a store failure, or an out-of-range
//!   value is logged and the default (`0`, `Manual`, `0` minutes) returned.
//! - Setters write through to the store and, only once the write succeeded,
//!   notify every subscribed observer with the key that changed.
//!
use super::{SettingKey, SettingsStore};
use crate::core::error::SettingsError;
use tracing::{debug, warn};

/// Whether the platform adjusts brightness on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessMode {
    #[default]
    Manual = 0,
    Automatic = 1,
}

impl TryFrom<i64> for BrightnessMode {
    type Error = SettingsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BrightnessMode::Manual),
            1 => Ok(BrightnessMode::Automatic),
            _ => Err(SettingsError::InvalidValue {
                key: SettingKey::ScreenBrightnessMode.to_string(),
                value,
            }),
        }
    }
}

type Observer = Box<dyn Fn(SettingKey) + Send + Sync>;

/// Screen settings facade over a settings store.
pub struct ScreenSettings<S: SettingsStore> {
    store: S,
    observers: Vec<Observer>,
}

impl<S: SettingsStore> ScreenSettings<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            observers: Vec::new(),
        }
    }

    /// Registers `observer` to be called with each key after it is written.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(SettingKey) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current brightness, 0–255.
    pub fn brightness(&self) -> u8 {
        let raw = self.get_or_default(SettingKey::ScreenBrightness);
        u8::try_from(raw).unwrap_or_else(|_| {
            warn!(
                "{}; using 0",
                SettingsError::InvalidValue {
                    key: SettingKey::ScreenBrightness.to_string(),
                    value: raw,
                }
            );
            0
        })
    }

    pub fn brightness_mode(&self) -> BrightnessMode {
        let raw = self.get_or_default(SettingKey::ScreenBrightnessMode);
        BrightnessMode::try_from(raw).unwrap_or_else(|e| {
            warn!("{}; using manual", e);
            BrightnessMode::Manual
        })
    }

    /// Screen-off timeout in minutes.
    pub fn screen_off_timeout(&self) -> u32 {
        let raw = self.get_or_default(SettingKey::ScreenOffTimeout);
        u32::try_from(raw).unwrap_or_else(|_| {
            warn!(
                "{}; using 0",
                SettingsError::InvalidValue {
                    key: SettingKey::ScreenOffTimeout.to_string(),
                    value: raw,
                }
            );
            0
        })
    }

    /// Switches to manual mode, then stores `value` as the brightness.
    pub fn set_brightness(&mut self, value: u8) -> Result<(), SettingsError> {
        self.put(SettingKey::ScreenBrightnessMode, BrightnessMode::Manual as i64)?;
        self.put(SettingKey::ScreenBrightness, i64::from(value))
    }

    pub fn set_brightness_mode(&mut self, mode: BrightnessMode) -> Result<(), SettingsError> {
        self.put(SettingKey::ScreenBrightnessMode, mode as i64)
    }

    pub fn set_screen_off_timeout(&mut self, minutes: u32) -> Result<(), SettingsError> {
        self.put(SettingKey::ScreenOffTimeout, i64::from(minutes))
    }

    fn get_or_default(&self, key: SettingKey) -> i64 {
        match self.store.get_int(key) {
            Ok(value) => value,
            Err(SettingsError::NotFound(_)) => {
                warn!("Setting '{}' not found; using 0", key);
                0
            }
            Err(e) => {
                warn!("Failed to read setting '{}': {}; using 0", key, e);
                0
            }
        }
    }

    fn put(&mut self, key: SettingKey, value: i64) -> Result<(), SettingsError> {
        self.store.put_int(key, value)?;
        debug!("Setting '{}' changed to {}", key, value);
        for observer in &self.observers {
            observer(key);
        }
        Ok(())
    }
}
