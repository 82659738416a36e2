//! # aloefs Settings Store Implementations
//!
//! File: cli/src/common/settings/store.rs
//!
//! ## Overview
//!
//! Two `SettingsStore` implementations:
//! - **`MemorySettings`**: a plain map, for tests and embedding.
//! - **`FileSettings`**: a flat TOML table on disk, e.g.
//!
//! ```toml
//! screen-brightness = 128
//! screen-brightness-mode = 0
//! screen-off-timeout = 5
//! ```
//!
//! `FileSettings` keeps nothing in memory: every call re-reads the file, and
//! every put rewrites it, through the propagating text I/O operations.
//!
use super::{SettingKey, SettingsStore};
use crate::common::fs::dir::try_ensure_dir;
use crate::common::fs::io::{read_all_scoped, write_scoped, LineEndings, WriteMode};
use crate::core::error::SettingsError;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::debug;

/// In-memory settings store.
#[derive(Debug, Default, Clone)]
pub struct MemorySettings {
    values: HashMap<SettingKey, i64>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get_int(&self, key: SettingKey) -> Result<i64, SettingsError> {
        self.values
            .get(&key)
            .copied()
            .ok_or_else(|| SettingsError::NotFound(key.to_string()))
    }

    fn put_int(&mut self, key: SettingKey, value: i64) -> Result<(), SettingsError> {
        self.values.insert(key, value);
        Ok(())
    }
}

/// Settings store backed by a TOML file.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    /// The file need not exist yet; it is created on the first put.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, i64>, SettingsError> {
        match read_all_scoped(&self.path, LineEndings::Preserve) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.is_not_found() => {
                debug!("Settings file {:?} does not exist yet", self.path);
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl SettingsStore for FileSettings {
    fn get_int(&self, key: SettingKey) -> Result<i64, SettingsError> {
        self.load()?
            .get(key.as_str())
            .copied()
            .ok_or_else(|| SettingsError::NotFound(key.to_string()))
    }

    fn put_int(&mut self, key: SettingKey, value: i64) -> Result<(), SettingsError> {
        let mut table = self.load()?;
        table.insert(key.as_str().to_string(), value);
        let content = toml::to_string(&table)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            try_ensure_dir(parent)?;
        }
        write_scoped(&self.path, &content, WriteMode::Overwrite)?;
        debug!("Stored {} = {} in {:?}", key, value, self.path);
        Ok(())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_memory_settings_get_put() {
        let mut store = MemorySettings::new();
        assert!(matches!(
            store.get_int(SettingKey::ScreenBrightness),
            Err(SettingsError::NotFound(_))
        ));
        store.put_int(SettingKey::ScreenBrightness, 42).unwrap();
        assert_eq!(store.get_int(SettingKey::ScreenBrightness).unwrap(), 42);
    }

    #[test]
    fn test_file_settings_persist_between_instances() -> Result<()> {
        let base = tempdir()?;
        let path = base.path().join("nested/settings.toml");

        let mut store = FileSettings::new(&path);
        store.put_int(SettingKey::ScreenOffTimeout, 5)?;
        store.put_int(SettingKey::ScreenBrightness, 200)?;

        let reopened = FileSettings::new(&path);
        assert_eq!(reopened.get_int(SettingKey::ScreenOffTimeout)?, 5);
        assert_eq!(reopened.get_int(SettingKey::ScreenBrightness)?, 200);
        assert!(fs::read_to_string(&path)?.contains("screen-brightness = 200"));
        Ok(())
    }

    #[test]
    fn test_file_settings_missing_file_is_not_found_key() -> Result<()> {
        let base = tempdir()?;
        let store = FileSettings::new(base.path().join("absent.toml"));
        assert!(matches!(
            store.get_int(SettingKey::ScreenBrightnessMode),
            Err(SettingsError::NotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn test_file_settings_rejects_malformed_file() -> Result<()> {
        let base = tempdir()?;
        let path = base.path().join("bad.toml");
        fs::write(&path, "screen-brightness = \"bright\"")?;

        let store = FileSettings::new(&path);
        assert!(matches!(
            store.get_int(SettingKey::ScreenBrightness),
            Err(SettingsError::Parse { .. })
        ));
        Ok(())
    }
}
