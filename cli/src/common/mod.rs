//! # aloefs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Root of the reusable library code. Command handlers (`commands::`) are thin
//! wrappers over these modules.
//!
//! ## Architecture
//!
//! - **`fs`**: path construction, directory management, text file I/O, app files area.
//! - **`settings`**: injected key-value settings store and the screen settings facade.
//! - **`launch`**: fire-and-forget launching of external actions (view, call, dial).
//!
//! ```rust,ignore
//! use crate::common::{fs, launch, settings};
//!
//! fs::dir::ensure_dir(Path::new("./logs"));
//! let mut screen = settings::ScreenSettings::new(settings::MemorySettings::new());
//! screen.set_brightness(128)?;
//! ```
//!

/// Filesystem utilities (paths, directories, text I/O, app files).
pub mod fs;
/// Launching external actions through an injected launcher.
pub mod launch;
/// Settings store abstraction and screen settings.
pub mod settings;
