//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution. The key layout
//! and the alternatives table are compiled in and not configurable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::CONFIG_DIR_NAME;

/// Shortest accepted long-press threshold in milliseconds.
pub const MIN_LONG_PRESS_MS: u64 = 100;
/// Longest accepted long-press threshold in milliseconds.
pub const MAX_LONG_PRESS_MS: u64 = 2000;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Show the key help line under the keyboard
    #[serde(default = "default_show_help")]
    pub show_help: bool,
}

const fn default_show_help() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            show_help: default_show_help(),
        }
    }
}

/// Gesture recognition settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// How long a press must be held before it becomes a long press
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
}

/// Default long-press threshold (300ms)
const fn default_long_press_ms() -> u64 {
    300
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            long_press_ms: default_long_press_ms(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/AzTurkKeyboard/config.toml`
/// - macOS: `~/Library/Application Support/AzTurkKeyboard/config.toml`
/// - Windows: `%APPDATA%\AzTurkKeyboard\config.toml`
///
/// # Validation
///
/// - `long_press_ms` must be within 100..=2000
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Gesture settings
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if it is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path)
            .context(format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let ms = self.input.long_press_ms;
        if !(MIN_LONG_PRESS_MS..=MAX_LONG_PRESS_MS).contains(&ms) {
            anyhow::bail!(
                "long_press_ms must be between {} and {} (got {})",
                MIN_LONG_PRESS_MS,
                MAX_LONG_PRESS_MS,
                ms
            );
        }

        Ok(())
    }

    /// Sets the long-press threshold with validation.
    pub fn set_long_press_ms(&mut self, ms: u64) -> Result<()> {
        let previous = self.input.long_press_ms;
        self.input.long_press_ms = ms;
        if let Err(e) = self.validate() {
            self.input.long_press_ms = previous;
            return Err(e);
        }
        Ok(())
    }
}
