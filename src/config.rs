//! Configuration management for srtsync
//!
//! Settings live in `<config_dir>/srtsync/config.toml`. Every field has a
//! default, so a missing file or a partial file both load.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme::{Theme, THEME_NAMES};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub ui: UiConfig,
}

/// Playback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Milliseconds between time-update notifications
    pub time_update_interval_ms: u64,
    /// Seconds moved by the seek keys
    pub seek_step_secs: f64,
    /// Clock speed multiplier
    pub speed: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            time_update_interval_ms: 100,
            seek_step_secs: 5.0,
            speed: 1.0,
        }
    }
}

impl PlayerConfig {
    /// Interval between ticks, never below 10ms.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.time_update_interval_ms.max(10))
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name (default, classic, ocean)
    pub theme: String,
    /// Show segment end times in the transcript list
    pub show_end_times: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_end_times: false,
        }
    }
}

impl UiConfig {
    /// Resolve the theme name, falling back to the default theme.
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.theme, known = ?THEME_NAMES, "unknown theme, using default");
            Theme::default()
        })
    }
}

impl Config {
    /// Path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("srtsync").join("config.toml"))
    }

    /// Load config from the default location, or defaults if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize config to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
