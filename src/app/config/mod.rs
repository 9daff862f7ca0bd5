// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo's configuration, loading and saving it
//! to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notice]` - Default notice duration
//! - `[animation]` - Entry and exit transition lengths
//! - `[layout]` - Status bar height and compact-landscape mode
//! - `[queue]` - Optional pending-notice cap
//! - `[logging]` - Default log filter
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_NOTICE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_notice::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.queue.max_pending = Some(8);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::coordinator::CoordinatorSettings;
use crate::domain::notice::{duration_bounds, BannerMetrics};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Notice defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoticeConfig {
    /// Initial value of the demo duration slider, in seconds.
    #[serde(
        default = "default_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_secs: Option<f64>,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration_secs(),
        }
    }
}

/// Transition lengths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Slide-in length in milliseconds.
    #[serde(default = "default_entry_ms", skip_serializing_if = "Option::is_none")]
    pub entry_ms: Option<u64>,

    /// Slide-out length in milliseconds.
    #[serde(default = "default_exit_ms", skip_serializing_if = "Option::is_none")]
    pub exit_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            entry_ms: default_entry_ms(),
            exit_ms: default_exit_ms(),
        }
    }
}

/// Banner geometry inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Height of the system status bar in logical pixels.
    #[serde(
        default = "default_status_bar_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_bar_height: Option<f32>,

    /// Use the shorter compact-landscape bar height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compact_landscape: Option<bool>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            status_bar_height: default_status_bar_height(),
            compact_landscape: Some(false),
        }
    }
}

/// Queue limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QueueConfig {
    /// Maximum number of pending notices. Absent means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pending: Option<usize>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG` and `--log-level`.
    #[serde(default = "default_log_level", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notice: NoticeConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub queue: QueueConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Coordinator settings with out-of-range values clamped.
    #[must_use]
    pub fn coordinator_settings(&self) -> CoordinatorSettings {
        let entry = self
            .animation
            .entry_ms
            .unwrap_or(DEFAULT_ENTRY_MS)
            .min(MAX_TRANSITION_MS);
        let exit = self
            .animation
            .exit_ms
            .unwrap_or(DEFAULT_EXIT_MS)
            .min(MAX_TRANSITION_MS);
        CoordinatorSettings::default()
            .with_durations(Duration::from_millis(entry), Duration::from_millis(exit))
            .with_max_pending(self.queue.max_pending)
    }

    /// Banner metrics with the status bar height clamped.
    #[must_use]
    pub fn banner_metrics(&self) -> BannerMetrics {
        let status_bar = self
            .layout
            .status_bar_height
            .filter(|height| height.is_finite())
            .unwrap_or(DEFAULT_STATUS_BAR_HEIGHT)
            .clamp(0.0, MAX_STATUS_BAR_HEIGHT);
        BannerMetrics::new(status_bar, self.layout.compact_landscape.unwrap_or(false))
    }

    /// Default notice duration, clamped to the accepted range.
    #[must_use]
    pub fn default_duration_secs(&self) -> f64 {
        let secs = self
            .notice
            .default_duration_secs
            .filter(|secs| secs.is_finite())
            .unwrap_or(DEFAULT_NOTICE_DURATION_SECS);
        secs.clamp(duration_bounds::MIN_SECS, duration_bounds::MAX_SECS)
    }

    #[must_use]
    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_secs() -> Option<f64> {
    Some(DEFAULT_NOTICE_DURATION_SECS)
}

fn default_entry_ms() -> Option<u64> {
    Some(DEFAULT_ENTRY_MS)
}

fn default_exit_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_MS)
}

fn default_status_bar_height() -> Option<f32> {
    Some(DEFAULT_STATUS_BAR_HEIGHT)
}

fn default_log_level() -> Option<String> {
    Some(DEFAULT_LOG_LEVEL.to_string())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config load failed");
                    return (
                        Config::default(),
                        Some(format!(
                            "Could not read {}, using defaults ({err})",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
