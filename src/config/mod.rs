// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! tuning values to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[navigation]` - Swipe threshold, drag resistance, settle timing and axis
//! - `[preload]` - Site-wide image warm-up scheduling
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.navigation.swipe_threshold_px = Some(120.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::ui::{DragResistance, SettleDuration, SwipeThreshold};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Pointer coordinate that drives panel navigation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SwipeAxis {
    #[default]
    Horizontal,
    Vertical,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Gesture navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Minimum absolute swipe distance in pixels that commits a panel change.
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Damping factor in `(0, 1]` applied while dragging.
    #[serde(
        default = "default_drag_resistance",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_resistance: Option<f32>,

    /// Commit and snap-back animation time in milliseconds.
    #[serde(
        default = "default_settle_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub settle_duration_ms: Option<u64>,

    /// Which pointer coordinate is tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<SwipeAxis>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold_px(),
            drag_resistance: default_drag_resistance(),
            settle_duration_ms: default_settle_duration_ms(),
            axis: Some(SwipeAxis::default()),
        }
    }
}

impl NavigationConfig {
    /// Validated threshold, clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.swipe_threshold_px
            .map(SwipeThreshold::new)
            .unwrap_or_default()
    }

    /// Validated resistance, clamped to `(0, 1]`.
    #[must_use]
    pub fn drag_resistance(&self) -> DragResistance {
        self.drag_resistance
            .map(DragResistance::new)
            .unwrap_or_default()
    }

    /// Validated settle duration.
    #[must_use]
    pub fn settle_duration(&self) -> SettleDuration {
        self.settle_duration_ms
            .map(SettleDuration::from_millis)
            .unwrap_or_default()
    }

    /// Configured axis, horizontal when unset.
    #[must_use]
    pub fn axis(&self) -> SwipeAxis {
        self.axis.unwrap_or_default()
    }
}

/// Site-wide image warm-up settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreloadConfig {
    /// Whether assets are warmed at all.
    #[serde(default = "default_preload_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Upper bound on the wait for the host to go idle (milliseconds).
    #[serde(
        default = "default_idle_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub idle_timeout_ms: Option<u64>,

    /// Delay used when no idle hook exists (milliseconds).
    #[serde(
        default = "default_fallback_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fallback_delay_ms: Option<u64>,

    /// Directory that relative asset addresses are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_root: Option<PathBuf>,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            enabled: default_preload_enabled(),
            idle_timeout_ms: default_idle_timeout_ms(),
            fallback_delay_ms: default_fallback_delay_ms(),
            assets_root: None,
        }
    }
}

impl PreloadConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms.unwrap_or(DEFAULT_IDLE_TIMEOUT_MS))
    }

    #[must_use]
    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms.unwrap_or(DEFAULT_FALLBACK_DELAY_MS))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Gesture navigation settings.
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Image warm-up settings.
    #[serde(default)]
    pub preload: PreloadConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_drag_resistance() -> Option<f32> {
    Some(DEFAULT_DRAG_RESISTANCE)
}

fn default_settle_duration_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_DURATION_MS)
}

fn default_preload_enabled() -> Option<bool> {
    Some(true)
}

fn default_idle_timeout_ms() -> Option<u64> {
    Some(DEFAULT_IDLE_TIMEOUT_MS)
}

fn default_fallback_delay_ms() -> Option<u64> {
    Some(DEFAULT_FALLBACK_DELAY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
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
                    tracing::warn!(path = %path.display(), error = %err, "using default config");
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
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
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            navigation: NavigationConfig {
                swipe_threshold_px: Some(120.0),
                drag_resistance: Some(0.5),
                settle_duration_ms: Some(450),
                axis: Some(SwipeAxis::Vertical),
            },
            preload: PreloadConfig {
                enabled: Some(false),
                idle_timeout_ms: Some(900),
                fallback_delay_ms: Some(20),
                assets_root: Some(PathBuf::from("public")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[navigation\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_section_fills_missing_fields_with_defaults() {
        let config: Config = toml::from_str("[navigation]\nswipe_threshold_px = 50.0\n")
            .expect("partial config should parse");

        assert_eq!(config.navigation.swipe_threshold_px, Some(50.0));
        assert_eq!(
            config.navigation.drag_resistance,
            Some(DEFAULT_DRAG_RESISTANCE)
        );
        assert_eq!(config.preload, PreloadConfig::default());
    }

    #[test]
    fn axis_uses_kebab_case() {
        let config: Config =
            toml::from_str("[navigation]\naxis = \"vertical\"\n").expect("axis should parse");
        assert_eq!(config.navigation.axis(), SwipeAxis::Vertical);
    }

    #[test]
    fn out_of_range_values_are_clamped_by_accessors() {
        let navigation = NavigationConfig {
            swipe_threshold_px: Some(-5.0),
            drag_resistance: Some(4.0),
            settle_duration_ms: Some(u64::MAX),
            axis: None,
        };

        assert_eq!(navigation.swipe_threshold().px(), MIN_SWIPE_THRESHOLD_PX);
        assert_eq!(navigation.drag_resistance().value(), MAX_DRAG_RESISTANCE);
        assert_eq!(
            navigation.settle_duration().as_millis(),
            MAX_SETTLE_DURATION_MS
        );
        assert_eq!(navigation.axis(), SwipeAxis::Horizontal);
    }

    #[test]
    fn preload_durations_fall_back_to_defaults() {
        let preload = PreloadConfig {
            enabled: None,
            idle_timeout_ms: None,
            fallback_delay_ms: None,
            assets_root: None,
        };
        assert!(preload.is_enabled());
        assert_eq!(
            preload.idle_timeout(),
            Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS)
        );
        assert_eq!(
            preload.fallback_delay(),
            Duration::from_millis(DEFAULT_FALLBACK_DELAY_MS)
        );
    }
}
