// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[camera]` - Transition timings, focus/home views, zoom bounds, overlap policy
//! - `[clock]` - Time zone of the header clock
//! - `[data]` - Optional facility catalog file
//!
//! Every key is optional. Missing or out-of-range values fall back to the
//! constants in [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FACILITY_MAP_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use facility_map::app::config;
//!
//! let (config, _warning) = config::load();
//! let timings = config.camera.timings();
//! assert!(timings.translate.as_millis() > 0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::camera::{CameraState, GeoPoint, OverlapPolicy, PhaseTimings, Zoom};
use crate::error::{Error, Result};
use crate::selection::FocusPolicy;
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
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Camera and transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Duration of the pan phase in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_duration_ms: Option<u64>,

    /// Duration of the zoom phase in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_duration_ms: Option<u64>,

    /// Zoom applied when a facility is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_zoom: Option<f64>,

    /// Zoom of the world view restored by reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_zoom: Option<f64>,

    /// Center `[lon, lat]` of the world view restored by reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_center: Option<GeoPoint>,

    /// Zoom at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_zoom: Option<f64>,

    /// Center `[lon, lat]` at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_center: Option<GeoPoint>,

    /// Smallest zoom reachable with the scroll wheel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,

    /// Largest zoom reachable with the scroll wheel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,

    /// What happens to a running transition when a new one starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap: Option<OverlapPolicy>,

    /// Drive animations from a fixed-rate timer with this interval instead
    /// of the display refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_interval_ms: Option<u64>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            translate_duration_ms: Some(DEFAULT_TRANSLATE_DURATION_MS),
            scale_duration_ms: Some(DEFAULT_SCALE_DURATION_MS),
            focus_zoom: Some(DEFAULT_FOCUS_ZOOM),
            home_zoom: Some(DEFAULT_HOME_ZOOM),
            home_center: Some(DEFAULT_HOME_CENTER.into()),
            initial_zoom: Some(DEFAULT_INITIAL_ZOOM),
            initial_center: Some(DEFAULT_INITIAL_CENTER.into()),
            min_zoom: Some(DEFAULT_MIN_ZOOM),
            max_zoom: Some(DEFAULT_MAX_ZOOM),
            overlap: Some(OverlapPolicy::default()),
            frame_interval_ms: None,
        }
    }
}

/// Keeps a zoom value only if it is usable, otherwise returns the default.
fn positive_or(value: Option<f64>, default: f64) -> f64 {
    value
        .filter(|zoom| zoom.is_finite() && *zoom > 0.0)
        .unwrap_or(default)
}

fn finite_or(value: Option<GeoPoint>, default: [f64; 2]) -> GeoPoint {
    value
        .filter(|point| point.is_finite())
        .unwrap_or_else(|| default.into())
}

fn phase_duration(value: Option<u64>, default: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default).min(MAX_PHASE_DURATION_MS))
}

impl CameraConfig {
    #[must_use]
    pub fn timings(&self) -> PhaseTimings {
        PhaseTimings {
            translate: phase_duration(self.translate_duration_ms, DEFAULT_TRANSLATE_DURATION_MS),
            scale: phase_duration(self.scale_duration_ms, DEFAULT_SCALE_DURATION_MS),
        }
    }

    #[must_use]
    pub fn focus_policy(&self) -> FocusPolicy {
        FocusPolicy {
            focus_zoom: positive_or(self.focus_zoom, DEFAULT_FOCUS_ZOOM),
            home_center: finite_or(self.home_center, DEFAULT_HOME_CENTER),
            home_zoom: positive_or(self.home_zoom, DEFAULT_HOME_ZOOM),
        }
    }

    /// Returns `(min, max)` scroll zoom bounds, swapped if given in reverse.
    #[must_use]
    pub fn zoom_bounds(&self) -> (Zoom, Zoom) {
        let min = positive_or(self.min_zoom, DEFAULT_MIN_ZOOM);
        let max = positive_or(self.max_zoom, DEFAULT_MAX_ZOOM);
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        (
            Zoom::new(min).unwrap_or(Zoom::ONE),
            Zoom::new(max).unwrap_or(Zoom::ONE),
        )
    }

    #[must_use]
    pub fn initial_camera(&self) -> CameraState {
        let zoom = positive_or(self.initial_zoom, DEFAULT_INITIAL_ZOOM);
        CameraState::new(
            finite_or(self.initial_center, DEFAULT_INITIAL_CENTER),
            Zoom::new(zoom).unwrap_or(Zoom::ONE),
        )
    }

    #[must_use]
    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.overlap.unwrap_or_default()
    }

    /// Fixed frame interval, if the timer fallback is configured.
    #[must_use]
    pub fn frame_interval(&self) -> Option<Duration> {
        self.frame_interval_ms
            .map(|ms| Duration::from_millis(ms.max(1)))
    }
}

/// Header clock settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockConfig {
    /// Hours east of UTC shown by the clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_hours: Option<i32>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: Some(DEFAULT_UTC_OFFSET_HOURS),
        }
    }
}

impl ClockConfig {
    #[must_use]
    pub fn utc_offset_hours(&self) -> i32 {
        self.utc_offset_hours
            .unwrap_or(DEFAULT_UTC_OFFSET_HOURS)
            .clamp(MIN_UTC_OFFSET_HOURS, MAX_UTC_OFFSET_HOURS)
    }
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DataConfig {
    /// Facility catalog to use instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilities_path: Option<PathBuf>,
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
    pub camera: CameraConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub data: DataConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with an i18n key describing the problem.
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
                    tracing::warn!(path = %path.display(), error = %err, "config ignored");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            camera: CameraConfig {
                translate_duration_ms: Some(900),
                overlap: Some(OverlapPolicy::Overlap),
                home_center: Some(GeoPoint::new(10.0, 5.0)),
                ..CameraConfig::default()
            },
            clock: ClockConfig {
                utc_offset_hours: Some(1),
            },
            data: DataConfig::default(),
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

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_on_bad_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[camera]\nfocus_zoom = \"big\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_is_not_a_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_use_defaults() {
        let config: Config = toml::from_str("[camera]\nfocus_zoom = 6.0\n").unwrap();
        assert_eq!(config.camera.focus_policy().focus_zoom, 6.0);
        assert_eq!(config.camera.focus_policy().home_zoom, DEFAULT_HOME_ZOOM);
        assert_eq!(config.camera.timings(), PhaseTimings::default());
        assert_eq!(config.clock.utc_offset_hours(), DEFAULT_UTC_OFFSET_HOURS);
    }

    #[test]
    fn default_config_matches_dashboard_constants() {
        let camera = CameraConfig::default();
        assert_eq!(camera.timings().translate, Duration::from_millis(700));
        assert_eq!(camera.timings().scale, Duration::from_millis(600));
        let policy = camera.focus_policy();
        assert_eq!(policy.focus_zoom, 4.0);
        assert_eq!(policy.home_zoom, 1.2);
        assert_eq!(policy.home_center, GeoPoint::new(40.0, 0.0));
        assert_eq!(camera.initial_camera(), CameraState::default());
        assert_eq!(camera.overlap_policy(), OverlapPolicy::Supersede);
        assert!(camera.frame_interval().is_none());
    }

    #[test]
    fn unusable_values_fall_back() {
        let camera = CameraConfig {
            focus_zoom: Some(-2.0),
            home_zoom: Some(0.0),
            min_zoom: Some(8.0),
            max_zoom: Some(2.0),
            translate_duration_ms: Some(u64::MAX),
            ..CameraConfig::default()
        };
        assert_eq!(camera.focus_policy().focus_zoom, DEFAULT_FOCUS_ZOOM);
        assert_eq!(camera.focus_policy().home_zoom, DEFAULT_HOME_ZOOM);
        let (min, max) = camera.zoom_bounds();
        assert_eq!((min.value(), max.value()), (2.0, 8.0));
        assert_eq!(
            camera.timings().translate,
            Duration::from_millis(MAX_PHASE_DURATION_MS)
        );
    }

    #[test]
    fn overlap_policy_uses_kebab_case() {
        let config: Config = toml::from_str("[camera]\noverlap = \"overlap\"\n").unwrap();
        assert_eq!(config.camera.overlap_policy(), OverlapPolicy::Overlap);
    }

    #[test]
    fn utc_offset_is_clamped() {
        let clock = ClockConfig {
            utc_offset_hours: Some(40),
        };
        assert_eq!(clock.utc_offset_hours(), MAX_UTC_OFFSET_HOURS);
    }
}
