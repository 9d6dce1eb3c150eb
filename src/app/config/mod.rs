// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[forecast]` - Forecast endpoint and request timeout
//! - `[location]` - Consent policy, coordinate source and reverse geocoding
//! - `[display]` - Initial day/night appearance
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `ICED_WEATHER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_weather::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("forecast endpoint: {}", config.forecast.endpoint);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::location::Coordinate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Forecast service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastConfig {
    /// Base URL of the daily forecast endpoint.
    #[serde(default = "default_forecast_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_forecast_timeout_secs")]
    pub timeout_secs: u64,
}

impl ForecastConfig {
    /// Timeout clamped to the supported range.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .clamp(MIN_FORECAST_TIMEOUT_SECS, MAX_FORECAST_TIMEOUT_SECS),
        )
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            endpoint: default_forecast_endpoint(),
            timeout_secs: DEFAULT_FORECAST_TIMEOUT_SECS,
        }
    }
}

/// Location settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    /// When false, location use is restricted for the whole session.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Authorization reported at startup (`not-determined`, `when-in-use`,
    /// `always`, `denied`, `restricted`).
    #[serde(default = "default_authorization")]
    pub authorization: String,

    /// Fixed latitude; used together with `longitude`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Fixed longitude; used together with `latitude`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// IP geolocation service queried when no fixed coordinate is set.
    #[serde(default = "default_ip_lookup_url")]
    pub ip_lookup_url: String,

    /// Seconds between IP lookups; 0 for a single fix.
    #[serde(
        default = "default_refresh_interval_secs",
        deserialize_with = "deserialize_refresh_interval"
    )]
    pub refresh_interval_secs: u64,

    /// Show the city name above the forecast.
    #[serde(default = "default_true")]
    pub reverse_geocode: bool,

    /// Nominatim-compatible reverse geocoding endpoint.
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,
}

impl LocationConfig {
    /// The configured fixed coordinate, if both halves are present and valid.
    pub fn fixed_coordinate(&self) -> Option<Coordinate> {
        let coordinate = Coordinate::new(self.latitude?, self.longitude?);
        coordinate.is_valid().then_some(coordinate)
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            authorization: default_authorization(),
            latitude: None,
            longitude: None,
            ip_lookup_url: default_ip_lookup_url(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            reverse_geocode: true,
            geocoder_url: default_geocoder_url(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DisplayConfig {
    /// Start with the night background.
    #[serde(default)]
    pub start_at_night: bool,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub forecast: ForecastConfig,

    #[serde(default)]
    pub location: LocationConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_forecast_endpoint() -> String {
    DEFAULT_FORECAST_ENDPOINT.to_string()
}

fn default_forecast_timeout_secs() -> u64 {
    DEFAULT_FORECAST_TIMEOUT_SECS
}

fn default_authorization() -> String {
    DEFAULT_AUTHORIZATION.to_string()
}

fn default_ip_lookup_url() -> String {
    DEFAULT_IP_LOOKUP_URL.to_string()
}

fn default_geocoder_url() -> String {
    DEFAULT_GEOCODER_URL.to_string()
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

/// Non-zero intervals below the minimum are raised to it.
fn deserialize_refresh_interval<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = u64::deserialize(deserializer)?;
    Ok(match raw {
        0 => 0,
        secs => secs.max(MIN_REFRESH_INTERVAL_SECS),
    })
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
                    return (
                        Config::default(),
                        Some(format!("could not read {}: {}", path.display(), err)),
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
