// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::forecast::{ForecastResult, RequestId};
use crate::location::{AuthorizationState, Coordinate, Placemark};
use crate::ui::permission;
use crate::ui::weather;

/// Top-level messages consumed by `App::update`. Screen messages are
/// forwarded; the rest carry results of background work back to the UI loop.
#[derive(Debug, Clone)]
pub enum Message {
    Permission(permission::Message),
    Weather(weather::Message),
    /// The consent dialog was answered.
    AuthorizationResolved(AuthorizationState),
    /// The platform delivered a position.
    LocationUpdated(Coordinate),
    /// The platform could not determine a position.
    LocationFailed(Error),
    /// The platform update stream finished.
    LocationUpdatesEnded,
    /// Output of the location listener: fetch the forecast for this position.
    FetchForecast(Coordinate),
    ForecastFetched {
        request: RequestId,
        result: Result<ForecastResult, Error>,
    },
    PlacemarkResolved {
        coordinate: Coordinate,
        placemark: Option<Placemark>,
    },
    /// Keyboard shortcut `N`.
    ToggleNight,
    /// Keyboard shortcut `R`.
    RetryForecast,
}

/// Runtime flags from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Fixed latitude; used together with `longitude`.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Start with the night sky.
    pub night: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_WEATHER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Forecast endpoint override.
    pub forecast_url: Option<String>,
}
