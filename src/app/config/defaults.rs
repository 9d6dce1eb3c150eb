// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

// ==========================================================================
// Forecast Defaults
// ==========================================================================

pub use crate::forecast::DEFAULT_ENDPOINT as DEFAULT_FORECAST_ENDPOINT;

/// Default HTTP timeout for forecast requests (in seconds).
pub const DEFAULT_FORECAST_TIMEOUT_SECS: u64 = 10;

/// Minimum accepted forecast timeout (in seconds).
pub const MIN_FORECAST_TIMEOUT_SECS: u64 = 1;

/// Maximum accepted forecast timeout (in seconds).
pub const MAX_FORECAST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Location Defaults
// ==========================================================================

/// IP geolocation service used when no fixed coordinate is configured.
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://ipapi.co/json/";

/// Nominatim reverse geocoding endpoint.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Authorization reported before the user is asked.
pub const DEFAULT_AUTHORIZATION: &str = "not-determined";

/// 0 means a single fix per session.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 0;

/// Lower bound for periodic lookups so public services are not hammered.
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 300;

const _: () = {
    assert!(MIN_FORECAST_TIMEOUT_SECS <= DEFAULT_FORECAST_TIMEOUT_SECS);
    assert!(DEFAULT_FORECAST_TIMEOUT_SECS <= MAX_FORECAST_TIMEOUT_SECS);
};
