// SPDX-License-Identifier: MPL-2.0
//! Desktop implementation of the location capability.
//!
//! Desktops have no system-wide location permission, so consent is asked
//! with a native yes/no dialog and the position comes either from a fixed
//! coordinate (config or CLI) or from an IP geolocation lookup.

use super::{AuthorizationState, Coordinate, LocationPlatform};
use crate::app::config::LocationConfig;
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::stream::{self, BoxStream};
use futures_util::{FutureExt, StreamExt};
use serde::Deserialize;
use std::time::Duration;

/// Where coordinates come from.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateSource {
    Fixed(Coordinate),
    IpLookup { url: String },
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct DesktopPlatform {
    initial: AuthorizationState,
    source: CoordinateSource,
    refresh_interval: Option<Duration>,
    http: reqwest::Client,
}

impl DesktopPlatform {
    pub fn new(
        initial: AuthorizationState,
        source: CoordinateSource,
        refresh_interval: Option<Duration>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            initial,
            source,
            refresh_interval,
            http,
        }
    }

    /// Builds the platform from the `[location]` config section.
    pub fn from_config(config: &LocationConfig, http: reqwest::Client) -> Self {
        let initial = if config.enabled {
            AuthorizationState::from_platform_value(&config.authorization)
        } else {
            AuthorizationState::Restricted
        };

        let source = match config.fixed_coordinate() {
            Some(coordinate) => CoordinateSource::Fixed(coordinate),
            None => {
                if let (Some(latitude), Some(longitude)) = (config.latitude, config.longitude) {
                    tracing::warn!(
                        latitude,
                        longitude,
                        "configured coordinate is out of range; using IP lookup"
                    );
                }
                CoordinateSource::IpLookup {
                    url: config.ip_lookup_url.clone(),
                }
            }
        };

        let refresh_interval = match config.refresh_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Self::new(initial, source, refresh_interval, http)
    }

    pub fn source(&self) -> &CoordinateSource {
        &self.source
    }
}

/// Resolves the current position through an IP geolocation service.
pub async fn lookup_ip_location(http: &reqwest::Client, url: &str) -> Result<Coordinate> {
    let response = http.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::HttpStatus(response.status().as_u16()));
    }
    let body: IpLookupResponse = response.json().await?;
    match (body.latitude, body.longitude) {
        (Some(latitude), Some(longitude)) => {
            let coordinate = Coordinate::new(latitude, longitude);
            if coordinate.is_valid() {
                Ok(coordinate)
            } else {
                Err(Error::Location(format!(
                    "lookup returned out-of-range coordinate {coordinate}"
                )))
            }
        }
        _ => Err(Error::Location(
            "lookup response has no coordinates".to_string(),
        )),
    }
}

async fn resolve(http: &reqwest::Client, source: &CoordinateSource) -> Result<Coordinate> {
    match source {
        CoordinateSource::Fixed(coordinate) => Ok(*coordinate),
        CoordinateSource::IpLookup { url } => {
            let result = lookup_ip_location(http, url).await;
            match &result {
                Ok(coordinate) => tracing::info!(%coordinate, "resolved location from IP lookup"),
                Err(err) => tracing::warn!("IP location lookup failed: {}", err),
            }
            result
        }
    }
}

impl LocationPlatform for DesktopPlatform {
    fn initial_authorization(&self) -> AuthorizationState {
        self.initial
    }

    fn request_authorization(&self) -> BoxFuture<'static, AuthorizationState> {
        async move {
            let answer = rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Info)
                .set_title("Location access")
                .set_description(
                    "IcedWeather would like to use your location to show the local forecast.",
                )
                .set_buttons(rfd::MessageButtons::YesNo)
                .show()
                .await;

            match answer {
                rfd::MessageDialogResult::Yes | rfd::MessageDialogResult::Ok => {
                    AuthorizationState::AuthorizedWhenInUse
                }
                _ => AuthorizationState::Denied,
            }
        }
        .boxed()
    }

    fn location_updates(&self) -> BoxStream<'static, Result<Coordinate>> {
        let http = self.http.clone();
        let source = self.source.clone();

        // Fixed positions never move, so a single fix is enough.
        let interval = match (&source, self.refresh_interval) {
            (CoordinateSource::Fixed(_), _) | (_, None) => None,
            (_, Some(interval)) => Some(interval),
        };

        match interval {
            None => stream::once(async move { resolve(&http, &source).await }).boxed(),
            Some(interval) => stream::unfold(true, move |first| {
                let http = http.clone();
                let source = source.clone();
                async move {
                    if !first {
                        tokio::time::sleep(interval).await;
                    }
                    Some((resolve(&http, &source).await, false))
                }
            })
            .boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::LocationConfig;

    fn config() -> LocationConfig {
        LocationConfig::default()
    }

    #[test]
    fn disabled_location_is_restricted() {
        let config = LocationConfig {
            enabled: false,
            ..config()
        };
        let platform = DesktopPlatform::from_config(&config, reqwest::Client::new());
        assert_eq!(
            platform.initial_authorization(),
            AuthorizationState::Restricted
        );
    }

    #[test]
    fn default_config_starts_undetermined_with_ip_lookup() {
        let platform = DesktopPlatform::from_config(&config(), reqwest::Client::new());
        assert_eq!(
            platform.initial_authorization(),
            AuthorizationState::NotDetermined
        );
        assert!(matches!(
            platform.source(),
            CoordinateSource::IpLookup { .. }
        ));
    }

    #[test]
    fn unknown_authorization_string_maps_to_unknown() {
        let config = LocationConfig {
            authorization: "provisional".into(),
            ..config()
        };
        let platform = DesktopPlatform::from_config(&config, reqwest::Client::new());
        assert_eq!(
            platform.initial_authorization(),
            AuthorizationState::Unknown
        );
    }

    #[tokio::test]
    async fn fixed_source_yields_a_single_fix() {
        let config = LocationConfig {
            latitude: Some(51.5),
            longitude: Some(-0.12),
            refresh_interval_secs: 60,
            ..config()
        };
        let platform = DesktopPlatform::from_config(&config, reqwest::Client::new());
        let updates: Vec<Result<Coordinate>> = platform.location_updates().collect().await;
        assert_eq!(updates, vec![Ok(Coordinate::new(51.5, -0.12))]);
    }

    #[tokio::test]
    async fn failed_lookup_is_reported_as_an_error_item() {
        let platform = DesktopPlatform::new(
            AuthorizationState::AuthorizedWhenInUse,
            CoordinateSource::IpLookup {
                url: "http://127.0.0.1:9/json/".into(),
            },
            None,
            reqwest::Client::new(),
        );

        let updates: Vec<Result<Coordinate>> = platform.location_updates().collect().await;

        assert_eq!(updates.len(), 1);
        let err = updates[0].clone().expect_err("nothing listens on port 9");
        assert!(err.is_retryable());
    }

    #[test]
    fn out_of_range_configured_coordinate_falls_back_to_ip_lookup() {
        let config = LocationConfig {
            latitude: Some(91.0),
            longitude: Some(0.0),
            ..config()
        };
        let platform = DesktopPlatform::from_config(&config, reqwest::Client::new());
        assert!(matches!(
            platform.source(),
            CoordinateSource::IpLookup { .. }
        ));
    }
}
