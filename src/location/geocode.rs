// SPDX-License-Identifier: MPL-2.0
//! Reverse geocoding: coordinate to placemark via Nominatim (OpenStreetMap).
//! Free and keyless, but it requires an identifying user agent.

use super::{Coordinate, Placemark};
use serde::Deserialize;

pub const USER_AGENT: &str = concat!("IcedWeather/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    state: Option<String>,
    county: Option<String>,
}

impl From<NominatimAddress> for Placemark {
    fn from(addr: NominatimAddress) -> Self {
        // Prefer city > town > village > municipality for the locality
        let locality = addr
            .city
            .or(addr.town)
            .or(addr.village)
            .or(addr.municipality);
        Placemark {
            locality,
            administrative_area: addr.state.or(addr.county),
        }
    }
}

/// Geocoder endpoint plus the HTTP client used to reach it.
#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    http: reqwest::Client,
    base_url: String,
}

impl ReverseGeocoder {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Owned lookup future for `coordinate`, ready to hand to the runtime.
    pub fn lookup(
        &self,
        coordinate: Coordinate,
    ) -> impl std::future::Future<Output = Option<Placemark>> + Send + 'static {
        let http = self.http.clone();
        let base_url = self.base_url.clone();
        async move { reverse_geocode(&http, &base_url, coordinate).await }
    }
}

/// Looks up the placemark for `coordinate`.
///
/// Returns `None` on any failure; the city line is purely cosmetic.
pub async fn reverse_geocode(
    http: &reqwest::Client,
    base_url: &str,
    coordinate: Coordinate,
) -> Option<Placemark> {
    let response = match http
        .get(base_url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .query(&[
            ("lat", coordinate.latitude.to_string()),
            ("lon", coordinate.longitude.to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("zoom", "10".to_string()),
        ])
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Reverse geocode request failed: {}", e);
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!("Reverse geocode returned status {}", response.status());
        return None;
    }

    let body: NominatimResponse = match response.json().await {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!("Reverse geocode parse error: {}", e);
            return None;
        }
    };

    let placemark = Placemark::from(body.address?);
    tracing::info!("Reverse geocoded to: {}", placemark.display_text());
    Some(placemark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_app_and_version() {
        assert_eq!(
            USER_AGENT,
            format!("IcedWeather/{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn address_prefers_city_over_town() {
        let body: NominatimResponse = serde_json::from_str(
            r#"{"address": {"city": "Seattle", "town": "Ballard", "state": "Washington"}}"#,
        )
        .unwrap();
        let placemark = Placemark::from(body.address.unwrap());
        assert_eq!(placemark.locality.as_deref(), Some("Seattle"));
        assert_eq!(placemark.administrative_area.as_deref(), Some("Washington"));
    }

    #[test]
    fn village_and_county_fill_in_missing_fields() {
        let body: NominatimResponse = serde_json::from_str(
            r#"{"address": {"village": "Grasmere", "county": "Cumbria"}}"#,
        )
        .unwrap();
        let placemark = Placemark::from(body.address.unwrap());
        assert_eq!(placemark.display_text(), "Grasmere, Cumbria");
    }

    #[tokio::test]
    async fn unreachable_geocoder_yields_none() {
        let http = reqwest::Client::new();
        let placemark =
            reverse_geocode(&http, "http://127.0.0.1:9/reverse", Coordinate::new(0.0, 0.0)).await;
        assert!(placemark.is_none());
    }

    #[tokio::test]
    async fn geocoder_lookup_owns_its_inputs() {
        let geocoder = ReverseGeocoder::new(reqwest::Client::new(), "http://127.0.0.1:9/reverse");
        let lookup = geocoder.lookup(Coordinate::new(51.5, -0.12));
        drop(geocoder);
        assert!(lookup.await.is_none());
    }
}
