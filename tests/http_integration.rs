// SPDX-License-Identifier: MPL-2.0
//! HTTP behavior of the forecast client, IP lookup and reverse geocoding
//! against a local mock server.

use iced_weather::error::{Error, FailureKind};
use iced_weather::forecast::ForecastClient;
use iced_weather::location::geocode::USER_AGENT;
use iced_weather::location::platform::lookup_ip_location;
use iced_weather::location::{
    AuthorizationState, Coordinate, CoordinateSource, DesktopPlatform, LocationPlatform,
    ReverseGeocoder,
};
use futures_util::StreamExt;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 51.5,
        "longitude": -0.12,
        "timezone": "GMT",
        "daily": {
            "time": ["2024-06-01", "2024-06-02", "2024-06-03", "2024-06-04", "2024-06-05", "2024-06-06"],
            "temperature_2m_max": [20.0, 27.0, 25.0, 18.0, 30.0, 22.0]
        }
    })
}

fn client_for(server: &MockServer) -> ForecastClient {
    ForecastClient::new(
        &format!("{}/v1/forecast", server.uri()),
        Duration::from_secs(5),
    )
    .expect("mock endpoint is valid")
}

// ============================================================================
// Forecast Client
// ============================================================================

mod forecast_client_tests {
    use super::*;

    #[tokio::test]
    async fn fetch_sends_coordinate_and_decodes_six_days() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "51.5"))
            .and(query_param("longitude", "-0.12"))
            .and(query_param("daily", "temperature_2m_max"))
            .and(query_param("timezone", "GMT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_forecast(51.5, -0.12)
            .await
            .expect("forecast decodes");

        assert_eq!(result.len(), 6);
        assert!(result.has_full_week());
        let temperatures: Vec<f32> = result
            .days
            .iter()
            .map(|day| day.max_temperature_celsius)
            .collect();
        assert_eq!(temperatures, vec![20.0, 27.0, 25.0, 18.0, 30.0, 22.0]);
        assert_eq!(result.days[0].date, "2024-06-01");
    }

    #[tokio::test]
    async fn non_200_status_is_a_network_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_forecast(51.5, -0.12)
            .await
            .expect_err("503 is a failure");

        assert_eq!(err, Error::HttpStatus(503));
        assert_eq!(err.kind(), FailureKind::NetworkFailure);
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn mismatched_arrays_are_a_decode_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "daily": {
                    "time": ["2024-06-01", "2024-06-02"],
                    "temperature_2m_max": [20.0]
                }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_forecast(51.5, -0.12)
            .await
            .expect_err("mismatch is a failure");

        assert_eq!(err.kind(), FailureKind::DecodeFailure);
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_forecast(51.5, -0.12)
            .await
            .expect_err("html is not a forecast");

        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_failure() {
        let client = ForecastClient::new("http://127.0.0.1:9/v1/forecast", Duration::from_secs(2))
            .expect("valid endpoint");

        let err = client
            .fetch_forecast(0.0, 0.0)
            .await
            .expect_err("nothing listens on port 9");

        assert_eq!(err.kind(), FailureKind::NetworkFailure);
    }
}

// ============================================================================
// Location Lookups
// ============================================================================

mod location_tests {
    use super::*;

    #[tokio::test]
    async fn ip_lookup_reads_coordinates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "city": "London",
                "latitude": 51.5,
                "longitude": -0.12
            })))
            .mount(&server)
            .await;

        let coordinate =
            lookup_ip_location(&reqwest::Client::new(), &format!("{}/json/", server.uri()))
                .await
                .expect("coordinates present");

        assert_eq!(coordinate, Coordinate::new(51.5, -0.12));
    }

    #[tokio::test]
    async fn ip_lookup_without_coordinates_fails() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"error": true, "reason": "RateLimited"})),
            )
            .mount(&server)
            .await;

        let err = lookup_ip_location(&reqwest::Client::new(), &format!("{}/json/", server.uri()))
            .await
            .expect_err("no coordinates");

        assert!(matches!(err, Error::Location(_)));
    }

    #[tokio::test]
    async fn ip_lookup_platform_yields_a_single_fix() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": 48.85,
                "longitude": 2.35
            })))
            .expect(1)
            .mount(&server)
            .await;

        let platform = DesktopPlatform::new(
            AuthorizationState::AuthorizedWhenInUse,
            CoordinateSource::IpLookup {
                url: format!("{}/json/", server.uri()),
            },
            None,
            reqwest::Client::new(),
        );

        let fixes: Vec<Result<Coordinate, Error>> = platform.location_updates().collect().await;
        assert_eq!(fixes, vec![Ok(Coordinate::new(48.85, 2.35))]);
    }

    #[tokio::test]
    async fn failing_ip_lookup_reports_the_error_and_ends() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&server)
            .await;

        let platform = DesktopPlatform::new(
            AuthorizationState::AuthorizedWhenInUse,
            CoordinateSource::IpLookup {
                url: format!("{}/json/", server.uri()),
            },
            None,
            reqwest::Client::new(),
        );

        let fixes: Vec<Result<Coordinate, Error>> = platform.location_updates().collect().await;
        assert_eq!(fixes, vec![Err(Error::HttpStatus(429))]);
    }

    #[tokio::test]
    async fn reverse_geocoder_builds_placemark() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/reverse"))
            .and(query_param("lat", "51.5"))
            .and(query_param("lon", "-0.12"))
            .and(query_param("format", "json"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "display_name": "London, Greater London, England",
                "address": {"city": "London", "state": "England", "country": "United Kingdom"}
            })))
            .mount(&server)
            .await;

        let geocoder =
            ReverseGeocoder::new(reqwest::Client::new(), format!("{}/reverse", server.uri()));
        let placemark = geocoder
            .lookup(Coordinate::new(51.5, -0.12))
            .await
            .expect("placemark");

        assert_eq!(placemark.display_text(), "London, England");
    }

    #[tokio::test]
    async fn reverse_geocoder_error_yields_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let geocoder =
            ReverseGeocoder::new(reqwest::Client::new(), format!("{}/reverse", server.uri()));

        assert!(geocoder.lookup(Coordinate::new(51.5, -0.12)).await.is_none());
    }
}
