// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the Open-Meteo daily forecast endpoint.

use super::{decode, ForecastResult};
use crate::error::{Error, Result};
use reqwest::{StatusCode, Url};
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// Single metric requested from the API.
const DAILY_METRIC: &str = "temperature_2m_max";

/// Dates are requested in GMT so `time` entries do not depend on the caller.
const TIMEZONE: &str = "GMT";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ForecastClient {
    /// Builds a client for `endpoint`. An endpoint that is not an absolute
    /// http(s) URL is rejected here, before any request is made.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;
        Self::with_http(endpoint, http)
    }

    pub fn with_http(endpoint: &str, http: reqwest::Client) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid forecast endpoint '{endpoint}': {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "forecast endpoint must be http or https, got '{}'",
                endpoint.scheme()
            )));
        }
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for a coordinate.
    pub fn request_url(&self, latitude: f64, longitude: f64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &latitude.to_string())
            .append_pair("longitude", &longitude.to_string())
            .append_pair("daily", DAILY_METRIC)
            .append_pair("timezone", TIMEZONE);
        url
    }

    /// Issues one GET for the coordinate and decodes the body.
    ///
    /// The returned future owns everything it needs, so it can be handed to
    /// the UI runtime as-is.
    pub fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = Result<ForecastResult>> + Send + 'static {
        let http = self.http.clone();
        let url = self.request_url(latitude, longitude);

        async move {
            tracing::debug!(%url, "requesting forecast");
            let response = http.get(url).send().await?;

            let status = response.status();
            if status != StatusCode::OK {
                return Err(Error::HttpStatus(status.as_u16()));
            }

            let body = response.bytes().await?;
            decode(&body)
        }
    }
}
