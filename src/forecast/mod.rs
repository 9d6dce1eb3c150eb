// SPDX-License-Identifier: MPL-2.0
//! Daily maximum temperature forecast: model, decoding and request tracking.

mod client;

pub use client::{ForecastClient, DEFAULT_ENDPOINT};

use crate::error::{Error, Result};
use crate::location::Coordinate;
use serde::Deserialize;

/// Number of entries the day slots need: today plus five days.
pub const REQUIRED_DAYS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    /// ISO date as returned by the API (`YYYY-MM-DD`).
    pub date: String,
    pub max_temperature_celsius: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastResult {
    pub days: Vec<DailyForecast>,
}

impl ForecastResult {
    pub fn today(&self) -> Option<&DailyForecast> {
        self.days.first()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn has_full_week(&self) -> bool {
        self.days.len() >= REQUIRED_DAYS
    }
}

#[derive(Debug, Deserialize)]
struct DailyWeatherPayload {
    daily: DailySeries,
}

#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<String>,
    temperature_2m_max: Vec<f32>,
}

/// Decodes an Open-Meteo daily response body.
///
/// `time` and `temperature_2m_max` are parallel arrays; a length mismatch is a
/// decode failure.
pub fn decode(body: &[u8]) -> Result<ForecastResult> {
    let payload: DailyWeatherPayload = serde_json::from_slice(body)?;
    let DailySeries {
        time,
        temperature_2m_max,
    } = payload.daily;

    if time.len() != temperature_2m_max.len() {
        return Err(Error::Decode(format!(
            "daily series length mismatch: {} dates, {} temperatures",
            time.len(),
            temperature_2m_max.len()
        )));
    }

    let days = time
        .into_iter()
        .zip(temperature_2m_max)
        .map(|(date, max_temperature_celsius)| DailyForecast {
            date,
            max_temperature_celsius,
        })
        .collect();

    Ok(ForecastResult { days })
}

/// Monotonic identifier attached to each fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Outcome of feeding a completed fetch into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// Superseded by a newer request; discarded.
    Stale,
}

/// Holds the forecast shown on screen and tracks which request is current.
#[derive(Debug, Default)]
pub struct ForecastStore {
    result: Option<ForecastResult>,
    failure: Option<Error>,
    next_id: u64,
    latest: Option<(RequestId, Coordinate)>,
    in_flight: bool,
}

impl ForecastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a new request; any older request becomes stale.
    pub fn begin_request(&mut self, coordinate: Coordinate) -> RequestId {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.latest = Some((id, coordinate));
        self.in_flight = true;
        id
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        self.latest.is_some_and(|(latest, _)| latest == id)
    }

    /// Applies a finished fetch. Failures keep the previous result.
    pub fn complete(&mut self, id: RequestId, outcome: Result<ForecastResult>) -> Completion {
        if !self.is_latest(id) {
            return Completion::Stale;
        }
        self.in_flight = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.failure = None;
                Completion::Applied
            }
            Err(err) => {
                self.failure = Some(err);
                Completion::Failed
            }
        }
    }

    pub fn result(&self) -> Option<&ForecastResult> {
        self.result.as_ref()
    }

    pub fn failure(&self) -> Option<&Error> {
        self.failure.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Number of requests issued this session.
    pub fn requests_issued(&self) -> u64 {
        self.next_id
    }

    pub fn latest_request(&self) -> Option<(RequestId, Coordinate)> {
        self.latest
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn sample_result(temperatures: &[f32]) -> ForecastResult {
        ForecastResult {
            days: temperatures
                .iter()
                .enumerate()
                .map(|(i, t)| DailyForecast {
                    date: format!("2024-06-{:02}", i + 1),
                    max_temperature_celsius: *t,
                })
                .collect(),
        }
    }
}
