// SPDX-License-Identifier: MPL-2.0
//! `iced_weather` is a small location-aware weather display built with the
//! Iced GUI framework.
//!
//! It asks for location consent, fetches a daily maximum temperature
//! forecast from Open-Meteo and renders it over a day/night sky.

#![doc(html_root_url = "https://docs.rs/iced_weather/0.1.0")]

pub mod app;
pub mod error;
pub mod forecast;
pub mod location;
pub mod ui;
