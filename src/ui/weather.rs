// SPDX-License-Identifier: MPL-2.0
//! Weather screen: current conditions, five-day outlook and the day/night toggle.
//!
//! The screen is a pure function of the forecast, placemark, last failure
//! and [`Sky`]. Day slots are derived by [`day_slots`], which reports
//! [`InsufficientData`] instead of indexing past the end of a short forecast.

use crate::error::{Error, FailureKind};
use crate::forecast::{ForecastResult, REQUIRED_DAYS};
use crate::location::{Coordinate, Placemark};
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::sky::Sky;
use crate::ui::styles::button as button_styles;
use chrono::{NaiveDate, TimeDelta};
use iced::widget::svg::Svg;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::fmt;

/// Days at or above this maximum get the sun icon.
pub const SUNNY_THRESHOLD_CELSIUS: f32 = 26.0;

/// Number of upcoming days shown below the current conditions.
pub const OUTLOOK_DAYS: usize = REQUIRED_DAYS - 1;

pub const TOGGLE_LABEL: &str = "Change Day Time";
pub const RETRY_LABEL: &str = "Retry";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sunny,
    Cloudy,
    Night,
}

impl WeatherIcon {
    pub fn for_temperature(max_temperature_celsius: f32) -> Self {
        if max_temperature_celsius >= SUNNY_THRESHOLD_CELSIUS {
            WeatherIcon::Sunny
        } else {
            WeatherIcon::Cloudy
        }
    }

    pub fn svg(self) -> Svg<'static> {
        match self {
            WeatherIcon::Sunny => icons::sun_max(),
            WeatherIcon::Cloudy => icons::cloud_sun(),
            WeatherIcon::Night => icons::moon_stars(),
        }
    }
}

/// One column of the five-day outlook.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySlot {
    pub weekday: String,
    pub icon: WeatherIcon,
    pub max_temperature_celsius: f32,
}

impl DaySlot {
    pub fn temperature_text(&self) -> String {
        format!("{:.0}°", self.max_temperature_celsius)
    }
}

/// The forecast has fewer entries than the screen needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientData {
    pub available: usize,
}

impl fmt::Display for InsufficientData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "forecast has {} of {} required days",
            self.available, REQUIRED_DAYS
        )
    }
}

/// Builds the outlook for offsets 1..=5.
///
/// Weekday labels count forward from `today` rather than reading the dates
/// in the response.
pub fn day_slots(
    forecast: &ForecastResult,
    today: NaiveDate,
) -> Result<Vec<DaySlot>, InsufficientData> {
    if !forecast.has_full_week() {
        return Err(InsufficientData {
            available: forecast.len(),
        });
    }

    Ok(forecast
        .days
        .iter()
        .enumerate()
        .skip(1)
        .take(OUTLOOK_DAYS)
        .map(|(offset, day)| DaySlot {
            weekday: weekday_label(today, offset),
            icon: WeatherIcon::for_temperature(day.max_temperature_celsius),
            max_temperature_celsius: day.max_temperature_celsius,
        })
        .collect())
}

/// Abbreviated weekday `offset` days after `today`.
pub fn weekday_label(today: NaiveDate, offset: usize) -> String {
    let days = i64::try_from(offset).unwrap_or(0);
    (today + TimeDelta::days(days)).format("%a").to_string()
}

/// Current temperature, e.g. `"21° C"`.
pub fn main_temperature_text(max_temperature_celsius: f32) -> String {
    format!("{max_temperature_celsius:.0}° C")
}

/// Contextual data needed to render the weather screen.
pub struct ViewContext<'a> {
    pub forecast: Option<&'a ForecastResult>,
    pub placemark: Option<&'a Placemark>,
    pub coordinate: Option<Coordinate>,
    /// A forecast request is in flight.
    pub loading: bool,
    /// Last failed forecast request.
    pub failure: Option<&'a Error>,
    /// Last failed location fix.
    pub location_failure: Option<&'a Error>,
    pub sky: Sky,
    pub today: NaiveDate,
}

/// Messages emitted by the weather screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleDayTime,
    Retry,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ToggleDayTime,
    RetryForecast,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ToggleDayTime => Event::ToggleDayTime,
        Message::Retry => Event::RetryForecast,
    }
}

/// Render the weather screen. The sky background is drawn by the caller.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match (ctx.forecast, ctx.failure, ctx.location_failure) {
        (Some(forecast), _, _) => forecast_view(&ctx, forecast),
        (None, Some(error), _) if !ctx.loading => forecast_failure_panel(error),
        (None, _, Some(error)) if ctx.coordinate.is_none() => location_failure_panel(error),
        _ => loading_view(ctx.loading, ctx.coordinate),
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::MD)
        .into()
}

fn forecast_view<'a>(ctx: &ViewContext<'a>, forecast: &'a ForecastResult) -> Element<'a, Message> {
    let slots = match day_slots(forecast, ctx.today) {
        Ok(slots) => slots,
        Err(insufficient) => return insufficient_panel(insufficient),
    };

    let city = Text::new(ctx.placemark.map(Placemark::display_text).unwrap_or_default())
        .size(typography::TITLE_LG)
        .color(palette::WHITE);

    let today_temperature = forecast
        .today()
        .map(|day| day.max_temperature_celsius)
        .unwrap_or_default();

    let outlook = slots
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, slot| {
            row.push(day_view(slot))
        });

    let toggle = button(
        Container::new(Text::new(TOGGLE_LABEL).size(typography::TITLE_SM))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::BUTTON_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::SM, spacing::MD])
    .style(button_styles::filled(palette::SKY_BLUE, palette::WHITE))
    .on_press(Message::ToggleDayTime);

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(city)
        .push(main_status_view(ctx.sky, today_temperature))
        .push(outlook)
        .push(Space::new().height(Length::Fixed(spacing::XL)))
        .push(toggle)
        .into()
}

fn main_status_view<'a>(sky: Sky, temperature: f32) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(sky.main_icon().svg(), sizing::ICON_HERO))
        .push(
            Text::new(main_temperature_text(temperature))
                .size(typography::HERO)
                .color(palette::WHITE),
        )
        .into()
}

fn day_view<'a>(slot: &DaySlot) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(slot.weekday.clone())
                .size(typography::BODY_LG)
                .color(palette::WHITE),
        )
        .push(icons::sized(slot.icon.svg(), sizing::ICON_DAY))
        .push(
            Text::new(slot.temperature_text())
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .into()
}

/// Status line shown while no forecast is available.
pub fn loading_text(loading: bool, coordinate: Option<Coordinate>) -> String {
    match (loading, coordinate) {
        (true, Some(coordinate)) => format!("Loading forecast for {coordinate}…"),
        _ => "Waiting for location…".to_string(),
    }
}

fn loading_view<'a>(loading: bool, coordinate: Option<Coordinate>) -> Element<'a, Message> {
    let status = loading_text(loading, coordinate);

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icons::location(), sizing::ICON_DAY))
        .push(
            Text::new(status)
                .size(typography::BODY_LG)
                .color(palette::WHITE),
        )
        .into()
}

fn forecast_failure_panel<'a>(error: &Error) -> Element<'a, Message> {
    let message = match error.kind() {
        FailureKind::NetworkFailure => "Check your connection and try again.",
        FailureKind::DecodeFailure => "The forecast service sent an unexpected response.",
        _ => "Something went wrong while loading the forecast.",
    };

    failure_panel("Forecast unavailable", message, error)
}

fn location_failure_panel<'a>(error: &Error) -> Element<'a, Message> {
    failure_panel(
        "Location unavailable",
        "Your position could not be determined.",
        error,
    )
}

/// Warning panel for `error`. Offers Retry only when retrying can help.
fn failure_panel<'a>(title: &str, message: &str, error: &Error) -> Element<'a, Message> {
    let panel = ErrorDisplay::new(ErrorSeverity::Warning)
        .title(title)
        .message(message)
        .details(error.to_string());

    if error.is_retryable() {
        panel.action(RETRY_LABEL, Message::Retry).view()
    } else {
        panel.view()
    }
}

fn insufficient_panel<'a>(insufficient: InsufficientData) -> Element<'a, Message> {
    ErrorDisplay::new(ErrorSeverity::Info)
        .title("Insufficient data")
        .message("The forecast does not cover the coming days yet.")
        .details(insufficient.to_string())
        .action(RETRY_LABEL, Message::Retry)
        .view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::test_support::sample_result;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date")
    }

    #[test]
    fn threshold_picks_sun_at_and_above_26() {
        assert_eq!(WeatherIcon::for_temperature(26.0), WeatherIcon::Sunny);
        assert_eq!(WeatherIcon::for_temperature(31.5), WeatherIcon::Sunny);
        assert_eq!(WeatherIcon::for_temperature(25.9), WeatherIcon::Cloudy);
        assert_eq!(WeatherIcon::for_temperature(-4.0), WeatherIcon::Cloudy);

        let icons: Vec<WeatherIcon> = [20.0, 27.0, 25.0, 18.0, 30.0]
            .into_iter()
            .map(WeatherIcon::for_temperature)
            .collect();
        assert_eq!(
            icons,
            vec![
                WeatherIcon::Cloudy,
                WeatherIcon::Sunny,
                WeatherIcon::Cloudy,
                WeatherIcon::Cloudy,
                WeatherIcon::Sunny,
            ]
        );
    }

    #[test]
    fn outlook_icons_follow_temperatures() {
        let forecast = sample_result(&[20.0, 27.0, 25.0, 18.0, 30.0, 22.0]);
        let slots = day_slots(&forecast, monday()).expect("six days");

        let icons: Vec<WeatherIcon> = slots.iter().map(|slot| slot.icon).collect();
        assert_eq!(
            icons,
            vec![
                WeatherIcon::Sunny,
                WeatherIcon::Cloudy,
                WeatherIcon::Cloudy,
                WeatherIcon::Sunny,
                WeatherIcon::Cloudy,
            ]
        );
    }

    #[test]
    fn outlook_starts_tomorrow() {
        let forecast = sample_result(&[20.0, 27.0, 25.0, 18.0, 30.0, 22.0]);
        let slots = day_slots(&forecast, monday()).expect("six days");

        assert_eq!(slots.len(), OUTLOOK_DAYS);
        let weekdays: Vec<&str> = slots.iter().map(|slot| slot.weekday.as_str()).collect();
        assert_eq!(weekdays, vec!["Tue", "Wed", "Thu", "Fri", "Sat"]);
        assert_eq!(slots[0].temperature_text(), "27°");
        assert_eq!(slots[4].temperature_text(), "22°");
    }

    #[test]
    fn extra_days_are_ignored() {
        let forecast = sample_result(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0]);
        let slots = day_slots(&forecast, monday()).expect("seven days");
        assert_eq!(slots.len(), OUTLOOK_DAYS);
        assert_eq!(slots[4].max_temperature_celsius, 15.0);
    }

    #[test]
    fn short_forecast_is_insufficient() {
        let forecast = sample_result(&[20.0, 27.0, 25.0]);
        assert_eq!(
            day_slots(&forecast, monday()),
            Err(InsufficientData { available: 3 })
        );
        assert_eq!(
            day_slots(&ForecastResult::default(), monday()),
            Err(InsufficientData { available: 0 })
        );
    }

    #[test]
    fn temperature_formats() {
        assert_eq!(main_temperature_text(21.3), "21° C");
        assert_eq!(main_temperature_text(-3.2), "-3° C");
        assert_eq!(
            DaySlot {
                weekday: "Mon".into(),
                icon: WeatherIcon::Cloudy,
                max_temperature_celsius: 17.8,
            }
            .temperature_text(),
            "18°"
        );
    }

    #[test]
    fn loading_text_names_the_position_only_while_fetching() {
        let london = Coordinate::new(51.5, -0.12);
        assert_eq!(
            loading_text(true, Some(london)),
            "Loading forecast for 51.5000, -0.1200…"
        );
        assert_eq!(loading_text(false, Some(london)), "Waiting for location…");
        assert_eq!(loading_text(false, None), "Waiting for location…");
    }

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(&Message::ToggleDayTime), Event::ToggleDayTime);
        assert_eq!(update(&Message::Retry), Event::RetryForecast);
    }
}
