// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Picks the screen from the authorization state and hands each screen the
//! slice of state it renders.

use super::Message;
use crate::error::Error;
use crate::forecast::ForecastResult;
use crate::location::{AuthorizationState, Coordinate, Placemark};
use crate::ui::permission;
use crate::ui::screen::Screen;
use crate::ui::sky::Sky;
use crate::ui::styles::container as container_styles;
use crate::ui::weather;
use chrono::NaiveDate;
use iced::widget::{container, Container};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub authorization: AuthorizationState,
    pub request_pending: bool,
    pub coordinate: Option<Coordinate>,
    pub forecast: Option<&'a ForecastResult>,
    /// A forecast request is in flight.
    pub loading: bool,
    pub failure: Option<&'a Error>,
    /// Last failed location fix.
    pub location_failure: Option<&'a Error>,
    pub placemark: Option<&'a Placemark>,
    pub sky: Sky,
    pub today: NaiveDate,
}

/// Renders the screen selected by the authorization state over the
/// day/night sky.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sky = ctx.sky;

    let screen: Element<'_, Message> = match Screen::for_state(ctx.authorization) {
        Screen::PermissionPrompt => permission::view(permission::ViewContext {
            request_pending: ctx.request_pending,
        })
        .map(Message::Permission),
        Screen::Weather => weather::view(weather::ViewContext {
            forecast: ctx.forecast,
            placemark: ctx.placemark,
            coordinate: ctx.coordinate,
            loading: ctx.loading,
            failure: ctx.failure,
            location_failure: ctx.location_failure,
            sky: ctx.sky,
            today: ctx.today,
        })
        .map(Message::Weather),
        screen @ (Screen::RestrictedMessage | Screen::DeniedMessage | Screen::Fallback) => {
            permission::message_view(screen)
        }
    };

    Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(background(sky))
        .into()
}

fn background(sky: Sky) -> impl Fn(&Theme) -> container::Style {
    let (top, bottom) = sky.gradient();
    container_styles::sky(top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::test_support::sample_result;
    use crate::ui::design_tokens::palette;
    use iced::{Background, Color, Gradient};

    fn context(authorization: AuthorizationState, sky: Sky) -> ViewContext<'static> {
        ViewContext {
            authorization,
            request_pending: false,
            coordinate: None,
            forecast: None,
            loading: false,
            failure: None,
            location_failure: None,
            placemark: None,
            sky,
            today: NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date"),
        }
    }

    fn gradient_colors(style: &container::Style) -> Vec<Color> {
        match &style.background {
            Some(Background::Gradient(Gradient::Linear(linear))) => linear
                .stops
                .iter()
                .flatten()
                .map(|stop| stop.color)
                .collect(),
            other => panic!("expected a gradient background, got {other:?}"),
        }
    }

    #[test]
    fn background_follows_the_sky() {
        for sky in [Sky::Day, Sky::Night] {
            let (top, bottom) = sky.gradient();
            let style = background(sky)(&Theme::Light);

            assert_eq!(gradient_colors(&style), vec![top, bottom]);
            assert_eq!(style.text_color, Some(palette::WHITE));
        }
    }

    #[test]
    fn every_screen_renders_over_either_sky() {
        let forecast = sample_result(&[20.0, 27.0, 25.0, 18.0, 30.0, 22.0]);

        for sky in [Sky::Day, Sky::Night] {
            for state in AuthorizationState::ALL {
                let _element = view(context(state, sky));
            }

            let ctx = ViewContext {
                forecast: Some(&forecast),
                ..context(AuthorizationState::AuthorizedWhenInUse, sky)
            };
            let _element = view(ctx);
        }
    }
}
