// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

/// Top-leading to bottom-trailing.
const SKY_ANGLE: Degrees = Degrees(135.0);

/// Full-window gradient between two colors.
pub fn sky(top: Color, bottom: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(SKY_ANGLE)
                .add_stop(0.0, top)
                .add_stop(1.0, bottom),
        ))),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Solid red panel behind permission error messages.
pub fn error_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Translucent dark surface for status panels drawn over the sky.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.35,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
