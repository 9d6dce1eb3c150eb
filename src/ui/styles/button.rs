// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Blue filled button used for the permission prompt.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: 0.85,
            ..palette::SKY_BLUE
        },
        button::Status::Disabled => palette::GRAY_200,
        button::Status::Active | button::Status::Pressed => palette::SKY_BLUE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// White pill with colored label, e.g. the day/night toggle.
pub fn filled(
    text_color: Color,
    background_color: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => 0.9,
            button::Status::Pressed => 0.8,
            _ => 1.0,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..background_color
            })),
            text_color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
