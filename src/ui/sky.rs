// SPDX-License-Identifier: MPL-2.0
//! Day/night appearance of the weather screen.

use crate::ui::design_tokens::palette;
use crate::ui::weather::WeatherIcon;
use iced::Color;

/// Cosmetic day/night mode, toggled by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sky {
    #[default]
    Day,
    Night,
}

impl Sky {
    pub fn from_night(is_night: bool) -> Self {
        if is_night {
            Sky::Night
        } else {
            Sky::Day
        }
    }

    pub fn is_night(self) -> bool {
        self == Sky::Night
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Sky::Day => Sky::Night,
            Sky::Night => Sky::Day,
        }
    }

    /// Background gradient as (top-leading, bottom-trailing) colors.
    pub fn gradient(self) -> (Color, Color) {
        match self {
            Sky::Day => (palette::SKY_BLUE, palette::LIGHT_BLUE),
            Sky::Night => (palette::NIGHT_TOP, palette::NIGHT_BOTTOM),
        }
    }

    /// Icon for the current-conditions block.
    pub fn main_icon(self) -> WeatherIcon {
        match self {
            Sky::Day => WeatherIcon::Cloudy,
            Sky::Night => WeatherIcon::Night,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_uses_dark_gradient_and_moon() {
        let sky = Sky::from_night(true);
        assert!(sky.is_night());
        assert_eq!(sky.gradient(), (palette::BLACK, palette::GRAY_500));
        assert_eq!(sky.main_icon(), WeatherIcon::Night);
    }

    #[test]
    fn day_uses_blue_gradient_and_cloud() {
        let sky = Sky::default();
        assert!(!sky.is_night());
        assert_eq!(sky.gradient(), (palette::SKY_BLUE, palette::LIGHT_BLUE));
        assert_eq!(sky.main_icon(), WeatherIcon::Cloudy);
    }

    #[test]
    fn toggling_twice_restores_appearance() {
        for start in [Sky::Day, Sky::Night] {
            let round_trip = start.toggled().toggled();
            assert_eq!(round_trip, start);
            assert_eq!(round_trip.gradient(), start.gradient());
            assert_eq!(round_trip.main_icon(), start.main_icon());
            assert_ne!(start.toggled().gradient(), start.gradient());
        }
    }
}
