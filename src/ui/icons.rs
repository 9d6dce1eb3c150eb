// SPDX-License-Identifier: MPL-2.0
//! Centralized SVG icons.
//!
//! Icons are inline SVG documents with their own fill colors, turned into
//! handles once and cached with `OnceLock`.
//!
//! # Naming Convention
//!
//! Icons use visual names (`cloud_sun`, not `cloudy_day`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function returning an `Svg` widget with a cached handle.
macro_rules! define_icon {
    ($name:ident, $source:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const SUN_MAX_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
<g stroke="#FFCC00" stroke-width="4" stroke-linecap="round">
<line x1="32" y1="4" x2="32" y2="12"/><line x1="32" y1="52" x2="32" y2="60"/>
<line x1="4" y1="32" x2="12" y2="32"/><line x1="52" y1="32" x2="60" y2="32"/>
<line x1="12.2" y1="12.2" x2="17.9" y2="17.9"/><line x1="46.1" y1="46.1" x2="51.8" y2="51.8"/>
<line x1="12.2" y1="51.8" x2="17.9" y2="46.1"/><line x1="46.1" y1="17.9" x2="51.8" y2="12.2"/>
</g>
<circle cx="32" cy="32" r="14" fill="#FFCC00"/>
</svg>"##;

const CLOUD_SUN_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
<g stroke="#FFCC00" stroke-width="3" stroke-linecap="round">
<line x1="24" y1="4" x2="24" y2="9"/><line x1="6" y1="22" x2="11" y2="22"/>
<line x1="11.3" y1="9.3" x2="14.8" y2="12.8"/><line x1="36.7" y1="9.3" x2="33.2" y2="12.8"/>
</g>
<circle cx="24" cy="22" r="10" fill="#FFCC00"/>
<path d="M18 54h30a10 10 0 0 0 0-20 14 14 0 0 0-26.5 4A8 8 0 0 0 18 54z" fill="#F5F7FC"/>
</svg>"##;

const MOON_STARS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
<path d="M36 8a24 24 0 1 0 20 36A20 20 0 0 1 36 8z" fill="#F5F7FC"/>
<path d="M48 6l2 5 5 2-5 2-2 5-2-5-5-2 5-2z" fill="#F5F7FC"/>
<path d="M56 24l1.2 3 3 1.2-3 1.2-1.2 3-1.2-3-3-1.2 3-1.2z" fill="#F5F7FC"/>
</svg>"##;

const LOCATION_CIRCLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
<circle cx="32" cy="32" r="28" fill="none" stroke="#007AFF" stroke-width="4"/>
<path d="M46 18L16 31l14 3 3 14z" fill="#007AFF"/>
</svg>"##;

const LOCATION_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
<path d="M56 8L6 29l24 5 5 24z" fill="#FFFFFF"/>
</svg>"##;

const XMARK_OCTAGON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
<path d="M21 4h22l17 17v22L43 60H21L4 43V21z" fill="none" stroke="#FFFFFF" stroke-width="4"/>
<g stroke="#FFFFFF" stroke-width="5" stroke-linecap="round">
<line x1="22" y1="22" x2="42" y2="42"/><line x1="42" y1="22" x2="22" y2="42"/>
</g>
</svg>"##;

const WARNING_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
<path d="M32 6L60 56H4z" fill="none" stroke="#F1A620" stroke-width="4" stroke-linejoin="round"/>
<line x1="32" y1="24" x2="32" y2="40" stroke="#F1A620" stroke-width="5" stroke-linecap="round"/>
<circle cx="32" cy="48" r="3" fill="#F1A620"/>
</svg>"##;

define_icon!(sun_max, SUN_MAX_SVG, "Sun with rays.");
define_icon!(cloud_sun, CLOUD_SUN_SVG, "Sun partly hidden behind a cloud.");
define_icon!(moon_stars, MOON_STARS_SVG, "Crescent moon with two stars.");
define_icon!(
    location_circle,
    LOCATION_CIRCLE_SVG,
    "Location arrow inside a circle."
);
define_icon!(location, LOCATION_SVG, "Location arrow, white.");
define_icon!(xmark_octagon, XMARK_OCTAGON_SVG, "Cross inside an octagon, white.");
define_icon!(warning, WARNING_SVG, "Warning triangle.");

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
