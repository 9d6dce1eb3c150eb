// SPDX-License-Identifier: MPL-2.0
//! User interface: screens, shared components and styling.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! exposes a `ViewContext`, its own `Message` and an `update` that turns
//! messages into `Event`s for the application.
//!
//! # Screens
//!
//! - [`permission`] - Location consent prompt and fixed-text status screens
//! - [`weather`] - Current conditions, five-day outlook, day/night toggle
//! - [`screen`] - Which screen an authorization state selects
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icons
//! - [`sky`] - Day/night appearance

pub mod components;
pub mod design_tokens;
pub mod icons;
pub mod permission;
pub mod screen;
pub mod sky;
pub mod styles;
pub mod weather;
