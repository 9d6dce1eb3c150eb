// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`error_display`] - Error and warning panels with an optional action

pub mod error_display;
