// SPDX-License-Identifier: MPL-2.0
//! Screen selection from the location authorization state.

use crate::location::AuthorizationState;

pub const RESTRICTED_TEXT: &str = "Location use is restricted.";
pub const DENIED_TEXT: &str =
    "The app does not have location permissions. Please enable them in settings.";
pub const FALLBACK_TEXT: &str = "Unexpected status";

/// Top-level screens, one per authorization outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    PermissionPrompt,
    RestrictedMessage,
    DeniedMessage,
    Weather,
    Fallback,
}

impl Screen {
    /// Picks the screen for an authorization state.
    #[must_use]
    pub fn for_state(state: AuthorizationState) -> Self {
        match state {
            AuthorizationState::NotDetermined => Screen::PermissionPrompt,
            AuthorizationState::Restricted => Screen::RestrictedMessage,
            AuthorizationState::Denied => Screen::DeniedMessage,
            AuthorizationState::AuthorizedAlways | AuthorizationState::AuthorizedWhenInUse => {
                Screen::Weather
            }
            AuthorizationState::Unknown => Screen::Fallback,
        }
    }

    /// Static text shown by message-only screens.
    #[must_use]
    pub fn message_text(self) -> Option<&'static str> {
        match self {
            Screen::RestrictedMessage => Some(RESTRICTED_TEXT),
            Screen::DeniedMessage => Some(DENIED_TEXT),
            Screen::Fallback => Some(FALLBACK_TEXT),
            Screen::PermissionPrompt | Screen::Weather => None,
        }
    }
}
