// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are only routed while the weather screen is shown:
//! `N` toggles the night sky and `R` retries the forecast.

use super::Message;
use crate::ui::screen::Screen;
use iced::{event, keyboard, Subscription};

/// Creates the event subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Weather => event::listen_with(|event, status, _window_id| {
            if matches!(status, event::Status::Captured) {
                return None;
            }

            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Character(ref c),
                    modifiers,
                    ..
                }) if !modifiers.command() && !modifiers.alt() => shortcut(c.as_str()),
                _ => None,
            }
        }),
        Screen::PermissionPrompt
        | Screen::RestrictedMessage
        | Screen::DeniedMessage
        | Screen::Fallback => Subscription::none(),
    }
}

/// Maps a typed character to its shortcut, ignoring case.
pub fn shortcut(key: &str) -> Option<Message> {
    match key {
        "n" | "N" => Some(Message::ToggleNight),
        "r" | "R" => Some(Message::RetryForecast),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_ignore_case() {
        assert!(matches!(shortcut("n"), Some(Message::ToggleNight)));
        assert!(matches!(shortcut("N"), Some(Message::ToggleNight)));
        assert!(matches!(shortcut("r"), Some(Message::RetryForecast)));
        assert!(matches!(shortcut("R"), Some(Message::RetryForecast)));
    }

    #[test]
    fn other_keys_are_not_shortcuts() {
        assert!(shortcut("x").is_none());
        assert!(shortcut("").is_none());
    }
}
