// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! Shows an icon tinted by severity, a title, a user-facing message, an
//! optional line of technical details and an optional action button.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Warning)
//!     .title("Forecast unavailable")
//!     .message("Check your connection and try again.")
//!     .details("HTTP status 503")
//!     .action("Retry", Message::RetryForecast)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::svg::Svg;
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Nothing useful can be shown (red)
    #[default]
    Error,
    /// Degraded, a retry may help (orange)
    Warning,
    /// Informational (blue)
    Info,
}

impl ErrorSeverity {
    /// Returns the accent color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
            ErrorSeverity::Info => palette::INFO_500,
        }
    }

    pub fn icon(&self) -> Svg<'static> {
        match self {
            ErrorSeverity::Error => icons::xmark_octagon(),
            ErrorSeverity::Warning | ErrorSeverity::Info => icons::warning(),
        }
    }
}

/// Builder for the error panel.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            details: None,
            action_label: None,
            action_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    /// Creates a new error display with the given severity.
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details line.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Sets the action button label and message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Renders the error display component.
    pub fn view(self) -> Element<'static, Message> {
        let accent_color = self.severity.color();

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(icons::sized(self.severity.icon(), sizing::ICON_DAY));

        if let Some(title_text) = self.title {
            content = content.push(
                Text::new(title_text)
                    .size(typography::TITLE_SM)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent_color),
                    }),
            );
        }

        if let Some(message_text) = self.message {
            content = content.push(
                Text::new(message_text)
                    .size(typography::BODY)
                    .center(),
            );
        }

        if let Some(details_text) = self.details {
            content = content.push(
                Text::new(details_text)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_200),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action_btn = button(Text::new(label).size(typography::BODY_LG))
                .padding([spacing::XS, spacing::LG])
                .on_press(msg)
                .style(button_styles::primary);
            content = content.push(action_btn);
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::PANEL_MAX_WIDTH)
            .padding(spacing::LG)
            .style(container_styles::panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn error_severity_colors_are_distinct() {
        let error_color = ErrorSeverity::Error.color();
        let warning_color = ErrorSeverity::Warning.color();
        let info_color = ErrorSeverity::Info.color();

        assert_ne!(error_color, warning_color);
        assert_ne!(warning_color, info_color);
        assert_ne!(error_color, info_color);
    }

    #[test]
    fn error_display_builder_works() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new(ErrorSeverity::Warning)
            .title("Forecast unavailable")
            .message("Something went wrong")
            .details("HTTP status 503")
            .action("Retry", TestMessage::Retry);

        assert_eq!(display.severity, ErrorSeverity::Warning);
        assert_eq!(display.title.as_deref(), Some("Forecast unavailable"));
        assert_eq!(display.message.as_deref(), Some("Something went wrong"));
        assert_eq!(display.details.as_deref(), Some("HTTP status 503"));
        assert_eq!(display.action_label.as_deref(), Some("Retry"));
        assert_eq!(display.action_message, Some(TestMessage::Retry));
    }

    #[test]
    fn default_severity_is_error() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::default();
        assert_eq!(display.severity, ErrorSeverity::Error);
        assert!(display.action_message.is_none());
    }
}
