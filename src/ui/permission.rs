// SPDX-License-Identifier: MPL-2.0
//! Location consent prompt and the static authorization message screens.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::screen::Screen;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub const ALLOW_LABEL: &str = "Allow tracking";
pub const CAPTION: &str = "We need your permission to track you.";

/// Contextual data needed to render the prompt.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    /// A consent dialog is already showing; the button is disabled.
    pub request_pending: bool,
}

/// Messages emitted by the permission prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    AllowTracking,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    RequestPermission,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::AllowTracking => Event::RequestPermission,
    }
}

/// Render the consent prompt.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let icon = icons::sized(icons::location_circle(), sizing::ICON_PROMPT);

    let label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::location(), typography::TITLE_SM))
        .push(Text::new(ALLOW_LABEL).size(typography::TITLE_SM));

    let allow = button(label)
        .padding([spacing::SM, spacing::LG])
        .style(button_styles::primary)
        .on_press_maybe((!ctx.request_pending).then_some(Message::AllowTracking));

    let caption = Text::new(CAPTION)
        .size(typography::BODY)
        .color(palette::WHITE);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(allow)
        .push(caption);

    centered(content.into())
}

/// Render one of the fixed-text screens (restricted, denied, unexpected).
///
/// Screens without fixed text render nothing.
pub fn message_view<'a, M: 'a>(screen: Screen) -> Element<'a, M> {
    let Some(text) = screen.message_text() else {
        return Column::new().into();
    };

    let panel = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icons::xmark_octagon(), sizing::ICON_PROMPT))
        .push(
            Text::new(text)
                .size(typography::TITLE_SM)
                .color(palette::WHITE)
                .center(),
        );

    centered(
        Container::new(panel)
            .max_width(sizing::PANEL_MAX_WIDTH)
            .padding(spacing::LG)
            .style(container_styles::error_panel)
            .into(),
    )
}

fn centered<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}
