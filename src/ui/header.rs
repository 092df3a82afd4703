// SPDX-License-Identifier: MPL-2.0
//! Header bar.
//!
//! "Before Life" opens the form, "Afterlife" opens the about view, and a
//! click anywhere else on the bar returns to the gallery. While browsing by
//! prompt the bar also carries the prompt progress strip.

use crate::domain::browsing::PromptIndex;
use crate::domain::catalog::PROMPT_COUNT;
use crate::domain::view::ViewId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::ProgressTicks;
use iced::alignment::Vertical;
use iced::widget::{button, mouse_area, text, Container, Row, Space};
use iced::{Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: ViewId,
    pub prompt_index: PromptIndex,
}

#[derive(Debug, Clone)]
pub enum Message {
    BeforeLifePressed,
    AfterlifePressed,
    BackgroundPressed,
    /// Clicks on the progress strip are swallowed.
    ProgressPressed,
}

/// Events propagated to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(ViewId),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BeforeLifePressed => Event::Navigate(ViewId::Form),
        Message::AfterlifePressed => Event::Navigate(ViewId::About),
        Message::BackgroundPressed => Event::Navigate(ViewId::Gallery),
        Message::ProgressPressed => Event::None,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let nav_button = |label: String, target: ViewId, message: Message| {
        let style = if ctx.active == target {
            styles::button::link_active
        } else {
            styles::button::link
        };
        button(text(label).size(typography::BODY))
            .on_press(message)
            .padding(spacing::XS)
            .style(style)
    };

    let middle: Element<'_, Message> = if ctx.active == ViewId::ByPrompt {
        mouse_area(
            Container::new(ProgressTicks::new(PROMPT_COUNT, ctx.prompt_index.value()).into_element())
                .width(Length::Fill)
                .padding([0.0, spacing::LG]),
        )
        .on_press(Message::ProgressPressed)
        .into()
    } else {
        Space::new().width(Length::Fill).into()
    };

    let row = Row::new()
        .align_y(Vertical::Center)
        .padding([0.0, spacing::SM])
        .push(nav_button(
            ctx.i18n.tr("header-before-life"),
            ViewId::Form,
            Message::BeforeLifePressed,
        ))
        .push(middle)
        .push(nav_button(
            ctx.i18n.tr("header-afterlife"),
            ViewId::About,
            Message::AfterlifePressed,
        ));

    mouse_area(
        Container::new(row)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HEADER_HEIGHT))
            .align_y(Vertical::Center)
            .style(styles::container::bar),
    )
    .on_press(Message::BackgroundPressed)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_navigate_to_form_and_about() {
        assert_eq!(
            update(&Message::BeforeLifePressed),
            Event::Navigate(ViewId::Form)
        );
        assert_eq!(
            update(&Message::AfterlifePressed),
            Event::Navigate(ViewId::About)
        );
    }

    #[test]
    fn background_returns_to_gallery() {
        assert_eq!(
            update(&Message::BackgroundPressed),
            Event::Navigate(ViewId::Gallery)
        );
    }

    #[test]
    fn progress_strip_is_inert() {
        assert_eq!(update(&Message::ProgressPressed), Event::None);
    }
}
