// SPDX-License-Identifier: MPL-2.0
//! Artist card, shown after a short loader typing the artist's name.

use crate::app::config::TimingConfig;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::loader::Loader;
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Container, Row, Space};
use iced::{alignment::Horizontal, Element, Length};
use std::time::Instant;

/// Contextual data needed to render the card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
}

#[derive(Debug)]
pub struct State {
    loader: Loader,
}

impl State {
    #[must_use]
    pub fn new(i18n: &I18n, timing: &TimingConfig, now: Instant) -> Self {
        let mut loader = Loader::new(i18n.tr("card-loader-title"), timing.loader_char());
        loader.start(now);
        Self { loader }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.loader.is_complete()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.loader.is_complete()
    }

    pub fn tick(&mut self, now: Instant) {
        if self.loader.tick(now) {
            tracing::debug!("card revealed");
        }
    }

    pub fn update(&mut self, message: &Message) -> Event {
        match message {
            Message::Back => Event::Back,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        if !self.loader.is_complete() {
            return self.loader.view();
        }

        let i18n = ctx.i18n;
        let line = |key: &str| text(i18n.tr(key)).size(typography::BODY);
        let caption = |key: &str| {
            text(i18n.tr(key))
                .size(typography::CAPTION)
                .style(styles::text::muted)
        };

        let identity = Row::new()
            .spacing(spacing::LG)
            .push(
                Column::new()
                    .push(line("card-first-name"))
                    .push(line("card-last-name")),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                Column::new()
                    .align_x(Horizontal::Right)
                    .push(line("card-number"))
                    .push(line("card-year"))
                    .push(caption("card-status")),
            );

        let contact = Column::new()
            .push(line("card-email"))
            .push(line("card-handle"));

        let education = Column::new()
            .spacing(spacing::XXS)
            .push(caption("card-education-title"))
            .push(line("card-education-ba"))
            .push(line("card-education-ma"));

        let released = Column::new()
            .spacing(spacing::XXS)
            .push(caption("card-released-title"))
            .push(line("card-released-site"))
            .push(caption("card-released-site-description"))
            .push(line("card-released-book"))
            .push(caption("card-released-book-description"));

        let soon = Column::new()
            .spacing(spacing::XXS)
            .push(caption("card-soon-title"))
            .push(line("card-soon-film"))
            .push(caption("card-soon-film-description"))
            .push(caption("card-preview"));

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .max_width(sizing::TEXT_COLUMN)
            .push(
                button(text(i18n.tr("card-back")).size(typography::BODY))
                    .on_press(Message::Back)
                    .padding(0)
                    .style(styles::button::link),
            )
            .push(identity)
            .push(contact)
            .push(education)
            .push(released)
            .push(soon)
            .push(text(i18n.tr("card-biography")).size(typography::BODY));

        scrollable(
            Container::new(content)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn card_is_hidden_until_the_loader_completes() {
        let start = Instant::now();
        let mut state = State::new(&I18n::default(), &TimingConfig::default(), start);
        assert!(!state.is_revealed());

        state.tick(start + Duration::from_millis(100));
        assert!(!state.is_revealed());

        state.tick(start + Duration::from_secs(30));
        assert!(state.is_revealed());
        assert!(!state.is_animating());
    }

    #[test]
    fn back_returns_to_about() {
        let mut state = State::new(&I18n::default(), &TimingConfig::default(), Instant::now());
        assert_eq!(state.update(&Message::Back), Event::Back);
    }
}
