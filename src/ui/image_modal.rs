// SPDX-License-Identifier: MPL-2.0
//! Full-window image viewer opened from the contributor archive.
//!
//! Previous and next wrap around in both directions; Escape or `[EXIT]`
//! closes the modal.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, text, Container, Row, Stack};
use iced::{keyboard, ContentFit, Element, Length};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct State {
    images: Vec<PathBuf>,
    index: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Closed,
}

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Opens on `start`, clamped to the image list. `None` for an empty list.
    #[must_use]
    pub fn open(images: Vec<PathBuf>, start: usize) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let index = start.min(images.len() - 1);
        Some(Self { images, index })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> &PathBuf {
        &self.images[self.index]
    }

    pub fn update(&mut self, message: &Message) -> Event {
        let len = self.images.len();
        match message {
            Message::Previous => {
                self.index = (self.index + len - 1) % len;
                Event::None
            }
            Message::Next => {
                self.index = (self.index + 1) % len;
                Event::None
            }
            Message::Close => Event::Closed,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let control = |key: &str, message: Message| {
            button(text(ctx.i18n.tr(key)).size(typography::TITLE))
                .on_press(message)
                .padding(spacing::SM)
                .style(styles::button::link)
        };

        let picture = Container::new(
            Image::new(Handle::from_path(self.current()))
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain),
        )
        .padding(spacing::XXL)
        .width(Length::Fill)
        .height(Length::Fill);

        let arrows = Row::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Center)
            .push(control("modal-previous", Message::Previous))
            .push(iced::widget::Space::new().width(Length::Fill))
            .push(control("modal-next", Message::Next));

        let exit = Container::new(control("modal-exit", Message::Close))
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(spacing::SM);

        Container::new(Stack::new().push(picture).push(arrows).push(exit))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop)
            .into()
    }
}

/// Modal action bound to a key: ←/→ browse, Escape closes.
#[must_use]
pub fn key_message(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::Next),
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Close),
        _ => None,
    }
}
