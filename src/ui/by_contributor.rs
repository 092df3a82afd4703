// SPDX-License-Identifier: MPL-2.0
//! Contributor view: the full archive of the selected contributor.
//!
//! The selection lives in the orchestrator and arrives through the
//! [`ViewContext`]. Clicking an image opens it in the [`image_modal`].

use crate::domain::assets::AssetLayout;
use crate::domain::browsing::{ContributorIndex, PromptIndex};
use crate::domain::catalog::PROMPT_COUNT;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::image_modal;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, scrollable, Container, Row};
use iced::{ContentFit, Element, Length};
use std::path::PathBuf;

/// Contextual data needed to render the contributor view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: &'a AssetLayout,
    pub contributor: ContributorIndex,
}

#[derive(Debug, Clone)]
pub enum Message {
    ImagePressed(usize),
    Modal(image_modal::Message),
}

#[derive(Debug, Default)]
pub struct State {
    modal: Option<image_modal::State>,
}

/// Archive image paths of `contributor`, in prompt order.
#[must_use]
pub fn archive_paths(layout: &AssetLayout, contributor: ContributorIndex) -> Vec<PathBuf> {
    (0..PROMPT_COUNT)
        .map(|i| layout.archive_image(contributor, PromptIndex::new(i)))
        .collect()
}

impl State {
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    #[must_use]
    pub fn modal(&self) -> Option<&image_modal::State> {
        self.modal.as_ref()
    }

    /// Closes the modal, e.g. when the selection changes underneath it.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn update(&mut self, message: Message, layout: &AssetLayout, contributor: ContributorIndex) {
        match message {
            Message::ImagePressed(index) => {
                self.modal = image_modal::State::open(archive_paths(layout, contributor), index);
            }
            Message::Modal(modal_message) => {
                let closed = self
                    .modal
                    .as_mut()
                    .is_some_and(|modal| modal.update(&modal_message) == image_modal::Event::Closed);
                if closed {
                    self.modal = None;
                }
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        if let Some(modal) = &self.modal {
            return modal
                .view(image_modal::ViewContext { i18n: ctx.i18n })
                .map(Message::Modal);
        }

        let cells: Vec<Element<'a, Message>> = archive_paths(ctx.layout, ctx.contributor)
            .into_iter()
            .enumerate()
            .map(|(index, path)| {
                button(
                    Image::new(Handle::from_path(path))
                        .width(Length::Fixed(sizing::THUMBNAIL))
                        .height(Length::Fixed(sizing::THUMBNAIL))
                        .content_fit(ContentFit::Cover),
                )
                .padding(0)
                .style(styles::button::bare)
                .on_press(Message::ImagePressed(index))
                .into()
            })
            .collect();

        scrollable(
            Container::new(Row::with_children(cells).spacing(spacing::XS).wrap())
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
