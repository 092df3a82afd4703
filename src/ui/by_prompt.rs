// SPDX-License-Identifier: MPL-2.0
//! Prompt view: the five contributors' images for one prompt, side by side.
//!
//! The view has no timers of its own. Index, autoplay and narration are
//! owned by the orchestrator; this module only renders.

use crate::domain::assets::AssetLayout;
use crate::domain::browsing::{ContributorIndex, PromptIndex};
use crate::domain::catalog::{self, CONTRIBUTOR_COUNT};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::alignment::Horizontal;
use iced::widget::image::{Handle, Image};
use iced::widget::{text, Column, Container, Row};
use iced::{ContentFit, Element, Length};
use std::path::PathBuf;

/// Contextual data needed to render the prompt view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: &'a AssetLayout,
    pub index: PromptIndex,
}

/// Image paths shown for `index`, one per contributor, in contributor order.
#[must_use]
pub fn image_paths(layout: &AssetLayout, index: PromptIndex) -> Vec<PathBuf> {
    (0..CONTRIBUTOR_COUNT)
        .filter_map(ContributorIndex::new)
        .map(|contributor| layout.prompt_image(contributor, index))
        .collect()
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let images: Vec<Element<'a, Message>> = image_paths(ctx.layout, ctx.index)
        .into_iter()
        .map(|path| {
            Container::new(
                Image::new(Handle::from_path(path))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Contain),
            )
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .into()
        })
        .collect();

    #[allow(clippy::cast_possible_wrap)] // prompt numbers are two digits
    let caption = ctx.i18n.tr_with_args(
        "by-prompt-caption",
        &[
            ("number", FluentValue::from(ctx.index.number() as i64)),
            ("prompt", FluentValue::from(catalog::prompt(ctx.index))),
        ],
    );

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Row::with_children(images)
                .spacing(spacing::SM)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(
            text(caption)
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_image_per_contributor_for_the_prompt() {
        let layout = AssetLayout::new("/assets", "jpg", "png");
        let paths = image_paths(&layout, PromptIndex::new(9));

        assert_eq!(paths.len(), CONTRIBUTOR_COUNT);
        assert_eq!(paths[0], PathBuf::from("/assets/images/andrey/andrey_10.jpg"));
        assert_eq!(paths[4], PathBuf::from("/assets/images/jeff/jeff_10.jpg"));
    }
}
