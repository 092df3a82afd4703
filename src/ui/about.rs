// SPDX-License-Identifier: MPL-2.0
//! About view: the project statement, the installation photograph and the
//! credits, with a link to the artist card.

use crate::domain::assets::AssetLayout;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, image, scrollable, text, Column, Container, Image},
    ContentFit, Element, Length,
};

const STATEMENT_KEYS: [&str; 3] = ["about-statement-1", "about-statement-2", "about-statement-3"];

/// Contextual data needed to render the about view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: &'a AssetLayout,
}

/// Messages emitted by the about view.
#[derive(Debug, Clone)]
pub enum Message {
    OpenCard,
}

/// Events propagated to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenCard,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenCard => Event::OpenCard,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::TEXT_COLUMN)
        .push(build_statement(&ctx))
        .push(build_installation(&ctx))
        .push(build_credits(&ctx));

    content = content.push(
        button(text(ctx.i18n.tr("about-card-link")).size(typography::BODY))
            .on_press(Message::OpenCard)
            .padding(0)
            .style(styles::button::link),
    );

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn build_statement<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    STATEMENT_KEYS
        .iter()
        .fold(Column::new().spacing(spacing::MD), |column, key| {
            column.push(text(ctx.i18n.tr(key)).size(typography::BODY))
        })
        .into()
}

/// Installation photograph and its caption.
fn build_installation<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let picture = Image::new(image::Handle::from_path(ctx.layout.about_image()))
        .width(Length::Fill)
        .content_fit(ContentFit::Contain);

    Column::new()
        .spacing(spacing::XS)
        .push(picture)
        .push(
            text(ctx.i18n.tr("about-caption"))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .into()
}

fn build_credits<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("about-credits-more")).size(typography::CAPTION))
        .push(
            text(ctx.i18n.tr("about-credits-copyright"))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_link_opens_the_card() {
        assert_eq!(update(&Message::OpenCard), Event::OpenCard);
    }

    #[test]
    fn view_builds_with_default_assets() {
        let i18n = I18n::default();
        let layout = AssetLayout::new("/assets", "jpg", "png");
        let _element = view(ViewContext {
            i18n: &i18n,
            layout: &layout,
        });
    }
}
