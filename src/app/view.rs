// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Header and footer stay mounted around the active view; toasts are layered
//! on top of everything.

use super::message::Message;
use super::navigation::{NavigationState, PromptBrowsing};
use super::screen::{Mounted, Screen};
use crate::domain::assets::AssetLayout;
use crate::domain::browsing::ContributorIndex;
use crate::domain::form::FormStep;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::{about, by_contributor, by_prompt, card, footer, form, gallery, header, text};
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: &'a AssetLayout,
    pub navigation: &'a NavigationState,
    pub prompt: &'a PromptBrowsing,
    pub contributor: ContributorIndex,
    pub form_step: FormStep,
    pub screen: &'a Screen,
    pub footer: &'a footer::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let active = ctx.navigation.active();

    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        active,
        prompt_index: ctx.prompt.index(),
    })
    .map(Message::Header);

    let (text_camera_on, text_sound_on) = match &ctx.screen.mounted {
        Mounted::Text(state) => (state.camera_on(), state.sound_on()),
        _ => (false, false),
    };
    let footer = footer::view(footer::ViewContext {
        i18n: ctx.i18n,
        active,
        disclosure: ctx.footer.disclosure(),
        prompt_paused: ctx.prompt.is_paused(),
        prompt_sound_on: ctx.prompt.sound_on(),
        contributor: ctx.contributor,
        text_camera_on,
        text_sound_on,
        form_step: ctx.form_step,
    })
    .map(Message::Footer);

    let body = if ctx.navigation.is_loading_transition() {
        loading(ctx.i18n)
    } else {
        view_mounted(&ctx)
    };

    let page = Column::new()
        .push(header)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(footer)
        .width(Length::Fill)
        .height(Length::Fill);

    let base = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_mounted<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    match &ctx.screen.mounted {
        Mounted::Gallery(state) => state
            .view(gallery::ViewContext { i18n })
            .map(Message::Gallery),
        Mounted::Form(state) => state.view(form::ViewContext { i18n }).map(Message::Form),
        Mounted::About => about::view(about::ViewContext {
            i18n,
            layout: ctx.layout,
        })
        .map(Message::About),
        Mounted::Text(state) => state.view(text::ViewContext { i18n }),
        Mounted::ByPrompt => by_prompt::view(by_prompt::ViewContext {
            i18n,
            layout: ctx.layout,
            index: ctx.prompt.index(),
        }),
        Mounted::ByContributor(state) => state
            .view(by_contributor::ViewContext {
                i18n,
                layout: ctx.layout,
                contributor: ctx.contributor,
            })
            .map(Message::ByContributor),
        Mounted::Card(state) => state.view(card::ViewContext { i18n }).map(Message::Card),
    }
}

fn loading(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("transition-loading")).size(typography::TITLE))
        .center(Length::Fill)
        .into()
}
