// SPDX-License-Identifier: MPL-2.0
//! Footer bar.
//!
//! The left side is a progressive disclosure: a base label, then the mode
//! toggle (Images | Text), then the filter row (All | By Prompt | By
//! Contributor). Hovering the bar reveals the modes, hovering the modes
//! reveals the filters, and leaving falls back to the baseline of the active
//! view. The right side carries the controls of the active view.
//!
//! The footer never owns canonical state: it reads the [`ViewContext`] and
//! reports [`Event`]s. Only the disclosure is local, and it is recomputed
//! from the active view on every view change through [`State::sync`].

use crate::domain::browsing::ContributorIndex;
use crate::domain::catalog::CONTRIBUTOR_COUNT;
use crate::domain::form::FormStep;
use crate::domain::view::ViewId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::alignment::Vertical;
use iced::widget::{button, mouse_area, text, Container, Row, Space};
use iced::{Element, Length};

// =============================================================================
// Disclosure
// =============================================================================

/// How much of the navigation is shown. Ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Disclosure {
    #[default]
    Collapsed,
    ModesShown,
    FiltersShown,
}

impl Disclosure {
    /// What the footer shows for `view` when the pointer is elsewhere.
    #[must_use]
    pub fn baseline(view: ViewId) -> Self {
        match view {
            ViewId::Gallery | ViewId::Form | ViewId::About | ViewId::Card => Disclosure::Collapsed,
            ViewId::Text => Disclosure::ModesShown,
            ViewId::ByPrompt | ViewId::ByContributor => Disclosure::FiltersShown,
        }
    }

    #[must_use]
    pub fn shows_modes(self) -> bool {
        self >= Disclosure::ModesShown
    }

    #[must_use]
    pub fn shows_filters(self) -> bool {
        self == Disclosure::FiltersShown
    }
}

/// Local hover state of the footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    baseline: Disclosure,
    hovered: Disclosure,
}

impl State {
    #[must_use]
    pub fn new(active: ViewId) -> Self {
        Self {
            baseline: Disclosure::baseline(active),
            hovered: Disclosure::Collapsed,
        }
    }

    /// Realigns the baseline with a newly active view.
    pub fn sync(&mut self, active: ViewId) {
        self.baseline = Disclosure::baseline(active);
    }

    /// What is currently shown; never narrower than the baseline.
    #[must_use]
    pub fn disclosure(&self) -> Disclosure {
        self.baseline.max(self.hovered)
    }

    fn reveal(&mut self, level: Disclosure) {
        self.hovered = self.hovered.max(level);
    }
}

// =============================================================================
// Component
// =============================================================================

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: ViewId,
    pub disclosure: Disclosure,
    pub prompt_paused: bool,
    pub prompt_sound_on: bool,
    pub contributor: ContributorIndex,
    pub text_camera_on: bool,
    pub text_sound_on: bool,
    pub form_step: FormStep,
}

#[derive(Debug, Clone)]
pub enum Message {
    FooterEntered,
    FooterExited,
    ModesEntered,
    SelectView(ViewId),
    PreviousPrompt,
    NextPrompt,
    TogglePause,
    TogglePromptSound,
    SelectContributor(usize),
    ToggleTextCamera,
    ToggleTextSound,
}

/// Events propagated to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(ViewId),
    PreviousPrompt,
    NextPrompt,
    TogglePause,
    TogglePromptSound,
    SelectContributor(usize),
    ToggleTextCamera,
    ToggleTextSound,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FooterEntered => {
            state.reveal(Disclosure::ModesShown);
            Event::None
        }
        Message::ModesEntered => {
            state.reveal(Disclosure::FiltersShown);
            Event::None
        }
        Message::FooterExited => {
            state.hovered = Disclosure::Collapsed;
            Event::None
        }
        Message::SelectView(target) => {
            if target.is_filter() {
                state.reveal(Disclosure::FiltersShown);
            }
            Event::Navigate(target)
        }
        Message::PreviousPrompt => Event::PreviousPrompt,
        Message::NextPrompt => Event::NextPrompt,
        Message::TogglePause => Event::TogglePause,
        Message::TogglePromptSound => Event::TogglePromptSound,
        Message::SelectContributor(index) => Event::SelectContributor(index),
        Message::ToggleTextCamera => Event::ToggleTextCamera,
        Message::ToggleTextSound => Event::ToggleTextSound,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navigation = build_navigation(&ctx);
    let controls = build_view_controls(&ctx);

    let row = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::MD)
        .padding([0.0, spacing::SM])
        .push(navigation)
        .push(Space::new().width(Length::Fill))
        .push(controls);

    mouse_area(
        Container::new(row)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::FOOTER_HEIGHT))
            .align_y(Vertical::Center)
            .style(styles::container::bar),
    )
    .on_enter(Message::FooterEntered)
    .on_exit(Message::FooterExited)
    .into()
}

fn link<'a>(label: String, active: bool, message: Message) -> Element<'a, Message> {
    let style = if active {
        styles::button::link_active
    } else {
        styles::button::link
    };
    button(text(label).size(typography::CAPTION))
        .on_press(message)
        .padding(spacing::XXS)
        .style(style)
        .into()
}

fn separator<'a>(i18n: &I18n) -> Element<'a, Message> {
    text(i18n.tr("footer-separator"))
        .size(typography::CAPTION)
        .style(styles::text::muted)
        .into()
}

fn build_navigation<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let disclosure = ctx.disclosure;

    if !disclosure.shows_modes() {
        return text(i18n.tr("footer-base-label"))
            .size(typography::CAPTION)
            .into();
    }

    let modes = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(link(
            i18n.tr("footer-mode-images"),
            ctx.active.is_image_mode(),
            Message::SelectView(ViewId::Gallery),
        ))
        .push(separator(i18n))
        .push(link(
            i18n.tr("footer-mode-text"),
            ctx.active == ViewId::Text,
            Message::SelectView(ViewId::Text),
        ));
    let modes = mouse_area(modes).on_enter(Message::ModesEntered);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(modes);

    if disclosure.shows_filters() {
        let filter = |key: &str, target: ViewId| {
            link(
                i18n.tr(key),
                ctx.active == target,
                Message::SelectView(target),
            )
        };
        row = row.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(
                    text(i18n.tr("footer-filter-label"))
                        .size(typography::CAPTION)
                        .style(styles::text::muted),
                )
                .push(filter("footer-filter-all", ViewId::Gallery))
                .push(separator(i18n))
                .push(filter("footer-filter-by-prompt", ViewId::ByPrompt))
                .push(separator(i18n))
                .push(filter("footer-filter-by-contributor", ViewId::ByContributor)),
        );
    }

    row.into()
}

fn build_view_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);

    match ctx.active {
        ViewId::ByPrompt => {
            let pause_key = if ctx.prompt_paused {
                "footer-play"
            } else {
                "footer-pause"
            };
            let sound_key = if ctx.prompt_sound_on {
                "footer-sound-on"
            } else {
                "footer-sound-off"
            };
            row.push(link(
                i18n.tr("footer-prompt-previous"),
                false,
                Message::PreviousPrompt,
            ))
            .push(link(i18n.tr(pause_key), ctx.prompt_paused, Message::TogglePause))
            .push(link(
                i18n.tr("footer-prompt-next"),
                false,
                Message::NextPrompt,
            ))
            .push(separator(i18n))
            .push(link(
                i18n.tr(sound_key),
                ctx.prompt_sound_on,
                Message::TogglePromptSound,
            ))
            .into()
        }
        ViewId::ByContributor => (0..CONTRIBUTOR_COUNT)
            .fold(row.spacing(spacing::XS), |row, index| {
                let row = if index > 0 { row.push(separator(i18n)) } else { row };
                row.push(link(
                    (index + 1).to_string(),
                    ctx.contributor.value() == index,
                    Message::SelectContributor(index),
                ))
            })
            .into(),
        ViewId::Text => {
            let camera_key = if ctx.text_camera_on {
                "footer-camera-on"
            } else {
                "footer-camera-off"
            };
            let sound_key = if ctx.text_sound_on {
                "footer-sound-on"
            } else {
                "footer-sound-off"
            };
            row.push(link(
                i18n.tr(camera_key),
                ctx.text_camera_on,
                Message::ToggleTextCamera,
            ))
            .push(separator(i18n))
            .push(link(
                i18n.tr(sound_key),
                ctx.text_sound_on,
                Message::ToggleTextSound,
            ))
            .into()
        }
        ViewId::Form => match ctx.form_step.number() {
            Some(current) => row
                .push(
                    text(i18n.tr_with_args(
                        "footer-step-indicator",
                        &[
                            ("current", FluentValue::from(i64::from(current))),
                            ("total", FluentValue::from(i64::from(FormStep::TOTAL))),
                        ],
                    ))
                    .size(typography::CAPTION),
                )
                .into(),
            None => row.into(),
        },
        ViewId::Gallery | ViewId::About | ViewId::Card => row.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_starts_collapsed() {
        let state = State::new(ViewId::Gallery);
        assert_eq!(state.disclosure(), Disclosure::Collapsed);
    }

    #[test]
    fn hover_reveals_progressively_and_collapses_on_leave() {
        let mut state = State::new(ViewId::Gallery);

        update(&mut state, Message::FooterEntered);
        assert_eq!(state.disclosure(), Disclosure::ModesShown);

        update(&mut state, Message::ModesEntered);
        assert_eq!(state.disclosure(), Disclosure::FiltersShown);

        update(&mut state, Message::FooterExited);
        assert_eq!(state.disclosure(), Disclosure::Collapsed);
    }

    #[test]
    fn filter_views_keep_filters_shown_after_leave() {
        let mut state = State::new(ViewId::Gallery);
        update(&mut state, Message::FooterEntered);
        update(&mut state, Message::ModesEntered);

        let event = update(&mut state, Message::SelectView(ViewId::ByPrompt));
        assert_eq!(event, Event::Navigate(ViewId::ByPrompt));
        state.sync(ViewId::ByPrompt);

        update(&mut state, Message::FooterExited);
        assert_eq!(state.disclosure(), Disclosure::FiltersShown);
    }

    #[test]
    fn returning_to_gallery_collapses_once_pointer_leaves() {
        let mut state = State::new(ViewId::ByContributor);
        update(&mut state, Message::FooterEntered);
        update(&mut state, Message::SelectView(ViewId::Gallery));
        state.sync(ViewId::Gallery);
        assert_eq!(state.disclosure(), Disclosure::ModesShown);

        update(&mut state, Message::FooterExited);
        assert_eq!(state.disclosure(), Disclosure::Collapsed);
    }

    #[test]
    fn text_view_baseline_shows_modes() {
        let mut state = State::new(ViewId::Gallery);
        state.sync(ViewId::Text);
        assert_eq!(state.disclosure(), Disclosure::ModesShown);
        assert!(!state.disclosure().shows_filters());
    }

    #[test]
    fn entering_modes_without_footer_hover_still_widens() {
        let mut state = State::new(ViewId::Text);
        update(&mut state, Message::ModesEntered);
        assert_eq!(state.disclosure(), Disclosure::FiltersShown);
    }

    #[test]
    fn transport_messages_become_events() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::SelectContributor(3)),
            Event::SelectContributor(3)
        );
        assert_eq!(update(&mut state, Message::NextPrompt), Event::NextPrompt);
        assert_eq!(
            update(&mut state, Message::ToggleTextCamera),
            Event::ToggleTextCamera
        );
    }
}
