// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler receives an [`UpdateContext`] with mutable access to the
//! orchestrator state and the `Instant` the message is processed at. Views
//! answer with `Event`s; the handlers here turn those into state changes
//! and port calls, and wrap asynchronous port results in `Task`s tagged
//! with the session of the view that asked.

use super::message::Narrator;
use super::navigation::{NavigationState, PromptBrowsing};
use super::screen::{Mounted, Screen, SessionId};
use super::{Message, Services};
use crate::app::config::Config;
use crate::application::contribution::{self, ContributionReport};
use crate::application::port::{CameraError, PlaybackError, SubmissionError};
use crate::domain::assets::AssetLayout;
use crate::domain::browsing::{ClipNumber, ContributorIndex};
use crate::domain::form::FormStep;
use crate::domain::view::ViewId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Notification};
use crate::ui::{about, by_contributor, card, footer, form, gallery, header, image_modal, text};
use iced::keyboard::{self, key::Named};
use iced::{Size, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub layout: &'a AssetLayout,
    pub services: &'a Services,
    pub navigation: &'a mut NavigationState,
    pub prompt: &'a mut PromptBrowsing,
    pub contributor: &'a mut ContributorIndex,
    pub form_step: &'a mut FormStep,
    /// Phrase narration was switched off by the failure breaker.
    pub text_audio_disabled: &'a mut bool,
    pub screen: &'a mut Screen,
    pub footer: &'a mut footer::State,
    pub notifications: &'a mut notifications::Manager,
    pub window_size: &'a mut Size,
    pub now: Instant,
}

/// Height left to a view between header and footer.
#[must_use]
pub fn viewport_height(window: Size) -> f32 {
    (window.height - sizing::HEADER_HEIGHT - sizing::FOOTER_HEIGHT).max(0.0)
}

// =============================================================================
// View switching
// =============================================================================

/// Activates `target`, re-arms the loading indicator and remounts the view.
pub fn switch_view(ctx: &mut UpdateContext<'_>, target: ViewId) -> Task<Message> {
    let previous = ctx
        .navigation
        .switch(target, ctx.now, ctx.config.timing.transition());
    ctx.footer.sync(target);

    if previous == target && ctx.screen.mounted.view_id() == target {
        return Task::none();
    }
    tracing::info!(from = previous.as_str(), to = target.as_str(), "switching view");

    unmount(ctx);
    ctx.screen.session = ctx.screen.session.next();
    let (mounted, task) = mount(ctx, target);
    ctx.screen.mounted = mounted;
    task
}

/// Switch by identifier. Unknown names land on the gallery.
pub fn switch_view_named(ctx: &mut UpdateContext<'_>, raw: &str) -> Task<Message> {
    let target = ViewId::parse(raw).unwrap_or_else(|| {
        tracing::debug!(raw, "unknown view identifier, showing the gallery");
        ViewId::default()
    });
    switch_view(ctx, target)
}

/// Releases what the mounted view holds.
fn unmount(ctx: &mut UpdateContext<'_>) {
    match &ctx.screen.mounted {
        Mounted::ByPrompt => ctx.services.narration.stop(),
        Mounted::Text(_) => {
            ctx.services.narration.stop();
            ctx.services.camera.stop();
        }
        Mounted::Gallery(_)
        | Mounted::Form(_)
        | Mounted::About
        | Mounted::ByContributor(_)
        | Mounted::Card(_) => {}
    }
}

/// Builds the state of `target`. The session must already be the new one.
pub fn mount(ctx: &mut UpdateContext<'_>, target: ViewId) -> (Mounted, Task<Message>) {
    let now = ctx.now;
    match target {
        ViewId::Gallery => {
            let mut state = gallery::State::new(
                ctx.layout,
                now,
                ctx.config.timing.slideshow_interval(),
                rand::random(),
            );
            state.set_window_width(ctx.window_size.width, now);
            (Mounted::Gallery(state), Task::none())
        }
        ViewId::Form => {
            let saved = match ctx.services.progress.load() {
                Ok(saved) => saved,
                Err(err) => {
                    tracing::warn!(%err, "could not read form progress");
                    ctx.notifications
                        .push(Notification::warning("notification-progress-load-error"));
                    None
                }
            };
            let state = form::State::new(ctx.i18n, &ctx.config.timing, now, saved);
            *ctx.form_step = state.step();
            (Mounted::Form(Box::new(state)), Task::none())
        }
        ViewId::About => (Mounted::About, Task::none()),
        ViewId::Text => {
            let (state, event) = text::State::new(
                &ctx.config.text,
                viewport_height(*ctx.window_size),
                *ctx.text_audio_disabled,
            );
            let task = handle_text_event(ctx, event);
            (Mounted::Text(state), task)
        }
        ViewId::ByPrompt => {
            ctx.prompt.restart_countdown(now);
            let task = sync_prompt_audio(ctx);
            (Mounted::ByPrompt, task)
        }
        ViewId::ByContributor => (
            Mounted::ByContributor(by_contributor::State::default()),
            Task::none(),
        ),
        ViewId::Card => (
            Mounted::Card(card::State::new(ctx.i18n, &ctx.config.timing, now)),
            Task::none(),
        ),
    }
}

// =============================================================================
// Clock
// =============================================================================

enum Followup {
    None,
    Form(form::Event),
    Text(text::Event),
}

/// Drives every deadline: loading indicator, autoplay, toasts and the
/// mounted view's own timers.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let now = ctx.now;
    ctx.notifications.tick(now);
    ctx.navigation.tick(now);

    let mut tasks = Vec::new();

    if ctx.navigation.active() == ViewId::ByPrompt {
        let steps = ctx
            .prompt
            .autoplay(now, ctx.config.timing.autoplay_interval());
        if steps > 0 {
            tracing::debug!(steps, index = ctx.prompt.index().value(), "autoplay");
            tasks.push(sync_prompt_audio(ctx));
        }
    }

    let followup = match &mut ctx.screen.mounted {
        Mounted::Gallery(state) => {
            state.tick(now);
            Followup::None
        }
        Mounted::Form(state) => Followup::Form(state.tick(now)),
        Mounted::Text(state) => {
            if let Some(err) = ctx.services.camera.take_error() {
                state.camera_lost(&err);
            }
            if state.is_camera_live() {
                if let Some(frame) = ctx.services.camera.latest_frame() {
                    state.show_frame(&frame);
                }
            }
            Followup::Text(state.tick(now))
        }
        Mounted::Card(state) => {
            state.tick(now);
            Followup::None
        }
        Mounted::About | Mounted::ByPrompt | Mounted::ByContributor(_) => Followup::None,
    };

    tasks.push(match followup {
        Followup::None => Task::none(),
        Followup::Form(event) => handle_form_event(ctx, event),
        Followup::Text(event) => handle_text_event(ctx, event),
    });

    Task::batch(tasks)
}

// =============================================================================
// Narration
// =============================================================================

fn play_clip(ctx: &UpdateContext<'_>, clip: ClipNumber, narrator: Narrator) -> Task<Message> {
    let narration = &ctx.services.narration;
    narration.stop();

    let path = ctx.layout.clip(clip);
    let session = ctx.screen.session;
    tracing::debug!(%clip, ?narrator, "starting narration");
    Task::perform(narration.play(&path), move |result| {
        Message::PlaybackFinished {
            session,
            narrator,
            result,
        }
    })
}

/// Stops the current clip and starts the one for the current prompt when
/// sound is on and a gesture has been seen.
pub fn sync_prompt_audio(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.navigation.active() != ViewId::ByPrompt {
        return Task::none();
    }
    ctx.services.narration.stop();
    match ctx.prompt.clip_to_play() {
        Some(clip) => play_clip(ctx, clip, Narrator::Prompt),
        None => Task::none(),
    }
}

fn ensure_unlocked(ctx: &UpdateContext<'_>) {
    if !ctx.services.narration.is_unlocked() {
        tracing::debug!("first gesture, narration unlocked");
        ctx.services.narration.unlock();
    }
}

/// Any key or mouse press.
pub fn handle_gesture(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ensure_unlocked(ctx);
    let prompt = match ctx.prompt.mark_gesture() {
        Some(clip) if ctx.navigation.active() == ViewId::ByPrompt && ctx.prompt.sound_on() => {
            play_clip(ctx, clip, Narrator::Prompt)
        }
        _ => Task::none(),
    };
    let text = match &mut ctx.screen.mounted {
        Mounted::Text(state) => state.gesture_observed(),
        _ => text::Event::None,
    };
    let text = handle_text_event(ctx, text);
    Task::batch([prompt, text])
}

pub fn handle_playback_finished(
    ctx: &mut UpdateContext<'_>,
    session: SessionId,
    narrator: Narrator,
    result: &Result<(), PlaybackError>,
) -> Task<Message> {
    match narrator {
        Narrator::Prompt => match result {
            Ok(()) => tracing::trace!("prompt narration started"),
            Err(err) if err.is_blocked() => tracing::debug!(%err, "prompt narration"),
            Err(err) => tracing::warn!(%err, "prompt narration failed"),
        },
        Narrator::Text => {
            if !ctx.screen.is_live(session, ViewId::Text) {
                return Task::none();
            }
            if let Mounted::Text(state) = &mut ctx.screen.mounted {
                state.playback_finished(result);
                if state.is_audio_disabled() && !*ctx.text_audio_disabled {
                    tracing::info!("phrase narration off for the rest of the run");
                    *ctx.text_audio_disabled = true;
                }
            }
        }
    }
    Task::none()
}

// =============================================================================
// Chrome
// =============================================================================

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: &header::Message) -> Task<Message> {
    match header::update(message) {
        header::Event::None => Task::none(),
        header::Event::Navigate(target) => switch_view(ctx, target),
    }
}

pub fn handle_footer_message(ctx: &mut UpdateContext<'_>, message: footer::Message) -> Task<Message> {
    match footer::update(ctx.footer, message) {
        footer::Event::None => Task::none(),
        footer::Event::Navigate(target) => switch_view(ctx, target),
        footer::Event::PreviousPrompt => go_to_previous_prompt(ctx),
        footer::Event::NextPrompt => go_to_next_prompt(ctx),
        footer::Event::TogglePause => {
            ctx.prompt.toggle_pause(ctx.now);
            Task::none()
        }
        footer::Event::TogglePromptSound => toggle_prompt_sound(ctx),
        footer::Event::SelectContributor(index) => {
            select_contributor(ctx, index);
            Task::none()
        }
        footer::Event::ToggleTextCamera => {
            let event = match &mut ctx.screen.mounted {
                Mounted::Text(state) => state.toggle_camera(),
                _ => text::Event::None,
            };
            handle_text_event(ctx, event)
        }
        footer::Event::ToggleTextSound => {
            let event = match &mut ctx.screen.mounted {
                Mounted::Text(state) => state.toggle_sound(),
                _ => text::Event::None,
            };
            handle_text_event(ctx, event)
        }
    }
}

pub fn go_to_next_prompt(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ensure_unlocked(ctx);
    ctx.prompt.go_next(ctx.now);
    sync_prompt_audio(ctx)
}

pub fn go_to_previous_prompt(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ensure_unlocked(ctx);
    ctx.prompt.go_previous(ctx.now);
    sync_prompt_audio(ctx)
}

pub fn toggle_prompt_sound(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.prompt.toggle_sound();
    if !ctx.prompt.sound_on() {
        ctx.services.narration.stop();
        return Task::none();
    }
    sync_prompt_audio(ctx)
}

/// Out-of-range selections are ignored.
pub fn select_contributor(ctx: &mut UpdateContext<'_>, index: usize) {
    let Some(contributor) = ContributorIndex::new(index) else {
        tracing::debug!(index, "ignoring out-of-range contributor");
        return;
    };
    if *ctx.contributor == contributor {
        return;
    }
    *ctx.contributor = contributor;
    if let Mounted::ByContributor(state) = &mut ctx.screen.mounted {
        state.close_modal();
    }
}

// =============================================================================
// Views
// =============================================================================

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let event = match &mut ctx.screen.mounted {
        Mounted::Gallery(state) => state.update(message),
        _ => gallery::Event::None,
    };
    match event {
        gallery::Event::None => Task::none(),
        gallery::Event::AllHidden => switch_view(ctx, ViewId::Text),
    }
}

pub fn handle_by_contributor_message(
    ctx: &mut UpdateContext<'_>,
    message: by_contributor::Message,
) -> Task<Message> {
    if let Mounted::ByContributor(state) = &mut ctx.screen.mounted {
        state.update(message, ctx.layout, *ctx.contributor);
    }
    Task::none()
}

pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        about::Event::None => Task::none(),
        about::Event::OpenCard => switch_view(ctx, ViewId::Card),
    }
}

pub fn handle_card_message(ctx: &mut UpdateContext<'_>, message: &card::Message) -> Task<Message> {
    let event = match &mut ctx.screen.mounted {
        Mounted::Card(state) => state.update(message),
        _ => card::Event::None,
    };
    match event {
        card::Event::None => Task::none(),
        card::Event::Back => switch_view(ctx, ViewId::About),
    }
}

pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: form::Message) -> Task<Message> {
    let event = match &mut ctx.screen.mounted {
        Mounted::Form(state) => state.update(message),
        _ => form::Event::None,
    };
    handle_form_event(ctx, event)
}

fn handle_form_event(ctx: &mut UpdateContext<'_>, event: form::Event) -> Task<Message> {
    match event {
        form::Event::None => Task::none(),
        form::Event::StepChanged(step) => {
            *ctx.form_step = step;
            Task::none()
        }
        form::Event::PickImage(slot) => {
            pick_image(ctx.screen.session, slot, ctx.i18n.tr("form-picker-title"))
        }
        form::Event::Submit(request) => submit_contribution(ctx, request),
        form::Event::DiscardSaved => {
            if let Err(err) = ctx.services.progress.clear() {
                tracing::warn!(%err, "could not delete saved form progress");
            }
            Task::none()
        }
        form::Event::LearnMore => switch_view(ctx, ViewId::About),
    }
}

fn pick_image(session: SessionId, slot: usize, title: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter("Images", &["jpg", "jpeg", "png", "webp", "gif"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::ImagePicked {
            session,
            slot,
            path,
        },
    )
}

pub fn handle_image_picked(
    ctx: &mut UpdateContext<'_>,
    session: SessionId,
    slot: usize,
    path: Option<PathBuf>,
) -> Task<Message> {
    if !ctx.screen.is_live(session, ViewId::Form) {
        tracing::debug!(slot, "dropping image pick for an unmounted form");
        return Task::none();
    }
    if let Mounted::Form(state) = &mut ctx.screen.mounted {
        state.image_picked(slot, path);
    }
    Task::none()
}

/// Saves progress, then uploads and submits in the background.
fn submit_contribution(ctx: &mut UpdateContext<'_>, request: form::SubmitRequest) -> Task<Message> {
    if let Err(err) = ctx.services.progress.save(&request.snapshot) {
        tracing::warn!(%err, "could not save form progress");
        ctx.notifications
            .push(Notification::warning("notification-progress-save-error"));
    }

    let host = ctx.services.host.clone();
    let submitter = ctx.services.submitter.clone();
    let session = ctx.screen.session;
    let timestamp = chrono::Utc::now().to_rfc3339();

    Task::perform(
        contribution::deliver(host, submitter, request.snapshot.fields, request.files, timestamp),
        move |report| Message::FormSubmitted { session, report },
    )
}

pub fn handle_form_submitted(
    ctx: &mut UpdateContext<'_>,
    session: SessionId,
    report: ContributionReport,
) -> Task<Message> {
    if report.failed_uploads > 0 {
        ctx.notifications.push(
            Notification::warning("notification-upload-partial")
                .with_count("failed", report.failed_uploads)
                .with_count("total", report.images),
        );
    }

    let outcome = match report.result {
        Ok(_) => {
            if let Err(err) = ctx.services.progress.clear() {
                tracing::warn!(%err, "could not clear form progress");
            }
            Ok(())
        }
        Err(SubmissionError::Rejected(message)) => Err(message),
        Err(_) => Err(ctx.i18n.tr("form-submit-failed")),
    };

    if !ctx.screen.is_live(session, ViewId::Form) {
        tracing::debug!("dropping submission result for an unmounted form");
        return Task::none();
    }
    let event = match &mut ctx.screen.mounted {
        Mounted::Form(state) => state.submission_finished(outcome, ctx.now),
        _ => form::Event::None,
    };
    handle_form_event(ctx, event)
}

fn handle_text_event(ctx: &mut UpdateContext<'_>, event: text::Event) -> Task<Message> {
    match event {
        text::Event::None => Task::none(),
        text::Event::PlayClip(clip) => play_clip(ctx, clip, Narrator::Text),
        text::Event::StopAudio => {
            ctx.services.narration.stop();
            Task::none()
        }
        text::Event::AcquireCamera => {
            let session = ctx.screen.session;
            Task::perform(ctx.services.camera.start(), move |result| {
                Message::CameraStarted { session, result }
            })
        }
        text::Event::ReleaseCamera => {
            ctx.services.camera.stop();
            Task::none()
        }
    }
}

pub fn handle_camera_started(
    ctx: &mut UpdateContext<'_>,
    session: SessionId,
    result: Result<(), CameraError>,
) -> Task<Message> {
    if !ctx.screen.is_live(session, ViewId::Text) {
        if result.is_ok() && !matches!(ctx.screen.mounted, Mounted::Text(_)) {
            ctx.services.camera.stop();
        }
        return Task::none();
    }
    let event = match &mut ctx.screen.mounted {
        Mounted::Text(state) => state.camera_started(result),
        _ => text::Event::None,
    };
    handle_text_event(ctx, event)
}

// =============================================================================
// Window and keyboard
// =============================================================================

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    match &mut ctx.screen.mounted {
        Mounted::Gallery(state) => state.set_window_width(size.width, ctx.now),
        Mounted::Text(state) => state.set_viewport_height(viewport_height(size)),
        _ => {}
    }
    Task::none()
}

/// Focus regained: the camera may have been taken away meanwhile.
pub fn handle_window_focused(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let stream_active = ctx.services.camera.is_active();
    let event = match &mut ctx.screen.mounted {
        Mounted::Text(state) => state.window_focused(stream_active),
        _ => text::Event::None,
    };
    handle_text_event(ctx, event)
}

pub fn handle_key(ctx: &mut UpdateContext<'_>, key: &keyboard::Key) -> Task<Message> {
    let gesture = handle_gesture(ctx);

    let action = match ctx.navigation.active() {
        ViewId::ByPrompt => match key {
            keyboard::Key::Named(Named::ArrowLeft) => go_to_previous_prompt(ctx),
            keyboard::Key::Named(Named::ArrowRight) => go_to_next_prompt(ctx),
            keyboard::Key::Named(Named::Space) => {
                ctx.prompt.toggle_pause(ctx.now);
                Task::none()
            }
            keyboard::Key::Character(c) if c.as_str().eq_ignore_ascii_case("m") => {
                toggle_prompt_sound(ctx)
            }
            _ => Task::none(),
        },
        ViewId::ByContributor => {
            let modal_open = matches!(
                &ctx.screen.mounted,
                Mounted::ByContributor(state) if state.is_modal_open()
            );
            match image_modal::key_message(key) {
                Some(message) if modal_open => handle_by_contributor_message(
                    ctx,
                    by_contributor::Message::Modal(message),
                ),
                _ => Task::none(),
            }
        }
        _ => Task::none(),
    };

    Task::batch([gesture, action])
}
