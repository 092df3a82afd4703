// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::contribution::ContributionReport;
use crate::application::port::{CameraError, PlaybackError};
use crate::domain::view::ViewId;
use crate::ui::{about, by_contributor, card, footer, form, gallery, header, notifications};
use iced::keyboard;
use std::path::PathBuf;
use std::time::Instant;

use super::screen::SessionId;

/// Which part of the application asked for a narration clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrator {
    Prompt,
    Text,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic clock for every deadline in the application.
    Tick(Instant),
    SwitchView(ViewId),
    /// Switch by identifier; unknown names fall back to the gallery.
    SwitchViewNamed(String),
    Header(header::Message),
    Footer(footer::Message),
    Gallery(gallery::Message),
    ByContributor(by_contributor::Message),
    Form(form::Message),
    About(about::Message),
    Card(card::Message),
    Notification(notifications::NotificationMessage),
    /// A key press the focused widget did not consume.
    KeyPressed(keyboard::Key),
    /// Any key or mouse button press, consumed or not.
    Gesture,
    WindowResized(iced::Size),
    WindowFocused,
    PlaybackFinished {
        session: SessionId,
        narrator: Narrator,
        result: Result<(), PlaybackError>,
    },
    CameraStarted {
        session: SessionId,
        result: Result<(), CameraError>,
    },
    ImagePicked {
        session: SessionId,
        slot: usize,
        path: Option<PathBuf>,
    },
    FormSubmitted {
        session: SessionId,
        report: ContributionReport,
    },
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// View shown at startup; takes precedence over `[general] start_view`.
    pub start_view: Option<String>,
}
