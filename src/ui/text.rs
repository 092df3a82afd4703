// SPDX-License-Identifier: MPL-2.0
//! Text view: the scrolling phrase list with narration and a live camera.
//!
//! The list moves up at a fixed speed and starts again from the bottom
//! once the last row has left the viewport. Whenever a different phrase
//! crosses the vertical centre, its clip is requested from the orchestrator.
//!
//! Narration failures feed a consecutive-failure breaker: a success resets
//! it, and reaching the configured limit disables narration. The orchestrator
//! remembers that outcome and mounts later instances already disabled, so
//! narration stays off for the rest of the run. The pre-gesture `Blocked`
//! refusal is expected and does not count; the centred phrase is requested
//! again on the first gesture instead.
//!
//! Camera and audio I/O live in the orchestrator; this state only asks for
//! them through [`Event`]s and receives the outcomes back.

use crate::app::config::TextConfig;
use crate::application::port::{CameraError, PlaybackError};
use crate::domain::browsing::ClipNumber;
use crate::domain::catalog::{PROMPT_COUNT, TEXT_PHRASES};
use crate::domain::frame::CameraFrame;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::image::{Handle, Image};
use iced::widget::{text, Column, Container, Stack};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Theme};
use std::time::Instant;

/// Height of one phrase row in logical pixels.
pub const ROW_HEIGHT: f32 = sizing::PHRASE_ROW;

#[allow(clippy::cast_precision_loss)] // 45 rows
const LIST_HEIGHT: f32 = PROMPT_COUNT as f32 * ROW_HEIGHT;

/// Requests for the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    PlayClip(ClipNumber),
    StopAudio,
    AcquireCamera,
    ReleaseCamera,
}

/// Contextual data needed to render the text view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Camera {
    Off,
    Starting,
    Live,
    Failed(String),
}

/// Index of the phrase under the vertical centre of a viewport
/// `viewport_height` tall whose list top sits at `offset`.
#[must_use]
pub fn center_index(viewport_height: f32, offset: f32) -> Option<usize> {
    let row = ((viewport_height / 2.0 - offset) / ROW_HEIGHT).floor();
    if row < 0.0 || !row.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let row = row as usize;
    (row < PROMPT_COUNT).then_some(row)
}

#[derive(Debug)]
pub struct State {
    speed: f32,
    failure_limit: u32,
    viewport_height: f32,
    /// Y position of the first row relative to the viewport top.
    offset: f32,
    last_tick: Option<Instant>,
    centered: Option<usize>,
    consecutive_failures: u32,
    audio_disabled: bool,
    /// The last clip was refused before the first gesture.
    blocked: bool,
    sound_on: bool,
    camera_on: bool,
    camera: Camera,
    frame: Option<Handle>,
}

impl State {
    /// Mounts the view with the list just below the viewport. Returns the
    /// camera request when the camera starts enabled.
    ///
    /// `audio_disabled` carries the breaker outcome of an earlier mount.
    #[must_use]
    pub fn new(config: &TextConfig, viewport_height: f32, audio_disabled: bool) -> (Self, Event) {
        let camera_on = config.camera_enabled.unwrap_or(false);
        let state = Self {
            speed: config.scroll_speed(),
            failure_limit: config.failure_limit(),
            viewport_height,
            offset: viewport_height,
            last_tick: None,
            centered: None,
            consecutive_failures: 0,
            audio_disabled,
            blocked: false,
            sound_on: config.sound_enabled.unwrap_or(true),
            camera_on,
            camera: if camera_on { Camera::Starting } else { Camera::Off },
            frame: None,
        };
        let event = if camera_on {
            Event::AcquireCamera
        } else {
            Event::None
        };
        (state, event)
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn centered(&self) -> Option<usize> {
        self.centered
    }

    #[must_use]
    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    #[must_use]
    pub fn camera_on(&self) -> bool {
        self.camera_on
    }

    #[must_use]
    pub fn is_camera_live(&self) -> bool {
        self.camera == Camera::Live
    }

    #[must_use]
    pub fn camera_failed(&self) -> bool {
        matches!(self.camera, Camera::Failed(_))
    }

    #[must_use]
    pub fn is_audio_disabled(&self) -> bool {
        self.audio_disabled
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
    }

    /// Advances the scroll to `now` and reports a newly centred phrase.
    pub fn tick(&mut self, now: Instant) -> Event {
        let elapsed = self
            .last_tick
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last_tick = Some(now);

        self.offset -= self.speed * elapsed;
        if self.offset < -LIST_HEIGHT {
            self.offset = self.viewport_height;
        }

        let centered = center_index(self.viewport_height, self.offset);
        if centered == self.centered {
            return Event::None;
        }
        self.centered = centered;

        match centered {
            Some(row) => self.clip_request(row),
            None => Event::None,
        }
    }

    fn clip_request(&self, row: usize) -> Event {
        if self.audio_disabled || !self.sound_on {
            return Event::None;
        }
        TEXT_PHRASES
            .get(row)
            .map_or(Event::None, |phrase| Event::PlayClip(phrase.clip))
    }

    /// Feeds a narration outcome into the failure breaker.
    pub fn playback_finished(&mut self, result: &Result<(), PlaybackError>) {
        match result {
            Ok(()) => {
                self.consecutive_failures = 0;
                self.blocked = false;
            }
            Err(err) if err.is_blocked() => {
                tracing::debug!("phrase narration waits for the first gesture");
                self.blocked = true;
            }
            Err(err) => {
                self.blocked = false;
                self.consecutive_failures += 1;
                tracing::warn!(
                    %err,
                    failures = self.consecutive_failures,
                    "phrase narration failed"
                );
                if self.consecutive_failures >= self.failure_limit && !self.audio_disabled {
                    self.audio_disabled = true;
                    tracing::warn!("phrase narration disabled after repeated failures");
                }
            }
        }
    }

    /// A key or mouse press was seen. Requests the centred phrase again if
    /// its clip was refused for lack of a gesture.
    pub fn gesture_observed(&mut self) -> Event {
        if !std::mem::take(&mut self.blocked) {
            return Event::None;
        }
        self.centered.map_or(Event::None, |row| self.clip_request(row))
    }

    pub fn toggle_sound(&mut self) -> Event {
        self.sound_on = !self.sound_on;
        if self.sound_on {
            self.centered.map_or(Event::None, |row| self.clip_request(row))
        } else {
            Event::StopAudio
        }
    }

    pub fn toggle_camera(&mut self) -> Event {
        self.camera_on = !self.camera_on;
        if self.camera_on {
            self.camera = Camera::Starting;
            Event::AcquireCamera
        } else {
            self.camera = Camera::Off;
            self.frame = None;
            Event::ReleaseCamera
        }
    }

    /// Window focus came back; reacquire a camera that was lost meanwhile.
    pub fn window_focused(&mut self, stream_active: bool) -> Event {
        if !self.camera_on || stream_active || self.camera == Camera::Starting {
            return Event::None;
        }
        self.camera = Camera::Starting;
        self.frame = None;
        Event::AcquireCamera
    }

    /// Outcome of a camera acquisition.
    pub fn camera_started(&mut self, result: Result<(), CameraError>) -> Event {
        if !self.camera_on {
            // Switched off while starting.
            return Event::ReleaseCamera;
        }
        match result {
            Ok(()) => {
                tracing::info!("camera started");
                self.camera = Camera::Live;
            }
            Err(err) => self.camera_lost(&err),
        }
        Event::None
    }

    /// The running stream failed.
    pub fn camera_lost(&mut self, err: &CameraError) {
        tracing::warn!(%err, "camera unavailable");
        self.camera = Camera::Failed(err.to_string());
        self.frame = None;
    }

    pub fn show_frame(&mut self, frame: &CameraFrame) {
        if self.camera == Camera::Live {
            self.frame = Some(Handle::from_rgba(
                frame.width(),
                frame.height(),
                frame.rgba_bytes().to_vec(),
            ));
        }
    }

    pub fn view<'a, Message: 'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let strip = Canvas::new(PhraseStrip {
            offset: self.offset,
            centered: self.centered,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut side = Column::new().spacing(spacing::SM).align_x(Horizontal::Right);

        if let Some(frame) = &self.frame {
            side = side.push(
                Image::new(frame.clone()).width(Length::Fixed(sizing::CAMERA_PREVIEW_WIDTH)),
            );
        } else if self.camera_failed() {
            side = side.push(
                text(ctx.i18n.tr("text-camera-error"))
                    .size(typography::CAPTION)
                    .style(styles::text::error),
            );
        }

        if self.audio_disabled {
            side = side.push(
                text(ctx.i18n.tr("text-audio-disabled"))
                    .size(typography::CAPTION)
                    .style(styles::text::muted),
            );
        }

        let overlay = Container::new(side)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(strip)
            .push(overlay)
            .into()
    }
}

/// Canvas program drawing the visible phrase rows.
struct PhraseStrip {
    offset: f32,
    centered: Option<usize>,
}

impl<Message> canvas::Program<Message> for PhraseStrip {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let colors = ColorScheme::for_theme(theme);
        let mut frame = Frame::new(renderer, bounds.size());
        let center_x = frame.width() / 2.0;

        for (row, phrase) in TEXT_PHRASES.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let top = self.offset + row as f32 * ROW_HEIGHT;
            if top + ROW_HEIGHT < 0.0 || top > frame.height() {
                continue;
            }
            let color = if self.centered == Some(row) {
                colors.highlight
            } else {
                colors.text_primary
            };
            frame.fill_text(canvas::Text {
                content: phrase.text.to_string(),
                position: Point::new(center_x, top + ROW_HEIGHT / 2.0),
                color,
                size: typography::PHRASE.into(),
                align_x: iced::widget::text::Alignment::Center,
                align_y: Vertical::Center,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
