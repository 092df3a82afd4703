// SPDX-License-Identifier: MPL-2.0
//! Full-screen intro that types a title before a view reveals its content.
//!
//! The loader waits for an optional delay, types its text, then holds the
//! finished title for a short grace period before reporting completion.

use crate::app::config::LOADER_COMPLETION_DELAY_MS;
use crate::ui::design_tokens::typography;
use crate::ui::typewriter::Typewriter;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::Container;
use iced::{Element, Length};
use std::time::{Duration, Instant};

/// Time between the last typed character and the completion signal.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(LOADER_COMPLETION_DELAY_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Waiting { until: Instant },
    Typing,
    Settling { until: Instant },
    Complete,
}

#[derive(Debug, Clone)]
pub struct Loader {
    writer: Typewriter,
    delay: Duration,
    instant: bool,
    state: State,
}

impl Loader {
    #[must_use]
    pub fn new(text: impl Into<String>, char_interval: Duration) -> Self {
        Self {
            writer: Typewriter::new(text, char_interval),
            delay: Duration::ZERO,
            instant: false,
            state: State::Idle,
        }
    }

    /// Waits `delay` after `start` before typing.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Shows the whole text at once and completes on the first tick.
    #[must_use]
    pub fn shown_instantly(mut self) -> Self {
        self.instant = true;
        self
    }

    pub fn start(&mut self, now: Instant) {
        if self.state != State::Idle {
            return;
        }
        self.state = if self.instant {
            State::Settling { until: now }
        } else {
            State::Waiting {
                until: now + self.delay,
            }
        };
    }

    /// Advances to `now`. Returns `true` exactly once, when the loader
    /// completes.
    pub fn tick(&mut self, now: Instant) -> bool {
        loop {
            match self.state {
                State::Idle | State::Complete => return false,
                State::Waiting { until } => {
                    if now < until {
                        return false;
                    }
                    self.writer.start(until);
                    self.state = State::Typing;
                }
                State::Typing => match self.writer.tick(now) {
                    Some(finished_at) => {
                        self.state = State::Settling {
                            until: finished_at + COMPLETION_DELAY,
                        };
                    }
                    None => return false,
                },
                State::Settling { until } => {
                    if now < until {
                        return false;
                    }
                    self.state = State::Complete;
                    return true;
                }
            }
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == State::Complete
    }

    /// Whether the loader still needs ticks.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !matches!(self.state, State::Idle | State::Complete)
    }

    /// Text as currently shown, with the cursor until typing is over.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self.state {
            State::Idle => String::new(),
            State::Waiting { .. } => crate::ui::typewriter::CURSOR.to_string(),
            State::Typing => self.writer.display_text(),
            State::Settling { .. } | State::Complete => self.writer.text().to_string(),
        }
    }

    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        Container::new(iced::widget::text(self.display_text()).size(typography::DISPLAY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}
