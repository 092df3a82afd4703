// SPDX-License-Identifier: MPL-2.0
//! Character-by-character text reveal.
//!
//! A [`Typewriter`] is a small state machine `Idle → Typing → Done` driven
//! by the instants of the application tick. Character `i` (one-based)
//! becomes visible `i` intervals after the start, and the unit reports
//! completion once, one interval after the last character.
//!
//! A [`Sequence`] chains several typewriters: each paragraph starts at the
//! instant the previous one finished, so the rhythm does not depend on how
//! often the caller ticks.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{text, Column, Text};
use iced::Element;
use std::time::{Duration, Instant};

/// Cursor drawn after the revealed text while typing.
pub const CURSOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Typing { started_at: Instant },
    Done,
}

/// Progressive reveal of one string.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    interval: Duration,
    phase: Phase,
    revealed: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        let text = text.into();
        Self {
            char_count: text.chars().count(),
            text,
            interval: interval.max(Duration::from_millis(1)),
            phase: Phase::Idle,
            revealed: 0,
        }
    }

    /// Starts typing at `now`. Restarting a running or finished typewriter
    /// is ignored.
    pub fn start(&mut self, now: Instant) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Typing { started_at: now };
        }
    }

    /// Advances the reveal to `now`.
    ///
    /// Returns the instant at which typing finished, exactly once, on the
    /// tick that observes the completion.
    pub fn tick(&mut self, now: Instant) -> Option<Instant> {
        let Phase::Typing { started_at } = self.phase else {
            return None;
        };

        let elapsed = now.saturating_duration_since(started_at);
        let steps = steps_elapsed(elapsed, self.interval);
        self.revealed = steps.min(self.char_count);

        if steps > self.char_count {
            self.phase = Phase::Done;
            return Some(started_at + self.total_duration());
        }
        None
    }

    /// Time from start to completion.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        let steps = u32::try_from(self.char_count + 1).unwrap_or(u32::MAX);
        self.interval.saturating_mul(steps)
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        matches!(self.phase, Phase::Typing { .. })
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Full text, regardless of progress.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Revealed prefix, cut on a character boundary.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        if self.is_done() {
            return &self.text;
        }
        match self.text.char_indices().nth(self.revealed) {
            Some((byte_index, _)) => &self.text[..byte_index],
            None => &self.text,
        }
    }

    /// Revealed prefix followed by the cursor while typing.
    #[must_use]
    pub fn display_text(&self) -> String {
        let mut shown = self.visible_text().to_string();
        if self.is_typing() {
            shown.push(CURSOR);
        }
        shown
    }

    pub fn view<'a>(&self, size: f32) -> Text<'a> {
        text(self.display_text()).size(size)
    }
}

fn steps_elapsed(elapsed: Duration, interval: Duration) -> usize {
    let steps = elapsed.as_nanos() / interval.as_nanos().max(1);
    usize::try_from(steps).unwrap_or(usize::MAX)
}

// =============================================================================
// Sequence
// =============================================================================

/// Paragraphs typed one after another.
#[derive(Debug, Clone)]
pub struct Sequence {
    paragraphs: Vec<Typewriter>,
    current: usize,
}

impl Sequence {
    #[must_use]
    pub fn new<I, S>(paragraphs: I, interval: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: paragraphs
                .into_iter()
                .map(|paragraph| Typewriter::new(paragraph, interval))
                .collect(),
            current: 0,
        }
    }

    /// Starts the first paragraph.
    pub fn start(&mut self, now: Instant) {
        if let Some(first) = self.paragraphs.first_mut() {
            first.start(now);
        }
    }

    /// Advances the running paragraph, chaining into the next ones.
    ///
    /// Returns `true` on the tick where the last paragraph finishes.
    pub fn tick(&mut self, now: Instant) -> bool {
        while let Some(paragraph) = self.paragraphs.get_mut(self.current) {
            let Some(finished_at) = paragraph.tick(now) else {
                return false;
            };

            self.current += 1;
            match self.paragraphs.get_mut(self.current) {
                Some(next) => next.start(finished_at),
                None => return true,
            }
        }
        false
    }

    /// Whether every paragraph has been typed. An empty sequence is done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.paragraphs.iter().all(Typewriter::is_done)
    }

    #[must_use]
    pub fn paragraphs(&self) -> &[Typewriter] {
        &self.paragraphs
    }

    /// Started paragraphs, stacked.
    pub fn view<'a, Message: 'a>(&self, size: f32) -> Element<'a, Message> {
        self.paragraphs
            .iter()
            .filter(|paragraph| paragraph.is_started())
            .fold(Column::new().spacing(spacing::MD), |column, paragraph| {
                column.push(paragraph.view(size))
            })
            .into()
    }

    /// Same as [`Sequence::view`] at body size.
    pub fn view_body<'a, Message: 'a>(&self) -> Element<'a, Message> {
        self.view(typography::BODY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn idle_typewriter_shows_nothing_and_never_finishes() {
        let start = Instant::now();
        let mut writer = Typewriter::new("abc", 10 * MS);

        assert_eq!(writer.tick(start + 1000 * MS), None);
        assert_eq!(writer.display_text(), "");
        assert!(!writer.is_started());
    }

    #[test]
    fn reveals_one_character_per_interval() {
        let start = Instant::now();
        let mut writer = Typewriter::new("abc", 10 * MS);
        writer.start(start);

        writer.tick(start + 9 * MS);
        assert_eq!(writer.visible_text(), "");
        writer.tick(start + 10 * MS);
        assert_eq!(writer.visible_text(), "a");
        writer.tick(start + 25 * MS);
        assert_eq!(writer.display_text(), "ab|");
        writer.tick(start + 30 * MS);
        assert_eq!(writer.display_text(), "abc|");
    }

    #[test]
    fn completion_fires_once_one_interval_after_last_character() {
        let start = Instant::now();
        let mut writer = Typewriter::new("abc", 10 * MS);
        writer.start(start);

        assert_eq!(writer.tick(start + 39 * MS), None);
        assert_eq!(writer.tick(start + 45 * MS), Some(start + 40 * MS));
        assert!(writer.is_done());
        assert_eq!(writer.tick(start + 100 * MS), None);
        assert_eq!(writer.display_text(), "abc");
    }

    #[test]
    fn slices_multibyte_text_on_char_boundaries() {
        let start = Instant::now();
        let mut writer = Typewriter::new("é—ü", MS);
        writer.start(start);
        writer.tick(start + 2 * MS);
        assert_eq!(writer.visible_text(), "é—");
    }

    #[test]
    fn empty_text_finishes_after_one_interval() {
        let start = Instant::now();
        let mut writer = Typewriter::new("", 10 * MS);
        writer.start(start);
        assert_eq!(writer.tick(start + 10 * MS), Some(start + 10 * MS));
    }

    #[test]
    fn sequence_starts_each_paragraph_after_the_previous_one() {
        let start = Instant::now();
        let mut sequence = Sequence::new(["ab", "cd"], 10 * MS);
        sequence.start(start);

        assert!(!sequence.tick(start + 20 * MS));
        assert!(!sequence.paragraphs()[1].is_started());

        // First paragraph finishes at 30 ms; the second starts there.
        assert!(!sequence.tick(start + 40 * MS));
        assert_eq!(sequence.paragraphs()[1].visible_text(), "c");

        assert!(!sequence.tick(start + 59 * MS));
        assert!(sequence.tick(start + 60 * MS));
        assert!(sequence.is_done());
    }

    #[test]
    fn a_late_tick_can_finish_the_whole_sequence() {
        let start = Instant::now();
        let mut sequence = Sequence::new(["a", "b", "c"], 10 * MS);
        sequence.start(start);

        assert!(sequence.tick(start + 10_000 * MS));
        assert!(sequence.is_done());
        assert!(!sequence.tick(start + 20_000 * MS));
    }
}
