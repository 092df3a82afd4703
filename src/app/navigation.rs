// SPDX-License-Identifier: MPL-2.0
//! Navigation and prompt browsing state owned by the orchestrator.
//!
//! Both types are plain state machines over `Instant`s handed in by the
//! caller, so every timer can be driven by a simulated clock.

use crate::domain::browsing::{ClipNumber, PromptIndex};
use crate::domain::view::ViewId;
use std::time::{Duration, Instant};

/// Active view plus the loading indicator shown right after a switch.
#[derive(Debug, Clone)]
pub struct NavigationState {
    active: ViewId,
    transition_deadline: Option<Instant>,
}

impl NavigationState {
    #[must_use]
    pub fn new(active: ViewId) -> Self {
        Self {
            active,
            transition_deadline: None,
        }
    }

    #[must_use]
    pub fn active(&self) -> ViewId {
        self.active
    }

    #[must_use]
    pub fn is_loading_transition(&self) -> bool {
        self.transition_deadline.is_some()
    }

    /// Activates `target` and re-arms the loading deadline. An earlier
    /// deadline is replaced, never stacked. Returns the previous view.
    pub fn switch(&mut self, target: ViewId, now: Instant, transition: Duration) -> ViewId {
        let previous = self.active;
        self.active = target;
        self.transition_deadline = Some(now + transition);
        previous
    }

    /// Clears the loading indicator once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.transition_deadline.is_some_and(|deadline| now >= deadline) {
            self.transition_deadline = None;
        }
    }
}

/// Prompt browsing: index, transport flags, autoplay countdown and the
/// gesture gate for narration.
#[derive(Debug, Clone)]
pub struct PromptBrowsing {
    index: PromptIndex,
    paused: bool,
    sound_on: bool,
    last_interaction_at: Instant,
    gesture_seen: bool,
    pending_clip: Option<ClipNumber>,
}

impl PromptBrowsing {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            index: PromptIndex::FIRST,
            paused: false,
            sound_on: true,
            last_interaction_at: now,
            gesture_seen: false,
            pending_clip: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> PromptIndex {
        self.index
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    #[must_use]
    pub fn gesture_seen(&self) -> bool {
        self.gesture_seen
    }

    #[must_use]
    pub fn pending_clip(&self) -> Option<ClipNumber> {
        self.pending_clip
    }

    #[must_use]
    pub fn last_interaction_at(&self) -> Instant {
        self.last_interaction_at
    }

    /// Jumps to `index` without counting as an interaction.
    pub fn set_index(&mut self, index: PromptIndex) {
        self.index = index;
    }

    /// Explicit next: wraps after the last prompt.
    pub fn go_next(&mut self, now: Instant) {
        self.index = self.index.next();
        self.interacted(now);
    }

    /// Explicit previous: stays on the first prompt.
    pub fn go_previous(&mut self, now: Instant) {
        self.index = self.index.previous();
        self.interacted(now);
    }

    fn interacted(&mut self, now: Instant) {
        self.last_interaction_at = now;
        self.gesture_seen = true;
    }

    /// Resuming restarts the countdown so a long pause does not replay
    /// every missed step at once.
    pub fn toggle_pause(&mut self, now: Instant) {
        self.paused = !self.paused;
        if !self.paused {
            self.last_interaction_at = now;
        }
    }

    pub fn toggle_sound(&mut self) {
        self.sound_on = !self.sound_on;
        if !self.sound_on {
            self.pending_clip = None;
        }
    }

    pub fn restart_countdown(&mut self, now: Instant) {
        self.last_interaction_at = now;
    }

    /// Advances once per full `interval` elapsed since the last
    /// interaction and returns the number of steps taken.
    pub fn autoplay(&mut self, now: Instant, interval: Duration) -> usize {
        if self.paused || interval.is_zero() {
            return 0;
        }
        let mut steps = 0;
        while now.saturating_duration_since(self.last_interaction_at) >= interval {
            self.index = self.index.next();
            self.last_interaction_at += interval;
            steps += 1;
        }
        steps
    }

    /// Clip to start after a stop, or `None` when it must wait for the
    /// first gesture (it is then remembered as pending).
    pub fn clip_to_play(&mut self) -> Option<ClipNumber> {
        if !self.sound_on {
            self.pending_clip = None;
            return None;
        }
        let clip = self.index.clip();
        if self.gesture_seen {
            self.pending_clip = None;
            Some(clip)
        } else {
            self.pending_clip = Some(clip);
            None
        }
    }

    /// Records a user gesture. Returns the pending clip the first time.
    pub fn mark_gesture(&mut self) -> Option<ClipNumber> {
        self.gesture_seen = true;
        self.pending_clip.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(3);

    #[test]
    fn switch_replaces_the_pending_deadline() {
        let start = Instant::now();
        let mut nav = NavigationState::new(ViewId::Gallery);
        let transition = Duration::from_millis(500);

        nav.switch(ViewId::Text, start, transition);
        nav.switch(ViewId::ByPrompt, start + Duration::from_millis(400), transition);

        // The first deadline would have fired here.
        nav.tick(start + Duration::from_millis(600));
        assert!(nav.is_loading_transition());

        nav.tick(start + Duration::from_millis(900));
        assert!(!nav.is_loading_transition());
        assert_eq!(nav.active(), ViewId::ByPrompt);
    }

    #[test]
    fn autoplay_steps_once_per_elapsed_interval() {
        let start = Instant::now();
        let mut prompt = PromptBrowsing::new(start);

        assert_eq!(prompt.autoplay(start + Duration::from_millis(2_999), INTERVAL), 0);
        assert_eq!(prompt.autoplay(start + Duration::from_millis(9_500), INTERVAL), 3);
        assert_eq!(prompt.index().value(), 3);
        // The remainder carries over to the next interval.
        assert_eq!(prompt.autoplay(start + Duration::from_millis(12_000), INTERVAL), 1);
    }

    #[test]
    fn explicit_navigation_restarts_the_countdown() {
        let start = Instant::now();
        let mut prompt = PromptBrowsing::new(start);

        prompt.go_next(start + Duration::from_secs(2));
        assert_eq!(prompt.autoplay(start + Duration::from_secs(4), INTERVAL), 0);
        assert_eq!(prompt.autoplay(start + Duration::from_secs(5), INTERVAL), 1);
        assert_eq!(prompt.index().value(), 2);
    }

    #[test]
    fn paused_browsing_does_not_advance() {
        let start = Instant::now();
        let mut prompt = PromptBrowsing::new(start);
        prompt.toggle_pause(start);

        assert_eq!(prompt.autoplay(start + Duration::from_secs(30), INTERVAL), 0);

        prompt.toggle_pause(start + Duration::from_secs(30));
        assert_eq!(prompt.autoplay(start + Duration::from_secs(32), INTERVAL), 0);
    }

    #[test]
    fn autoplay_is_not_a_gesture() {
        let start = Instant::now();
        let mut prompt = PromptBrowsing::new(start);
        prompt.autoplay(start + INTERVAL, INTERVAL);
        assert!(!prompt.gesture_seen());
    }

    #[test]
    fn clip_waits_for_the_first_gesture() {
        let mut prompt = PromptBrowsing::new(Instant::now());
        prompt.set_index(PromptIndex::new(4));

        assert_eq!(prompt.clip_to_play(), None);
        assert_eq!(prompt.pending_clip(), Some(ClipNumber::from_index(4)));

        assert_eq!(prompt.mark_gesture(), Some(ClipNumber::from_index(4)));
        assert_eq!(prompt.mark_gesture(), None);
        assert_eq!(prompt.clip_to_play(), Some(ClipNumber::from_index(4)));
    }

    #[test]
    fn sound_toggle_twice_is_identity() {
        let mut prompt = PromptBrowsing::new(Instant::now());
        let before = prompt.sound_on();
        prompt.toggle_sound();
        prompt.toggle_sound();
        assert_eq!(prompt.sound_on(), before);
    }

    #[test]
    fn muted_browsing_never_plays() {
        let mut prompt = PromptBrowsing::new(Instant::now());
        prompt.mark_gesture();
        prompt.toggle_sound();
        assert_eq!(prompt.clip_to_play(), None);
        assert_eq!(prompt.pending_clip(), None);
    }
}
