// SPDX-License-Identifier: MPL-2.0
//! Narration playback port.
//!
//! The [`NarrationSink`] is the single audio handle of the application. It
//! plays at most one clip at a time: starting a clip replaces the previous
//! one, and `stop` silences it immediately.
//!
//! # Design Notes
//!
//! - `play` returns a boxed future resolving once playback has started or
//!   failed, so callers can wrap it in an Iced `Task`
//! - Playback before [`NarrationSink::unlock`] fails with
//!   [`PlaybackError::Blocked`], the expected outcome before the first gesture

use futures_util::future::BoxFuture;
use std::fmt;
use std::path::{Path, PathBuf};

/// Reasons a clip did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// No user gesture has been observed yet.
    Blocked,
    /// No audio output device is available.
    NoDevice,
    /// The clip file does not exist.
    Missing(PathBuf),
    /// The clip could not be decoded.
    Decode(String),
    /// The playback worker is gone.
    Closed,
}

impl PlaybackError {
    /// Whether this failure is the expected pre-gesture refusal.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, PlaybackError::Blocked)
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Blocked => write!(f, "playback blocked until the first user gesture"),
            PlaybackError::NoDevice => write!(f, "no audio output device"),
            PlaybackError::Missing(path) => write!(f, "clip not found: {}", path.display()),
            PlaybackError::Decode(msg) => write!(f, "clip could not be decoded: {msg}"),
            PlaybackError::Closed => write!(f, "audio worker stopped"),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Single shared narration output.
pub trait NarrationSink: Send + Sync {
    /// Allows playback from now on. Called on the first user gesture.
    fn unlock(&self);

    /// Whether [`NarrationSink::unlock`] has been called.
    fn is_unlocked(&self) -> bool;

    /// Stops the current clip, then starts `clip`.
    fn play(&self, clip: &Path) -> BoxFuture<'static, Result<(), PlaybackError>>;

    /// Stops the current clip, if any.
    fn stop(&self);
}
