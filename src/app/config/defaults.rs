// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Timing**: Transition, autoplay and typing intervals
//! - **Text view**: Scroll speed and audio failure limit
//! - **Assets**: File extensions of the image sets
//! - **Hosting**: Image hosting folder and preset

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Duration of the loading indicator after a view switch (milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 500;

/// Quiet period before the prompt view advances on its own (milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 3000;

/// Minimum autoplay interval accepted from the config file.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 500;

/// Maximum autoplay interval accepted from the config file.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

/// Per-character interval of inline typewriter text (milliseconds).
pub const DEFAULT_TYPEWRITER_CHAR_MS: u64 = 15;

/// Per-character interval of full-screen loaders (milliseconds).
pub const DEFAULT_LOADER_CHAR_MS: u64 = 50;

/// Pause between the end of a loader and its completion (milliseconds).
pub const LOADER_COMPLETION_DELAY_MS: u64 = 300;

/// Interval of the narrow-window gallery slideshow (milliseconds).
pub const DEFAULT_SLIDESHOW_INTERVAL_MS: u64 = 3000;

/// Upper bound of the random reveal delay of gallery images (milliseconds).
pub const GALLERY_MAX_REVEAL_DELAY_MS: u64 = 500;

// ==========================================================================
// Text View Defaults
// ==========================================================================

/// Scroll speed of the phrase list (pixels per second).
pub const DEFAULT_SCROLL_PX_PER_SEC: f32 = 18.0;

/// Minimum scroll speed accepted from the config file.
pub const MIN_SCROLL_PX_PER_SEC: f32 = 1.0;

/// Maximum scroll speed accepted from the config file.
pub const MAX_SCROLL_PX_PER_SEC: f32 = 600.0;

/// Height of one phrase row (pixels).
pub const PHRASE_ROW_HEIGHT: f32 = 70.0;

/// Consecutive playback failures after which narration is disabled.
pub const DEFAULT_MAX_AUDIO_FAILURES: u32 = 3;

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Extension of gallery and prompt images.
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

/// Extension of the per-contributor archive images.
pub const DEFAULT_ARCHIVE_EXTENSION: &str = "png";

/// Window width below which the gallery switches to the slideshow.
pub const COMPACT_WIDTH_THRESHOLD: f32 = 768.0;

// ==========================================================================
// Hosting Defaults
// ==========================================================================

/// Unsigned upload preset used when none is configured.
pub const DEFAULT_UPLOAD_PRESET: &str = "ml_default";

/// Folder receiving uploaded contributions.
pub const DEFAULT_UPLOAD_FOLDER: &str = "before-life-after-life";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_TRANSITION_MS > 0);
    assert!(DEFAULT_MAX_AUDIO_FAILURES > 0);
    assert!(DEFAULT_SCROLL_PX_PER_SEC >= MIN_SCROLL_PX_PER_SEC);
    assert!(DEFAULT_SCROLL_PX_PER_SEC <= MAX_SCROLL_PX_PER_SEC);
};
