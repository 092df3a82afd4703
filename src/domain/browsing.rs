// SPDX-License-Identifier: MPL-2.0
//! Bounded indices used while browsing the archive.
//!
//! These newtypes keep prompt positions, contributor selections and clip
//! numbers inside their valid ranges, so the rest of the application never
//! checks bounds by hand.

use super::catalog::{CONTRIBUTOR_COUNT, PROMPT_COUNT};
use std::fmt;

// =============================================================================
// PromptIndex
// =============================================================================

/// Zero-based position in the prompt sequence, always `< PROMPT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PromptIndex(usize);

impl PromptIndex {
    /// The first prompt.
    pub const FIRST: Self = Self(0);

    /// The last prompt.
    pub const LAST: Self = Self(PROMPT_COUNT - 1);

    /// Creates an index, clamping to the last prompt.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.min(PROMPT_COUNT - 1))
    }

    /// Returns the raw zero-based value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Next prompt; wraps from the last prompt back to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self((self.0 + 1) % PROMPT_COUNT)
    }

    /// Previous prompt; stays on the first prompt instead of wrapping.
    #[must_use]
    pub fn previous(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Narration clip addressed by this prompt.
    #[must_use]
    pub fn clip(self) -> ClipNumber {
        ClipNumber::from_index(self.0)
    }

    /// One-based number used in image file names.
    #[must_use]
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

// =============================================================================
// ContributorIndex
// =============================================================================

/// Zero-based contributor position, always `< CONTRIBUTOR_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContributorIndex(usize);

impl ContributorIndex {
    /// Creates an index, or `None` when out of range.
    #[must_use]
    pub fn new(value: usize) -> Option<Self> {
        (value < CONTRIBUTOR_COUNT).then_some(Self(value))
    }

    /// Returns the raw zero-based value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

// =============================================================================
// ClipNumber
// =============================================================================

/// One-based narration clip identifier, rendered as two zero-padded digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipNumber(u8);

impl ClipNumber {
    /// Clip number for a zero-based position (`0` → `01`).
    ///
    /// Positions beyond 98 saturate at `99`, the largest two-digit number.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        if index >= 98 {
            Self(99)
        } else {
            #[allow(clippy::cast_possible_truncation)] // index < 98
            Self(index as u8 + 1)
        }
    }

    /// Returns the one-based value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ClipNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_prompt() {
        assert_eq!(PromptIndex::new(44).next(), PromptIndex::FIRST);
        assert_eq!(PromptIndex::LAST.next().value(), 0);
    }

    #[test]
    fn previous_clamps_at_first_prompt() {
        assert_eq!(PromptIndex::FIRST.previous(), PromptIndex::FIRST);
        assert_eq!(PromptIndex::new(10).previous().value(), 9);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_eq!(PromptIndex::new(1000), PromptIndex::LAST);
    }

    #[test]
    fn clip_numbers_are_one_based_and_padded() {
        assert_eq!(PromptIndex::FIRST.clip().to_string(), "01");
        assert_eq!(PromptIndex::new(8).clip().to_string(), "09");
        assert_eq!(PromptIndex::LAST.clip().to_string(), "45");
        assert_eq!(ClipNumber::from_index(500).value(), 99);
    }

    #[test]
    fn contributor_index_rejects_out_of_range() {
        assert!(ContributorIndex::new(0).is_some());
        assert!(ContributorIndex::new(CONTRIBUTOR_COUNT - 1).is_some());
        assert!(ContributorIndex::new(CONTRIBUTOR_COUNT).is_none());
    }
}
