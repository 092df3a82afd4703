// SPDX-License-Identifier: MPL-2.0
//! Static catalog of the installation: prompts, contributors and the
//! phrases of the scrolling text piece.

use super::browsing::{ClipNumber, ContributorIndex, PromptIndex};

/// Number of prompts, and of images per contributor.
pub const PROMPT_COUNT: usize = 45;

/// Contributor identifiers, in display order. Each one names an image set.
pub const CONTRIBUTORS: [&str; 5] = ["andrey", "anna", "clara", "dexter", "jeff"];

/// Number of contributors.
pub const CONTRIBUTOR_COUNT: usize = CONTRIBUTORS.len();

/// Prompts in life order, from "before life" to "afterlife".
pub const PROMPTS: [&str; PROMPT_COUNT] = [
    "before life",
    "home",
    "family at home",
    "birth",
    "unintended child",
    "puberty",
    "bullied teen",
    "love",
    "love between men",
    "love between women",
    "sex",
    "unsafe sex",
    "healthy person",
    "sick person",
    "person with mental health condition",
    "person with substance use disorder",
    "immigrant",
    "apolitical person",
    "propaganda",
    "people at protest",
    "rich politician",
    "poor politician",
    "poor person",
    "homeless person",
    "unemployed person",
    "influencer",
    "artist",
    "office worker",
    "city",
    "city celebration",
    "city at war",
    "person at war",
    "woman at war",
    "women military parade",
    "tampon in blood",
    "bullet in blood",
    "elderly person",
    "dying person",
    "euthanasia",
    "dying pet",
    "death",
    "funeral",
    "cemetery",
    "religion",
    "afterlife",
];

/// A line of the scrolling text piece and the narration clip it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    pub text: &'static str,
    pub clip: ClipNumber,
}

const fn phrase(text: &'static str, clip: usize) -> Phrase {
    Phrase {
        text,
        clip: ClipNumber::from_index(clip - 1),
    }
}

/// Phrases in scroll order (top to bottom) with their clip numbers.
///
/// Scroll order runs from "afterlife" back to "before life"; the clip table
/// is kept explicit because narration order is not derived from it.
pub const TEXT_PHRASES: [Phrase; PROMPT_COUNT] = [
    phrase("afterlife", 1),
    phrase("religion", 2),
    phrase("cemetery", 3),
    phrase("funeral", 4),
    phrase("death", 5),
    phrase("dying pet", 6),
    phrase("euthanasia", 7),
    phrase("dying person", 8),
    phrase("elderly person", 9),
    phrase("bullet in blood", 10),
    phrase("tampon in blood", 11),
    phrase("women military parade", 12),
    phrase("woman at war", 13),
    phrase("person at war", 14),
    phrase("city at war", 15),
    phrase("city celebration", 16),
    phrase("city", 17),
    phrase("office worker", 18),
    phrase("artist", 19),
    phrase("influencer", 20),
    phrase("unemployed person", 21),
    phrase("homeless person", 22),
    phrase("poor person", 23),
    phrase("poor politician", 24),
    phrase("rich politician", 25),
    phrase("people at protest", 26),
    phrase("propaganda", 27),
    phrase("apolitical person", 28),
    phrase("immigrant", 29),
    phrase("person with substance use disorder", 30),
    phrase("person with mental health condition", 31),
    phrase("sick person", 32),
    phrase("healthy person", 33),
    phrase("unsafe sex", 34),
    phrase("sex", 35),
    phrase("love between women", 36),
    phrase("love between men", 37),
    phrase("love", 38),
    phrase("bullied teen", 39),
    phrase("puberty", 40),
    phrase("unintended child", 41),
    phrase("birth", 42),
    phrase("family at home", 43),
    phrase("home", 44),
    phrase("before life", 45),
];

/// Prompt text at the given position.
#[must_use]
pub fn prompt(index: PromptIndex) -> &'static str {
    PROMPTS[index.value()]
}

/// Contributor identifier at the given position.
#[must_use]
pub fn contributor(index: ContributorIndex) -> &'static str {
    CONTRIBUTORS[index.value()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_prompt_appears_once_in_the_text_piece() {
        let phrases: HashSet<&str> = TEXT_PHRASES.iter().map(|p| p.text).collect();
        let prompts: HashSet<&str> = PROMPTS.iter().copied().collect();
        assert_eq!(phrases.len(), PROMPT_COUNT);
        assert_eq!(phrases, prompts);
    }

    #[test]
    fn clip_table_covers_every_clip_once() {
        let clips: HashSet<u8> = TEXT_PHRASES.iter().map(|p| p.clip.value()).collect();
        assert_eq!(clips.len(), PROMPT_COUNT);
        assert!(clips.iter().all(|c| (1..=45).contains(c)));
    }

    #[test]
    fn prompt_lookup_follows_life_order() {
        assert_eq!(prompt(PromptIndex::FIRST), "before life");
        assert_eq!(prompt(PromptIndex::LAST), "afterlife");
    }
}
