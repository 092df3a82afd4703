// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::opacity;
use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::{Color, Theme};

pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    }
}

pub fn highlight(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).highlight),
    }
}

pub fn error(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).error),
    }
}

/// Phrase of the scrolling text: full strength at the center, dimmed
/// elsewhere.
pub fn phrase(centered: bool) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let color = if centered {
            colors.highlight
        } else {
            Color {
                a: opacity::DIMMED_TEXT,
                ..colors.text_primary
            }
        };
        text::Style { color: Some(color) }
    }
}
