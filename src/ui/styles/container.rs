// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background behind every view.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Header and footer bars.
pub fn bar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.text_primary
            },
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Full-window backdrop of the image modal.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.backdrop)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// One tick of the prompt progress strip.
pub fn progress_tick(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let color = if active {
            colors.highlight
        } else {
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.text_primary
            }
        };
        container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }
}

/// Earlier form steps, kept on screen but faded.
pub fn dimmed(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(Color {
            a: opacity::DIMMED_TEXT,
            ..colors.text_primary
        }),
        ..Default::default()
    }
}

/// Placeholder drawn where an image file is missing.
pub fn placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_raised)),
        text_color: Some(colors.text_muted),
        ..Default::default()
    }
}
