// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every control in the installation is a bare text link: no fill, no
//! border, color alone tells state.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn flat(text_color: Color) -> button::Style {
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text link; turns to the highlight color on hover.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    match status {
        button::Status::Hovered | button::Status::Pressed => flat(colors.highlight),
        button::Status::Active => flat(colors.text_primary),
        button::Status::Disabled => flat(colors.text_muted),
    }
}

/// Link for the current selection (active filter, selected contributor).
pub fn link_active(theme: &Theme, _status: button::Status) -> button::Style {
    flat(ColorScheme::for_theme(theme).highlight)
}

/// Invisible hit area wrapped around images and chrome backgrounds.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    flat(Color::TRANSPARENT)
}

/// Square upload slot; outlined when empty.
pub fn slot(filled: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let border_color = match status {
            button::Status::Hovered | button::Status::Pressed => colors.highlight,
            _ if filled => Color::TRANSPARENT,
            _ => colors.text_muted,
        };

        button::Style {
            background: Some(Background::Color(colors.surface_raised)),
            text_color: colors.text_muted,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::NONE.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_highlights_on_hover() {
        let theme = Theme::Light;
        let active = link(&theme, button::Status::Active);
        let hovered = link(&theme, button::Status::Hovered);

        assert_ne!(active.text_color, hovered.text_color);
        assert!(active.background.is_none());
    }

    #[test]
    fn disabled_link_is_muted() {
        let theme = Theme::Light;
        let disabled = link(&theme, button::Status::Disabled);
        assert_eq!(disabled.text_color, ColorScheme::light().text_muted);
    }

    #[test]
    fn empty_slot_is_outlined_and_filled_slot_is_not() {
        let theme = Theme::Light;
        let empty = slot(false)(&theme, button::Status::Active);
        let filled = slot(true)(&theme, button::Status::Active);

        assert_ne!(empty.border.color, Color::TRANSPARENT);
        assert_eq!(filled.border.color, Color::TRANSPARENT);
    }
}
