// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface: Color,
    pub surface_raised: Color,

    pub text_primary: Color,
    pub text_muted: Color,

    /// Active filter, progress tick, centered phrase.
    pub highlight: Color,

    pub error: Color,

    /// Backdrop of the image modal.
    pub backdrop: Color,
}

impl ColorScheme {
    /// Black on white, the installation's default look.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            surface_raised: palette::GRAY_100,
            text_primary: palette::BLACK,
            text_muted: palette::GRAY_400,
            highlight: palette::HIGHLIGHT,
            error: palette::ERROR_500,
            backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::BLACK,
            surface_raised: palette::GRAY_900,
            text_primary: palette::WHITE,
            text_muted: palette::GRAY_400,
            highlight: palette::HIGHLIGHT_SOFT,
            error: palette::ERROR_500,
            backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    /// Detects the system theme and returns the matching scheme.
    #[must_use]
    pub fn from_system() -> Self {
        if ThemeMode::System.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Scheme for the given Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // The installation reads as black on white; an undetectable
            // system theme keeps that.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface.r > 0.9);
        assert!(scheme.text_primary.r < 0.1);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface.r < 0.2);
    }

    #[test]
    fn highlight_is_blue_in_both_schemes() {
        assert!(ColorScheme::light().highlight.b > ColorScheme::light().highlight.r);
        assert!(ColorScheme::dark().highlight.b > ColorScheme::dark().highlight.r);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        let _ = ThemeMode::System.theme();
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert!(ColorScheme::for_theme(&Theme::Dark).surface.r < 0.2);
        assert!(ColorScheme::for_theme(&Theme::Light).surface.r > 0.9);
    }
}
