// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing and size used by the installation views.

## Organization

- **Palette**: Base colors (monochrome plus a single highlight)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Chrome, grid and component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use beforelife::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.08);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.93, 0.93);

    /// Highlight used for the active filter, the progress tick and the
    /// centered phrase.
    pub const HIGHLIGHT: Color = Color::from_rgb(0.0, 0.2, 1.0);
    pub const HIGHLIGHT_SOFT: Color = Color::from_rgb(0.55, 0.65, 1.0);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;

    /// Phrases away from the viewport center.
    pub const DIMMED_TEXT: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const HEADER_HEIGHT: f32 = 40.0;
    pub const FOOTER_HEIGHT: f32 = 40.0;

    /// Height of the prompt progress strip under the header.
    pub const PROGRESS_HEIGHT: f32 = 6.0;

    /// Gallery and archive thumbnails.
    pub const THUMBNAIL: f32 = 120.0;
    /// Upload slots on the form.
    pub const SLOT: f32 = 96.0;

    /// Maximum width of reading columns (form, about, card).
    pub const TEXT_COLUMN: f32 = 720.0;

    pub const CAMERA_PREVIEW_WIDTH: f32 = 320.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Row height of the scrolling phrase list.
    pub const PHRASE_ROW: f32 = 70.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes. The installation uses a single monospace family; hierarchy
    //! comes from size alone.

    /// Loader titles ("BEFORE LIFE", artist name)
    pub const DISPLAY: f32 = 48.0;

    /// Phrases of the scrolling text
    pub const PHRASE: f32 = 36.0;

    pub const TITLE: f32 = 20.0;

    /// Paragraphs, form labels
    pub const BODY: f32 = 15.0;

    /// Chrome labels and captions
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 2.0;
    pub const MD: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DIMMED_TEXT > 0.0 && opacity::DIMMED_TEXT < 1.0);

    assert!(typography::DISPLAY > typography::PHRASE);
    assert!(typography::PHRASE > typography::TITLE);
    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // A phrase must fit inside its row.
    assert!(sizing::PHRASE_ROW > typography::PHRASE);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
