// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Sizing constants double as the page layout model: the section and card
//! heights declared here feed both the view code and the
//! [`crate::ui::sections::PageMap`] used for visibility detection, so the
//! two can never disagree about where a block sits on the page.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.1, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.3, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.8, 0.82);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.95);

    // Brand colors (teal scale)
    pub const ACCENT_400: Color = Color::from_rgb(0.25, 0.75, 0.7);
    pub const ACCENT_500: Color = Color::from_rgb(0.1, 0.62, 0.58);
    pub const ACCENT_600: Color = Color::from_rgb(0.05, 0.5, 0.47);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Modal backdrop dimming.
    pub const BACKDROP: f32 = 0.6;
    /// Semi-transparent panel surfaces.
    pub const SURFACE: f32 = 0.95;
    /// Faint track behind the skill gauge arc.
    pub const GAUGE_TRACK: f32 = 0.2;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const MESSAGE_INPUT_HEIGHT: f32 = 120.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const DIALOG_WIDTH: f32 = 480.0;
    pub const CONTENT_WIDTH: f32 = 720.0;

    // Page layout model: heights of the tracked page blocks.
    pub const HERO_HEIGHT: f32 = 420.0;
    pub const SECTION_HEADER_HEIGHT: f32 = 72.0;
    pub const ABOUT_BLOCK_HEIGHT: f32 = 220.0;
    pub const SKILL_CARD_HEIGHT: f32 = 190.0;
    pub const TIMELINE_ENTRY_HEIGHT: f32 = 140.0;
    pub const PROJECT_CARD_HEIGHT: f32 = 170.0;
    pub const CONTACT_FORM_HEIGHT: f32 = 380.0;
    pub const SECTION_GAP: f32 = 64.0;

    // Skill gauge geometry. The radius must match the circle drawn by the
    // canvas widget, otherwise the dash offset no longer maps onto the arc.
    pub const GAUGE_RADIUS: f32 = 54.0;
    pub const GAUGE_CANVAS: f32 = 120.0;
    pub const GAUGE_STROKE: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const TITLE_XL: f32 = 40.0;
    /// Section headers.
    pub const TITLE_LG: f32 = 28.0;
    /// Card titles, dialog titles.
    pub const TITLE_SM: f32 = 18.0;
    /// Form inputs, emphasis text.
    pub const BODY_LG: f32 = 16.0;
    /// Most UI text.
    pub const BODY: f32 = 14.0;
    /// Inline validation errors, timestamps.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Input fields, subtle separators.
    pub const WIDTH_SM: f32 = 1.0;
    /// Error outlines, toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };
}
