// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every UI component.
//!
//! All visual constants live here, grouped by concern: `palette`,
//! `opacity`, `spacing`, `sizing`, `typography`, `border`, `radius`,
//! and `shadow`. Components never hard-code a color or a pixel value;
//! they pull the token, so the whole chrome can be retuned in one file.
//!
//! The spacing scale sits on an 8px baseline grid and the brand scale
//! is anchored on the mark blue (`#4D99E6`). Cross-token invariants are
//! enforced at compile time at the bottom of the file.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.10, 0.10, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.30, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.42, 0.44, 0.47);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.79, 0.81);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.89, 0.90);

    // Brand scale around the mark blue #4D99E6
    pub const PRIMARY_400: Color = Color::from_rgb(0.424, 0.667, 0.945);
    pub const PRIMARY_500: Color = Color::from_rgb(0.302, 0.600, 0.902);
    pub const PRIMARY_600: Color = Color::from_rgb(0.224, 0.494, 0.776);

    // Semantic colors for notifications and error surfaces
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Semi-transparent panel and card surfaces.
    pub const SURFACE: f32 = 0.95;

    pub const OPAQUE: f32 = 1.0;
}

/// Spacing scale, 8px baseline grid.
pub mod spacing {
    /// Half step, for tight icon/label pairs.
    pub const XXS: f32 = 4.0;
    /// One grid unit, the default gap inside widget rows.
    pub const XS: f32 = 8.0;
    /// Padding inside cards and overlay chips.
    pub const SM: f32 = 12.0;
    /// Padding around panes and screen edges.
    pub const MD: f32 = 16.0;
    /// Separation between unrelated groups.
    pub const LG: f32 = 24.0;
    /// Breathing room on sparse screens (empty state, settings).
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    // Icons
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive elements
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Application layout
    /// Height of the top navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 52.0;
    /// Fixed width of the Mermaid source editor pane.
    pub const EDITOR_PANE_WIDTH: f32 = 380.0;

    // Overlays
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const SPINNER_SIZE: f32 = 48.0;
}

/// Font size scale.
///
/// Three title steps for headings, three body steps for content, one
/// caption step for fine print like toast timestamps.
pub mod typography {
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;

    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Hairline separators and input outlines.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast severity accents.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Resting elevation for overlay cards.
    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Hover elevation.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// Cross-token invariants, checked at compile time.
const _: () = {
    // The spacing scale must stay strictly increasing
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity values are alpha channels
    assert!(opacity::TRANSPARENT == 0.0 && opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > opacity::OVERLAY_PRESSED);

    // Icon steps and layout containment
    assert!(sizing::ICON_SM < sizing::ICON_MD && sizing::ICON_MD < sizing::ICON_XL);
    assert!(sizing::NAVBAR_HEIGHT > sizing::BUTTON_HEIGHT);
    assert!(sizing::EDITOR_PANE_WIDTH > sizing::TOAST_WIDTH);

    // Type scale ordering
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_grid_ratios() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn brand_scale_darkens_with_index() {
        let luma = |c: Color| c.r + c.g + c.b;
        assert!(luma(palette::PRIMARY_400) > luma(palette::PRIMARY_500));
        assert!(luma(palette::PRIMARY_500) > luma(palette::PRIMARY_600));
    }

    #[test]
    fn spinner_fits_inside_its_container_slot() {
        assert!(sizing::SPINNER_SIZE <= sizing::ICON_XL);
    }
}
