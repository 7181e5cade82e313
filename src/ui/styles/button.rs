// SPDX-License-Identifier: MPL-2.0
//! Button styles.
//!
//! Four button families cover the whole app: `primary` for the one
//! main action on a screen, `toggle` for option groups in settings,
//! `navbar` for the icon row in the top bar, and `ghost` for bare
//! icons on overlay cards.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn chip_border(color: Color) -> Border {
    Border {
        color,
        width: 1.0,
        radius: radius::SM.into(),
    }
}

/// Filled brand-colored button for the screen's main action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border, elevation) = match status {
        button::Status::Hovered => (
            palette::PRIMARY_400,
            chip_border(palette::PRIMARY_500),
            shadow::MD,
        ),
        _ => (
            palette::PRIMARY_500,
            chip_border(palette::PRIMARY_600),
            shadow::SM,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border,
        shadow: elevation,
        snap: true,
    }
}

/// Option-group chip. Active chips are filled with the brand color,
/// inactive ones sit on a neutral surface matching the theme.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            return primary(theme, status);
        }

        let is_light = matches!(theme, Theme::Light);
        let text_color = if is_light { palette::GRAY_900 } else { WHITE };
        let background = match (status, is_light) {
            (button::Status::Hovered, true) => palette::GRAY_200,
            (button::Status::Hovered, false) => palette::GRAY_400,
            (_, true) => palette::GRAY_100,
            (_, false) => palette::GRAY_700,
        };
        let border_color = match status {
            button::Status::Hovered => palette::PRIMARY_500,
            _ => palette::GRAY_400,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: chip_border(border_color),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Icon button in the top bar: transparent at rest, translucent gray
/// wash on hover and press.
pub fn navbar(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let wash = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let background = match status {
        button::Status::Hovered => wash(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => wash(opacity::OVERLAY_MEDIUM),
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Bare icon on the viewer's overlay cards, gray wash on hover.
/// The cards stay light in both themes so the wash colors are fixed.
pub fn ghost(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(Background::Color(palette::GRAY_100)),
            button::Status::Pressed => Some(Background::Color(palette::GRAY_200)),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
