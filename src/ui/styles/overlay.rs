// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for viewer controls, the zoom indicator, and hints.
//!
//! The pieces floating over the diagram pane sit on translucent white
//! cards, keeping them readable against both the light backdrop and any
//! diagram colors underneath.

use crate::ui::design_tokens::{
    opacity,
    palette::{GRAY_200, GRAY_900, WHITE},
    shadow,
};
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Theme};

fn card_background() -> Color {
    Color {
        a: opacity::OVERLAY_PRESSED,
        ..WHITE
    }
}

/// Style for small indicator chips like the zoom percentage and pan hint.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(card_background())),
        text_color: Some(GRAY_900),
        border: Border {
            color: GRAY_200,
            width: 1.0,
            radius: rad.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Style for the floating zoom button cluster over the diagram pane.
#[must_use]
pub fn controls_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card_background())),
        text_color: Some(GRAY_900),
        border: Border {
            color: GRAY_200,
            width: 1.0,
            radius: crate::ui::design_tokens::radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Tint style for monochrome SVG icons drawn over overlays.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
