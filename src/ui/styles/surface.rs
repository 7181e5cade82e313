// SPDX-License-Identifier: MPL-2.0
//! Container styles for the app's two chrome surfaces: the top bar and
//! the editor side panel.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn translucent(color: Color) -> Background {
    Background::Color(Color {
        a: opacity::SURFACE,
        ..color
    })
}

/// Top navigation bar: the theme background with a slight translucency
/// so it reads as one piece with the window in both modes.
pub fn bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(translucent(theme.extended_palette().background.base.color)),
        ..Default::default()
    }
}

/// Editor side panel. Shifts the theme background a step so the panel
/// reads as a distinct surface next to the diagram pane: lighter on
/// dark themes, darker on light ones.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let is_dark = (base.r + base.g + base.b) / 3.0 < 0.5;
    let delta = if is_dark { 0.10 } else { -0.06 };

    let shifted = Color::from_rgb(
        (base.r + delta).clamp(0.0, 1.0),
        (base.g + delta).clamp(0.0, 1.0),
        (base.b + delta).clamp(0.0, 1.0),
    );

    container::Style {
        background: Some(translucent(shifted)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background_color(style: &container::Style) -> Color {
        match style.background {
            Some(Background::Color(c)) => c,
            _ => panic!("expected a color background"),
        }
    }

    #[test]
    fn panel_is_lighter_than_the_bar_on_dark_themes() {
        let bar = background_color(&bar(&Theme::Dark));
        let panel = background_color(&panel(&Theme::Dark));
        assert!(panel.r > bar.r);
    }

    #[test]
    fn panel_is_darker_than_the_bar_on_light_themes() {
        let bar = background_color(&bar(&Theme::Light));
        let panel = background_color(&panel(&Theme::Light));
        assert!(panel.r < bar.r);
    }
}
