// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection and the color scheme handed to views.
//!
//! `ThemeMode` is what the user picks (and what config persists);
//! `ColorScheme` is the resolved set of colors views actually read.
//! System mode re-resolves against the OS preference at construction
//! time, so switching the OS theme takes effect on the next rebuild.

use crate::ui::design_tokens::palette;
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Mode de thème choisi par l'utilisateur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Parses a mode name as written in the config file, accepting any
    /// casing.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// Whether the effective theme is dark, resolving System against
    /// the OS preference. Detection errors fall back to dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Next mode for the navbar toggle: Light, Dark, System, Light, ...
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

/// Resolved colors for one theme mode.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Window and pane background.
    pub surface_primary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    /// Accent used for the spinner and active controls.
    pub brand_primary: Color,

    /// Backdrop behind the rendered diagram. Stays light in both modes:
    /// diagrams from the rendering service use dark strokes and text.
    pub diagram_backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::GRAY_400,
            brand_primary: palette::PRIMARY_500,
            diagram_backdrop: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_tertiary: palette::GRAY_400,
            // One step lighter than in light mode to keep contrast on
            // the dark surface
            brand_primary: palette::PRIMARY_400,
            diagram_backdrop: palette::GRAY_200,
        }
    }

    /// Scheme matching the current OS preference.
    #[must_use]
    pub fn from_system() -> Self {
        if ThemeMode::System.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Theme state carried by the application: the resolved colors plus
/// the mode they were resolved from.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }
}
