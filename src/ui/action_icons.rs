// SPDX-License-Identifier: MPL-2.0
//! Glyphs keyed by what the user is doing, not by what the glyph depicts.
//!
//! UI code asks for `toolbar::refresh()` or `viewer::zoom_reset()`; which
//! [`icons`](super::icons) document answers is decided here. Retiring a glyph
//! means editing one arm instead of every call site.

use super::icons;

/// Re-exported so call sites can size a glyph without importing `icons`.
pub use icons::sized;

/// Zoom controls overlaid on the diagram pane.
pub mod viewer {
    use super::icons;
    use iced::widget::svg::Svg;

    #[must_use]
    pub fn zoom_in() -> Svg<'static> {
        icons::zoom_in()
    }

    #[must_use]
    pub fn zoom_out() -> Svg<'static> {
        icons::zoom_out()
    }

    /// Reset zoom and pan to the initial view.
    #[must_use]
    pub fn zoom_reset() -> Svg<'static> {
        icons::rotate_ccw()
    }

    /// Drag-to-pan affordance shown in the pan hint.
    #[must_use]
    pub fn pan() -> Svg<'static> {
        icons::move_arrows()
    }
}

/// Icons for the navigation bar buttons.
pub mod toolbar {
    use super::icons;
    use iced::widget::svg::Svg;

    /// Copy the diagram source to the clipboard.
    #[must_use]
    pub fn copy_source() -> Svg<'static> {
        icons::clipboard_copy()
    }

    /// Export the rendered SVG to a file.
    #[must_use]
    pub fn download() -> Svg<'static> {
        icons::arrow_down_tray()
    }

    /// Copy a shareable link to the clipboard.
    #[must_use]
    pub fn share() -> Svg<'static> {
        icons::arrow_up_tray()
    }

    /// Force a fresh render from the service.
    #[must_use]
    pub fn refresh() -> Svg<'static> {
        icons::rotate_cw()
    }

    #[must_use]
    pub fn settings() -> Svg<'static> {
        icons::cog()
    }

    #[must_use]
    pub fn close() -> Svg<'static> {
        icons::cross()
    }
}

/// Glyphs for the theme cycle button.
pub mod theme {
    use super::icons;
    use crate::ui::theming::ThemeMode;
    use iced::widget::svg::Svg;

    /// Glyph for the given theme mode.
    #[must_use]
    pub fn mode(mode: ThemeMode) -> Svg<'static> {
        match mode {
            ThemeMode::Light => icons::sun(),
            ThemeMode::Dark => icons::moon(),
            ThemeMode::System => icons::monitor(),
        }
    }
}

/// Severity glyphs for toasts.
pub mod notification {
    use super::icons;
    use crate::ui::notifications::Severity;
    use iced::widget::svg::Svg;

    /// Glyph for a toast of the given severity.
    #[must_use]
    pub fn severity(severity: Severity) -> Svg<'static> {
        match severity {
            Severity::Success => icons::checkmark(),
            Severity::Warning => icons::warning(),
            Severity::Error => icons::octagon_alert(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;
    use crate::ui::theming::ThemeMode;

    #[test]
    fn every_action_resolves_to_a_glyph() {
        let _ = viewer::zoom_in();
        let _ = viewer::zoom_out();
        let _ = viewer::zoom_reset();
        let _ = viewer::pan();
        let _ = toolbar::copy_source();
        let _ = toolbar::download();
        let _ = toolbar::share();
        let _ = toolbar::refresh();
        let _ = toolbar::settings();
        let _ = toolbar::close();
        for m in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            let _ = theme::mode(m);
        }
        for s in [Severity::Success, Severity::Warning, Severity::Error] {
            let _ = notification::severity(s);
        }
    }
}
