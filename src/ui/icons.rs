// SPDX-License-Identifier: MPL-2.0
//! Inline SVG glyphs (Lucide outline set, ISC licensed) embedded in the
//! binary as byte strings.
//!
//! Each document is parsed once behind a `OnceLock` handle. Glyphs are
//! monochrome and tinted at render time through `svg::Style`, so one source
//! serves every theme.
//!
//! Functions here are named after what the glyph looks like
//! (`arrow_down_tray`, not `download`); [`action_icons`](super::action_icons)
//! owns the action-to-glyph mapping.

use iced::widget::svg::{self, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Declares a glyph function whose handle is parsed on first use and cached
/// for the rest of the process.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
            static DATA: &[u8] = concat!(
                "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' \
                 fill='none' stroke='#000000' stroke-width='2' \
                 stroke-linecap='round' stroke-linejoin='round'>",
                $body,
                "</svg>"
            )
            .as_bytes();
            let handle = HANDLE.get_or_init(|| svg::Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Viewer Icons
// =============================================================================

define_icon!(
    zoom_in,
    "<circle cx='11' cy='11' r='8'/><line x1='21' x2='16.65' y1='21' y2='16.65'/><line x1='11' x2='11' y1='8' y2='14'/><line x1='8' x2='14' y1='11' y2='11'/>",
    "Zoom in icon: magnifier with a plus sign."
);
define_icon!(
    zoom_out,
    "<circle cx='11' cy='11' r='8'/><line x1='21' x2='16.65' y1='21' y2='16.65'/><line x1='8' x2='14' y1='11' y2='11'/>",
    "Zoom out icon: magnifier with a minus sign."
);
define_icon!(
    rotate_ccw,
    "<path d='M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8'/><path d='M3 3v5h5'/>",
    "Counter-clockwise circular arrow: reset to initial state."
);
define_icon!(
    move_arrows,
    "<polyline points='5 9 2 12 5 15'/><polyline points='9 5 12 2 15 5'/><polyline points='15 19 12 22 9 19'/><polyline points='19 9 22 12 19 15'/><line x1='2' x2='22' y1='12' y2='12'/><line x1='12' x2='12' y1='2' y2='22'/>",
    "Four-way arrows: drag to pan."
);

// =============================================================================
// Toolbar Icons
// =============================================================================

define_icon!(
    clipboard_copy,
    "<rect width='14' height='14' x='8' y='8' rx='2' ry='2'/><path d='M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2'/>",
    "Copy icon: two overlapping rounded rectangles."
);
define_icon!(
    arrow_down_tray,
    "<path d='M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4'/><polyline points='7 10 12 15 17 10'/><line x1='12' x2='12' y1='15' y2='3'/>",
    "Download icon: arrow pointing down into a tray."
);
define_icon!(
    arrow_up_tray,
    "<path d='M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8'/><polyline points='16 6 12 2 8 6'/><line x1='12' x2='12' y1='2' y2='15'/>",
    "Share icon: arrow pointing up out of a tray."
);
define_icon!(
    rotate_cw,
    "<path d='M21 12a9 9 0 1 1-9-9c2.52 0 4.93 1 6.74 2.74L21 8'/><path d='M21 3v5h-5'/>",
    "Clockwise circular arrow: re-render from the service."
);
define_icon!(
    cog,
    "<path d='M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z'/><circle cx='12' cy='12' r='3'/>",
    "Gear icon: settings."
);
define_icon!(
    cross,
    "<path d='M18 6 6 18'/><path d='m6 6 12 12'/>",
    "Cross icon: close or dismiss."
);

// =============================================================================
// Theme Mode Icons
// =============================================================================

define_icon!(
    sun,
    "<circle cx='12' cy='12' r='4'/><path d='M12 2v2'/><path d='M12 20v2'/><path d='m4.93 4.93 1.41 1.41'/><path d='m17.66 17.66 1.41 1.41'/><path d='M2 12h2'/><path d='M20 12h2'/><path d='m6.34 17.66-1.41 1.41'/><path d='m19.07 4.93-1.41 1.41'/>",
    "Sun icon: light theme mode."
);
define_icon!(
    moon,
    "<path d='M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z'/>",
    "Moon icon: dark theme mode."
);
define_icon!(
    monitor,
    "<rect width='20' height='14' x='2' y='3' rx='2'/><line x1='8' x2='16' y1='21' y2='21'/><line x1='12' x2='12' y1='17' y2='21'/>",
    "Monitor icon: follow the system theme."
);

// =============================================================================
// Notification Severity Icons
// =============================================================================

define_icon!(
    checkmark,
    "<path d='M20 6 9 17l-5-5'/>",
    "Checkmark icon: success."
);
define_icon!(
    warning,
    "<path d='m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 20h16a2 2 0 0 0 1.73-2Z'/><path d='M12 9v4'/><path d='M12 17h.01'/>",
    "Warning icon: triangle with exclamation mark."
);
define_icon!(
    octagon_alert,
    "<polygon points='7.86 2 16.14 2 22 7.86 22 16.14 16.14 22 7.86 22 2 16.14 2 7.86 7.86 2'/><line x1='12' x2='12' y1='8' y2='12'/><line x1='12' x2='12.01' y1='16' y2='16'/>",
    "Octagon with exclamation mark: error."
);

/// Constrains a glyph to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
