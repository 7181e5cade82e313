// SPDX-License-Identifier: MPL-2.0
//! The root [`Message`] enum plus the [`Flags`] handed over by `main.rs`.

use crate::diagram::RenderedDiagram;
use crate::error::RenderError;
use crate::ui::editor;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::viewer;
use std::path::PathBuf;
use std::time::Instant;

/// Everything `App::update` can receive. Component messages arrive wrapped
/// in a variant per surface; the bare variants belong to the app itself.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(editor::Message),
    Viewer(viewer::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// The editor has been idle long enough for a re-render. Carries the
    /// generation current when the timer was armed; a stale generation
    /// means the user typed again and a newer timer is running.
    DebounceElapsed(u64),
    /// A render request came back from the service.
    DiagramFetched {
        generation: u64,
        result: Result<RenderedDiagram, RenderError>,
    },
    /// The user picked a destination in the SVG save dialog, or cancelled.
    SaveAsDialogResult(Option<PathBuf>),
    /// Periodic timer driving the render spinner and toast auto-dismiss.
    Tick(Instant),
}

/// Launch parameters collected from the command line by `main.rs`.
///
/// Directory overrides (`--data-dir`, `--config-dir`) are applied by
/// `main.rs` through [`super::paths::init_cli_overrides`] before the
/// application boots, so they never reach this struct.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override (`--lang`).
    pub lang: Option<String>,
    /// Positional argument: a share link whose fragment carries Mermaid
    /// source to open instead of the saved session.
    pub share_input: Option<String>,
}
