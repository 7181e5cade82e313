// SPDX-License-Identifier: MPL-2.0
//! Message handlers behind [`App::update`](super::App::update).
//!
//! One free function per message family, plus the render scheduling
//! helpers shared by the editor debounce, the refresh action, and the
//! settings screen.

use super::config::Config;
use super::persisted_state::AppState;
use super::{persistence, Message, Screen};
use crate::diagram;
use crate::i18n::fluent::I18n;
use crate::ui::editor;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::theming::AppTheme;
use crate::ui::viewer;
use iced::widget::text_editor;
use iced::Task;
use std::time::Duration;

/// Mutable view over the application state handed to each handler, so the
/// handlers stay free functions instead of methods on a monolithic `App`.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub theme: &'a mut AppTheme,
    pub viewer: &'a mut viewer::State,
    pub editor_content: &'a mut text_editor::Content,
    pub selected_example: &'a mut Option<&'static str>,
    pub diagram: &'a mut Option<diagram::RenderedDiagram>,
    pub requested_url: &'a mut Option<String>,
    pub is_rendering: &'a mut bool,
    pub render_generation: &'a mut u64,
    pub spinner_rotation: &'a mut f32,
    pub persisted: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles editor pane messages.
///
/// Every text change re-arms the debounce timer; the render itself only
/// starts once [`handle_debounce_elapsed`] fires with a still-current
/// generation.
pub fn handle_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: editor::Message,
) -> Task<Message> {
    match message {
        editor::Message::Action(action) => {
            let edited = action.is_edit();
            ctx.editor_content.perform(action);
            if edited {
                schedule_render(ctx)
            } else {
                Task::none()
            }
        }
        editor::Message::ExamplePicked(example) => {
            *ctx.editor_content = text_editor::Content::with_text(example.source);
            *ctx.selected_example = Some(example.id);
            schedule_render(ctx)
        }
    }
}

/// Handles viewer pane messages (zoom, pan, layout changes).
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    ctx.viewer.handle_message(message);
    Task::none()
}

/// Handles toolbar actions from the navigation bar.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match message {
        navbar::Message::CopySource => {
            let source = ctx.editor_content.text();
            ctx.notifications
                .push(notifications::Notification::success(
                    "notification-copy-success",
                ));
            iced::clipboard::write(source)
        }
        navbar::Message::DownloadSvg => {
            if ctx.diagram.is_none() {
                return Task::none();
            }
            let file_name = diagram::export::default_file_name();
            let last_directory = ctx.persisted.last_save_directory.clone();
            Task::perform(
                diagram::export::pick_save_location(file_name, last_directory),
                Message::SaveAsDialogResult,
            )
        }
        navbar::Message::CopyShareLink => {
            let source = ctx.editor_content.text();
            let service_url = ctx.config.render.sanitized().service_url;
            match diagram::share_link(&source, &service_url) {
                Some(link) => {
                    ctx.notifications
                        .push(notifications::Notification::success(
                            "notification-share-success",
                        ));
                    iced::clipboard::write(link)
                }
                None => Task::none(),
            }
        }
        navbar::Message::RefreshDiagram => {
            // Re-fetch the same diagram with a cache-busting query so the
            // service cannot answer from its HTTP cache. The transform
            // resets like any other render request.
            match ctx.requested_url.clone() {
                Some(url) => {
                    ctx.viewer.diagram_changed();
                    begin_fetch(ctx, diagram::cache_busted(&url))
                }
                None => Task::none(),
            }
        }
        navbar::Message::CycleTheme => {
            let mode = ctx.config.general.theme_mode.cycled();
            ctx.config.general.theme_mode = mode;
            *ctx.theme = AppTheme::new(mode);
            persistence::persist_config(ctx.config, ctx.notifications);
            Task::none()
        }
        navbar::Message::OpenSettings => {
            *ctx.screen = Screen::Settings;
            Task::none()
        }
    }
}

/// Handles settings screen messages.
///
/// Discrete picks apply and persist immediately. The service URL is a free
/// text field and only commits when the screen is left, at which point a
/// changed URL triggers a re-render.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::LanguagePicked(locale) => {
            persistence::apply_language_change(ctx.i18n, ctx.config, &locale, ctx.notifications);
            Task::none()
        }
        settings::Message::ThemePicked(mode) => {
            ctx.config.general.theme_mode = mode;
            *ctx.theme = AppTheme::new(mode);
            persistence::persist_config(ctx.config, ctx.notifications);
            Task::none()
        }
        settings::Message::WheelZoomToggled(enabled) => {
            ctx.config.viewport.wheel_zoom_enabled = enabled;
            ctx.viewer.set_config(ctx.config.viewport.sanitized());
            persistence::persist_config(ctx.config, ctx.notifications);
            Task::none()
        }
        settings::Message::FitModePicked(mode) => {
            ctx.config.viewport.fit_mode = mode;
            ctx.viewer.set_config(ctx.config.viewport.sanitized());
            persistence::persist_config(ctx.config, ctx.notifications);
            Task::none()
        }
        settings::Message::ServiceUrlChanged(url) => {
            ctx.config.render.service_url = url;
            Task::none()
        }
        settings::Message::BackPressed => {
            ctx.config.render = ctx.config.render.sanitized();
            persistence::persist_config(ctx.config, ctx.notifications);
            *ctx.screen = Screen::Workspace;
            // The committed URL may point at a different service; the
            // unchanged-URL check inside makes this a no-op otherwise.
            request_render(ctx)
        }
    }
}

/// Handles the debounce timer firing after an editor pause.
pub fn handle_debounce_elapsed(ctx: &mut UpdateContext<'_>, generation: u64) -> Task<Message> {
    if generation != *ctx.render_generation {
        return Task::none();
    }

    // The editor has settled; this is the natural point to snapshot the
    // session for the next launch.
    ctx.persisted.editor_source = Some(ctx.editor_content.text());
    ctx.persisted.selected_example = ctx.selected_example.map(str::to_string);
    persist_session(ctx);

    request_render(ctx)
}

/// Handles a render response from the service.
pub fn handle_diagram_fetched(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<diagram::RenderedDiagram, crate::error::RenderError>,
) -> Task<Message> {
    if generation != *ctx.render_generation {
        // The editor changed while this request was in flight; a newer
        // render supersedes it.
        return Task::none();
    }

    *ctx.is_rendering = false;
    *ctx.spinner_rotation = 0.0;

    match result {
        Ok(rendered) => {
            ctx.viewer.diagram_loaded(rendered.size);
            *ctx.diagram = Some(rendered);
            ctx.notifications.clear_render_errors();
        }
        Err(error) => {
            // The previous diagram stays on screen; only the toast reports
            // the failure.
            ctx.notifications
                .push(notifications::Notification::error(error.i18n_key()));
        }
    }

    Task::none()
}

/// Handles the SVG save dialog result.
pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<std::path::PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog.
        return Task::none();
    };
    let Some(rendered) = ctx.diagram.as_ref() else {
        return Task::none();
    };

    match diagram::export::write_svg(path, &rendered.svg) {
        Ok(saved) => {
            let filename = saved
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            ctx.notifications.push(
                notifications::Notification::success("notification-download-success")
                    .with_arg("filename", filename),
            );

            // The next save dialog opens where this one finished
            ctx.persisted.set_last_save_directory_from_file(&saved);
            persist_session(ctx);
        }
        Err(_) => {
            ctx.notifications.push(notifications::Notification::error(
                "notification-download-error",
            ));
        }
    }

    Task::none()
}

/// Computes the render URL for the current editor text and starts a fetch
/// when it differs from the last requested one.
///
/// Blank source clears the viewer instead. An unchanged URL is skipped
/// entirely, so debounce ticks without an effective edit cost nothing.
pub fn request_render(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let source = ctx.editor_content.text();
    let service_url = ctx.config.render.sanitized().service_url;

    match diagram::diagram_url(&source, &service_url) {
        None => {
            clear_diagram(ctx);
            Task::none()
        }
        Some(url) if ctx.requested_url.as_deref() == Some(url.as_str()) => Task::none(),
        Some(url) => {
            *ctx.requested_url = Some(url.clone());
            ctx.viewer.diagram_changed();
            begin_fetch(ctx, url)
        }
    }
}

/// Arms the debounce timer for the current editor content.
fn schedule_render(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.render_generation += 1;
    let generation = *ctx.render_generation;
    let delay = Duration::from_millis(ctx.config.render.sanitized().debounce_ms);

    Task::perform(tokio::time::sleep(delay), move |()| {
        Message::DebounceElapsed(generation)
    })
}

/// Starts a fetch for `fetch_url` and tags it with a fresh generation so a
/// late response cannot clobber a newer render.
fn begin_fetch(ctx: &mut UpdateContext<'_>, fetch_url: String) -> Task<Message> {
    *ctx.render_generation += 1;
    let generation = *ctx.render_generation;
    *ctx.is_rendering = true;
    let timeout_secs = ctx.config.render.sanitized().timeout_secs;

    Task::perform(diagram::fetch(fetch_url, timeout_secs), move |result| {
        Message::DiagramFetched { generation, result }
    })
}

/// Drops the rendered diagram and resets the viewer to its empty state.
fn clear_diagram(ctx: &mut UpdateContext<'_>) {
    // Invalidate any in-flight fetch.
    *ctx.render_generation += 1;
    *ctx.requested_url = None;
    *ctx.diagram = None;
    *ctx.is_rendering = false;
    *ctx.spinner_rotation = 0.0;
    ctx.viewer.diagram_cleared();
}

/// Writes the session snapshot to `state.cbor`, surfacing failures as a
/// warning toast. No-op under `cfg(test)`, like `persist_config`.
fn persist_session(ctx: &mut UpdateContext<'_>) {
    if cfg!(test) {
        return;
    }
    if let Some(key) = ctx.persisted.save() {
        ctx.notifications
            .push(notifications::Notification::warning(key));
    }
}
