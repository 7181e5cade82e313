// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the editor, viewer, and
//! settings screens.
//!
//! The `App` struct wires together the domains (editor, diagram rendering,
//! localization, settings) and translates messages into side effects like
//! config persistence or HTTP fetches. This file intentionally keeps policy
//! decisions (minimum window size, startup source precedence, the render
//! debounce) close to the main update loop so it is easy to audit
//! user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::diagram;
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use crate::ui::viewer;
use config::Config;
use iced::widget::text_editor;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Top-level application state. Every mutation flows through [`App::update`],
/// which hands the fields out to the handlers via [`update::UpdateContext`].
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Live configuration; the settings screen edits it in place.
    config: Config,
    theme: AppTheme,
    /// Zoom/pan state of the diagram pane.
    viewer: viewer::State,
    editor_content: text_editor::Content,
    /// Identifier of the example last picked from the catalog.
    selected_example: Option<&'static str>,
    /// The diagram currently on screen. Stays put when a later render fails.
    diagram: Option<diagram::RenderedDiagram>,
    /// Canonical URL of the last requested render; an edit that produces
    /// the same URL is not re-fetched.
    requested_url: Option<String>,
    is_rendering: bool,
    /// Monotonic counter invalidating stale debounce timers and fetches.
    render_generation: u64,
    /// Rotation angle for the render spinner (radians).
    spinner_rotation: f32,
    /// Persisted application state (editor session, last save directory).
    persisted: persisted_state::AppState,
    /// Transient toasts stacked over the workspace.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_diagram", &self.diagram.is_some())
            .field("is_rendering", &self.is_rendering)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 960;

// Spinner advance per 100 ms tick (half a turn per second).
const SPINNER_STEP: f32 = std::f32::consts::PI / 10.0;

/// Initial window geometry. The minimum keeps the editor and viewer panes
/// usable side by side.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Starts the Iced runtime with the parsed command-line flags.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 takes the boot closure as Fn, not FnOnce; the RefCell lets
    // it hand the flags over exactly once anyway.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("boot closure ran twice");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Workspace,
            config: Config::default(),
            theme: AppTheme::new(crate::ui::theming::ThemeMode::default()),
            viewer: viewer::State::default(),
            editor_content: text_editor::Content::new(),
            selected_example: None,
            diagram: None,
            requested_url: None,
            is_rendering: false,
            render_generation: 0,
            spinner_rotation: 0.0,
            persisted: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the first render for
    /// whatever source wins the startup precedence: a share link passed on
    /// the command line, then the restored editor session, then the bundled
    /// default example.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme = AppTheme::new(config.general.theme_mode);
        app.viewer = viewer::State::new(config.viewport.sanitized());
        app.config = config;

        let (persisted, state_warning) = persisted_state::AppState::load();
        app.persisted = persisted;

        // Both loaders already fell back to defaults; the keys say what broke.
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        // Restore the picker selection; a pick that no longer exists in the
        // catalog is silently dropped.
        app.selected_example = app
            .persisted
            .selected_example
            .as_deref()
            .and_then(diagram::source::find)
            .map(|example| example.id);

        let mut source = None;
        if let Some(input) = flags.share_input.as_deref() {
            source = diagram::parse_share_input(input);
            if source.is_none() {
                app.notifications
                    .push(notifications::Notification::warning(
                        "notification-share-link-invalid",
                    ));
            }
        }
        let source = source
            .or_else(|| app.persisted.editor_source.clone())
            .unwrap_or_else(|| {
                let example = diagram::default_example();
                app.selected_example = Some(example.id);
                example.source.to_string()
            });
        app.editor_content = text_editor::Content::with_text(&source);

        let task = update::request_render(&mut app.update_context());
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.is_rendering,
            self.notifications.has_notifications(),
        )
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            theme: &mut self.theme,
            viewer: &mut self.viewer,
            editor_content: &mut self.editor_content,
            selected_example: &mut self.selected_example,
            diagram: &mut self.diagram,
            requested_url: &mut self.requested_url,
            is_rendering: &mut self.is_rendering,
            render_generation: &mut self.render_generation,
            spinner_rotation: &mut self.spinner_rotation,
            persisted: &mut self.persisted,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Editor(editor_message) => {
                update::handle_editor_message(&mut ctx, editor_message)
            }
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::DebounceElapsed(generation) => {
                update::handle_debounce_elapsed(&mut ctx, generation)
            }
            Message::DiagramFetched { generation, result } => {
                update::handle_diagram_fetched(&mut ctx, generation, result)
            }
            Message::SaveAsDialogResult(path) => update::handle_save_dialog_result(&mut ctx, path),
            Message::Tick(_instant) => {
                if *ctx.is_rendering {
                    *ctx.spinner_rotation =
                        (*ctx.spinner_rotation + SPINNER_STEP) % std::f32::consts::TAU;
                }

                // The same tick also drives toast expiry.
                ctx.notifications.tick();

                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            config: &self.config,
            theme: &self.theme,
            viewer: &self.viewer,
            editor_content: &self.editor_content,
            selected_example: self.selected_example,
            diagram: self.diagram.as_ref(),
            is_rendering: self.is_rendering,
            spinner_rotation: self.spinner_rotation,
            notifications: &self.notifications,
        })
    }
}
