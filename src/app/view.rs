// SPDX-License-Identifier: MPL-2.0
//! Builds the widget tree for whichever screen is active.
//!
//! Layout only; every decision that changes state happened in `update`
//! before this runs.

use super::config::Config;
use super::{Message, Screen};
use crate::diagram::RenderedDiagram;
use crate::i18n::fluent::I18n;
use crate::ui::editor::{self, ViewContext as EditorViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications;
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::AppTheme;
use crate::ui::viewer;
use iced::widget::{text_editor, Column, Row, Stack};
use iced::{Element, Length};

/// Borrowed slices of [`App`](super::App) state the view functions read.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub config: &'a Config,
    pub theme: &'a AppTheme,
    pub viewer: &'a viewer::State,
    pub editor_content: &'a text_editor::Content,
    pub selected_example: Option<&'static str>,
    pub diagram: Option<&'a RenderedDiagram>,
    pub is_rendering: bool,
    pub spinner_rotation: f32,
    pub notifications: &'a notifications::Manager,
}

/// Picks the active screen and stacks the toast overlay on top.
///
/// Toasts sit above whichever screen is showing, so feedback for a save
/// or a render failure survives a screen switch.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let current_view: Element<'a, Message> = match ctx.screen {
        Screen::Workspace => view_workspace(&ctx),
        Screen::Settings => view_settings(&ctx),
    };

    let toasts = notifications::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(current_view)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Editor pane on the left, navbar and diagram viewer on the right.
fn view_workspace<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let editor_pane = editor::view(
        EditorViewContext {
            i18n: ctx.i18n,
            theme: ctx.theme,
            selected_example: ctx.selected_example,
        },
        ctx.editor_content,
    )
    .map(Message::Editor);

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        theme: ctx.theme,
        has_diagram: ctx.diagram.is_some(),
    })
    .map(Message::Navbar);

    let viewer_view = viewer::view(
        viewer::ViewEnv {
            i18n: ctx.i18n,
            theme: ctx.theme,
        },
        ctx.viewer,
        ctx.diagram,
        ctx.is_rendering,
        ctx.spinner_rotation,
    )
    .map(Message::Viewer);

    let main_area = Column::new()
        .push(navbar_view)
        .push(viewer_view)
        .width(Length::Fill)
        .height(Length::Fill);

    Row::new()
        .push(editor_pane)
        .push(main_area)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_settings<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    settings::view(SettingsViewContext {
        i18n: ctx.i18n,
        config: ctx.config,
    })
    .map(Message::Settings)
}
