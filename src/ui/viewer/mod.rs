// SPDX-License-Identifier: MPL-2.0
//! Diagram viewer: the zoom/pan pane and the states around it.
//!
//! The viewer area has three mutually exclusive faces. While a render is in
//! flight the whole pane is replaced by a spinner, so a stale diagram never
//! masquerades as the current one. A blank source shows the empty state.
//! Otherwise the interactive pane takes over.

pub mod component;
pub mod controls;
pub mod pane;

pub use component::{Message, State};

use crate::diagram::RenderedDiagram;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::AppTheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Application context the viewer reads but never mutates.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
}

/// Renders the viewer area.
pub fn view<'a>(
    env: ViewEnv<'a>,
    state: &'a State,
    diagram: Option<&'a RenderedDiagram>,
    is_rendering: bool,
    spinner_rotation: f32,
) -> Element<'a, Message> {
    if is_rendering {
        return loading_view(&env, spinner_rotation);
    }

    match diagram {
        Some(diagram) => pane::view(
            pane::ViewContext {
                i18n: env.i18n,
                theme: env.theme,
            },
            pane::ViewModel {
                viewport: &state.viewport,
                diagram,
            },
        ),
        None => empty_view(&env),
    }
}

fn loading_view<'a>(env: &ViewEnv<'a>, spinner_rotation: f32) -> Element<'a, Message> {
    let spinner =
        AnimatedSpinner::new(env.theme.colors.brand_primary, spinner_rotation).into_element();

    let label = Text::new(env.i18n.tr("viewer-loading"))
        .size(typography::BODY)
        .color(env.theme.colors.text_secondary);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(label);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn empty_view<'a>(env: &ViewEnv<'a>) -> Element<'a, Message> {
    let title = Text::new(env.i18n.tr("viewer-empty-title"))
        .size(typography::BODY_LG)
        .color(env.theme.colors.text_secondary);

    let hint = Text::new(env.i18n.tr("viewer-empty-hint"))
        .size(typography::BODY_SM)
        .color(env.theme.colors.text_tertiary);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
