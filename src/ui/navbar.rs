// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Holds the application title and the toolbar actions: copy source,
//! download SVG, copy a share link, force a re-render, cycle the theme
//! mode and open the settings screen. Actions that need a rendered
//! diagram are disabled until one exists.

use crate::i18n::fluent::I18n;
use crate::ui::action_icons;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::Vertical;
use iced::widget::{button, tooltip, Container, Row, Space, Svg, Text};
use iced::{Element, Length};

/// Read-only state the navbar draws from.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    /// Whether a rendered diagram exists. Download, share and refresh
    /// operate on the rendered output and stay disabled without one.
    pub has_diagram: bool,
}

/// One variant per toolbar action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CopySource,
    DownloadSvg,
    CopyShareLink,
    RefreshDiagram,
    CycleTheme,
    OpenSettings,
}

/// Builds the bar: title on the left, the action cluster on the right.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title"))
        .size(typography::TITLE_SM)
        .color(ctx.theme.colors.text_primary);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(toolbar_button(
            &ctx,
            action_icons::toolbar::copy_source(),
            ctx.i18n.tr("tooltip-copy"),
            Some(Message::CopySource),
        ))
        .push(toolbar_button(
            &ctx,
            action_icons::toolbar::download(),
            ctx.i18n.tr("tooltip-download"),
            ctx.has_diagram.then_some(Message::DownloadSvg),
        ))
        .push(toolbar_button(
            &ctx,
            action_icons::toolbar::share(),
            ctx.i18n.tr("tooltip-share"),
            ctx.has_diagram.then_some(Message::CopyShareLink),
        ))
        .push(toolbar_button(
            &ctx,
            action_icons::toolbar::refresh(),
            ctx.i18n.tr("tooltip-refresh"),
            ctx.has_diagram.then_some(Message::RefreshDiagram),
        ))
        .push(toolbar_button(
            &ctx,
            action_icons::theme::mode(ctx.theme.mode),
            ctx.i18n.tr("tooltip-theme"),
            Some(Message::CycleTheme),
        ))
        .push(toolbar_button(
            &ctx,
            action_icons::toolbar::settings(),
            ctx.i18n.tr("tooltip-settings"),
            Some(Message::OpenSettings),
        ));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .style(styles::surface::bar)
        .into()
}

/// Build one icon button with its tooltip. A `None` message renders the
/// button disabled with a grayed icon.
fn toolbar_button<'a>(
    ctx: &ViewContext<'a>,
    icon: Svg<'static>,
    tip: String,
    message: Option<Message>,
) -> Element<'a, Message> {
    let color = if message.is_some() {
        ctx.theme.colors.text_primary
    } else {
        palette::GRAY_400
    };

    let icon = action_icons::sized(icon, sizing::ICON_SM).style(styles::overlay::icon(color));

    let mut toolbar_button = button(icon)
        .padding(spacing::XS)
        .style(styles::button::navbar);
    if let Some(message) = message {
        toolbar_button = toolbar_button.on_press(message);
    }

    tooltip(toolbar_button, Text::new(tip), tooltip::Position::Bottom)
        .gap(4)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let theme = AppTheme::new(ThemeMode::Light);
        let ctx = ViewContext {
            i18n: &i18n,
            theme: &theme,
            has_diagram: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_without_diagram() {
        let i18n = I18n::default();
        let theme = AppTheme::new(ThemeMode::Dark);
        let ctx = ViewContext {
            i18n: &i18n,
            theme: &theme,
            has_diagram: false,
        };
        let _element = view(ctx);
    }
}
