// SPDX-License-Identifier: MPL-2.0
//! Toast cards for on-screen notifications.
//!
//! Each card shows a severity icon, the resolved message, and a dismiss
//! button, with the severity color as a border accent. The overlay
//! stacks visible cards in the bottom-right corner above the diagram.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::styles;
use crate::ui::{action_icons, icons};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Builds the toast overlay for every visible notification.
///
/// Returns a zero-sized element when nothing is on screen so the
/// overlay never intercepts pointer events over the diagram.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> =
        manager.visible().map(|n| card(n, i18n)).collect();

    if cards.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let stack = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// One toast card.
fn card<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let message = if notification.args().is_empty() {
        i18n.tr(notification.key())
    } else {
        let args: Vec<(&str, &str)> = notification
            .args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.key(), &args)
    };

    let icon = icons::sized(
        action_icons::notification::severity(notification.severity())
            .style(styles::overlay::icon(accent)),
        sizing::ICON_MD,
    );

    let body = text(message).size(typography::BODY).style(|theme: &Theme| {
        text::Style {
            color: Some(theme.palette().text),
        }
    });

    let dismiss = button(icons::sized(action_icons::toolbar::close(), sizing::ICON_SM))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(dismiss_style);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(Container::new(body).width(Length::Fill))
        .push(dismiss);

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

/// Theme background with a severity-colored border.
fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Bare icon with a translucent wash on hover/press, readable on both
/// light and dark card backgrounds.
fn dismiss_style(theme: &Theme, status: button::Status) -> button::Style {
    let wash = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let background = match status {
        button::Status::Hovered => wash(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => wash(opacity::OVERLAY_MEDIUM),
        _ => None,
    };

    button::Style {
        background,
        text_color: theme.extended_palette().background.base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
