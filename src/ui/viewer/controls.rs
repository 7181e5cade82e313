// SPDX-License-Identifier: MPL-2.0
//! Viewer overlays: zoom button cluster, zoom indicator, and pan hint.
//!
//! These are the small floating elements layered over the diagram pane.
//! Positioning is the pane's concern; this module only builds the pieces.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::scale::zoom_percent_label;
use crate::ui::styles;
use crate::ui::{action_icons, icons};
use iced::widget::{button, text, tooltip, Row, Text};
use iced::{alignment::Vertical, Element, Font};

/// Messages emitted by the zoom button cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    ResetView,
}

fn cluster_button(
    icon: iced::widget::Svg<'static>,
    tip: String,
    message: Message,
) -> Element<'static, Message> {
    let tinted = icons::sized(icon, sizing::ICON_SM).style(styles::overlay::icon(palette::GRAY_900));
    let styled = button(tinted)
        .on_press(message)
        .padding(spacing::XXS)
        .style(styles::button::ghost(palette::GRAY_900));

    tooltip(styled, Text::new(tip), tooltip::Position::Bottom)
        .gap(4)
        .into()
}

/// The zoom in / zoom out / reset button cluster, shown top-right.
pub fn cluster(i18n: &I18n) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(cluster_button(
            action_icons::viewer::zoom_in(),
            i18n.tr("tooltip-zoom-in"),
            Message::ZoomIn,
        ))
        .push(cluster_button(
            action_icons::viewer::zoom_out(),
            i18n.tr("tooltip-zoom-out"),
            Message::ZoomOut,
        ))
        .push(cluster_button(
            action_icons::viewer::zoom_reset(),
            i18n.tr("tooltip-zoom-reset"),
            Message::ResetView,
        ))
        .into()
}

/// The current zoom percentage, shown top-left in a monospace face.
pub fn zoom_indicator<'a>(scale: f32) -> Element<'a, Message> {
    text(zoom_percent_label(scale))
        .size(typography::CAPTION)
        .font(Font::MONOSPACE)
        .color(palette::GRAY_900)
        .into()
}

/// The "drag to pan" hint, shown bottom-left while zoomed in past 100%.
pub fn pan_hint(i18n: &I18n) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(
            icons::sized(action_icons::viewer::pan(), 12.0)
                .style(styles::overlay::icon(palette::GRAY_700)),
        )
        .push(
            Text::new(i18n.tr("viewer-pan-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_700),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn overlay_builders_render() {
        let i18n = I18n::default();
        let _cluster = cluster(&i18n);
        let _indicator = zoom_indicator(1.0);
        let _hint = pan_hint(&i18n);
    }
}
