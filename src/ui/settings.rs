// SPDX-License-Identifier: MPL-2.0
//! Settings screen.
//!
//! Language, theme mode, viewport behavior and the render service endpoint.
//! Picks and toggles apply and persist immediately. The service URL is free
//! text and only commits when the screen is left.

use crate::app::config::{Config, FitMode};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text_input, toggler, Column, Container, Row, Space, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Width of the centered settings column.
const PANEL_WIDTH: f32 = 480.0;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguagePicked(LanguageIdentifier),
    ThemePicked(ThemeMode),
    WheelZoomToggled(bool),
    FitModePicked(FitMode),
    ServiceUrlChanged(String),
    BackPressed,
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(PANEL_WIDTH))
        .push(title)
        .push(language_section(&ctx))
        .push(theme_section(&ctx))
        .push(wheel_zoom_section(&ctx))
        .push(fit_mode_section(&ctx))
        .push(service_url_section(&ctx))
        .push(back_button(&ctx));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

fn section_label(text: String) -> Text<'static> {
    Text::new(text).size(typography::BODY)
}

fn language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut buttons = Row::new().spacing(spacing::XS);

    for locale in &ctx.i18n.available_locales {
        // Look up the language's own name, e.g. "language-name-fr"
        let translated = ctx.i18n.tr(&format!("language-name-{locale}"));
        let label = if translated.starts_with("MISSING:") {
            locale.to_string()
        } else {
            translated
        };

        let is_current = ctx.i18n.current_locale() == locale;

        buttons = buttons.push(
            button(Text::new(label))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::toggle(is_current))
                .on_press(Message::LanguagePicked(locale.clone())),
        );
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(section_label(ctx.i18n.tr("settings-language")))
        .push(buttons)
        .into()
}

fn theme_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let modes = [
        (ThemeMode::Light, "settings-theme-light"),
        (ThemeMode::Dark, "settings-theme-dark"),
        (ThemeMode::System, "settings-theme-system"),
    ];

    let mut buttons = Row::new().spacing(spacing::XS);
    for (mode, key) in modes {
        buttons = buttons.push(
            button(Text::new(ctx.i18n.tr(key)))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::toggle(ctx.config.general.theme_mode == mode))
                .on_press(Message::ThemePicked(mode)),
        );
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(section_label(ctx.i18n.tr("settings-theme")))
        .push(buttons)
        .into()
}

fn wheel_zoom_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle = toggler(ctx.config.viewport.wheel_zoom_enabled)
        .on_toggle(Message::WheelZoomToggled)
        .size(20.0);

    Row::new()
        .align_y(Vertical::Center)
        .push(section_label(ctx.i18n.tr("settings-wheel-zoom")))
        .push(Space::new().width(Length::Fill))
        .push(toggle)
        .into()
}

fn fit_mode_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let modes = [
        (FitMode::Auto, "settings-fit-mode-auto"),
        (FitMode::Fixed, "settings-fit-mode-fixed"),
    ];

    let mut buttons = Row::new().spacing(spacing::XS);
    for (mode, key) in modes {
        buttons = buttons.push(
            button(Text::new(ctx.i18n.tr(key)))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::toggle(ctx.config.viewport.fit_mode == mode))
                .on_press(Message::FitModePicked(mode)),
        );
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(section_label(ctx.i18n.tr("settings-fit-mode")))
        .push(buttons)
        .into()
}

fn service_url_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(
        crate::app::config::DEFAULT_SERVICE_URL,
        &ctx.config.render.service_url,
    )
    .on_input(Message::ServiceUrlChanged)
    .padding(spacing::XS)
    .width(Length::Fill);

    Column::new()
        .spacing(spacing::XXS)
        .push(section_label(ctx.i18n.tr("settings-service-url")))
        .push(input)
        .into()
}

fn back_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let back = button(Text::new(ctx.i18n.tr("settings-back")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::BackPressed);

    Container::new(back)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .padding([spacing::SM, 0.0])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_view_renders() {
        let i18n = I18n::default();
        let config = Config::default();
        let ctx = ViewContext {
            i18n: &i18n,
            config: &config,
        };
        let _element = view(ctx);
    }

    #[test]
    fn settings_view_renders_with_custom_config() {
        let i18n = I18n::default();
        let config = Config {
            general: crate::app::config::GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            viewport: crate::app::config::ViewportConfig {
                wheel_zoom_enabled: false,
                fit_mode: FitMode::Fixed,
                ..Default::default()
            },
            ..Default::default()
        };
        let ctx = ViewContext {
            i18n: &i18n,
            config: &config,
        };
        let _element = view(ctx);
    }
}
