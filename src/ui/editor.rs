// SPDX-License-Identifier: MPL-2.0
//! Source editor pane.
//!
//! A fixed-width sidebar holding the Mermaid source and the example picker.
//! The editor emits raw [`text_editor::Action`]s; the application decides
//! when an edit should trigger a re-render.

use crate::diagram::{Example, EXAMPLES};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::{pick_list, text_editor, Column, Container, Text};
use iced::{Element, Font, Length};

/// Contextual data needed to render the editor pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    /// Identifier of the last picked example, if any. Manual edits do not
    /// clear the selection, matching how a picker keeps its last choice.
    pub selected_example: Option<&'static str>,
}

/// Messages emitted by the editor pane.
#[derive(Debug, Clone)]
pub enum Message {
    Action(text_editor::Action),
    ExamplePicked(&'static Example),
}

/// Example entry for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ExampleOption {
    example: &'static Example,
    label: String,
}

impl std::fmt::Display for ExampleOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn example_options(i18n: &I18n) -> Vec<ExampleOption> {
    EXAMPLES
        .iter()
        .map(|example| ExampleOption {
            example,
            label: i18n.tr(example.name_key),
        })
        .collect()
}

/// Render the editor pane.
pub fn view<'a>(ctx: ViewContext<'a>, content: &'a text_editor::Content) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("editor-heading"))
        .size(typography::TITLE_SM)
        .color(ctx.theme.colors.text_primary);

    let options = example_options(ctx.i18n);
    let selected = ctx
        .selected_example
        .and_then(|id| options.iter().find(|opt| opt.example.id == id).cloned());

    let picker = pick_list(options, selected, |opt| Message::ExamplePicked(opt.example))
        .placeholder(ctx.i18n.tr("examples-placeholder"))
        .padding(spacing::XS)
        .width(Length::Fill);

    let examples_label = Text::new(ctx.i18n.tr("examples-label"))
        .size(typography::BODY_SM)
        .color(ctx.theme.colors.text_secondary);

    let examples_section = Column::new()
        .spacing(spacing::XXS)
        .push(examples_label)
        .push(picker);

    let source_input = text_editor(content)
        .placeholder(ctx.i18n.tr("editor-placeholder"))
        .on_action(Message::Action)
        .font(Font::MONOSPACE)
        .size(typography::BODY_SM)
        .padding(spacing::SM)
        .height(Length::Fill);

    let column = Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(examples_section)
        .push(source_input);

    Container::new(column)
        .width(Length::Fixed(sizing::EDITOR_PANE_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::surface::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_view_renders() {
        let i18n = I18n::default();
        let theme = AppTheme::new(crate::ui::theming::ThemeMode::Light);
        let content = text_editor::Content::with_text("graph TD;\n    A --> B;");
        let ctx = ViewContext {
            i18n: &i18n,
            theme: &theme,
            selected_example: Some("flowchart"),
        };
        let _element = view(ctx, &content);
    }

    #[test]
    fn example_options_cover_all_examples() {
        let i18n = I18n::default();
        let options = example_options(&i18n);
        assert_eq!(options.len(), EXAMPLES.len());
        for option in &options {
            assert!(!option.label.starts_with("MISSING:"));
        }
    }

    #[test]
    fn unknown_selection_resolves_to_no_option() {
        let i18n = I18n::default();
        let options = example_options(&i18n);
        assert!(!options.iter().any(|opt| opt.example.id == "mindmap"));
    }
}
