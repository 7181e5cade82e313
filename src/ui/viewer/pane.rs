// SPDX-License-Identifier: MPL-2.0
//! Diagram pane: a canvas that draws the rendered SVG through the viewport
//! transform and turns pointer, touch, and wheel input into viewer messages.

use crate::diagram::RenderedDiagram;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing};
use crate::ui::state::ViewportState;
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use crate::ui::viewer::{component::Message, controls};
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::{Action, Container, Stack};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, touch, window, Color, Element, Event, Length, Padding, Point, Rectangle, Renderer,
    Size, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
}

pub struct ViewModel<'a> {
    pub viewport: &'a ViewportState,
    pub diagram: &'a RenderedDiagram,
}

/// Canvas program drawing the diagram and owning the raw input handling.
struct DiagramCanvas<'a> {
    viewport: &'a ViewportState,
    svg_handle: iced::advanced::svg::Handle,
    natural: Size,
    surface: Color,
    backdrop: Color,
}

/// Widget-local bookkeeping: the last pane size reported upstream and the
/// finger that owns an active touch drag.
#[derive(Debug, Clone, Copy, Default)]
struct CanvasState {
    reported_size: Option<Size>,
    drag_finger: Option<touch::Finger>,
}

/// Normalizes wheel units (lines vs. pixels) into notch counts, positive
/// scrolling up.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

fn pane_local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl canvas::Program<Message> for DiagramCanvas<'_> {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            // Every frame carries the authoritative layout bounds. Publishing
            // on change keeps the fit computation in sync with the pane,
            // including the very first frame after startup.
            Event::Window(window::Event::RedrawRequested(_)) => {
                if state.reported_size != Some(bounds.size()) {
                    state.reported_size = Some(bounds.size());
                    return Some(Action::publish(Message::PaneResized(bounds.size())));
                }
                None
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(Action::publish(Message::DragStarted(position)).and_capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if !self.viewport.drag.is_dragging || state.drag_finger.is_some() {
                    return None;
                }
                // Leaving the pane releases the drag, like a button-up
                match cursor.position_in(bounds) {
                    Some(position) => {
                        Some(Action::publish(Message::DragMoved(position)).and_capture())
                    }
                    None => Some(Action::publish(Message::DragEnded).and_capture()),
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Mouse(mouse::Event::CursorLeft) => {
                if self.viewport.drag.is_dragging && state.drag_finger.is_none() {
                    Some(Action::publish(Message::DragEnded).and_capture())
                } else {
                    None
                }
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_over(bounds)?;
                let steps = scroll_steps(delta);
                // The wheel never scrolls anything else while over the pane,
                // even when wheel zoom is disabled or the delta is zero
                if steps.abs() < f32::EPSILON {
                    return Some(Action::capture());
                }
                // Scrolling up (positive steps) zooms in
                Some(Action::publish(Message::WheelScrolled(-steps)).and_capture())
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if state.drag_finger.is_some() || !bounds.contains(*position) {
                    return None;
                }
                state.drag_finger = Some(*id);
                Some(Action::publish(Message::DragStarted(pane_local(*position, bounds))).and_capture())
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if state.drag_finger != Some(*id) {
                    return None;
                }
                Some(Action::publish(Message::DragMoved(pane_local(*position, bounds))).and_capture())
            }
            Event::Touch(touch::Event::FingerLifted { id, .. })
            | Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if state.drag_finger != Some(*id) {
                    return None;
                }
                state.drag_finger = None;
                Some(Action::publish(Message::DragEnded).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.surface);

        let content = self.viewport.content_rect(self.natural, bounds.size());
        frame.fill_rectangle(content.position(), content.size(), self.backdrop);
        frame.draw_svg(
            content,
            iced::advanced::svg::Svg::new(self.svg_handle.clone()),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.viewport.drag.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) && self.viewport.shows_pan_hint() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, Message> {
    let canvas = Canvas::new(DiagramCanvas {
        viewport: model.viewport,
        svg_handle: model.diagram.handle.clone(),
        natural: model.diagram.size,
        surface: ctx.theme.colors.surface_primary,
        backdrop: ctx.theme.colors.diagram_backdrop,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let mut stack = Stack::new().push(canvas);

    // Zoom button cluster, top right
    let cluster = Container::new(controls::cluster(ctx.i18n).map(Message::Controls))
        .padding(spacing::XXS)
        .style(styles::overlay::controls_container);

    stack = stack.push(
        Container::new(cluster)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
    );

    // Zoom percentage, top left
    let indicator = Container::new(
        controls::zoom_indicator(model.viewport.scale()).map(Message::Controls),
    )
    .padding(Padding {
        top: spacing::XXS,
        right: spacing::XS,
        bottom: spacing::XXS,
        left: spacing::XS,
    })
    .style(styles::overlay::indicator(radius::SM));

    stack = stack.push(
        Container::new(indicator)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Top),
    );

    // Pan hint, bottom left, only while zoomed past natural size
    if model.viewport.shows_pan_hint() {
        let hint = Container::new(controls::pan_hint(ctx.i18n).map(Message::Controls))
            .padding(Padding {
                top: spacing::XXS,
                right: spacing::XS,
                bottom: spacing::XXS,
                left: spacing::XS,
            })
            .style(styles::overlay::indicator(radius::SM));

        stack = stack.push(
            Container::new(hint)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XS)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Bottom),
        );
    }

    stack.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_steps_normalizes_line_and_pixel_deltas() {
        let lines = mouse::ScrollDelta::Lines { x: 0.0, y: 3.0 };
        let pixels = mouse::ScrollDelta::Pixels { x: 0.0, y: -240.0 };

        assert!((scroll_steps(&lines) - 3.0).abs() < f32::EPSILON);
        assert!((scroll_steps(&pixels) + 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn pane_local_subtracts_the_pane_origin() {
        let bounds = Rectangle::new(Point::new(380.0, 52.0), Size::new(800.0, 600.0));
        let local = pane_local(Point::new(480.0, 152.0), bounds);

        assert!((local.x - 100.0).abs() < f32::EPSILON);
        assert!((local.y - 100.0).abs() < f32::EPSILON);
    }
}
