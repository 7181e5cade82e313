// SPDX-License-Identifier: MPL-2.0
//! Indeterminate progress spinner drawn on a Canvas.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Geometry, LineCap, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Stroke width of both the track and the arc.
const STROKE_WIDTH: f32 = 3.0;
/// Gap between the circle and the canvas edge.
const EDGE_INSET: f32 = 4.0;
/// Opacity of the static track behind the sweeping arc.
const TRACK_ALPHA: f32 = 0.25;
/// The arc covers three quarters of the circle; the remaining gap is
/// what makes the rotation visible.
const SWEEP: f32 = 1.5 * PI;
/// Line segments used to approximate the arc.
const SEGMENTS: u32 = 30;

/// Indeterminate spinner shown while a render is in flight.
///
/// The rotation angle comes from the application tick, so the widget
/// itself holds no timer.
pub struct AnimatedSpinner {
    cache: Cache,
    angle: f32,
    color: Color,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, angle: f32) -> Self {
        Self {
            cache: Cache::default(),
            angle,
            color,
        }
    }

    /// Wraps the spinner in a fixed-size Canvas element.
    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::SPINNER_SIZE))
            .height(Length::Fixed(sizing::SPINNER_SIZE))
            .into()
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - EDGE_INSET;

            let track = Path::circle(center, radius);
            frame.stroke(
                &track,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(Color {
                        a: TRACK_ALPHA,
                        ..self.color
                    }),
            );

            // Start at twelve o'clock rather than three.
            let start = self.angle - PI / 2.0;
            let arc = Path::new(|path| {
                path.move_to(point_on_circle(center, radius, start));
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=SEGMENTS {
                    let angle = start + SWEEP * (i as f32 / SEGMENTS as f32);
                    path.line_to(point_on_circle(center, radius, angle));
                }
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(self.color)
                    .with_line_cap(LineCap::Round),
            );
        });

        vec![geometry]
    }
}
