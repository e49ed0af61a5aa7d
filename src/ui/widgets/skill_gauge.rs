// SPDX-License-Identifier: MPL-2.0
//! Circular skill gauge drawn with Canvas.
//!
//! The arc sweep comes straight from the gauge animation's dash offset, so
//! the drawing stays in lockstep with the percentage readout.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Canvas program rendering the gauge track and progress arc.
pub struct SkillGauge {
    cache: canvas::Cache,
    /// Fraction of the circle covered by the arc, `0.0..=1.0`.
    sweep: f32,
    color: Color,
}

impl SkillGauge {
    #[must_use]
    pub fn new(sweep: f32, color: Color) -> Self {
        Self {
            cache: canvas::Cache::default(),
            sweep: sweep.clamp(0.0, 1.0),
            color,
        }
    }

    /// Wraps the gauge in a fixed-size canvas widget.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::GAUGE_CANVAS))
            .height(Length::Fixed(sizing::GAUGE_CANVAS))
            .into()
    }
}

impl<Message> canvas::Program<Message> for SkillGauge {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = sizing::GAUGE_RADIUS;

                // Track circle behind the arc.
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default()
                        .with_width(sizing::GAUGE_STROKE)
                        .with_color(Color {
                            a: opacity::GAUGE_TRACK,
                            ..self.color
                        }),
                );

                if self.sweep <= 0.0 {
                    return;
                }

                // Progress arc, clockwise from the top.
                let start_angle = -PI / 2.0;
                let end_angle = start_angle + self.sweep * 2.0 * PI;

                let mut arc = canvas::path::Builder::new();
                let start = Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                );
                arc.move_to(start);

                // Approximate the arc with short segments for smoothness.
                let segments = 64;
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(sizing::GAUGE_STROKE)
                        .with_color(self.color),
                );
            });

        vec![geometry]
    }
}
