//! Ratatui widget that replays a [`DrawList`] onto a braille canvas.

use backdrop_core::{DrawCommand, DrawList, Rgba, Surface};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Line},
    },
};

use crate::color::{blend_to_terminal, to_terminal};

/// Renders recorded animation commands into a terminal area.
///
/// The draw list's surface size is stretched over the whole area. Surface
/// coordinates grow downwards while the canvas grows upwards, so `y` is
/// flipped.
#[derive(Debug, Clone, Copy)]
pub struct FieldCanvas<'a> {
    list: &'a DrawList,
    background: Rgba,
}

impl<'a> FieldCanvas<'a> {
    pub fn new(list: &'a DrawList, background: Rgba) -> Self {
        Self { list, background }
    }
}

impl Widget for FieldCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.list.size();
        let width = size.width.max(1.0);
        let height = size.height.max(1.0);
        let flip = |y: f64| height - y;
        let color = |c: Rgba| blend_to_terminal(c, self.background);

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(to_terminal(self.background))
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for command in self.list.commands() {
                    match command {
                        DrawCommand::Line { from, to, stroke } => {
                            ctx.draw(&Line::new(
                                from.x,
                                flip(from.y),
                                to.x,
                                flip(to.y),
                                color(stroke.color),
                            ));
                        }
                        DrawCommand::Polyline { points, stroke } => {
                            for pair in points.windows(2) {
                                ctx.draw(&Line::new(
                                    pair[0].x,
                                    flip(pair[0].y),
                                    pair[1].x,
                                    flip(pair[1].y),
                                    color(stroke.color),
                                ));
                            }
                        }
                        DrawCommand::Circle {
                            center,
                            radius,
                            color: fill,
                        } => {
                            ctx.draw(&Circle {
                                x: center.x,
                                y: flip(center.y),
                                radius: *radius,
                                color: color(*fill),
                            });
                        }
                    }
                }
            })
            .render(area, buf);
    }
}
