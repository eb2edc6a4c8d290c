//! Drawing surface contract and a recording implementation.

use crate::color::Rgba;
use crate::geometry::{Point, Size};

/// Line appearance for stroked shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

/// A drawable region an animation renders into.
///
/// Coordinates are device-independent units with the origin at the top-left
/// corner and `y` growing downwards.
pub trait Surface {
    /// Current rendered dimensions.
    fn size(&self) -> Size;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);

    /// Stroke a connected polyline through `points`.
    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
}

/// Surface that records draw calls instead of rasterizing them.
///
/// The terminal canvas widget replays the recorded commands, and tests
/// inspect them directly.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    size: Size,
    commands: Vec<DrawCommand>,
    clears: u64,
}

impl DrawList {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Update the rendered dimensions, as after a host resize.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Commands recorded since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Whether no command has been recorded since the last clear.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of times the surface has been cleared.
    pub fn clears(&self) -> u64 {
        self.clears
    }

    /// Recorded straight segments.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Stroke)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
            _ => None,
        })
    }

    /// Recorded polylines.
    pub fn polylines(&self) -> impl Iterator<Item = (&[Point], Stroke)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Polyline { points, stroke } => Some((points.as_slice(), *stroke)),
            _ => None,
        })
    }

    /// Recorded filled circles.
    pub fn circles(&self) -> impl Iterator<Item = (Point, f64, Rgba)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{CYAN, PRIMARY_BLUE};

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new(Size::new(100.0, 50.0));
        let stroke = Stroke {
            color: CYAN,
            width: 0.5,
        };
        list.stroke_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), stroke);
        list.fill_circle(Point::new(2.0, 2.0), 1.5, PRIMARY_BLUE);

        assert_eq!(list.commands().len(), 2);
        assert_eq!(list.lines().count(), 1);
        assert_eq!(list.circles().count(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::Line { .. }));
    }

    #[test]
    fn test_clear_drops_commands() {
        let mut list = DrawList::new(Size::new(10.0, 10.0));
        list.fill_circle(Point::new(1.0, 1.0), 1.0, CYAN);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.clears(), 1);
        assert_eq!(list.size(), Size::new(10.0, 10.0));
    }
}
