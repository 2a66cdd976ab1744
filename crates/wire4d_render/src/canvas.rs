//! The 2D drawing surface
//!
//! The frame renderer only ever talks to a [`Canvas`]. [`DrawList`] records
//! the calls so they can be inspected in tests or uploaded to the GPU.

use wire4d_math::Point2;

/// Side length of the square drawn by [`Canvas::point`], in pixels
pub const POINT_SIZE: f32 = 10.0;

/// A fixed-size 2D surface addressed in pixels
///
/// Coordinates outside the surface are allowed; the surface clips them.
pub trait Canvas {
    /// Width and height in pixels
    fn size(&self) -> (f32, f32);

    /// Fill the whole surface with the background colour
    fn clear(&mut self);

    /// Draw a line in the foreground colour
    fn line(&mut self, from: Point2, to: Point2);

    /// Draw a filled [`POINT_SIZE`] square centred on `at`
    fn point(&mut self, at: Point2);
}

/// A recorded draw call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line(Point2, Point2),
    Point(Point2),
}

/// Canvas that records draw calls
///
/// Clearing discards everything recorded so far.
#[derive(Clone, Debug)]
pub struct DrawList {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// All recorded commands in call order
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded line segments in call order
    pub fn lines(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line(a, b) => Some((a, b)),
            _ => None,
        })
    }

    /// Recorded points in call order
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Point(p) => Some(p),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

impl Canvas for DrawList {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn line(&mut self, from: Point2, to: Point2) {
        self.commands.push(DrawCommand::Line(from, to));
    }

    fn point(&mut self, at: Point2) {
        self.commands.push(DrawCommand::Point(at));
    }
}

/// Canvas colours as sRGB-encoded RGBA
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasStyle {
    pub background: [f32; 4],
    pub foreground: [f32; 4],
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            // #0a0a0a
            background: [10.0 / 255.0, 10.0 / 255.0, 10.0 / 255.0, 1.0],
            // #497863
            foreground: [73.0 / 255.0, 120.0 / 255.0, 99.0 / 255.0, 1.0],
        }
    }
}

impl CanvasStyle {
    /// Convert the sRGB-encoded colours to linear, for sRGB surfaces
    pub fn to_linear(self) -> Self {
        Self {
            background: srgb_to_linear(self.background),
            foreground: srgb_to_linear(self.foreground),
        }
    }
}

fn srgb_to_linear(c: [f32; 4]) -> [f32; 4] {
    let channel = |v: f32| {
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(c[0]), channel(c[1]), channel(c[2]), c[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_discards_previous() {
        let mut list = DrawList::new(500.0, 500.0);
        list.line(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        list.clear();
        assert_eq!(list.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new(500.0, 500.0);
        list.clear();
        list.point(Point2::new(5.0, 5.0));
        list.line(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert_eq!(list.commands().len(), 3);
        assert_eq!(list.line_count(), 1);
        assert_eq!(list.points().collect::<Vec<_>>(), vec![Point2::new(5.0, 5.0)]);
    }

    #[test]
    fn test_size() {
        assert_eq!(DrawList::new(640.0, 480.0).size(), (640.0, 480.0));
    }

    #[test]
    fn test_linear_conversion() {
        let linear = CanvasStyle::default().to_linear();
        assert!(linear.background[0] < CanvasStyle::default().background[0]);
        assert_eq!(linear.background[3], 1.0);
        assert!((srgb_to_linear([1.0, 0.0, 0.5, 1.0])[0] - 1.0).abs() < 1e-5);
    }
}
