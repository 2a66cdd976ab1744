//! GPU-compatible data types for canvas drawing
//!
//! These types match the layouts in `canvas.wgsl`. All derive Pod and
//! Zeroable for safe buffer uploads.

use bytemuck::{Pod, Zeroable};

use wire4d_math::Point2;

use crate::canvas::{DrawCommand, DrawList, POINT_SIZE};

/// Vertices emitted per point square (two triangles)
pub const QUAD_VERTEX_COUNT: usize = 6;

/// A vertex in canvas pixel space
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CanvasVertex {
    pub position: [f32; 2],
}

impl From<Point2> for CanvasVertex {
    fn from(p: Point2) -> Self {
        Self {
            position: p.to_array(),
        }
    }
}

/// Uniforms shared by the line and fill pipelines
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CanvasUniforms {
    /// Canvas width and height in pixels
    pub size: [f32; 2],
    pub _padding: [f32; 2],
    /// Foreground colour
    pub color: [f32; 4],
}

impl Default for CanvasUniforms {
    fn default() -> Self {
        Self {
            size: [1.0, 1.0],
            _padding: [0.0; 2],
            color: [1.0; 4],
        }
    }
}

/// CPU-side vertex data for one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasGeometry {
    /// Line-list vertices, two per segment
    pub lines: Vec<CanvasVertex>,
    /// Triangle-list vertices, six per point square
    pub fills: Vec<CanvasVertex>,
    /// Segments and points dropped for non-finite coordinates
    pub skipped: usize,
}

impl CanvasGeometry {
    /// Build vertex data from a draw list
    ///
    /// Only commands after the last clear survive (the list already enforces
    /// this). Segments or points with infinite or NaN coordinates are clipped
    /// away here.
    pub fn from_draw_list(list: &DrawList) -> Self {
        let mut geometry = Self::default();
        for command in list.commands() {
            match *command {
                DrawCommand::Clear => {
                    geometry.lines.clear();
                    geometry.fills.clear();
                }
                DrawCommand::Line(a, b) => {
                    if a.is_finite() && b.is_finite() {
                        geometry.lines.push(a.into());
                        geometry.lines.push(b.into());
                    } else {
                        geometry.skipped += 1;
                    }
                }
                DrawCommand::Point(p) => {
                    if p.is_finite() {
                        geometry.fills.extend_from_slice(&point_quad(p));
                    } else {
                        geometry.skipped += 1;
                    }
                }
            }
        }
        geometry
    }
}

/// Two triangles covering a POINT_SIZE square centred on `p`
fn point_quad(p: Point2) -> [CanvasVertex; QUAD_VERTEX_COUNT] {
    let h = POINT_SIZE / 2.0;
    let (x0, y0, x1, y1) = (p.x - h, p.y - h, p.x + h, p.y + h);
    [
        CanvasVertex { position: [x0, y0] },
        CanvasVertex { position: [x1, y0] },
        CanvasVertex { position: [x1, y1] },
        CanvasVertex { position: [x0, y0] },
        CanvasVertex { position: [x1, y1] },
        CanvasVertex { position: [x0, y1] },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn test_uniforms_size() {
        // Must be a multiple of 16 for uniform buffers
        assert_eq!(std::mem::size_of::<CanvasUniforms>(), 32);
    }

    #[test]
    fn test_vertex_size() {
        assert_eq!(std::mem::size_of::<CanvasVertex>(), 8);
    }

    #[test]
    fn test_lines_two_vertices_each() {
        let mut list = DrawList::new(500.0, 500.0);
        list.clear();
        list.line(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        list.line(Point2::new(10.0, 0.0), Point2::new(10.0, 10.0));
        let geometry = CanvasGeometry::from_draw_list(&list);
        assert_eq!(geometry.lines.len(), 4);
        assert_eq!(geometry.lines[3].position, [10.0, 10.0]);
        assert!(geometry.fills.is_empty());
    }

    #[test]
    fn test_point_square() {
        let mut list = DrawList::new(500.0, 500.0);
        list.point(Point2::new(100.0, 50.0));
        let geometry = CanvasGeometry::from_draw_list(&list);
        assert_eq!(geometry.fills.len(), QUAD_VERTEX_COUNT);
        assert_eq!(geometry.fills[0].position, [95.0, 45.0]);
        assert_eq!(geometry.fills[2].position, [105.0, 55.0]);
    }

    #[test]
    fn test_non_finite_skipped() {
        let mut list = DrawList::new(500.0, 500.0);
        list.line(Point2::new(f32::INFINITY, 0.0), Point2::new(1.0, 1.0));
        list.point(Point2::new(0.0, f32::NAN));
        list.line(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let geometry = CanvasGeometry::from_draw_list(&list);
        assert_eq!(geometry.skipped, 2);
        assert_eq!(geometry.lines.len(), 2);
    }
}
