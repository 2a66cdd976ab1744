//! Per-frame rendering
//!
//! Each frame is computed from scratch: every vertex goes through
//! rotate → project → map to pixels, the edge set is extracted from the face
//! loops, and one line is drawn per unique edge. Nothing is cached between
//! frames, so a bad frame never affects the next one.

use wire4d_core::{AngleState, Wireframe};
use wire4d_math::{Projector, ScreenMapper};

use crate::canvas::Canvas;

/// Counts from a single rendered frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Vertices pushed through the pipeline
    pub vertices: usize,
    /// Lines drawn (one per unique edge)
    pub edges: usize,
    /// Vertices whose projection came out infinite or NaN
    pub non_finite: usize,
}

/// Draws a shape's edges for the current angles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRenderer {
    projector: Projector,
    mapper: ScreenMapper,
}

impl FrameRenderer {
    pub fn new(projector: Projector, mapper: ScreenMapper) -> Self {
        Self { projector, mapper }
    }

    /// Renderer whose screen mapping matches the canvas size
    pub fn for_canvas<C: Canvas + ?Sized>(canvas: &C, projector: Projector) -> Self {
        let (width, height) = canvas.size();
        Self::new(projector, ScreenMapper::new(width, height))
    }

    #[inline]
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    #[inline]
    pub fn mapper(&self) -> &ScreenMapper {
        &self.mapper
    }

    /// Render one frame onto `canvas`
    ///
    /// Only the canvas is mutated; the shape and angles are read.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        shape: &dyn Wireframe,
        angles: &AngleState,
        canvas: &mut C,
    ) -> FrameStats {
        canvas.clear();

        let points = shape.screen_points(angles, &self.projector, &self.mapper);
        let edges = shape.edges();

        for edge in &edges {
            let (a, b) = edge.endpoints();
            canvas.line(points[a], points[b]);
        }

        let non_finite = points.iter().filter(|p| !p.is_finite()).count();
        if non_finite > 0 {
            log::debug!(
                "{} of {} vertices of '{}' projected to non-finite coordinates",
                non_finite,
                points.len(),
                shape.name()
            );
        }

        FrameStats {
            vertices: points.len(),
            edges: edges.len(),
            non_finite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};
    use wire4d_core::{cube, tesseract, Face, WireShape};
    use wire4d_math::{Point2, RotationPlane, Vec3};

    fn renderer() -> FrameRenderer {
        FrameRenderer::for_canvas(&DrawList::new(500.0, 500.0), Projector::default())
    }

    #[test]
    fn test_clears_first() {
        let mut canvas = DrawList::new(500.0, 500.0);
        renderer().render(&cube(), &AngleState::new(), &mut canvas);
        assert_eq!(canvas.commands()[0], DrawCommand::Clear);
    }

    #[test]
    fn test_one_line_per_edge() {
        let mut canvas = DrawList::new(500.0, 500.0);
        let stats = renderer().render(&tesseract(), &AngleState::new(), &mut canvas);
        assert_eq!(stats.vertices, 16);
        assert_eq!(stats.edges, 32);
        assert_eq!(canvas.line_count(), 32);
        assert_eq!(canvas.points().count(), 0);
    }

    #[test]
    fn test_repeated_frames_do_not_accumulate() {
        let mut canvas = DrawList::new(500.0, 500.0);
        let r = renderer();
        let mut angles = AngleState::new();
        r.render(&cube(), &angles, &mut canvas);
        angles.set_angle(RotationPlane::XZ, 0.5);
        r.render(&cube(), &angles, &mut canvas);
        assert_eq!(canvas.line_count(), 12);
    }

    #[test]
    fn test_non_finite_counted_not_fatal() {
        // A vertex sitting exactly on the camera plane
        let shape = WireShape::new(
            "probe",
            vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.5, 0.5, -2.0)],
            vec![Face::new([0, 1])],
        )
        .unwrap();
        let mut canvas = DrawList::new(500.0, 500.0);
        let stats = renderer().render(&shape, &AngleState::new(), &mut canvas);
        assert_eq!(stats.non_finite, 1);
        assert_eq!(canvas.line_count(), 1);
    }

    #[test]
    fn test_angles_not_mutated() {
        let mut angles = AngleState::new().with_animated(&[RotationPlane::XY]);
        angles.set_angle(RotationPlane::XY, 1.0);
        let before = angles.clone();
        let mut canvas = DrawList::new(500.0, 500.0);
        renderer().render(&cube(), &angles, &mut canvas);
        assert_eq!(angles, before);
    }

    #[test]
    fn test_first_line_endpoints() {
        let mut canvas = DrawList::new(500.0, 500.0);
        renderer().render(&cube(), &AngleState::new(), &mut canvas);
        let (a, b) = canvas.lines().next().unwrap();
        // Edge 0-1 of the near square: (-0.5, 0.5, -0.5) to (0.5, 0.5, -0.5)
        assert!((a.x - 500.0 / 3.0).abs() < 1e-2);
        assert!((b.x - 1000.0 / 3.0).abs() < 1e-2);
        assert!((a.y - b.y).abs() < 1e-4);
        assert_ne!(a, Point2::default());
    }
}
