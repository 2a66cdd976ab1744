//! Projection from rotated vectors down to canvas pixels
//!
//! Two stages:
//! - [`Projector`] divides x and y by the shifted depth `z + camera_distance`
//! - [`ScreenMapper`] maps the normalized result onto a fixed-size canvas

use serde::{Deserialize, Serialize};

use crate::{Point2, Vector};

/// Perspective divide on the Z coordinate
///
/// `zp = z + camera_distance`, `x' = x / zp`, `y' = y / zp`. W (when present)
/// is discarded.
///
/// When `zp` reaches zero the divide produces infinite or NaN coordinates.
/// By default these propagate so the drawing layer clips them. Setting
/// `min_depth` clamps `|zp|` to at least that value, keeping the sign of `zp`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projector {
    /// How far the camera sits behind the origin along Z
    pub camera_distance: f32,
    /// Smallest allowed magnitude of the shifted depth, if clamping
    pub min_depth: Option<f32>,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            camera_distance: 2.0,
            min_depth: None,
        }
    }
}

impl Projector {
    /// Create a projector that propagates the zero-depth hazard
    pub fn new(camera_distance: f32) -> Self {
        Self {
            camera_distance,
            min_depth: None,
        }
    }

    /// Clamp the shifted depth away from zero
    pub fn with_min_depth(mut self, min_depth: Option<f32>) -> Self {
        self.min_depth = min_depth;
        self
    }

    /// Shifted depth `z + camera_distance`, clamped if configured
    #[inline]
    pub fn depth(&self, z: f32) -> f32 {
        let zp = z + self.camera_distance;
        match self.min_depth {
            Some(min) if zp.abs() < min => {
                if zp < 0.0 {
                    -min
                } else {
                    min
                }
            }
            _ => zp,
        }
    }

    /// Project a rotated vector to normalized 2D
    #[inline]
    pub fn project<V: Vector>(&self, v: V) -> Point2 {
        let p = v.xyz();
        let zp = self.depth(p.z);
        Point2::new(p.x / zp, p.y / zp)
    }
}

/// Affine map from normalized coordinates to canvas pixels
///
/// ```text
/// screenX = ((x + 1) / 2) * width
/// screenY = ((y + 1) / 2) * height
/// ```
///
/// Out-of-range inputs are not clamped; the canvas clips them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenMapper {
    pub width: f32,
    pub height: f32,
}

impl ScreenMapper {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Normalized to pixel space
    #[inline]
    pub fn to_screen(&self, p: Point2) -> Point2 {
        Point2::new(
            ((p.x + 1.0) / 2.0) * self.width,
            ((p.y + 1.0) / 2.0) * self.height,
        )
    }

    /// Pixel space back to normalized
    #[inline]
    pub fn to_normalized(&self, p: Point2) -> Point2 {
        Point2::new(
            (p.x / self.width) * 2.0 - 1.0,
            (p.y / self.height) * 2.0 - 1.0,
        )
    }
}
