//! Plane rotations for 3D and 4D vectors
//!
//! Rotations happen in planes rather than around axes. A plane spanned by
//! axes `(a, b)` rotates by angle θ as:
//!
//! ```text
//! a' = a·cos(θ) − b·sin(θ)
//! b' = a·sin(θ) + b·cos(θ)
//! ```
//!
//! All other coordinates pass through unchanged. A 3-vector rotates in the
//! YZ, XZ and XY planes; a 4-vector additionally in WX, WY and WZ.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Vec3;

/// A coordinate axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// The fourth axis, orthogonal to the familiar three
    W,
    X,
    Y,
    Z,
}

/// The six coordinate planes a vector can rotate in
///
/// Variants are declared in the order the renderer composes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// YZ plane - roll around X
    YZ,
    /// XZ plane - turn around Y
    XZ,
    /// XY plane - spin around Z
    XY,
    /// WX plane - mixes the fourth axis into X
    WX,
    /// WY plane - mixes the fourth axis into Y
    WY,
    /// WZ plane - mixes the fourth axis into Z (and therefore into depth)
    WZ,
}

impl RotationPlane {
    /// Every plane, in composition order
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::YZ,
        RotationPlane::XZ,
        RotationPlane::XY,
        RotationPlane::WX,
        RotationPlane::WY,
        RotationPlane::WZ,
    ];

    /// The two axes spanning this plane, in `(a, b)` order
    pub const fn axes(self) -> (Axis, Axis) {
        match self {
            RotationPlane::YZ => (Axis::Y, Axis::Z),
            RotationPlane::XZ => (Axis::X, Axis::Z),
            RotationPlane::XY => (Axis::X, Axis::Y),
            RotationPlane::WX => (Axis::W, Axis::X),
            RotationPlane::WY => (Axis::W, Axis::Y),
            RotationPlane::WZ => (Axis::W, Axis::Z),
        }
    }

    /// Stable index into per-plane tables
    pub const fn index(self) -> usize {
        match self {
            RotationPlane::YZ => 0,
            RotationPlane::XZ => 1,
            RotationPlane::XY => 2,
            RotationPlane::WX => 3,
            RotationPlane::WY => 4,
            RotationPlane::WZ => 5,
        }
    }

    /// Whether this plane involves the fourth axis
    pub const fn involves_w(self) -> bool {
        matches!(self, RotationPlane::WX | RotationPlane::WY | RotationPlane::WZ)
    }

    /// Short label used in titles and logs
    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::YZ => "YZ",
            RotationPlane::XZ => "XZ",
            RotationPlane::XY => "XY",
            RotationPlane::WX => "WX",
            RotationPlane::WY => "WY",
            RotationPlane::WZ => "WZ",
        }
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotate the coordinate pair `(a, b)` by `angle` radians within their plane
#[inline]
pub fn rotate_pair(a: f32, b: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (a * cos - b * sin, a * sin + b * cos)
}

/// A vector that can be rotated in coordinate planes and projected to 2D
///
/// This is the capability that lets the 3D cube and the 4D tesseract share a
/// single pipeline: the shape only differs in its vector type and the ordered
/// list of planes it rotates through.
pub trait Vector: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Number of coordinates
    const DIMENSION: usize;

    /// Planes this vector rotates in, in the fixed composition order
    const PLANES: &'static [RotationPlane];

    /// Rotate within a single plane, returning a new vector
    fn rotate(self, plane: RotationPlane, angle: f32) -> Self;

    /// The coordinates that survive projection (x, y and the depth z)
    fn xyz(self) -> Vec3;

    /// Whether `plane` is one of this vector's rotation planes
    #[inline]
    fn supports(plane: RotationPlane) -> bool {
        Self::PLANES.contains(&plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_pair_quarter_turn() {
        let (a, b) = rotate_pair(1.0, 0.0, std::f32::consts::FRAC_PI_2);
        assert!(a.abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_pair_preserves_norm() {
        for i in 0..64 {
            let angle = i as f32 * 0.37 - 10.0;
            let (a, b) = (0.3 + i as f32 * 0.1, -1.7);
            let (a2, b2) = rotate_pair(a, b, angle);
            assert!((a2 * a2 + b2 * b2 - (a * a + b * b)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rotate_pair_zero_is_identity() {
        assert_eq!(rotate_pair(0.25, -0.75, 0.0), (0.25, -0.75));
    }

    #[test]
    fn test_plane_indices_match_order() {
        for (i, plane) in RotationPlane::ALL.iter().enumerate() {
            assert_eq!(plane.index(), i);
        }
    }

    #[test]
    fn test_w_planes() {
        assert!(!RotationPlane::XY.involves_w());
        assert!(RotationPlane::WZ.involves_w());
        assert_eq!(RotationPlane::WY.axes(), (Axis::W, Axis::Y));
        assert_eq!(RotationPlane::WX.to_string(), "WX");
    }
}
