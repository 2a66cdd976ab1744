//! 3D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::rotation::{rotate_pair, RotationPlane, Vector};

/// 3D Vector with x, y, z components
///
/// Z is depth: it feeds the perspective divide and never reaches the screen directly.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a new Vec3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Length squared
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Rotate in the YZ plane
    #[inline]
    pub fn rotate_yz(self, angle: f32) -> Self {
        let (y, z) = rotate_pair(self.y, self.z, angle);
        Self { x: self.x, y, z }
    }

    /// Rotate in the XZ plane
    #[inline]
    pub fn rotate_xz(self, angle: f32) -> Self {
        let (x, z) = rotate_pair(self.x, self.z, angle);
        Self { x, y: self.y, z }
    }

    /// Rotate in the XY plane
    #[inline]
    pub fn rotate_xy(self, angle: f32) -> Self {
        let (x, y) = rotate_pair(self.x, self.y, angle);
        Self { x, y, z: self.z }
    }
}

impl Vector for Vec3 {
    const DIMENSION: usize = 3;
    const PLANES: &'static [RotationPlane] =
        &[RotationPlane::YZ, RotationPlane::XZ, RotationPlane::XY];

    fn rotate(self, plane: RotationPlane, angle: f32) -> Self {
        match plane {
            RotationPlane::YZ => self.rotate_yz(angle),
            RotationPlane::XZ => self.rotate_xz(angle),
            RotationPlane::XY => self.rotate_xy(angle),
            // A 3-vector has no W extent. Rotation sequences reject these
            // planes for 3D shapes, so this arm is never reached through them.
            RotationPlane::WX | RotationPlane::WY | RotationPlane::WZ => self,
        }
    }

    #[inline]
    fn xyz(self) -> Vec3 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5 && (a.z - b.z).abs() < 1e-5
    }

    #[test]
    fn test_rotate_xy_quarter_turn() {
        let v = Vec3::new(1.0, 0.0, 0.5).rotate_xy(FRAC_PI_2);
        assert!(approx(v, Vec3::new(0.0, 1.0, 0.5)));
    }

    #[test]
    fn test_rotate_xz_leaves_y() {
        let v = Vec3::new(0.3, -0.7, 0.2).rotate_xz(1.1);
        assert_eq!(v.y, -0.7);
    }

    #[test]
    fn test_rotate_yz_leaves_x() {
        let v = Vec3::new(0.3, -0.7, 0.2).rotate_yz(2.4);
        assert_eq!(v.x, 0.3);
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let v = Vec3::new(-0.5, 0.5, -0.5);
        for &plane in Vec3::PLANES {
            assert_eq!(v.rotate(plane, 0.0), v);
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec3::new(-0.5, 0.5, -0.5);
        for &plane in Vec3::PLANES {
            let r = v.rotate(plane, 0.83);
            assert!((r.length_squared() - v.length_squared()).abs() < 1e-5);
        }
    }

    #[test]
    fn test_full_turn_returns_home() {
        let v = Vec3::new(0.5, -0.5, 0.5);
        assert!(approx(v.rotate_xz(2.0 * PI), v));
    }

    #[test]
    fn test_input_not_consumed() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let _ = v.rotate_xy(0.4);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_w_planes_unsupported() {
        assert!(Vec3::supports(RotationPlane::XZ));
        assert!(!Vec3::supports(RotationPlane::WX));
    }
}
