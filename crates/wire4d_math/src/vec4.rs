//! 4D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::rotation::{rotate_pair, RotationPlane, Vector};
use crate::Vec3;

/// 4D Vector with x, y, z, w components
/// The w component represents the 4th spatial dimension
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Length squared
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn rotate_yz(self, angle: f32) -> Self {
        let (y, z) = rotate_pair(self.y, self.z, angle);
        Self { y, z, ..self }
    }

    #[inline]
    pub fn rotate_xz(self, angle: f32) -> Self {
        let (x, z) = rotate_pair(self.x, self.z, angle);
        Self { x, z, ..self }
    }

    #[inline]
    pub fn rotate_xy(self, angle: f32) -> Self {
        let (x, y) = rotate_pair(self.x, self.y, angle);
        Self { x, y, ..self }
    }

    /// Rotate in the WX plane (W is the first axis of the pair)
    #[inline]
    pub fn rotate_wx(self, angle: f32) -> Self {
        let (w, x) = rotate_pair(self.w, self.x, angle);
        Self { w, x, ..self }
    }

    /// Rotate in the WY plane (W is the first axis of the pair)
    #[inline]
    pub fn rotate_wy(self, angle: f32) -> Self {
        let (w, y) = rotate_pair(self.w, self.y, angle);
        Self { w, y, ..self }
    }

    /// Rotate in the WZ plane (W is the first axis of the pair)
    #[inline]
    pub fn rotate_wz(self, angle: f32) -> Self {
        let (w, z) = rotate_pair(self.w, self.z, angle);
        Self { w, z, ..self }
    }
}

impl Vector for Vec4 {
    const DIMENSION: usize = 4;
    const PLANES: &'static [RotationPlane] = &RotationPlane::ALL;

    fn rotate(self, plane: RotationPlane, angle: f32) -> Self {
        match plane {
            RotationPlane::YZ => self.rotate_yz(angle),
            RotationPlane::XZ => self.rotate_xz(angle),
            RotationPlane::XY => self.rotate_xy(angle),
            RotationPlane::WX => self.rotate_wx(angle),
            RotationPlane::WY => self.rotate_wy(angle),
            RotationPlane::WZ => self.rotate_wz(angle),
        }
    }

    /// Drops W. It only reaches the screen through the W-plane rotations.
    #[inline]
    fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_rotate_wx_quarter_turn() {
        // w' = w cos - x sin, x' = w sin + x cos
        let v = Vec4 { w: 1.0, x: 0.0, y: 0.2, z: 0.3 }.rotate_wx(FRAC_PI_2);
        assert!(v.w.abs() < 1e-6);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert_eq!(v.y, 0.2);
        assert_eq!(v.z, 0.3);
    }

    #[test]
    fn test_rotate_wz_moves_depth() {
        let v = Vec4 { w: 0.5, x: 0.0, y: 0.0, z: 0.0 }.rotate_wz(FRAC_PI_2);
        assert!((v.z - 0.5).abs() < 1e-6);
        assert!(v.w.abs() < 1e-6);
    }

    #[test]
    fn test_each_plane_preserves_length() {
        let v = Vec4 { w: -0.5, x: -0.5, y: 0.5, z: -0.5 };
        for &plane in Vec4::PLANES {
            let r = v.rotate(plane, 1.234);
            assert!((r.length_squared() - v.length_squared()).abs() < 1e-5, "{plane:?}");
        }
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let v = Vec4 { w: 0.5, x: -0.5, y: -0.5, z: 0.5 };
        for &plane in Vec4::PLANES {
            assert_eq!(v.rotate(plane, 0.0), v);
        }
    }

    #[test]
    fn test_xyz_drops_w() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_all_planes_supported() {
        for plane in RotationPlane::ALL {
            assert!(Vec4::supports(plane));
        }
    }
}
