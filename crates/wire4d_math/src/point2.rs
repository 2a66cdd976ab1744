//! 2D point type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 2D point
///
/// Depending on the pipeline stage this is either in normalized device space
/// (roughly [-1, 1]) or in canvas pixels. Only [`ScreenMapper`](crate::ScreenMapper)
/// converts between the two.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// False if either coordinate is infinite or NaN
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// As an array (for GPU upload)
    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_finite() {
        assert!(Point2::new(1.0, -3.0).is_finite());
        assert!(!Point2::new(f32::INFINITY, 0.0).is_finite());
        assert!(!Point2::new(0.0, f32::NAN).is_finite());
    }
}
