//! Built-in shapes
//!
//! Both shapes have unit side length centred on the origin, so every
//! coordinate is ±0.5. With the default camera distance of 2 the nearest
//! possible depth is well clear of the projection's zero-divide.

use serde::{Deserialize, Serialize};
use std::path::Path;

use wire4d_math::{Vec3, Vec4};

use crate::shape::{Face, WireShape, Wireframe};
use crate::shape_file::{load_shape, ShapeLoadError};

/// A 3D cube: two squares at z = ∓0.5 joined corner to corner
pub fn cube() -> WireShape<Vec3> {
    let vertices = vec![
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(0.5, 0.5, -0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(-0.5, -0.5, -0.5),
        Vec3::new(-0.5, 0.5, 0.5),
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(0.5, -0.5, 0.5),
        Vec3::new(-0.5, -0.5, 0.5),
    ];

    let faces = vec![
        Face::new([0, 1, 2, 3]),
        Face::new([4, 5, 6, 7]),
        // Connectors between the two squares
        Face::new([0, 4]),
        Face::new([1, 5]),
        Face::new([2, 6]),
        Face::new([3, 7]),
    ];

    WireShape::new_unchecked("cube", vertices, faces)
}

/// A tesseract: four squares, one per (z, w) corner, joined along Z and W
///
/// Vertex `i` sits at w = -0.5 for `i < 8` and w = 0.5 otherwise; within each
/// half, z = -0.5 for the first four.
pub fn tesseract() -> WireShape<Vec4> {
    let square = [(-0.5, 0.5), (0.5, 0.5), (0.5, -0.5), (-0.5, -0.5)];
    let mut vertices = Vec::with_capacity(16);
    for w in [-0.5, 0.5] {
        for z in [-0.5, 0.5] {
            for &(x, y) in &square {
                vertices.push(Vec4 { x, y, z, w });
            }
        }
    }

    let faces = vec![
        // Squares at (w=-0.5, z=-0.5), (w=-0.5, z=0.5), (w=0.5, z=-0.5), (w=0.5, z=0.5)
        Face::new([0, 1, 2, 3]),
        Face::new([4, 5, 6, 7]),
        Face::new([8, 9, 10, 11]),
        Face::new([12, 13, 14, 15]),
        // Along Z at w=-0.5
        Face::new([0, 1, 5, 4]),
        Face::new([2, 3, 7, 6]),
        Face::new([1, 2, 6, 5]),
        Face::new([3, 0, 4, 7]),
        // Along Z at w=0.5
        Face::new([8, 9, 13, 12]),
        Face::new([10, 11, 15, 14]),
        Face::new([9, 10, 14, 13]),
        Face::new([11, 8, 12, 15]),
        // Along W at z=-0.5
        Face::new([0, 1, 9, 8]),
        Face::new([2, 3, 11, 10]),
        Face::new([1, 2, 10, 9]),
        Face::new([3, 0, 8, 11]),
        // Along W at z=0.5
        Face::new([4, 5, 13, 12]),
        Face::new([6, 7, 15, 14]),
        Face::new([5, 6, 14, 13]),
        Face::new([7, 4, 12, 15]),
    ];

    WireShape::new_unchecked("tesseract", vertices, faces)
}

/// Which built-in shape to show
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Cube,
    #[default]
    Tesseract,
}

impl ShapeKind {
    /// The other shape
    pub fn toggled(self) -> Self {
        match self {
            ShapeKind::Cube => ShapeKind::Tesseract,
            ShapeKind::Tesseract => ShapeKind::Cube,
        }
    }

    /// Build the built-in geometry for this kind
    pub fn build(self) -> Box<dyn Wireframe> {
        match self {
            ShapeKind::Cube => Box::new(cube()),
            ShapeKind::Tesseract => Box::new(tesseract()),
        }
    }

    /// Load geometry of this kind's dimensionality from a RON shape file
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<Box<dyn Wireframe>, ShapeLoadError> {
        Ok(match self {
            ShapeKind::Cube => Box::new(load_shape::<Vec3, _>(path)?),
            ShapeKind::Tesseract => Box::new(load_shape::<Vec4, _>(path)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cube_counts() {
        let c = cube();
        assert_eq!(c.vertices().len(), 8);
        assert_eq!(c.edges().len(), 12);
    }

    #[test]
    fn test_tesseract_counts() {
        let t = tesseract();
        assert_eq!(t.vertices().len(), 16);
        assert_eq!(t.faces().len(), 20);
        assert_eq!(t.edges().len(), 32);
    }

    #[test]
    fn test_tesseract_vertex_layout() {
        let t = tesseract();
        assert_eq!(t.vertices()[0], Vec4 { w: -0.5, x: -0.5, y: 0.5, z: -0.5 });
        assert_eq!(t.vertices()[6], Vec4 { w: -0.5, x: 0.5, y: -0.5, z: 0.5 });
        assert_eq!(t.vertices()[15], Vec4 { w: 0.5, x: -0.5, y: -0.5, z: 0.5 });
    }

    #[test]
    fn test_cube_matches_tesseract_low_half() {
        let c = cube();
        let t = tesseract();
        for (cv, tv) in c.vertices().iter().zip(&t.vertices()[..8]) {
            assert_eq!(*cv, Vec3::new(tv.x, tv.y, tv.z));
        }
    }

    #[test]
    fn test_tesseract_edges_have_unit_length() {
        // Every edge joins vertices differing in exactly one coordinate
        let t = tesseract();
        for edge in t.edges() {
            let (a, b) = edge.endpoints();
            let (va, vb) = (t.vertices()[a], t.vertices()[b]);
            let d = Vec4::new(va.x - vb.x, va.y - vb.y, va.z - vb.z, va.w - vb.w);
            assert!((d.length_squared() - 1.0).abs() < 1e-6, "edge {a}-{b}");
        }
    }

    #[test]
    fn test_edges_unique() {
        let edges = tesseract().edges();
        let unique: HashSet<_> = edges.iter().collect();
        assert_eq!(unique.len(), edges.len());
    }

    #[test]
    fn test_shape_kind_build() {
        assert_eq!(ShapeKind::Cube.build().dimension(), 3);
        assert_eq!(ShapeKind::Tesseract.build().dimension(), 4);
        assert_eq!(ShapeKind::Cube.toggled(), ShapeKind::Tesseract);
        assert_eq!(ShapeKind::default(), ShapeKind::Tesseract);
    }
}
