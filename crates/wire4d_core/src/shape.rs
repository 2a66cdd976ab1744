//! Wireframe shapes
//!
//! A [`WireShape`] is a fixed vertex list plus a face list, parameterized by
//! its vector type. The vector type decides the dimensionality and the
//! ordered list of planes the shape rotates through, so the 3D cube and the
//! 4D tesseract run through the same pipeline.

use serde::{Deserialize, Serialize};

use wire4d_math::{Point2, Projector, RotationPlane, ScreenMapper, Vector};

use crate::angles::AngleState;
use crate::edge::{extract_edges, Edge};

/// A cyclic list of vertex indices
///
/// Consecutive indices are joined by an edge, and the last index joins back
/// to the first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    /// Create a face from its vertex indices
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    /// The vertex indices in loop order
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of indices in the loop
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Edges between consecutive indices, including the wraparound pair
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| Edge::new(self.indices[i], self.indices[(i + 1) % n]))
    }
}

/// The ordered list of planes a shape rotates through
///
/// Fixed once at construction and iterated in declared order. Composition
/// is non-commutative, so the order is part of the shape's behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationSequence {
    planes: Vec<RotationPlane>,
}

impl RotationSequence {
    /// The composition order for vectors of type `V`
    pub fn of<V: Vector>() -> Self {
        Self {
            planes: V::PLANES.to_vec(),
        }
    }

    /// Planes in composition order
    #[inline]
    pub fn planes(&self) -> &[RotationPlane] {
        &self.planes
    }

    /// Apply every plane rotation in order, each with its own angle
    pub fn apply<V: Vector>(&self, v: V, angles: &AngleState) -> V {
        self.planes
            .iter()
            .fold(v, |v, &plane| v.rotate(plane, angles.angle(plane)))
    }
}

/// Malformed face data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A face references a vertex past the end of the vertex list
    IndexOutOfBounds {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    /// A face has fewer than two indices or repeats an index back to back
    DegenerateFace { face: usize },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::IndexOutOfBounds {
                face,
                index,
                vertex_count,
            } => write!(
                f,
                "Face {} references vertex {} but the shape has {} vertices",
                face, index, vertex_count
            ),
            ShapeError::DegenerateFace { face } => write!(f, "Face {} is degenerate", face),
        }
    }
}

impl std::error::Error for ShapeError {}

/// A rotatable, projectable wireframe shape
#[derive(Clone, Debug)]
pub struct WireShape<V: Vector> {
    name: String,
    vertices: Vec<V>,
    faces: Vec<Face>,
    rotation: RotationSequence,
}

impl<V: Vector> WireShape<V> {
    /// Create a shape, checking every face against the vertex list
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<V>,
        faces: Vec<Face>,
    ) -> Result<Self, ShapeError> {
        Self::validate(&vertices, &faces)?;
        Ok(Self {
            name: name.into(),
            vertices,
            faces,
            rotation: RotationSequence::of::<V>(),
        })
    }

    /// Create a shape from geometry that is valid by construction
    pub(crate) fn new_unchecked(name: impl Into<String>, vertices: Vec<V>, faces: Vec<Face>) -> Self {
        debug_assert!(Self::validate(&vertices, &faces).is_ok());
        Self {
            name: name.into(),
            vertices,
            faces,
            rotation: RotationSequence::of::<V>(),
        }
    }

    fn validate(vertices: &[V], faces: &[Face]) -> Result<(), ShapeError> {
        for (face_idx, face) in faces.iter().enumerate() {
            if face.len() < 2 {
                return Err(ShapeError::DegenerateFace { face: face_idx });
            }
            if let Some(&index) = face.indices().iter().find(|&&i| i >= vertices.len()) {
                return Err(ShapeError::IndexOutOfBounds {
                    face: face_idx,
                    index,
                    vertex_count: vertices.len(),
                });
            }
            if face.edges().any(|e| e.is_loop()) {
                return Err(ShapeError::DegenerateFace { face: face_idx });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn rotation(&self) -> &RotationSequence {
        &self.rotation
    }

    /// Rotate a single vertex through the full plane sequence
    #[inline]
    pub fn rotate_vertex(&self, v: V, angles: &AngleState) -> V {
        self.rotation.apply(v, angles)
    }
}

/// Object-safe view of a shape, independent of its dimensionality
///
/// Lets the application hold either a cube or a tesseract and swap between
/// them at runtime.
pub trait Wireframe: Send + Sync {
    /// Human-readable name
    fn name(&self) -> &str;

    /// Number of coordinates per vertex
    fn dimension(&self) -> usize;

    /// Planes in composition order
    fn planes(&self) -> &[RotationPlane];

    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// The face loops
    fn faces(&self) -> &[Face];

    /// Unique edges, recomputed on every call
    fn edges(&self) -> Vec<Edge> {
        extract_edges(self.faces())
    }

    /// Rotate, project and map every vertex to canvas pixels
    fn screen_points(
        &self,
        angles: &AngleState,
        projector: &Projector,
        mapper: &ScreenMapper,
    ) -> Vec<Point2>;
}

impl<V: Vector> Wireframe for WireShape<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn dimension(&self) -> usize {
        V::DIMENSION
    }

    fn planes(&self) -> &[RotationPlane] {
        self.rotation.planes()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn faces(&self) -> &[Face] {
        &self.faces
    }

    fn screen_points(
        &self,
        angles: &AngleState,
        projector: &Projector,
        mapper: &ScreenMapper,
    ) -> Vec<Point2> {
        self.vertices
            .iter()
            .map(|&v| mapper.to_screen(projector.project(self.rotate_vertex(v, angles))))
            .collect()
    }
}
