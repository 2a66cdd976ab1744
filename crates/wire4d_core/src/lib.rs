//! Core types for the wire4d renderer
//!
//! This crate provides the static geometry and the mutable rotation state
//! that feed the frame renderer:
//!
//! - [`Edge`] / [`extract_edges`] - Unique undirected edges from face loops
//! - [`Face`] - A cyclic list of vertex indices
//! - [`WireShape`] - A rotatable, projectable shape of either dimensionality
//! - [`Wireframe`] - Object-safe view of a [`WireShape`] for runtime switching
//! - [`ShapeKind`] - The built-in cube and tesseract
//! - [`AngleState`] - Per-plane angles, animate flags and the run flag
//! - [`Animator`] - Advances animated angles over wall-clock time

mod edge;
mod shape;
mod shapes;
mod shape_file;
mod angles;
mod animation;

pub use edge::{Edge, extract_edges};
pub use shape::{Face, RotationSequence, ShapeError, WireShape, Wireframe};
pub use shapes::{cube, tesseract, ShapeKind};
pub use shape_file::{ShapeFile, ShapeLoadError, load_shape};
pub use angles::{AngleState, PlaneControl, ANGLE_STEP, FULL_TURN, degree_label};
pub use animation::Animator;

// Re-export commonly used types from wire4d_math for convenience
pub use wire4d_math::{Point2, Projector, RotationPlane, ScreenMapper, Vec3, Vec4, Vector};
