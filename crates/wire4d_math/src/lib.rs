//! Wireframe Mathematics Library
//!
//! This crate provides the vector types and the geometry pipeline stages used
//! by the wire4d renderer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Point2`] - 2D point, either normalized or in pixel space
//! - [`RotationPlane`] - One of the six coordinate planes a vector rotates in
//! - [`Vector`] - Capability shared by vectors that can be rotated and projected
//!
//! ## Pipeline Stages
//!
//! - [`Projector`] - Perspective divide from N-D down to normalized 2D
//! - [`ScreenMapper`] - Normalized 2D to canvas pixels

mod vec3;
mod vec4;
mod point2;
pub mod rotation;
pub mod projection;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use point2::Point2;
pub use rotation::{Axis, RotationPlane, Vector, rotate_pair};
pub use projection::{Projector, ScreenMapper};
