//! Wireframe Rendering Library
//!
//! This crate turns a shape and the current angles into line-draw calls, and
//! presents those calls with wgpu.
//!
//! ## Key Components
//!
//! - [`canvas::Canvas`] - The 2D drawing surface: clear, line, point
//! - [`canvas::DrawList`] - A canvas that records its draw calls
//! - [`frame::FrameRenderer`] - Rotate → project → map → draw, once per frame
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::WirePipeline`] - Uploads a draw list and draws it

pub mod canvas;
pub mod frame;
pub mod context;
pub mod pipeline;

pub use canvas::{Canvas, CanvasStyle, DrawCommand, DrawList, POINT_SIZE};
pub use frame::{FrameRenderer, FrameStats};

// Re-export core types for convenience
pub use wire4d_core::{AngleState, Edge, ShapeKind, Wireframe};
pub use wire4d_math::{Point2, Projector, ScreenMapper};
