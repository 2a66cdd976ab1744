//! GPU pipeline components
//!
//! Converts a recorded [`DrawList`](crate::canvas::DrawList) into vertex
//! buffers and draws them in a single render pass.

pub mod types;
pub mod wire_pipeline;

pub use types::{CanvasUniforms, CanvasVertex, CanvasGeometry, QUAD_VERTEX_COUNT};
pub use wire_pipeline::WirePipeline;
