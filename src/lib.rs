//! wire4d - rotating cube and tesseract wireframes
//!
//! The binary wires these modules into a winit application; they live in the
//! library so integration tests can reach them.

pub mod config;
pub mod input;
pub mod shape_loader;
pub mod systems;
