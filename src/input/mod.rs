//! Input handling module
//!
//! Maps application-level keys to actions. Angle keys go to
//! [`wire4d_input::AngleController`].

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
