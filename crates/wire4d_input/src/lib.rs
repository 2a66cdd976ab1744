//! Keyboard angle controls
//!
//! This crate stands in for a slider-and-checkbox panel: it turns key
//! presses into changes to an [`AngleState`](wire4d_core::AngleState).

mod angle_controller;

pub use angle_controller::{AngleController, AngleChange};
