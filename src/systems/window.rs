//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates. The title
//! doubles as the angle readout: one degree label per plane of the active
//! shape.

use std::fmt::Write;
use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use wire4d_core::{AngleState, RotationPlane};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    ///
    /// The window is not resizable; its inner area is the canvas.
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_resizable(false)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Show the shape name and the current degree labels
    pub fn update_title(&self, shape_name: &str, planes: &[RotationPlane], angles: &AngleState) {
        let title = format_title(&self.base_title, shape_name, planes, angles);
        self.window.set_title(&title);
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Build the window title for the given angles
///
/// Animated planes are marked with `*`.
pub fn format_title(
    base: &str,
    shape_name: &str,
    planes: &[RotationPlane],
    angles: &AngleState,
) -> String {
    let mut title = format!("{} - {} |", base, shape_name);
    for &plane in planes {
        let marker = if angles.is_animated(plane) { "*" } else { "" };
        let _ = write!(title, " {}{} {}°", plane, marker, angles.degrees(plane));
    }
    if !angles.running {
        title.push_str(" [paused]");
    }
    title
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    const CUBE_PLANES: [RotationPlane; 3] =
        [RotationPlane::YZ, RotationPlane::XZ, RotationPlane::XY];

    #[test]
    fn test_title_lists_each_plane() {
        let mut angles = AngleState::new();
        angles.nudge(RotationPlane::XZ, 45);
        let title = format_title("wire4d", "cube", &CUBE_PLANES, &angles);
        assert_eq!(title, "wire4d - cube | YZ 0° XZ 45° XY 0°");
    }

    #[test]
    fn test_title_marks_animated_and_paused() {
        let angles = AngleState::new()
            .with_animated(&[RotationPlane::WX])
            .with_running(false);
        let title = format_title("wire4d", "tesseract", &RotationPlane::ALL, &angles);
        assert!(title.contains("WX* 0°"));
        assert!(title.contains("WZ 0°"));
        assert!(title.ends_with("[paused]"));
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
