//! Keyboard controller for rotation angles
//!
//! Controls:
//! - 1-6: Select a plane (in the active shape's rotation order)
//! - Up/Right: Increase the selected angle by one step
//! - Down/Left: Decrease the selected angle by one step
//! - A: Toggle animation of the selected plane
//! - Space: Toggle the run flag
//! - 0: Reset every angle to zero

use wire4d_core::{AngleState, RotationPlane};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// What a key press changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleChange {
    /// A different plane is now selected
    Selected(RotationPlane),
    /// The plane's angle moved; carries the new degree label
    Angle(RotationPlane, i32),
    /// The plane's animate flag was flipped to the given value
    Animate(RotationPlane, bool),
    /// The run flag was flipped to the given value
    Running(bool),
    /// All angles went back to zero
    Reset,
}

impl AngleChange {
    /// Whether the change affects what is drawn
    pub fn needs_redraw(&self) -> bool {
        matches!(self, AngleChange::Angle(..) | AngleChange::Reset)
    }
}

/// Maps key presses onto the angle state
pub struct AngleController {
    /// Index of the selected plane within the active plane list
    selected: usize,
    /// One-degree steps applied per arrow press
    pub steps_per_press: i32,
}

impl Default for AngleController {
    fn default() -> Self {
        Self::new()
    }
}

impl AngleController {
    pub fn new() -> Self {
        Self {
            selected: 0,
            steps_per_press: 1,
        }
    }

    /// Set the number of one-degree steps per arrow press
    pub fn with_steps_per_press(mut self, steps: i32) -> Self {
        self.steps_per_press = steps.max(1);
        self
    }

    /// The selected plane, if the selection is within `planes`
    pub fn selected_plane(&self, planes: &[RotationPlane]) -> Option<RotationPlane> {
        planes.get(self.selected).copied()
    }

    /// Keep the selection valid after the active plane list shrinks
    pub fn clamp_selection(&mut self, planes: &[RotationPlane]) {
        if self.selected >= planes.len() {
            self.selected = 0;
        }
    }

    /// Process keyboard input against the active shape's planes
    ///
    /// Only key presses are handled; held arrows repeat through the
    /// platform's key repeat.
    pub fn process_keyboard(
        &mut self,
        key: KeyCode,
        state: ElementState,
        planes: &[RotationPlane],
        angles: &mut AngleState,
    ) -> Option<AngleChange> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Digit1 => self.select(0, planes),
            KeyCode::Digit2 => self.select(1, planes),
            KeyCode::Digit3 => self.select(2, planes),
            KeyCode::Digit4 => self.select(3, planes),
            KeyCode::Digit5 => self.select(4, planes),
            KeyCode::Digit6 => self.select(5, planes),
            KeyCode::ArrowUp | KeyCode::ArrowRight => self.nudge(self.steps_per_press, planes, angles),
            KeyCode::ArrowDown | KeyCode::ArrowLeft => self.nudge(-self.steps_per_press, planes, angles),
            KeyCode::KeyA => {
                let plane = self.selected_plane(planes)?;
                Some(AngleChange::Animate(plane, angles.toggle_animated(plane)))
            }
            KeyCode::Space => Some(AngleChange::Running(angles.toggle_running())),
            KeyCode::Digit0 => {
                angles.reset_angles();
                Some(AngleChange::Reset)
            }
            _ => None,
        }
    }

    fn select(&mut self, index: usize, planes: &[RotationPlane]) -> Option<AngleChange> {
        let plane = planes.get(index).copied()?;
        self.selected = index;
        Some(AngleChange::Selected(plane))
    }

    fn nudge(
        &self,
        steps: i32,
        planes: &[RotationPlane],
        angles: &mut AngleState,
    ) -> Option<AngleChange> {
        let plane = self.selected_plane(planes)?;
        angles.nudge(plane, steps);
        Some(AngleChange::Angle(plane, angles.degrees(plane)))
    }
}
