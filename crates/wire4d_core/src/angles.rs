//! Rotation angle state
//!
//! One angle and one "animate" flag per rotation plane, plus a global run
//! flag. This is the only mutable state shared between input handling (the
//! writer) and the frame renderer (the reader); both run on the event-loop
//! thread, one after the other, each tick.

use std::f32::consts::PI;

use wire4d_math::RotationPlane;

/// One full turn in radians
pub const FULL_TURN: f32 = 2.0 * PI;

/// Granularity of a manual angle change: one degree
pub const ANGLE_STEP: f32 = PI / 180.0;

/// Integer degree label for an angle in radians
#[inline]
pub fn degree_label(angle: f32) -> i32 {
    angle.to_degrees().round() as i32
}

/// Wrap an angle into [0, 2π)
fn wrap(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly FULL_TURN for tiny negative inputs
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// State of a single plane's control
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneControl {
    /// Current angle in radians, in [0, 2π)
    pub angle: f32,
    /// Whether the animator advances this plane
    pub animate: bool,
}

/// Angles, animate flags and the run flag for every plane
#[derive(Clone, Debug, PartialEq)]
pub struct AngleState {
    planes: [PlaneControl; 6],
    /// Whether animation is running at all
    pub running: bool,
}

impl Default for AngleState {
    fn default() -> Self {
        Self::new()
    }
}

impl AngleState {
    /// All angles at zero, nothing animated, running
    pub fn new() -> Self {
        Self {
            planes: [PlaneControl::default(); 6],
            running: true,
        }
    }

    /// Mark the given planes as animated
    pub fn with_animated(mut self, planes: &[RotationPlane]) -> Self {
        for &plane in planes {
            self.planes[plane.index()].animate = true;
        }
        self
    }

    /// Set the run flag
    pub fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Current angle of a plane in radians
    #[inline]
    pub fn angle(&self, plane: RotationPlane) -> f32 {
        self.planes[plane.index()].angle
    }

    /// Control state of a plane
    #[inline]
    pub fn control(&self, plane: RotationPlane) -> PlaneControl {
        self.planes[plane.index()]
    }

    /// Set a plane's angle, wrapping it into [0, 2π)
    pub fn set_angle(&mut self, plane: RotationPlane, angle: f32) {
        self.planes[plane.index()].angle = wrap(angle);
    }

    /// Store an already-wrapped angle as is
    pub(crate) fn set_raw(&mut self, plane: RotationPlane, angle: f32) {
        self.planes[plane.index()].angle = angle;
    }

    /// Move a plane's angle by whole one-degree steps
    pub fn nudge(&mut self, plane: RotationPlane, steps: i32) {
        let angle = self.angle(plane) + steps as f32 * ANGLE_STEP;
        self.set_angle(plane, angle);
    }

    /// Integer degree label for a plane
    #[inline]
    pub fn degrees(&self, plane: RotationPlane) -> i32 {
        degree_label(self.angle(plane))
    }

    #[inline]
    pub fn is_animated(&self, plane: RotationPlane) -> bool {
        self.planes[plane.index()].animate
    }

    pub fn set_animated(&mut self, plane: RotationPlane, animate: bool) {
        self.planes[plane.index()].animate = animate;
    }

    /// Flip a plane's animate flag, returning the new value
    pub fn toggle_animated(&mut self, plane: RotationPlane) -> bool {
        let control = &mut self.planes[plane.index()];
        control.animate = !control.animate;
        control.animate
    }

    /// Flip the run flag, returning the new value
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Return every angle to zero, keeping the flags
    pub fn reset_angles(&mut self) {
        for control in &mut self.planes {
            control.angle = 0.0;
        }
    }

    /// Planes whose animate flag is set
    pub fn animated_planes(&self) -> impl Iterator<Item = RotationPlane> + '_ {
        RotationPlane::ALL
            .into_iter()
            .filter(move |&plane| self.is_animated(plane))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = AngleState::new();
        assert!(state.running);
        for plane in RotationPlane::ALL {
            assert_eq!(state.angle(plane), 0.0);
            assert!(!state.is_animated(plane));
        }
    }

    #[test]
    fn test_degree_label() {
        assert_eq!(degree_label(0.0), 0);
        assert_eq!(degree_label(PI), 180);
        assert_eq!(degree_label(ANGLE_STEP * 45.0), 45);
        assert_eq!(degree_label(1.0), 57);
        assert_eq!(degree_label(FULL_TURN - 0.001), 360);
    }

    #[test]
    fn test_set_angle_wraps() {
        let mut state = AngleState::new();
        state.set_angle(RotationPlane::XY, FULL_TURN + 0.5);
        assert!((state.angle(RotationPlane::XY) - 0.5).abs() < 1e-5);

        state.set_angle(RotationPlane::XY, -0.5);
        assert!((state.angle(RotationPlane::XY) - (FULL_TURN - 0.5)).abs() < 1e-5);

        state.set_angle(RotationPlane::XY, -1e-9);
        assert!(state.angle(RotationPlane::XY) < FULL_TURN);
    }

    #[test]
    fn test_nudge() {
        let mut state = AngleState::new();
        state.nudge(RotationPlane::WZ, 10);
        assert_eq!(state.degrees(RotationPlane::WZ), 10);
        state.nudge(RotationPlane::WZ, -11);
        assert_eq!(state.degrees(RotationPlane::WZ), 359);
        // Other planes untouched
        assert_eq!(state.angle(RotationPlane::WY), 0.0);
    }

    #[test]
    fn test_toggles() {
        let mut state = AngleState::new();
        assert!(state.toggle_animated(RotationPlane::XZ));
        assert!(state.is_animated(RotationPlane::XZ));
        assert!(!state.toggle_animated(RotationPlane::XZ));
        assert!(!state.toggle_running());
        assert!(!state.running);
    }

    #[test]
    fn test_with_animated() {
        let state = AngleState::new()
            .with_animated(&[RotationPlane::XZ, RotationPlane::WX])
            .with_running(false);
        let animated: Vec<_> = state.animated_planes().collect();
        assert_eq!(animated, vec![RotationPlane::XZ, RotationPlane::WX]);
        assert!(!state.running);
    }

    #[test]
    fn test_reset_keeps_flags() {
        let mut state = AngleState::new().with_animated(&[RotationPlane::YZ]);
        state.set_angle(RotationPlane::YZ, 1.0);
        state.reset_angles();
        assert_eq!(state.angle(RotationPlane::YZ), 0.0);
        assert!(state.is_animated(RotationPlane::YZ));
    }
}
