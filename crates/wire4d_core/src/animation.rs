//! Time-based angle animation
//!
//! Each tick, every animated plane advances by `step · (delta_ms / tick_ms)`.
//! With the defaults (one degree per 15 ms) a plane turns about 66.7° per
//! second. An angle wraps back to zero once it reaches 2π at two-decimal
//! precision.

use crate::angles::{AngleState, ANGLE_STEP, FULL_TURN};

/// Round to two decimal places
fn hundredths(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

/// Advances animated angles over elapsed time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animator {
    /// Angle added per `tick_ms` of elapsed time, in radians
    pub step: f32,
    /// Reference tick length in milliseconds
    pub tick_ms: f32,
}

impl Default for Animator {
    fn default() -> Self {
        Self {
            step: ANGLE_STEP,
            tick_ms: 15.0,
        }
    }
}

impl Animator {
    pub fn new(step: f32, tick_ms: f32) -> Self {
        Self { step, tick_ms }
    }

    /// Advance every animated plane by `delta_ms` of elapsed time
    ///
    /// Does nothing while the run flag is cleared. Returns whether any angle
    /// changed.
    pub fn advance(&self, state: &mut AngleState, delta_ms: f32) -> bool {
        if !state.running || delta_ms <= 0.0 {
            return false;
        }

        let increment = self.step * (delta_ms / self.tick_ms);
        let limit = hundredths(FULL_TURN);
        let animated: Vec<_> = state.animated_planes().collect();

        for &plane in &animated {
            let mut angle = state.angle(plane) + increment;
            if hundredths(angle) >= limit {
                angle = 0.0;
            }
            state.set_raw(plane, angle);
        }

        !animated.is_empty()
    }
}
