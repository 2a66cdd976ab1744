//! Animation clock
//!
//! Measures wall-clock time between ticks and hands it to the [`Animator`].

use std::time::Instant;
use wire4d_core::{AngleState, Animator};

/// Longest gap fed to the animator, in milliseconds
///
/// Stops the shape from jumping after the window was hidden or the first
/// frame took long to present.
pub const MAX_DELTA_MS: f32 = 250.0;

/// Advances animated angles once per frame
pub struct AnimationSystem {
    animator: Animator,
    last_tick: Instant,
}

impl AnimationSystem {
    pub fn new(animator: Animator) -> Self {
        Self {
            animator,
            last_tick: Instant::now(),
        }
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Advance by the time elapsed since the previous tick
    ///
    /// The clock always moves forward, so time spent paused is not replayed
    /// when the run flag is set again. Returns whether any angle changed.
    pub fn tick(&mut self, angles: &mut AngleState) -> bool {
        let now = Instant::now();
        let delta_ms = (now - self.last_tick).as_secs_f32() * 1000.0;
        self.last_tick = now;
        self.advance_by(angles, delta_ms)
    }

    /// Advance by an explicit time step, capped at [`MAX_DELTA_MS`]
    pub fn advance_by(&self, angles: &mut AngleState, delta_ms: f32) -> bool {
        self.animator.advance(angles, delta_ms.min(MAX_DELTA_MS))
    }
}

impl Default for AnimationSystem {
    fn default() -> Self {
        Self::new(Animator::default())
    }
}
