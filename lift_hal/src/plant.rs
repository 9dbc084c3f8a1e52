//! Lift plant simulator.
//!
//! Integrates the commanded velocity set-point into position and velocity
//! under a bounded-acceleration model, clamped to the physical travel
//! range. Velocity tracking is smoothed rather than instantaneous, so a
//! limit can be reached with non-zero velocity — the interlock layer above
//! must cope with that.

use lift_common::consts::{PLANT_ACCEL, TRAVEL_MAX, TRAVEL_MIN};
use tracing::trace;

/// Single-axis vertical lift plant.
///
/// Position runs from `TRAVEL_MIN` (bottom) to `TRAVEL_MAX` (top).
/// `target_vel` is the actuation set-point written by the controller;
/// `step` moves the physical state toward it once per scan.
#[derive(Debug, Clone, Copy)]
pub struct LiftPlant {
    position: f64,
    velocity: f64,
    target_vel: f64,
}

impl LiftPlant {
    /// New plant at rest on the bottom limit.
    pub const fn new() -> Self {
        Self {
            position: TRAVEL_MIN,
            velocity: 0.0,
            target_vel: 0.0,
        }
    }

    /// Current position [units].
    #[inline]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity [units/s].
    #[inline]
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Commanded velocity set-point [units/s].
    #[inline]
    pub const fn target_vel(&self) -> f64 {
        self.target_vel
    }

    /// Write the commanded velocity set-point.
    #[inline]
    pub fn set_target_vel(&mut self, target: f64) {
        self.target_vel = target;
    }

    /// Place the lift at `position`, at rest (test and setup hook).
    pub fn set_position(&mut self, position: f64) {
        self.position = position.clamp(TRAVEL_MIN, TRAVEL_MAX);
        self.velocity = 0.0;
    }

    /// Advance the plant by one fixed step.
    ///
    /// Callers must guarantee `dt > 0`; the scan loop always does.
    pub fn step(&mut self, dt: f64) {
        // Velocity tracks the set-point under the acceleration bound.
        let max_dv = PLANT_ACCEL * dt;
        let dv = (self.target_vel - self.velocity).clamp(-max_dv, max_dv);
        self.velocity += dv;

        self.position += self.velocity * dt;
        self.position = self.position.clamp(TRAVEL_MIN, TRAVEL_MAX);

        // Pressing into an end stop kills the remaining velocity.
        if self.position <= TRAVEL_MIN && self.velocity < 0.0 {
            self.velocity = 0.0;
        }
        if self.position >= TRAVEL_MAX && self.velocity > 0.0 {
            self.velocity = 0.0;
        }

        trace!(
            "plant: pos={:.4} vel={:.4} target={:.4}",
            self.position, self.velocity, self.target_vel
        );
    }
}

impl Default for LiftPlant {
    fn default() -> Self {
        Self::new()
    }
}
