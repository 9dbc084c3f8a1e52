//! The scan-cycle controller.
//!
//! `update` runs the four scan steps in a fixed order: fault latching,
//! gated reset, state classification, actuation. The order is a
//! correctness requirement — the reset gate must see this scan's latches,
//! and the classification must see the post-reset latch.

use lift_common::config::LiftTuning;
use lift_common::fault::{FaultCode, FaultManager};
use lift_common::state::LiftState;
use lift_common::types::{Inputs, Outputs};
use lift_hal::LiftPlant;
use tracing::debug;

use crate::output::actuate;
use crate::safety::{latch_faults, try_reset};
use crate::state::next_state;

/// Single-axis lift controller.
///
/// Owns the state classification, the fault latch, and the tuning
/// constants for the session. One instance lives for the whole run.
#[derive(Debug, Clone)]
pub struct LiftController {
    tuning: LiftTuning,
    state: LiftState,
    faults: FaultManager,
    // Limit readings from the previous scan. Recorded for a future
    // debounce/edge-detection pass; not consulted by the current logic.
    last_top_limit: bool,
    last_bottom_limit: bool,
}

impl LiftController {
    /// New controller in `Holding` with no fault latched.
    pub const fn new(tuning: LiftTuning) -> Self {
        Self {
            tuning,
            state: LiftState::Holding,
            faults: FaultManager::new(),
            last_top_limit: false,
            last_bottom_limit: true,
        }
    }

    /// Current state.
    #[inline]
    pub const fn state(&self) -> LiftState {
        self.state
    }

    /// Currently latched fault code.
    #[inline]
    pub const fn fault(&self) -> FaultCode {
        self.faults.latched()
    }

    /// Session tuning constants.
    #[inline]
    pub const fn tuning(&self) -> &LiftTuning {
        &self.tuning
    }

    /// Limit readings recorded at the end of the previous scan.
    #[inline]
    pub const fn last_limits(&self) -> (bool, bool) {
        (self.last_top_limit, self.last_bottom_limit)
    }

    /// Run one controller scan.
    ///
    /// Must be called exactly once per scan, with a fully-populated input
    /// snapshot whose limit readings were derived from the plant's current
    /// position. Writes the plant's velocity set-point as a side effect
    /// and returns this scan's actuator command. Total over well-formed
    /// inputs: no error returns, faults are observable state.
    pub fn update(&mut self, dt: f64, inputs: &Inputs, plant: &mut LiftPlant) -> Outputs {
        // 1. Latch faults by severity.
        latch_faults(&mut self.faults, inputs, self.tuning.max_load_kg);

        // 2. Gated reset (pulse input).
        if try_reset(
            &mut self.faults,
            inputs,
            plant.velocity(),
            self.tuning.safe_stop_speed_eps,
        ) {
            debug!("fault latch cleared by operator reset");
        }

        // 3. Classify this scan's state.
        self.state = next_state(self.faults.has_fault(), inputs);

        // 4. Actuate.
        let outputs = actuate(self.state, inputs, &self.tuning, plant);

        debug!(
            dt,
            state = self.state.as_str(),
            fault = self.faults.latched().as_str(),
            "scan complete"
        );

        self.last_top_limit = inputs.top_limit;
        self.last_bottom_limit = inputs.bottom_limit;

        outputs
    }
}
