//! Fault latching and the gated reset path.
//!
//! Faults accumulate by severity every scan and never self-clear; the only
//! way back to a non-faulted state is the reset gate, which requires an
//! operator pulse with the emergency stop released and the lift stationary.

use lift_common::fault::{FaultCode, FaultManager};
use lift_common::types::Inputs;

/// Latch any fault conditions present in this scan's inputs.
///
/// Severity ordering is enforced by the latch itself: emergency stop
/// outranks overload outranks limit violations. Limit conditions:
/// both switches active at once is a sensor contradiction; otherwise a
/// command asserted into its active limit is an interlock violation.
/// A lift that arrives at a limit with the command released latches
/// nothing — natural travel completion is fault-free.
pub fn latch_faults(faults: &mut FaultManager, inputs: &Inputs, max_load_kg: f64) {
    if inputs.estop {
        faults.latch(FaultCode::EmergencyStop);
    }
    if inputs.load_kg > max_load_kg {
        faults.latch(FaultCode::Overload);
    }

    if inputs.top_limit && inputs.bottom_limit {
        faults.latch(FaultCode::LimitViolation);
    } else if (inputs.cmd_up && inputs.top_limit) || (inputs.cmd_down && inputs.bottom_limit) {
        faults.latch(FaultCode::LimitViolation);
    }
}

/// Clear the latch if the reset gate is satisfied.
///
/// All three conditions must hold simultaneously: an operator reset pulse,
/// the emergency stop released, and the lift essentially stationary.
/// Returns whether the latch was cleared.
pub fn try_reset(
    faults: &mut FaultManager,
    inputs: &Inputs,
    velocity: f64,
    safe_stop_speed_eps: f64,
) -> bool {
    if inputs.reset_fault && !inputs.estop && velocity.abs() < safe_stop_speed_eps {
        faults.clear();
        return true;
    }
    false
}
