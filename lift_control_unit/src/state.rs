//! Lift state classification — pure, recomputed every scan.
//!
//! PLC-style: the state is a classification of current faults and
//! commands, not an event-driven transition table. A latched fault
//! dominates everything; otherwise an unambiguous, unblocked command
//! selects the motion state, and anything else holds.

use lift_common::state::LiftState;
use lift_common::types::Inputs;

/// Classify the state for this scan.
pub fn next_state(has_fault: bool, inputs: &Inputs) -> LiftState {
    if has_fault {
        return LiftState::Faulted;
    }

    if inputs.cmd_up && !inputs.cmd_down && !inputs.top_limit {
        LiftState::Lifting
    } else if inputs.cmd_down && !inputs.cmd_up && !inputs.bottom_limit {
        LiftState::Lowering
    } else {
        // No command, conflicting commands, or command blocked by its limit.
        LiftState::Holding
    }
}
