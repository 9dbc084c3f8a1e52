//! Actuator output stage.
//!
//! Each state fully determines the outputs and the plant velocity
//! set-point. This layer guarantees the mutual-exclusion invariant: the
//! motor runs iff a direction is commanded iff the brake is released.

use lift_common::config::LiftTuning;
use lift_common::state::LiftState;
use lift_common::types::{Inputs, MotorDir, Outputs};
use lift_hal::LiftPlant;

/// Safe-stop output: motor disabled, brake engaged.
const fn stopped(fault_lamp: bool) -> Outputs {
    Outputs {
        motor_enable: false,
        motor_dir: MotorDir::None,
        brake_engaged: true,
        fault_lamp,
    }
}

/// Running output in the given direction.
const fn running(motor_dir: MotorDir) -> Outputs {
    Outputs {
        motor_enable: true,
        motor_dir,
        brake_engaged: false,
        fault_lamp: false,
    }
}

/// Drive the plant set-point and build this scan's outputs.
///
/// A motion state whose limit switch is active commands a safe stop
/// instead of driving further into the limit.
pub fn actuate(
    state: LiftState,
    inputs: &Inputs,
    tuning: &LiftTuning,
    plant: &mut LiftPlant,
) -> Outputs {
    match state {
        LiftState::Faulted => {
            plant.set_target_vel(0.0);
            stopped(true)
        }
        LiftState::Holding => {
            plant.set_target_vel(0.0);
            stopped(false)
        }
        LiftState::Lifting => {
            if inputs.top_limit {
                plant.set_target_vel(0.0);
                stopped(false)
            } else {
                plant.set_target_vel(tuning.lift_speed);
                running(MotorDir::Up)
            }
        }
        LiftState::Lowering => {
            if inputs.bottom_limit {
                plant.set_target_vel(0.0);
                stopped(false)
            } else {
                plant.set_target_vel(-tuning.lower_speed);
                running(MotorDir::Down)
            }
        }
    }
}
