//! Per-scan I/O snapshots exchanged between the scan loop and the controller.
//!
//! `Inputs` is immutable within a scan; `Outputs` is produced fresh each
//! scan and carries no state between cycles.

use serde::{Deserialize, Serialize};

// ─── Motor Direction ────────────────────────────────────────────────

/// Commanded motor direction.
///
/// The output stage never commands both directions at once; `None` always
/// coincides with the brake engaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum MotorDir {
    /// Driving toward the bottom limit.
    Down = -1,
    /// No direction commanded.
    None = 0,
    /// Driving toward the top limit.
    Up = 1,
}

impl MotorDir {
    /// Convert from raw `i8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_i8(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Self::Down),
            0 => Some(Self::None),
            1 => Some(Self::Up),
            _ => None,
        }
    }

    /// Signed unit value: +1 up, -1 down, 0 none.
    #[inline]
    pub const fn sign(&self) -> i8 {
        *self as i8
    }

    /// True when no direction is commanded.
    #[inline]
    pub const fn is_stopped(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl Default for MotorDir {
    fn default() -> Self {
        Self::None
    }
}

// ─── Inputs ─────────────────────────────────────────────────────────

/// Operator and sensor snapshot consumed by one controller scan.
///
/// `reset_fault` is a one-scan pulse: the scan loop re-asserts it false at
/// the start of every cycle, so it is true for exactly the scan after an
/// operator reset. Limit readings are derived externally from the plant's
/// position before the scan; the controller never senses position itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Operator command: drive toward the top limit.
    pub cmd_up: bool,
    /// Operator command: drive toward the bottom limit.
    pub cmd_down: bool,
    /// Explicit hold request. Stored for the record; the transition logic
    /// derives Holding from the absence of up/down.
    pub cmd_hold: bool,
    /// Emergency stop channel.
    pub estop: bool,
    /// One-scan fault reset pulse.
    pub reset_fault: bool,
    /// Top limit switch reading.
    pub top_limit: bool,
    /// Bottom limit switch reading.
    pub bottom_limit: bool,
    /// Current load weight [kg]. Non-negative by the caller's contract.
    pub load_kg: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            cmd_up: false,
            cmd_down: false,
            cmd_hold: false,
            estop: false,
            reset_fault: false,
            top_limit: false,
            // The lift starts at rest on the bottom limit.
            bottom_limit: true,
            load_kg: 0.0,
        }
    }
}

// ─── Outputs ────────────────────────────────────────────────────────

/// Actuator command produced by one controller scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    /// Motor contactor enable.
    pub motor_enable: bool,
    /// Commanded motor direction.
    pub motor_dir: MotorDir,
    /// Brake engaged — no motion commanded.
    pub brake_engaged: bool,
    /// Fault indicator lamp.
    pub fault_lamp: bool,
}

impl Outputs {
    /// Mutual-exclusion invariant: the motor runs iff a direction is
    /// commanded iff the brake is released.
    #[inline]
    pub const fn is_consistent(&self) -> bool {
        self.motor_enable == !self.motor_dir.is_stopped()
            && self.motor_enable == !self.brake_engaged
    }
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            motor_enable: false,
            motor_dir: MotorDir::None,
            // The safe default is braked.
            brake_engaged: true,
            fault_lamp: false,
        }
    }
}
