//! Prelude module for common re-exports.
//!
//! `use lift_common::prelude::*;` pulls in the types every consumer of
//! the controller needs without listing individual paths.

use std::time::Duration;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, LiftTuning, ScanConfig, SimConfig};

// ─── System Constants ───────────────────────────────────────────────
pub use crate::consts::{PLANT_ACCEL, SCAN_TIME_US};

// ─── Faults & State ─────────────────────────────────────────────────
pub use crate::fault::{FaultCode, FaultManager};
pub use crate::state::LiftState;

// ─── I/O Snapshots ──────────────────────────────────────────────────
pub use crate::types::{Inputs, MotorDir, Outputs};

/// Default scan period as a Duration.
pub const DEFAULT_SCAN_PERIOD: Duration = Duration::from_micros(SCAN_TIME_US as u64);
