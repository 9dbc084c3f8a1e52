//! Limit switch simulation.
//!
//! The scan loop derives the limit switch readings from the plant's own
//! position before each controller scan; the controller itself never
//! senses position directly.

use lift_common::consts::{BOTTOM_LIMIT_THRESHOLD, TOP_LIMIT_THRESHOLD};

/// Snapshot of both travel-limit switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LimitSwitches {
    /// Lift within the sensing threshold of the top of travel.
    pub top: bool,
    /// Lift within the sensing threshold of the bottom of travel.
    pub bottom: bool,
}

impl LimitSwitches {
    /// Read both switches for a given plant position.
    pub fn sense(position: f64) -> Self {
        Self {
            top: position >= TOP_LIMIT_THRESHOLD,
            bottom: position <= BOTTOM_LIMIT_THRESHOLD,
        }
    }

    /// True when neither switch is active.
    #[inline]
    pub const fn is_clear(&self) -> bool {
        !self.top && !self.bottom
    }
}
