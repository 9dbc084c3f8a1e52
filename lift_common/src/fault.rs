//! Priority-latched fault handling.
//!
//! A fault, once latched, stays active until explicitly cleared; `latch`
//! never replaces a higher-priority code with a lower one. Gating the
//! clear path is the controller's responsibility, not the latch's.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Fault codes ranked by severity.
///
/// The numeric value is the priority rank: a higher value overrides a
/// lower one in the latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FaultCode {
    /// No fault latched.
    None = 0,
    /// Limit sensor contradiction, or commanding into an active limit.
    LimitViolation = 10,
    /// Load above the configured maximum.
    Overload = 20,
    /// Emergency stop channel asserted.
    EmergencyStop = 30,
}

impl FaultCode {
    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            10 => Some(Self::LimitViolation),
            20 => Some(Self::Overload),
            30 => Some(Self::EmergencyStop),
            _ => None,
        }
    }

    /// Priority rank — higher overrides lower in the latch.
    #[inline]
    pub const fn priority(&self) -> u8 {
        *self as u8
    }

    /// Human-readable name for status reporting.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::LimitViolation => "LimitViolation",
            Self::Overload => "Overload",
            Self::EmergencyStop => "EmergencyStop",
        }
    }
}

impl Default for FaultCode {
    fn default() -> Self {
        Self::None
    }
}

// Latch ordering: estop dominates overload dominates limit faults.
const_assert!(FaultCode::EmergencyStop.priority() > FaultCode::Overload.priority());
const_assert!(FaultCode::Overload.priority() > FaultCode::LimitViolation.priority());
const_assert!(FaultCode::LimitViolation.priority() > FaultCode::None.priority());

/// Single-slot priority fault latch.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultManager {
    latched: FaultCode,
}

impl FaultManager {
    /// New latch with no fault.
    pub const fn new() -> Self {
        Self {
            latched: FaultCode::None,
        }
    }

    /// Currently latched code.
    #[inline]
    pub const fn latched(&self) -> FaultCode {
        self.latched
    }

    /// Latch `code` if it outranks the current latch.
    ///
    /// Lower or equal priority is a no-op, so `FaultCode::None` can never
    /// be latched over an active fault.
    pub fn latch(&mut self, code: FaultCode) {
        if code.priority() > self.latched.priority() {
            self.latched = code;
        }
    }

    /// Unconditionally drop the latch back to `None`.
    ///
    /// The caller gates when this is safe to invoke.
    pub fn clear(&mut self) {
        self.latched = FaultCode::None;
    }

    /// True iff a fault is latched.
    #[inline]
    pub const fn has_fault(&self) -> bool {
        !matches!(self.latched, FaultCode::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_latch_has_no_fault() {
        let faults = FaultManager::new();
        assert!(!faults.has_fault());
        assert_eq!(faults.latched(), FaultCode::None);
    }

    #[test]
    fn latch_raises_severity() {
        let mut faults = FaultManager::new();
        faults.latch(FaultCode::LimitViolation);
        assert_eq!(faults.latched(), FaultCode::LimitViolation);
        faults.latch(FaultCode::EmergencyStop);
        assert_eq!(faults.latched(), FaultCode::EmergencyStop);
    }

    #[test]
    fn latch_never_lowers_severity() {
        let mut faults = FaultManager::new();
        faults.latch(FaultCode::EmergencyStop);
        faults.latch(FaultCode::Overload);
        faults.latch(FaultCode::LimitViolation);
        assert_eq!(faults.latched(), FaultCode::EmergencyStop);
    }

    #[test]
    fn latch_none_is_a_noop() {
        let mut faults = FaultManager::new();
        faults.latch(FaultCode::Overload);
        faults.latch(FaultCode::None);
        assert_eq!(faults.latched(), FaultCode::Overload);
    }

    #[test]
    fn latch_is_idempotent() {
        let mut faults = FaultManager::new();
        faults.latch(FaultCode::Overload);
        faults.latch(FaultCode::Overload);
        assert_eq!(faults.latched(), FaultCode::Overload);
    }

    #[test]
    fn priority_never_decreases_over_any_sequence() {
        let codes = [
            FaultCode::None,
            FaultCode::LimitViolation,
            FaultCode::Overload,
            FaultCode::EmergencyStop,
        ];
        let mut faults = FaultManager::new();
        let mut last = faults.latched().priority();
        // Walk every pair ordering; the latch must be monotone throughout.
        for a in codes {
            for b in codes {
                faults.latch(a);
                faults.latch(b);
                assert!(faults.latched().priority() >= last);
                last = faults.latched().priority();
            }
        }
    }

    #[test]
    fn clear_is_the_only_way_back_to_none() {
        let mut faults = FaultManager::new();
        faults.latch(FaultCode::EmergencyStop);
        faults.clear();
        assert!(!faults.has_fault());
        assert_eq!(faults.latched(), FaultCode::None);
    }

    #[test]
    fn fault_code_round_trip() {
        for code in [
            FaultCode::None,
            FaultCode::LimitViolation,
            FaultCode::Overload,
            FaultCode::EmergencyStop,
        ] {
            assert_eq!(FaultCode::from_u8(code as u8), Some(code));
        }
        assert_eq!(FaultCode::from_u8(1), None);
        assert_eq!(FaultCode::from_u8(255), None);
    }
}
