//! Lift state classification.

use serde::{Deserialize, Serialize};

/// Controller state, recomputed every scan from faults and commands.
///
/// Exactly one state is active at any instant. `Faulted` is absorbing
/// until the gated reset clears the fault latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LiftState {
    /// At rest, brake engaged.
    Holding = 0,
    /// Driving toward the top limit.
    Lifting = 1,
    /// Driving toward the bottom limit.
    Lowering = 2,
    /// Fault latched — motor disabled, brake engaged, lamp lit.
    Faulted = 3,
}

impl LiftState {
    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Holding),
            1 => Some(Self::Lifting),
            2 => Some(Self::Lowering),
            3 => Some(Self::Faulted),
            _ => None,
        }
    }

    /// Human-readable name for status reporting.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Holding => "Holding",
            Self::Lifting => "Lifting",
            Self::Lowering => "Lowering",
            Self::Faulted => "Faulted",
        }
    }

    /// True for the two motion states.
    #[inline]
    pub const fn is_moving(&self) -> bool {
        matches!(self, Self::Lifting | Self::Lowering)
    }
}

impl Default for LiftState {
    fn default() -> Self {
        Self::Holding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_holding() {
        assert_eq!(LiftState::default(), LiftState::Holding);
    }

    #[test]
    fn round_trip() {
        for state in [
            LiftState::Holding,
            LiftState::Lifting,
            LiftState::Lowering,
            LiftState::Faulted,
        ] {
            assert_eq!(LiftState::from_u8(state as u8), Some(state));
        }
        assert_eq!(LiftState::from_u8(4), None);
    }

    #[test]
    fn moving_states() {
        assert!(LiftState::Lifting.is_moving());
        assert!(LiftState::Lowering.is_moving());
        assert!(!LiftState::Holding.is_moving());
        assert!(!LiftState::Faulted.is_moving());
    }
}
