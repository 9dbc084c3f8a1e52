//! # Lift Control Unit Library
//!
//! Cyclic (scan-based) safety controller for a single-axis vertical lift.
//! Each fixed-period scan latches faults by severity, applies the gated
//! operator reset, classifies the lift state, and drives the actuator
//! outputs plus the plant velocity set-point.
//!
//! ## Scan Order
//!
//! 1. **Fault latching** ([`safety`]) — estop, overload, limit interlocks.
//! 2. **Gated reset** ([`safety`]) — pulse + estop released + stationary.
//! 3. **State classification** ([`state`]) — pure function of faults and
//!    commands, recomputed every scan.
//! 4. **Actuation** ([`output`]) — per-state outputs with motor/brake
//!    mutual exclusion.
//!
//! The order is a correctness requirement, not style: the reset gate must
//! see this scan's latches, and the classification must see the post-reset
//! latch.

pub mod console;
pub mod controller;
pub mod cycle;
pub mod output;
pub mod safety;
pub mod state;
