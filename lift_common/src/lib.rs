//! Lift Common Library
//!
//! Shared types and definitions for the lift controller workspace.
//!
//! # Module Structure
//!
//! - [`types`] - Per-scan `Inputs`/`Outputs` snapshots and `MotorDir`
//! - [`fault`] - Priority-latched fault codes and the `FaultManager`
//! - [`state`] - The `LiftState` classification
//! - [`config`] - TOML configuration loading and validation
//! - [`consts`] - System-wide constants
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use lift_common::prelude::*;
//!
//! let mut faults = FaultManager::new();
//! faults.latch(FaultCode::Overload);
//! assert!(faults.has_fault());
//! ```

pub mod config;
pub mod consts;
pub mod fault;
pub mod prelude;
pub mod state;
pub mod types;
