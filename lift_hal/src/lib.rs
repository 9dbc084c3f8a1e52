//! Lift HAL
//!
//! Simulation stand-in for the hardware layer: a bounded-acceleration
//! plant model and limit-switch sensing derived from plant position.
//! No real hardware I/O exists in this design.

pub mod plant;
pub mod sensing;

pub use plant::LiftPlant;
pub use sensing::LimitSwitches;
