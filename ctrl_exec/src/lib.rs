//! # Controller library.
//!
//! This library holds the reactive obstacle avoidance controller and the
//! boundary ports it is driven through. The `ctrl_exec` binary wires these
//! together into a fixed-period cycle loop.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Cycle runner - sequences one read, compute and dispatch per control cycle
pub mod cycle;

/// Obstacle avoidance module - fuses proximity readings into wheel velocity demands
pub mod obst_avoid;

/// Proximity sources - provide the per-cycle proximity reading set
pub mod prox_source;

/// Wheel sinks - receive the per-cycle wheel velocity demands
pub mod wheel_sink;
