//! # Wheel sinks
//!
//! A wheel sink receives the wheel velocity demands at the end of each cycle
//! and applies them to the drive. The drive is assumed to enforce its own
//! maximum speed.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod arch_sink;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

pub use arch_sink::ArchSink;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A drive accepting left and right wheel velocity demands.
pub trait WheelActuator {
    /// Apply this cycle's wheel velocities.
    ///
    /// Called exactly once at the end of each cycle.
    fn set_wheel_velocities(&mut self, left: f64, right: f64);
}
