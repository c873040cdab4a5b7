//! Obstacle avoidance module
//!
//! Reactive, memoryless obstacle avoidance for a differential drive robot.
//! Each cycle the proximity readings are fused into a single resultant
//! vector, which is decomposed into a braking term (shared by both wheels)
//! and a steering term (opposite sign on each wheel).
//!
//! Obstacles close to dead ahead barely produce any steering, since the
//! lateral component of the resultant is small, and a perfectly symmetric
//! obstacle produces none at all. For those a large steering bias is added
//! whose direction is given by the sign of the resultant angle alone, which
//! forces the robot to commit to a turn.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod calc;
mod cmd;
mod params;
mod reading;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use calc::*;
pub use cmd::*;
pub use params::*;
pub use reading::*;
pub use state::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Gain applied to the forward component of the resultant to get the brake.
pub const BRAKE_GAIN: f64 = 5.0;

/// Gain applied to the lateral component of the resultant to get the steer.
pub const STEER_GAIN: f64 = 20.0;

/// Gain applied to the resultant length to get the symmetry-breaking bias.
pub const BIAS_GAIN: f64 = 120.0;

/// Half-width of the frontal cone in which the symmetry-breaking bias is
/// applied.
///
/// Units: degrees
pub const BIAS_HALF_ANGLE_DEG: f64 = 40.0;

/// Default hard floor for either wheel's velocity demand.
pub const DEFAULT_MIN_SPEED: f64 = 0.5;
