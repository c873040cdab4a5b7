//! Commands produced by ObstAvoid

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Wheel velocity demand for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WheelCommand {
    /// Left wheel velocity demand.
    pub left: f64,

    /// Right wheel velocity demand.
    pub right: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl WheelCommand {
    /// Command both wheels at the same velocity.
    pub fn straight(velocity: f64) -> Self {
        Self {
            left: velocity,
            right: velocity,
        }
    }

    /// Difference between the right and left wheel demands.
    ///
    /// Positive when the robot is turning counter-clockwise (left).
    pub fn differential(&self) -> f64 {
        self.right - self.left
    }
}
