//! Proximity readings consumed by ObstAvoid

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::Serialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A single proximity sensor reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SensorReading {
    /// Normalised detection strength, 0 means nothing detected and larger
    /// values mean a closer or stronger reflection.
    pub intensity: f64,

    /// Mounting angle of the sensor relative to the robot's forward axis,
    /// counter-clockwise positive.
    ///
    /// Units: radians
    pub bearing_rad: f64,
}

/// The readings of every proximity sensor for one cycle, in sensor order.
pub type ReadingSet = Vec<SensorReading>;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SensorReading {
    /// Create a new reading from an intensity and a bearing in degrees.
    pub fn from_deg(intensity: f64, bearing_deg: f64) -> Self {
        Self {
            intensity,
            bearing_rad: bearing_deg.to_radians(),
        }
    }

    /// The reading as a vector of length `intensity` pointing along the
    /// sensor's bearing, in the robot body frame.
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(
            self.intensity * self.bearing_rad.cos(),
            self.intensity * self.bearing_rad.sin(),
        )
    }
}
