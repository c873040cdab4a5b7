//! Proximity sensor layout

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

use super::SourceError;
use crate::obst_avoid::{ReadingSet, SensorReading};
use util::maths::wrap_pi;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Number of proximity sensors in the default ring.
pub const RING_NUM_SENSORS: usize = 24;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Mounting bearings of the proximity sensors, in sensor order.
///
/// Loaded from the `prox.toml` parameter file. If no bearings are given the
/// default ring of 24 evenly spaced sensors is used, the first one half a
/// spacing counter-clockwise of the forward axis.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    /// Units: degrees, counter-clockwise from the forward axis
    #[serde(default = "ring_bearings_deg")]
    pub bearings_deg: Vec<f64>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for Layout {
    fn default() -> Self {
        Self {
            bearings_deg: ring_bearings_deg(),
        }
    }
}

impl Layout {
    /// Number of sensors in the layout.
    pub fn num_sensors(&self) -> usize {
        self.bearings_deg.len()
    }

    /// Pair one intensity per sensor with the sensor bearings.
    ///
    /// Intensities must be finite and non-negative.
    pub fn readings(&self, intensities: &[f64]) -> Result<ReadingSet, SourceError> {
        if intensities.len() != self.num_sensors() {
            return Err(SourceError::SensorCountMismatch {
                expected: self.num_sensors(),
                found: intensities.len(),
            });
        }

        intensities
            .iter()
            .zip(self.bearings_deg.iter())
            .enumerate()
            .map(|(sensor, (&intensity, &bearing_deg))| {
                if !intensity.is_finite() || intensity < 0.0 {
                    return Err(SourceError::InvalidIntensity {
                        sensor,
                        value: intensity,
                    });
                }

                Ok(SensorReading {
                    intensity,
                    bearing_rad: wrap_pi(bearing_deg.to_radians()),
                })
            })
            .collect()
    }
}

fn ring_bearings_deg() -> Vec<f64> {
    let spacing_deg = 360.0 / RING_NUM_SENSORS as f64;

    (0..RING_NUM_SENSORS)
        .map(|i| spacing_deg / 2.0 + spacing_deg * i as f64)
        .collect()
}
