//! # Proximity sources
//!
//! A proximity source provides the readings of every proximity sensor once
//! per cycle. Bearings are fixed by the sensor [`Layout`], sources only
//! provide intensities.
//!
//! Sources are responsible for filtering out faulty values: a reading set
//! handed to ObstAvoid must only contain finite, non-negative intensities.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod fixed;
mod layout;
mod replay;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

pub use fixed::FixedSource;
pub use layout::Layout;
pub use replay::ReplaySource;

use crate::obst_avoid::ReadingSet;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A provider of proximity readings.
pub trait ReadingSource {
    /// Get this cycle's readings.
    ///
    /// Called exactly once at the start of each cycle.
    fn get_readings(&mut self) -> Result<ReadingSet, SourceError>;
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Errors produced by proximity sources.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Expected {expected} intensities (one per sensor), found {found}")]
    SensorCountMismatch { expected: usize, found: usize },

    #[error("Sensor {sensor} has an invalid intensity: {value}")]
    InvalidIntensity { sensor: usize, value: f64 },

    #[error("Could not parse intensity {field:?} of sensor {sensor}")]
    ParseError { sensor: usize, field: String },

    #[error("Could not read the replay log: {0}")]
    ReplayError(#[from] csv::Error),

    #[error("No more readings are available")]
    Exhausted,
}
