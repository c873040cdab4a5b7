//! Fixed source, returns the same readings every cycle

use super::{ReadingSource, SourceError};
use crate::obst_avoid::ReadingSet;

/// Reading source which returns the same reading set every cycle.
#[derive(Clone, Debug, Default)]
pub struct FixedSource {
    readings: ReadingSet,
}

impl FixedSource {
    pub fn new(readings: ReadingSet) -> Self {
        Self { readings }
    }
}

impl ReadingSource for FixedSource {
    fn get_readings(&mut self) -> Result<ReadingSet, SourceError> {
        Ok(self.readings.clone())
    }
}
