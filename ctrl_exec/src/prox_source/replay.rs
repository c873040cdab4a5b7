//! # Replay source
//!
//! Replays proximity intensities recorded in a CSV log. Each row holds one
//! cycle with one intensity column per sensor, in layout order. The first
//! row may be a header naming the sensors: it is skipped if any of its fields
//! is not a number. Lines starting with `#` are ignored.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use log::trace;
use std::{fs::File, io::Read, path::Path};

use super::{Layout, ReadingSource, SourceError};
use crate::obst_avoid::ReadingSet;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Reading source replaying a CSV log.
pub struct ReplaySource<R: Read = File> {
    layout: Layout,
    records: StringRecordsIntoIter<R>,
    num_cycles: u64,
    header_checked: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl ReplaySource<File> {
    /// Open the replay log at the given path.
    pub fn from_path<P: AsRef<Path>>(path: P, layout: Layout) -> Result<Self, SourceError> {
        let reader = reader_builder().from_path(path)?;

        Ok(Self {
            layout,
            records: reader.into_records(),
            num_cycles: 0,
            header_checked: false,
        })
    }
}

impl<R: Read> ReplaySource<R> {
    /// Replay a log from any reader.
    pub fn from_reader(rdr: R, layout: Layout) -> Self {
        Self {
            layout,
            records: reader_builder().from_reader(rdr).into_records(),
            num_cycles: 0,
            header_checked: false,
        }
    }

    /// Number of data rows consumed so far, including rejected ones.
    pub fn num_cycles(&self) -> u64 {
        self.num_cycles
    }
}

impl<R: Read> ReadingSource for ReplaySource<R> {
    fn get_readings(&mut self) -> Result<ReadingSet, SourceError> {
        let mut record = self.next_record()?;

        if !self.header_checked {
            self.header_checked = true;

            if record.iter().any(|field| field.parse::<f64>().is_err()) {
                trace!("Replay header: {:?}", record);
                self.num_cycles -= 1;
                record = self.next_record()?;
            }
        }

        let intensities = record
            .iter()
            .enumerate()
            .map(|(sensor, field)| {
                field.parse::<f64>().map_err(|_| SourceError::ParseError {
                    sensor,
                    field: field.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        trace!("Replay row {}: {:?}", self.num_cycles, intensities);

        self.layout.readings(&intensities)
    }
}

impl<R: Read> ReplaySource<R> {
    fn next_record(&mut self) -> Result<StringRecord, SourceError> {
        match self.records.next() {
            Some(r) => {
                self.num_cycles += 1;
                Ok(r?)
            }
            None => Err(SourceError::Exhausted),
        }
    }
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        // Rows of the wrong width are reported by the layout
        .flexible(true);
    builder
}

#[cfg(test)]
mod test {
    use super::*;

    fn two_sensor_layout() -> Layout {
        Layout {
            bearings_deg: vec![15.0, -15.0],
        }
    }

    #[test]
    fn test_replay_rows() {
        let log = "left,right\n0.0, 0.5\n# comment\n0.25,0.0\n";
        let mut source = ReplaySource::from_reader(log.as_bytes(), two_sensor_layout());

        let first = source.get_readings().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].intensity, 0.0);
        assert_eq!(first[1].intensity, 0.5);

        let second = source.get_readings().unwrap();
        assert_eq!(second[0].intensity, 0.25);

        assert!(matches!(source.get_readings(), Err(SourceError::Exhausted)));
        assert_eq!(source.num_cycles(), 2);
    }

    #[test]
    fn test_headerless_log() {
        let log = "0.0,0.8\n0.0,0.0\n";
        let mut source = ReplaySource::from_reader(log.as_bytes(), two_sensor_layout());

        let first = source.get_readings().unwrap();
        assert_eq!(first[0].intensity, 0.0);
        assert_eq!(first[1].intensity, 0.8);

        let second = source.get_readings().unwrap();
        assert_eq!(second[1].intensity, 0.0);

        assert!(matches!(source.get_readings(), Err(SourceError::Exhausted)));
        assert_eq!(source.num_cycles(), 2);
    }

    #[test]
    fn test_header_only_log() {
        let mut source = ReplaySource::from_reader("left,right\n".as_bytes(), two_sensor_layout());

        assert!(matches!(source.get_readings(), Err(SourceError::Exhausted)));
        assert_eq!(source.num_cycles(), 0);
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let log = "left,right\n0.1\nabc,0.2\n0.1,-0.3\n0.1,0.2\n";
        let mut source = ReplaySource::from_reader(log.as_bytes(), two_sensor_layout());

        assert!(matches!(
            source.get_readings(),
            Err(SourceError::SensorCountMismatch { .. })
        ));
        assert!(matches!(
            source.get_readings(),
            Err(SourceError::ParseError { sensor: 0, .. })
        ));
        assert!(matches!(
            source.get_readings(),
            Err(SourceError::InvalidIntensity { sensor: 1, .. })
        ));
        assert!(source.get_readings().is_ok());
        assert_eq!(source.num_cycles(), 4);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = ReplaySource::from_path(dir.path().join("missing.csv"), Layout::default());

        assert!(matches!(res, Err(SourceError::ReplayError(_))));
    }
}
