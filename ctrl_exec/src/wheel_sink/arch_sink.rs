//! Archiving wheel sink

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{debug, warn};
use serde::Serialize;

use super::WheelActuator;
use util::{
    archive::{ArchiveError, Archiver},
    session::{self, Session},
};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Archive path of the wheel commands, relative to the session archive root.
pub const WHEEL_CMD_ARCH_PATH: &str = "wheel_sink/wheel_cmd.csv";

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Wheel sink which logs and archives every command it is given.
///
/// Used when no drive is attached, for example when replaying a sensor log.
pub struct ArchSink {
    archiver: Archiver,
    num_cmds: u64,
}

#[derive(Serialize)]
struct WheelCmdRecord {
    time_s: f64,
    cycle: u64,
    left: f64,
    right: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl ArchSink {
    /// Create a new sink archiving into the given session.
    pub fn new(session: &Session) -> Result<Self, ArchiveError> {
        Ok(Self {
            archiver: Archiver::from_path(session, WHEEL_CMD_ARCH_PATH)?,
            num_cmds: 0,
        })
    }

    /// Number of commands received so far.
    pub fn num_cmds(&self) -> u64 {
        self.num_cmds
    }
}

impl WheelActuator for ArchSink {
    fn set_wheel_velocities(&mut self, left: f64, right: f64) {
        debug!("Wheel demand: left {:.3}, right {:.3}", left, right);

        let record = WheelCmdRecord {
            time_s: session::get_elapsed_seconds(),
            cycle: self.num_cmds,
            left,
            right,
        };
        self.num_cmds += 1;

        if let Err(e) = self.archiver.serialise(record) {
            warn!("Could not archive wheel command: {}", e);
        }
    }
}
