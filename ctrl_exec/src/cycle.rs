//! # Cycle runner
//!
//! Sequences a single control cycle: the readings are acquired, fused into a
//! wheel command and the command is dispatched, each exactly once and in that
//! order, so that a cycle only ever sees its own readings.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::warn;

use crate::{
    obst_avoid::{InputData, ObstAvoid, StatusReport, WheelCommand},
    prox_source::{ReadingSource, SourceError},
    wheel_sink::WheelActuator,
};
use util::module::State;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Summary of one executed cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleReport {
    /// The command dispatched to the wheels.
    pub cmd: WheelCommand,

    /// ObstAvoid's status report.
    pub status: StatusReport,

    /// True if the readings could not be acquired and the cycle was computed
    /// as if nothing had been detected.
    pub degraded: bool,
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Run one control cycle.
///
/// A source fault does not stop the cycle: it is computed with no readings,
/// which drives straight at nominal velocity, and the next cycle starts again
/// from fresh readings. Only an exhausted source is returned as an error, in
/// which case nothing is dispatched.
pub fn run_cycle<S, A>(
    source: &mut S,
    obst_avoid: &ObstAvoid,
    sink: &mut A,
) -> Result<CycleReport, SourceError>
where
    S: ReadingSource + ?Sized,
    A: WheelActuator + ?Sized,
{
    let (input, degraded) = match source.get_readings() {
        Ok(readings) => (InputData { readings }, false),
        Err(SourceError::Exhausted) => return Err(SourceError::Exhausted),
        Err(e) => {
            warn!("Could not acquire proximity readings, cruising this cycle: {}", e);
            (InputData::default(), true)
        }
    };

    let (cmd, status) = match obst_avoid.proc(&input) {
        Ok(out) => out,
        Err(never) => match never {},
    };

    sink.set_wheel_velocities(cmd.left, cmd.right);

    Ok(CycleReport {
        cmd,
        status,
        degraded,
    })
}
