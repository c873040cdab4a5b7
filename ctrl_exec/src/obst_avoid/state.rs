//! Implementations for the ObstAvoid state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{info, trace};
use serde::Serialize;
use std::convert::Infallible;
use thiserror::Error;

// Internal
use super::{compute, Params, ParamsError, ReadingSet, WheelCommand};
use util::{module::State, params, session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Obstacle avoidance module state.
///
/// Only the configuration is held, every cycle is computed from that cycle's
/// readings alone.
#[derive(Debug, Default)]
pub struct ObstAvoid {
    params: Params,
}

/// Input data to obstacle avoidance.
#[derive(Clone, Debug, Default)]
pub struct InputData {
    /// This cycle's proximity readings.
    pub readings: ReadingSet,
}

/// Status report for ObstAvoid processing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct StatusReport {
    /// Number of readings fused this cycle.
    pub num_readings: usize,

    /// Bearing of the resultant vector.
    ///
    /// Units: radians
    pub resultant_angle_rad: f64,

    /// Length of the resultant vector.
    pub resultant_length: f64,

    /// Braking term applied to both wheels.
    pub brake: f64,

    /// Total steering term, bias included.
    pub steer: f64,

    /// Symmetry-breaking bias included in `steer`, zero if not applied.
    pub bias: f64,

    /// True if the resultant was inside the frontal bias cone.
    pub bias_applied: bool,

    /// True if the left demand was raised to the minimum speed.
    pub left_floored: bool,

    /// True if the right demand was raised to the minimum speed.
    pub right_floored: bool,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors which can occur while initialising ObstAvoid.
#[derive(Debug, Error)]
pub enum ObstAvoidInitError {
    #[error("Could not load the parameters: {0}")]
    ParamLoadError(#[from] params::LoadError),

    #[error("Invalid parameters: {0}")]
    InvalidParams(#[from] ParamsError),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ObstAvoid {
    /// Create a new instance from an already loaded parameter set.
    pub fn new(params: Params) -> Result<Self, ParamsError> {
        params.validate()?;

        Ok(Self { params })
    }

    /// The parameters in use.
    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl State for ObstAvoid {
    type InitData = String;
    type InitError = ObstAvoidInitError;

    type InputData = InputData;
    type OutputData = WheelCommand;
    type StatusReport = StatusReport;
    type ProcError = Infallible;

    /// Initialise the ObstAvoid module.
    ///
    /// Expected init data is the path to the parameter file, relative to the
    /// params directory.
    fn init(&mut self, init_data: Self::InitData, _session: &Session)
        -> Result<(), Self::InitError>
    {
        let params: Params = params::load(&init_data)?;
        params.validate()?;

        info!(
            "ObstAvoid parameters: velocity = {}, min_speed = {}, alpha = {} deg, delta = {}",
            params.velocity, params.min_speed, params.alpha, params.delta
        );

        self.params = params;

        Ok(())
    }

    /// Perform cyclic processing of obstacle avoidance.
    fn proc(&self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        let (cmd, report) = compute(&input_data.readings, &self.params);

        trace!(
            "ObstAvoid resultant: {:.3} rad, {:.3}; brake {:.3}, steer {:.3}",
            report.resultant_angle_rad,
            report.resultant_length,
            report.brake,
            report.steer
        );

        Ok((cmd, report))
    }
}
