//! Obstacle avoidance calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use nalgebra::Vector2;

// Internal imports
use super::*;
use util::maths::{clamp_min, wrap_pi};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Mean of all readings of a cycle, expressed in polar form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Resultant {
    /// Estimated bearing of the obstacle, in (-pi, pi].
    ///
    /// Units: radians
    pub angle_rad: f64,

    /// Estimated intensity of the obstacle, never negative.
    pub length: f64,
}

/// Braking and steering terms derived from a resultant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SteerTerms {
    /// Reduction applied to both wheels. Negative for obstacles behind the
    /// robot.
    pub brake: f64,

    /// Total steering, including any bias. Positive values slow the left
    /// wheel and speed up the right one.
    pub steer: f64,

    /// The symmetry-breaking bias included in `steer`, if the resultant was
    /// inside the frontal cone.
    pub bias: Option<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Resultant {
    /// Fuse a set of readings into their mean vector.
    ///
    /// An empty set has a zero resultant.
    pub fn from_readings(readings: &[SensorReading]) -> Self {
        if readings.is_empty() {
            return Self::default();
        }

        let sum = readings
            .iter()
            .fold(Vector2::zeros(), |acc: Vector2<f64>, r| acc + r.to_vector());
        let mean = sum / readings.len() as f64;

        Self {
            angle_rad: wrap_pi(mean.y.atan2(mean.x)),
            length: mean.norm(),
        }
    }
}

impl SteerTerms {
    /// Decompose a resultant into braking and steering.
    pub fn from_resultant(resultant: &Resultant) -> Self {
        let Resultant { angle_rad, length } = *resultant;

        let brake = angle_rad.cos() * length * BRAKE_GAIN;
        let mut steer = -angle_rad.sin() * length * STEER_GAIN;

        // Inside the frontal cone the lateral component says little about
        // which way to turn, so commit to the side given by the sign of the
        // angle. An angle of exactly zero turns left. Nothing detected means
        // nothing to turn away from.
        let bias = if length > 0.0 && angle_rad.abs() < BIAS_HALF_ANGLE_DEG.to_radians() {
            let bias = if angle_rad > 0.0 {
                -length * BIAS_GAIN
            } else {
                length * BIAS_GAIN
            };
            steer += bias;
            Some(bias)
        } else {
            None
        };

        Self { brake, steer, bias }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Compute the wheel command for one cycle's readings.
pub fn compute_wheel_command(readings: &[SensorReading], params: &Params) -> WheelCommand {
    compute(readings, params).0
}

/// Compute the wheel command for one cycle's readings, along with the
/// intermediate terms which produced it.
pub fn compute(readings: &[SensorReading], params: &Params) -> (WheelCommand, StatusReport) {
    let resultant = Resultant::from_readings(readings);
    let terms = SteerTerms::from_resultant(&resultant);

    let left = params.velocity - terms.brake - terms.steer;
    let right = params.velocity - terms.brake + terms.steer;

    let cmd = WheelCommand {
        left: clamp_min(left, params.min_speed),
        right: clamp_min(right, params.min_speed),
    };

    let report = StatusReport {
        num_readings: readings.len(),
        resultant_angle_rad: resultant.angle_rad,
        resultant_length: resultant.length,
        brake: terms.brake,
        steer: terms.steer,
        bias_applied: terms.bias.is_some(),
        bias: terms.bias.unwrap_or(0.0),
        left_floored: left < params.min_speed,
        right_floored: right < params.min_speed,
    };

    (cmd, report)
}
