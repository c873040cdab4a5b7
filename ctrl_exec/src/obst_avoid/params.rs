//! Parameters structure for ObstAvoid

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DEFAULT_MIN_SPEED;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for obstacle avoidance.
///
/// Every parameter is optional in the parameter file, missing ones take their
/// default value.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Params {
    /// Half-width of the "go straight" angular tolerance.
    ///
    /// Not used by the braking or steering calculations.
    ///
    /// Units: degrees
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Reserved threshold, not used by the calculations.
    #[serde(default = "default_delta")]
    pub delta: f64,

    /// Nominal forward velocity demanded of both wheels when no obstacle is
    /// detected.
    #[serde(default = "default_velocity")]
    pub velocity: f64,

    /// Hard floor for either wheel's velocity demand.
    #[serde(default = "default_min_speed")]
    pub min_speed: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Reasons a parameter set can be rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("Parameter `{name}` must be finite, found {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("Parameter `{name}` must not be negative, found {value}")]
    Negative { name: &'static str, value: f64 },
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            delta: default_delta(),
            velocity: default_velocity(),
            min_speed: default_min_speed(),
        }
    }
}

impl Params {
    /// Check the parameters can be used by the controller.
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_finite("delta", self.delta)?;
        check_non_negative("alpha", self.alpha)?;
        check_non_negative("velocity", self.velocity)?;
        check_non_negative("min_speed", self.min_speed)?;

        Ok(())
    }

    /// The "go straight" angular range, `[-alpha, alpha]`.
    ///
    /// Units: radians
    pub fn go_straight_range(&self) -> (f64, f64) {
        let half_width_rad = self.alpha.to_radians();
        (-half_width_rad, half_width_rad)
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn check_finite(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NotFinite { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ParamsError> {
    check_finite(name, value)?;

    if value < 0.0 {
        Err(ParamsError::Negative { name, value })
    } else {
        Ok(())
    }
}

fn default_alpha() -> f64 {
    10.0
}

fn default_delta() -> f64 {
    0.5
}

fn default_velocity() -> f64 {
    2.5
}

fn default_min_speed() -> f64 {
    DEFAULT_MIN_SPEED
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_for_missing_keys() {
        let params: Params = util::params::from_str("velocity = 4.0").unwrap();

        assert_eq!(
            params,
            Params {
                velocity: 4.0,
                ..Params::default()
            }
        );
        assert_eq!(params.alpha, 10.0);
        assert_eq!(params.delta, 0.5);
        assert_eq!(params.min_speed, 0.5);
    }

    #[test]
    fn test_empty_file_is_default() {
        let params: Params = util::params::from_str("").unwrap();
        assert_eq!(params, Params::default());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_shipped_params() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../params/obst_avoid.toml");
        let params: Params = util::params::load_from_path(path).unwrap();

        assert_eq!(params, Params::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let res: Result<Params, _> = util::params::from_str("velocty = 4.0");
        assert!(res.is_err());
    }

    #[test]
    fn test_validate() {
        let negative_velocity = Params {
            velocity: -1.0,
            ..Params::default()
        };
        assert_eq!(
            negative_velocity.validate(),
            Err(ParamsError::Negative {
                name: "velocity",
                value: -1.0
            })
        );

        let negative_floor = Params {
            min_speed: -0.5,
            ..Params::default()
        };
        assert!(matches!(
            negative_floor.validate(),
            Err(ParamsError::Negative { name: "min_speed", .. })
        ));

        let infinite_delta = Params {
            delta: f64::INFINITY,
            ..Params::default()
        };
        assert!(matches!(
            infinite_delta.validate(),
            Err(ParamsError::NotFinite { name: "delta", .. })
        ));

        let nan_alpha = Params {
            alpha: f64::NAN,
            ..Params::default()
        };
        assert!(matches!(
            nan_alpha.validate(),
            Err(ParamsError::NotFinite { name: "alpha", .. })
        ));
    }

    #[test]
    fn test_go_straight_range() {
        let (lo, hi) = Params::default().go_straight_range();
        assert_relative_eq!(hi, 10f64.to_radians());
        assert_relative_eq!(lo, -hi);
    }
}
