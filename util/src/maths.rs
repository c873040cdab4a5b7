//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::{Float, FloatConst};

/// Limit a value from below, leaving it unbounded above.
///
/// A `NaN` value is returned as `min`.
pub fn clamp_min<T>(value: T, min: T) -> T
where
    T: Float,
{
    if value < min || value.is_nan() {
        min
    } else {
        value
    }
}

/// Wrap an angle into the range (-pi, pi].
///
/// Angles already in range are returned untouched, so the sign of very small
/// angles is preserved.
pub fn wrap_pi<T>(value: T) -> T
where
    T: Float + FloatConst,
{
    let pi = T::PI();

    if value > -pi && value <= pi {
        return value;
    }

    pi - rem_euclid(pi - value, pi + pi)
}

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
///
/// In particular, the return value `r` satisfies `0.0 <= r < rhs.abs()` in
/// most cases. However, due to a floating point round-off error it can
/// result in `r == rhs.abs()` if `lhs` is much smaller than `rhs.abs()` in
/// magnitude and `lhs < 0.0`.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float,
{
    let r = lhs % rhs;
    if r < T::zero() {
        r + rhs.abs()
    } else {
        r
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_clamp_min() {
        assert_eq!(clamp_min(-1.0f64, 0.5), 0.5);
        assert_eq!(clamp_min(3.0f64, 0.5), 3.0);
        assert_eq!(clamp_min(0.5f64, 0.5), 0.5);
        assert_eq!(clamp_min(f64::NAN, 0.5), 0.5);
    }

    #[test]
    fn test_wrap_pi() {
        assert_eq!(wrap_pi(PI), PI);
        assert_eq!(wrap_pi(-PI), PI);
        assert_eq!(wrap_pi(1e-17f64), 1e-17);
        assert_eq!(wrap_pi(-1e-17f64), -1e-17);
        assert_relative_eq!(wrap_pi(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_pi(-1.5 * PI), 0.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_rem_euclid() {
        assert_eq!(rem_euclid(-1.0f64, 4.0), 3.0);
        assert_eq!(rem_euclid(5.0f64, 4.0), 1.0);
    }
}
