//! Tolerances and iteration caps used by the anomaly and Lambert solvers.
//!
//! These are design defaults, not configuration: callers never tune them, matching
//! the teacher crate's pattern of hardcoding physical/numerical constants here rather
//! than threading them through as parameters.

use std::f64::consts::PI;

/// Convergence tolerance for the Kepler/hyperbolic-Kepler Newton iterations.
pub const ANOMALY_TOLERANCE: f64 = 1e-15;

/// Iteration cap for the Kepler/hyperbolic-Kepler Newton iterations.
pub const ANOMALY_MAX_ITER: usize = 100;

/// Fixed iteration count for the Lambert solver's Householder refinement.
pub const LAMBERT_HOUSEHOLDER_ITERATIONS: usize = 5;

/// Relative threshold below which `T*` is considered equal to a Lambert knot value
/// (`T0`, the minimum-energy ellipse, or `T1`, the parabola).
pub const LAMBERT_KNOT_TOLERANCE: f64 = 1e-11;

/// How far short of `±π` a parabolic orbit's default sampling domain stops, since
/// `ν = π` is the (unreachable) point at infinity.
pub const PARABOLIC_SAMPLE_MARGIN: f64 = 1e-3;

// Taken from the KSP wiki (Kerbol system constants, retained from the teacher crate).
pub const KERBIN_ORBIT_RADIUS: f64 = 13_599_840_256.0;
pub const KERBIN_ORBIT_PERIOD: f64 = 9_203_544.6;
pub const KERBOL_MU: f64 = 1.1723328e18;
pub const KERBIN_MU: f64 = 3.5316e12;
pub const KERBIN_RADIUS: f64 = 6.0e5;
pub const KERBIN_ATMOSPHERE_HEIGHT: f64 = 7.0e4;

pub fn get_circular_velocity(radius: f64, mu: f64) -> f64 {
    (mu / radius).sqrt()
}

pub fn get_period(a: f64, mu: f64) -> f64 {
    (4.0 * PI * PI * a.powi(3) / mu).sqrt()
}
