//! Error types for the parts of the core that can genuinely fail.
//!
//! Per the library's propagation policy, most "failures" here are not errors at all:
//! negative eccentricities clamp silently, infinite periods are represented with
//! `f64::INFINITY`, and non-convergent solvers return their best iterate. The one place
//! a caller needs a real `Result` is the Lambert solver, whose inputs can be physically
//! degenerate.

use thiserror::Error;

/// Reasons [`crate::lambert::find_transfer`] can fail to produce a transfer orbit.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LambertError {
    /// The central body's gravitational parameter was not strictly positive.
    #[error("gravitational parameter must be positive, got {0}")]
    NonPositiveMu(f64),

    /// One of the two position vectors was at (or within rounding of) the origin.
    #[error("position vector has non-positive magnitude: {0:?}")]
    DegeneratePosition([f64; 3]),

    /// The time of flight (`t2 - t1`) was not strictly positive.
    #[error("time of flight must be positive, got {0}")]
    NonPositiveTimeOfFlight(f64),

    /// `r1` and `r2` are collinear with the origin, so the transfer plane (and thus the
    /// direction of motion) is undefined.
    #[error("r1 and r2 are collinear with the origin; transfer plane is undefined")]
    CollinearPositions,
}
