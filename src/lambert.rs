//! Izzo's 2014 zero-revolution Lambert solver.
//!
//! Given a central body and two (position, epoch) pairs, finds the unique
//! zero-complete-revolution orbit connecting them. All intermediate state (λ, T*,
//! x, y) lives only for the duration of one call — nothing here is stateful.

use nalgebra::Vector3;

use crate::body::Body;
use crate::consts::{LAMBERT_HOUSEHOLDER_ITERATIONS, LAMBERT_KNOT_TOLERANCE};
use crate::error::LambertError;
use crate::orbit::Orbit;

const COLLINEAR_TOLERANCE: f64 = 1e-9;

pub fn find_transfer(
    body: Body,
    r1: Vector3<f64>,
    t1: f64,
    r2: Vector3<f64>,
    t2: f64,
) -> Result<Orbit, LambertError> {
    let mu = body.mu();
    if mu <= 0.0 {
        return Err(LambertError::NonPositiveMu(mu));
    }

    let r1_mag = r1.norm();
    let r2_mag = r2.norm();
    if r1_mag <= 0.0 {
        return Err(LambertError::DegeneratePosition([r1.x, r1.y, r1.z]));
    }
    if r2_mag <= 0.0 {
        return Err(LambertError::DegeneratePosition([r2.x, r2.y, r2.z]));
    }

    let dt = t2 - t1;
    if dt <= 0.0 {
        return Err(LambertError::NonPositiveTimeOfFlight(dt));
    }

    let cross = r1.cross(&r2);
    if cross.norm() / (r1_mag * r2_mag) <= COLLINEAR_TOLERANCE {
        return Err(LambertError::CollinearPositions);
    }

    let c = (r2 - r1).norm();
    let s = (r1_mag + r2_mag + c) / 2.0;

    let sign = (r1.x * r2.y - r1.y * r2.x).signum();
    let lambda = sign * (1.0 - c / s).sqrt();

    let t_star = (2.0 * mu / s.powi(3)).sqrt() * dt;

    let x = solve_x(lambda, t_star);
    let y = (1.0 - lambda * lambda * (1.0 - x * x)).sqrt();

    let h_hat = cross.normalize();
    let r1_hat = r1 / r1_mag;
    let mut t_hat = h_hat.cross(&r1_hat);
    if lambda < 0.0 {
        t_hat = -t_hat;
    }

    let gamma = (mu * s / 2.0).sqrt();
    let rho = (r1_mag - r2_mag) / c;
    let sigma = (1.0 - rho * rho).sqrt();

    let v_r = (gamma / r1_mag) * (lambda * y - x - rho * (lambda * y + x));
    let v_t = (gamma * sigma / r1_mag) * (y + lambda * x);

    let v = r1_hat * v_r + t_hat * v_t;

    Ok(Orbit::from_state(body, r1, v, t1))
}

/// Time-of-flight function T(x) and its first three derivatives, per Izzo's closed
/// forms.
fn tof_and_derivatives(x: f64, lambda: f64, y: f64) -> (f64, f64, f64, f64) {
    let one_minus_x2 = 1.0 - x * x;
    let psi = if x < 1.0 {
        (x * y + lambda * one_minus_x2).acos()
    } else {
        (x * y - lambda * one_minus_x2).acosh()
    };

    let t = if one_minus_x2.abs() < 1e-12 {
        // x ≈ ±1: use the knot-value formulas directly to avoid a 0/0 division.
        if x >= 0.0 {
            (2.0 / 3.0) * (1.0 - lambda.powi(3))
        } else {
            lambda.acos() + lambda * (1.0 - lambda * lambda).sqrt()
        }
    } else {
        (psi / one_minus_x2.abs().sqrt() - x + lambda * y) / one_minus_x2
    };

    let tp = (3.0 * x * t - 2.0 + 2.0 * lambda.powi(3) * x / y) / one_minus_x2;
    let tpp = (3.0 * t + 5.0 * x * tp + 2.0 * (1.0 - lambda * lambda) * lambda.powi(3) / y.powi(3))
        / one_minus_x2;
    let tppp = (7.0 * x * tpp + 8.0 * tp
        - 6.0 * (1.0 - lambda * lambda) * lambda.powi(5) * x / y.powi(5))
        / one_minus_x2;

    (t, tp, tpp, tppp)
}

fn solve_x(lambda: f64, t_star: f64) -> f64 {
    let t0 = lambda.acos() + lambda * (1.0 - lambda * lambda).sqrt();
    let t1 = (2.0 / 3.0) * (1.0 - lambda.powi(3));

    if (t_star - t1).abs() <= LAMBERT_KNOT_TOLERANCE {
        return 1.0;
    }
    if (t_star - t0).abs() <= LAMBERT_KNOT_TOLERANCE {
        return 0.0;
    }

    let mut x = if t_star < t1 {
        5.0 * t1 * (t1 - t_star) / (2.0 * t_star * (1.0 - lambda.powi(5))) + 1.0
    } else if t_star < t0 {
        (t0 / t_star).powf((t1 / t0).log2()) - 1.0
    } else {
        (t0 / t_star).powf(2.0 / 3.0) - 1.0
    };

    for _ in 0..LAMBERT_HOUSEHOLDER_ITERATIONS {
        let y = (1.0 - lambda * lambda * (1.0 - x * x)).sqrt();
        let (t, tp, tpp, tppp) = tof_and_derivatives(x, lambda, y);
        let delta = t - t_star;
        let tp2 = tp * tp;
        let numerator = delta * (tp2 - delta * tpp / 2.0);
        let denominator = tp * (tp2 - delta * tpp) + tppp * delta / 6.0;
        x -= numerator / denominator;
    }

    x
}
