//! The three anomaly ladders (elliptic, hyperbolic, parabolic) relating true anomaly,
//! the conic-specific auxiliary anomaly, and mean anomaly.
//!
//! True anomaly is always an [`Angle`] — it is a direction and is periodic. The
//! conic-specific and mean anomalies are periodic (and thus `Angle`) only in the
//! elliptic case; in the hyperbolic and parabolic cases they are unbounded reals
//! (`f64`) that may legitimately be infinite.

use crate::angle::Angle;
use crate::consts::{ANOMALY_MAX_ITER, ANOMALY_TOLERANCE};

// --- Elliptic ---

pub fn true_to_eccentric(nu: Angle, ecc: f64) -> Angle {
    let half = nu.signed_rad() / 2.0;
    let e = 2.0 * ((1.0 - ecc).sqrt() * half.tan()).atan2((1.0 + ecc).sqrt());
    Angle::new(e)
}

pub fn eccentric_to_true(e: Angle, ecc: f64) -> Angle {
    let half = e.signed_rad() / 2.0;
    let nu = 2.0 * ((1.0 + ecc).sqrt() * half.tan()).atan2((1.0 - ecc).sqrt());
    Angle::new(nu)
}

pub fn eccentric_to_mean(e: Angle, ecc: f64) -> Angle {
    Angle::new(e.rad() - ecc * e.rad().sin())
}

/// Solves Kepler's equation `M = E - e sin E` for `E`, seeded with the
/// Prussing-Conway approximation and refined with Newton's method.
pub fn mean_to_eccentric(m: Angle, ecc: f64) -> Angle {
    let m_val = m.rad();
    let u = m_val + ecc;
    let mut e0 = (m_val * (1.0 - u.sin()) + u * m_val.sin()) / (1.0 + m_val.sin() - u.sin());

    for _ in 0..ANOMALY_MAX_ITER {
        let f = e0 - ecc * e0.sin() - m_val;
        if f.abs() <= ANOMALY_TOLERANCE {
            break;
        }
        e0 -= f / (1.0 - ecc * e0.cos());
    }
    Angle::new(e0)
}

// --- Hyperbolic ---

/// `ν → H`. Expels `ν` from the forbidden arc first; a `ν` sitting exactly on a
/// boundary maps to `±∞`.
pub fn true_to_hyperbolic(nu: Angle, ecc: f64, theta_max: Angle) -> f64 {
    let neg_theta_max = Angle::new(-theta_max.rad());
    let expelled = Angle::expel(nu, theta_max, neg_theta_max);

    if expelled == theta_max {
        return f64::INFINITY;
    }
    if expelled == neg_theta_max {
        return f64::NEG_INFINITY;
    }

    let half = expelled.signed_rad() / 2.0;
    2.0 * (((ecc - 1.0) / (ecc + 1.0)).sqrt() * half.tan()).atanh()
}

/// `H → ν`. `H = ±∞` saturates to the asymptotic boundary automatically, since
/// `tanh` saturates to `±1`.
pub fn hyperbolic_to_true(h: f64, ecc: f64) -> Angle {
    let nu = 2.0 * ((h / 2.0).tanh() * ((ecc + 1.0) / (ecc - 1.0)).sqrt()).atan();
    Angle::new(nu)
}

pub fn hyperbolic_to_mean(h: f64, ecc: f64) -> f64 {
    if h.is_infinite() {
        return h;
    }
    ecc * h.sinh() - h
}

/// Solves `M = e sinh H - H` for `H`, seeded at `H = M` and refined with Newton's
/// method. If an iterate becomes non-finite, falls back to `±∞` with the sign of `M`.
pub fn mean_to_hyperbolic(m: f64, ecc: f64) -> f64 {
    if m.is_infinite() {
        return m;
    }

    let mut h = m;
    for _ in 0..ANOMALY_MAX_ITER {
        let f = ecc * h.sinh() - h - m;
        if f.abs() <= ANOMALY_TOLERANCE {
            break;
        }
        let denom = ecc * h.cosh() - 1.0;
        let next = h - f / denom;
        if !next.is_finite() {
            return if m >= 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }
        h = next;
    }
    h
}

// --- Parabolic ---

pub fn true_to_parabolic(nu: Angle, rpe: f64) -> f64 {
    if nu.rad() == std::f64::consts::PI {
        return f64::INFINITY;
    }
    (2.0 * rpe).sqrt() * (nu.signed_rad() / 2.0).tan()
}

pub fn parabolic_to_true(d: f64, rpe: f64) -> Angle {
    let nu = 2.0 * (d / (2.0 * rpe).sqrt()).atan();
    Angle::new(nu)
}

/// Barker's equation: `M = RPE·D + D³/6`.
pub fn parabolic_to_mean(d: f64, rpe: f64) -> f64 {
    rpe * d + d.powi(3) / 6.0
}

/// Exact real root of the depressed cubic `D³/6 + RPE·D - M = 0` via Cardano's
/// formula.
pub fn mean_to_parabolic(m: f64, rpe: f64) -> f64 {
    if m.is_infinite() {
        return m;
    }
    let a = (9.0 * m * m + 8.0 * rpe.powi(3)).sqrt();
    let p = 3.0 * m + a;
    let q = 3.0 * m - a;
    p.cbrt() + q.signum() * q.abs().cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_elliptic_round_trip() {
        let ecc = 0.3;
        for nu_val in [0.0, 0.5, 1.0, 3.0, 5.0, 6.0] {
            let nu = Angle::new(nu_val);
            let e = true_to_eccentric(nu, ecc);
            let back = eccentric_to_true(e, ecc);
            assert!(Angle::approximately(Some(nu), Some(back)));
        }
    }

    #[test]
    fn test_kepler_equation_round_trip() {
        let ecc = 0.6;
        for m_val in [0.0, 0.2, 1.0, 3.14, 5.0] {
            let m = Angle::new(m_val);
            let e = mean_to_eccentric(m, ecc);
            let back = eccentric_to_mean(e, ecc);
            assert_relative_eq!(back.rad(), m.rad(), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_hyperbolic_round_trip() {
        let ecc = 2.0;
        let theta_max = Angle::new((-1.0_f64 / ecc).acos());
        for h_val in [-5.0, -1.0, 0.0, 1.0, 5.0] {
            let nu = hyperbolic_to_true(h_val, ecc);
            let back = true_to_hyperbolic(nu, ecc, theta_max);
            assert_relative_eq!(back, h_val, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hyperbolic_infinite_saturates_to_theta_max() {
        let ecc = 2.0;
        let theta_max = Angle::new((-1.0_f64 / ecc).acos());
        let nu = hyperbolic_to_true(f64::INFINITY, ecc);
        assert!(Angle::approximately(Some(nu), Some(theta_max)));

        let nu_neg = hyperbolic_to_true(f64::NEG_INFINITY, ecc);
        let expected = Angle::new(-theta_max.rad());
        assert!(Angle::approximately(Some(nu_neg), Some(expected)));
    }

    #[test]
    fn test_parabolic_round_trip() {
        let rpe = 1.0e6;
        for d_val in [-5000.0, -100.0, 0.0, 100.0, 5000.0] {
            let nu = parabolic_to_true(d_val, rpe);
            let back = true_to_parabolic(nu, rpe);
            assert_relative_eq!(back, d_val, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_barker_round_trip() {
        let rpe = 1.0e6;
        for d_val in [-5000.0, 0.0, 5000.0] {
            let m = parabolic_to_mean(d_val, rpe);
            let back = mean_to_parabolic(m, rpe);
            assert_relative_eq!(back, d_val, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_scenario_s3_parabolic_barker() {
        let rpe = 1.0e6_f64;
        let mu = 1.0e14_f64;
        let nu = Angle::new(std::f64::consts::FRAC_PI_2);
        let d = true_to_parabolic(nu, rpe);
        assert_relative_eq!(d, 2.0_f64.sqrt() * 1000.0, epsilon = 1e-6);
        let m = parabolic_to_mean(d, rpe);
        let t = m / mu.sqrt();
        assert!(t > 0.0);
    }
}
