//! Property-based tests for the quantified invariants in the specification.

use kerbtraj::angle::Angle;
use kerbtraj::body::Body;
use kerbtraj::Orbit;
use proptest::prelude::*;
use std::f64::consts::TAU;

fn finite_real() -> impl Strategy<Value = f64> {
    -1.0e7_f64..1.0e7_f64
}

proptest! {
    /// Invariant 1: Angle::new always lands in [0, 2π), and from_degrees in [0, 360).
    #[test]
    fn angle_new_is_always_in_range(v in finite_real()) {
        let a = Angle::new(v);
        prop_assert!(a.rad() >= 0.0 && a.rad() < TAU);

        let d = Angle::from_degrees(v);
        prop_assert!(d.deg() >= 0.0 && d.deg() < 360.0);
    }

    /// Invariant 2: adding any integer multiple of 2π doesn't change the angle,
    /// up to the wrap-aware tolerance.
    #[test]
    fn angle_is_periodic_mod_tau(v in finite_real(), k in -50i32..50i32) {
        let a = Angle::new(v);
        let shifted = Angle::new(v + TAU * k as f64);
        prop_assert!(Angle::approximately(Some(a), Some(shifted)));
    }

    /// Invariant 6: Expel never returns an angle strictly inside the open arc.
    #[test]
    fn expel_never_lands_inside_the_arc(
        lo in 0.0f64..TAU,
        hi in 0.0f64..TAU,
        theta in 0.0f64..TAU,
    ) {
        let lo = Angle::new(lo);
        let hi = Angle::new(hi);
        let theta = Angle::new(theta);
        let expelled = Angle::expel(theta, lo, hi);
        prop_assert!(!expelled.is_between(Some(lo), Some(hi)));
    }

    /// Invariant 4: reconstructing an orbit from its own state vector at time t
    /// recovers the same elements, for generic (non-degenerate) elliptic orbits.
    #[test]
    fn state_round_trip_recovers_elements(
        rpe in 1.0e6f64..5.0e7,
        ecc in 0.01f64..0.8,
        inc in 0.1f64..3.0,
        ape in 0.1f64..6.0,
        lan in 0.1f64..6.0,
        t in 0.0f64..1.0e6,
    ) {
        let body = Body::new(1, "Test", 3.986e14, 6.371e6, None);
        let orbit = Orbit::from_elements(body, rpe, ecc, inc, ape, lan, 0.0);

        if let (Some(r), Some(v)) = (orbit.position_at(t), orbit.velocity_at(t)) {
            let recovered = Orbit::from_state(body, r, v, t);

            prop_assert!((recovered.rpe() - orbit.rpe()).abs() / orbit.rpe() < 1e-5);
            prop_assert!((recovered.ecc() - orbit.ecc()).abs() / orbit.ecc() < 1e-5);
            prop_assert!(Angle::approximately(Some(recovered.inc()), Some(orbit.inc())));
            prop_assert!(Angle::approximately(Some(recovered.ape()), Some(orbit.ape())));
            prop_assert!(Angle::approximately(Some(recovered.lan()), Some(orbit.lan())));
        }
    }

    /// Invariant 5: a Lambert transfer passes through both endpoints.
    #[test]
    fn lambert_transfer_passes_through_both_endpoints(
        theta2 in 0.2f64..3.0,
        r1_mag in 1.0e10f64..2.0e11,
        r2_mag in 1.0e10f64..2.0e11,
        dt_days in 10.0f64..500.0,
    ) {
        let body = Body::new(0, "Sol", 1.32712e20, 6.96e8, None);
        let r1 = nalgebra::Vector3::new(r1_mag, 0.0, 0.0);
        let r2 = nalgebra::Vector3::new(r2_mag * theta2.cos(), r2_mag * theta2.sin(), 0.0);
        let t1 = 0.0;
        let t2 = dt_days * 86400.0;

        if let Ok(orbit) = Orbit::find_transfer(body, r1, t1, r2, t2) {
            if let (Some(p1), Some(p2)) = (orbit.position_at(t1), orbit.position_at(t2)) {
                prop_assert!((p1 - r1).norm() / r1.norm() < 1e-2);
                prop_assert!((p2 - r2).norm() / r2.norm() < 1e-2);
            }
        }
    }
}
