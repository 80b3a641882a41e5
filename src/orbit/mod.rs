//! A six-element Keplerian orbit bound to a [`Body`], and the conversions between
//! time, true anomaly, and Cartesian state that make it useful.

mod anomaly;

use nalgebra::{Rotation3, Vector3};

use crate::angle::Angle;
use crate::body::Body;
use crate::consts::PARABOLIC_SAMPLE_MARGIN;
use crate::error::LambertError;
use crate::lambert;

/// Which conic section an orbit's eccentricity places it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConicSection {
    Elliptic,
    Parabolic,
    Hyperbolic,
}

/// A Keplerian orbit: six classical elements bound to a [`Body`]. All derived
/// quantities are plain functions of these fields — nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    body: Body,
    rpe: f64,
    ecc: f64,
    inc: Angle,
    ape: Angle,
    lan: Angle,
    tpp: f64,
}

impl Orbit {
    /// Builds an orbit from the six classical elements, clamping/reducing each into
    /// its valid range.
    pub fn from_elements(
        body: Body,
        rpe: f64,
        ecc: f64,
        inc: f64,
        ape: f64,
        lan: f64,
        tpp: f64,
    ) -> Self {
        Orbit {
            body,
            rpe: rpe.max(0.0),
            ecc: ecc.max(0.0),
            inc: Angle::new(inc.rem_euclid(std::f64::consts::PI)),
            ape: Angle::new(ape),
            lan: Angle::new(lan),
            tpp,
        }
    }

    /// Builds an orbit from a Cartesian state `(r, v)` at epoch `t`, following the
    /// standard state-to-elements algorithm.
    pub fn from_state(body: Body, r: Vector3<f64>, v: Vector3<f64>, t: f64) -> Self {
        let mu = body.mu();
        let r_mag = r.norm();
        let r_hat = r / r_mag;

        let h = r.cross(&v);
        let h_mag = h.norm();
        let h_hat = h / h_mag;

        let e_vec = v.cross(&h) / mu - r_hat;
        let n_vec = Vector3::z().cross(&h_hat);
        let n_mag = n_vec.norm();

        let ecc = e_vec.norm();

        let mut nu = if ecc > 1e-12 {
            (e_vec.dot(&r) / (ecc * r_mag)).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        if r.dot(&v) < 0.0 {
            nu = std::f64::consts::TAU - nu;
        }
        let nu_angle = Angle::new(nu);

        let p = r_mag * (1.0 + ecc * nu.cos());
        let rpe = p / (1.0 + ecc);

        let (inc, ape, lan) = if n_mag < 1e-12 {
            let lan_eq = e_vec.y.atan2(e_vec.x);
            (0.0, 0.0, lan_eq)
        } else {
            // |n| here is built from ĥ (unit), so scale by |h| to recover h_z's units.
            let inc_final = (n_mag * h_mag).atan2(h.z);

            let mut ape = if ecc > 1e-12 {
                (n_vec.dot(&e_vec) / (n_mag * ecc)).clamp(-1.0, 1.0).acos()
            } else {
                0.0
            };
            if e_vec.z < 0.0 {
                ape = std::f64::consts::TAU - ape;
            }

            let mut lan = (n_vec.x / n_mag).clamp(-1.0, 1.0).acos();
            if n_vec.y < 0.0 {
                lan = std::f64::consts::TAU - lan;
            }

            (inc_final, ape, lan)
        };

        let provisional = Orbit::from_elements(body, rpe, ecc, inc, ape, lan, 0.0);
        let tau = provisional.true_anomaly_to_time(nu_angle);
        let tpp = t - tau;

        Orbit::from_elements(body, rpe, ecc, inc, ape, lan, tpp)
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn rpe(&self) -> f64 {
        self.rpe
    }

    pub fn ecc(&self) -> f64 {
        self.ecc
    }

    pub fn inc(&self) -> Angle {
        self.inc
    }

    pub fn ape(&self) -> Angle {
        self.ape
    }

    pub fn lan(&self) -> Angle {
        self.lan
    }

    pub fn tpp(&self) -> f64 {
        self.tpp
    }

    pub fn with_rpe(mut self, rpe: f64) -> Self {
        self.rpe = rpe.max(0.0);
        self
    }

    pub fn with_ecc(mut self, ecc: f64) -> Self {
        self.ecc = ecc.max(0.0);
        self
    }

    pub fn with_inc(mut self, inc: f64) -> Self {
        self.inc = Angle::new(inc.rem_euclid(std::f64::consts::PI));
        self
    }

    pub fn with_ape(mut self, ape: f64) -> Self {
        self.ape = Angle::new(ape);
        self
    }

    pub fn with_lan(mut self, lan: f64) -> Self {
        self.lan = Angle::new(lan);
        self
    }

    pub fn with_tpp(mut self, tpp: f64) -> Self {
        self.tpp = tpp;
        self
    }

    pub fn conic(&self) -> ConicSection {
        if self.ecc < 1.0 {
            ConicSection::Elliptic
        } else if self.ecc > 1.0 {
            ConicSection::Hyperbolic
        } else {
            ConicSection::Parabolic
        }
    }

    pub fn semi_latus_rectum(&self) -> f64 {
        self.rpe * (1.0 + self.ecc)
    }

    /// Signed semi-major axis: positive for ellipses, negative for hyperbolas,
    /// `+∞` for parabolas.
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_latus_rectum() / (1.0 - self.ecc * self.ecc)
    }

    /// Specific orbital energy. Zero for parabolic orbits, negative for elliptic,
    /// positive for hyperbolic.
    pub fn energy(&self) -> f64 {
        let p = self.semi_latus_rectum();
        -self.body.mu() * (1.0 - self.ecc * self.ecc) / (2.0 * p)
    }

    pub fn mean_motion(&self) -> f64 {
        let mu = self.body.mu();
        match self.conic() {
            ConicSection::Parabolic => mu.sqrt(),
            _ => (mu / self.semi_major_axis().abs().powi(3)).sqrt(),
        }
    }

    /// Orbital period. `+∞` for non-elliptic orbits.
    pub fn period(&self) -> f64 {
        match self.conic() {
            ConicSection::Elliptic => std::f64::consts::TAU / self.mean_motion(),
            _ => f64::INFINITY,
        }
    }

    /// Apoapsis radius. `+∞` for non-elliptic orbits.
    pub fn apoapsis_radius(&self) -> f64 {
        match self.conic() {
            ConicSection::Elliptic => self.semi_major_axis() * (1.0 + self.ecc),
            _ => f64::INFINITY,
        }
    }

    pub fn periapsis_radius(&self) -> f64 {
        self.rpe
    }

    /// Hyperbolic excess velocity at infinity. Zero for non-hyperbolic orbits.
    pub fn hyperbolic_excess_velocity(&self) -> f64 {
        (2.0 * self.energy()).max(0.0).sqrt()
    }

    /// Maximum true anomaly, `acos(-1/e)`. Only defined for hyperbolic orbits.
    pub fn theta_max(&self) -> Option<Angle> {
        match self.conic() {
            ConicSection::Hyperbolic => Some(Angle::new((-1.0 / self.ecc).acos())),
            _ => None,
        }
    }

    /// `Rz(LAN) · Rx(INC)`: takes orbital-plane vectors already rotated by the
    /// argument of periapsis into the inertial frame.
    fn rotation_lan_inc(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.lan.rad())
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.inc.rad())
    }

    /// The full 3-1-3 rotation `Rz(LAN) · Rx(INC) · Rz(APE)` from perifocal to
    /// inertial coordinates.
    fn rotation(&self) -> Rotation3<f64> {
        self.rotation_lan_inc() * Rotation3::from_axis_angle(&Vector3::z_axis(), self.ape.rad())
    }

    /// Unit vector from the focus towards periapsis, in the inertial frame.
    pub fn periapsis_direction(&self) -> Vector3<f64> {
        self.rotation() * Vector3::x()
    }

    /// Unit vector normal to the orbital plane, in the inertial frame.
    pub fn normal_direction(&self) -> Vector3<f64> {
        self.rotation() * Vector3::z()
    }

    /// Unit vector towards the ascending node, in the inertial frame.
    pub fn ascending_node_direction(&self) -> Vector3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.lan.rad()) * Vector3::x()
    }

    /// Unit vector towards the descending node, in the inertial frame.
    pub fn descending_node_direction(&self) -> Vector3<f64> {
        -self.ascending_node_direction()
    }

    /// Eccentricity vector **e**: magnitude ECC, pointed towards periapsis.
    pub fn eccentricity_vector(&self) -> Vector3<f64> {
        self.periapsis_direction() * self.ecc
    }

    /// Specific angular momentum vector **h**.
    pub fn angular_momentum_vector(&self) -> Vector3<f64> {
        let h_mag = (self.body.mu() * self.semi_latus_rectum()).sqrt();
        self.normal_direction() * h_mag
    }

    /// Nodal vector **n** = ẑ × ĥ, pointed towards the ascending node.
    pub fn nodal_vector(&self) -> Vector3<f64> {
        self.ascending_node_direction()
    }

    pub fn periapsis_point(&self) -> Vector3<f64> {
        self.position_at_nu(Angle::ZERO)
            .expect("periapsis is never in the hyperbolic forbidden arc")
    }

    /// The apoapsis point. `None` for non-elliptic orbits (there is no apoapsis).
    pub fn apoapsis_point(&self) -> Option<Vector3<f64>> {
        match self.conic() {
            ConicSection::Elliptic => self.position_at_nu(Angle::HALF_TURN),
            _ => None,
        }
    }

    fn forbidden_arc(&self) -> Option<(Angle, Angle)> {
        self.theta_max()
            .map(|tm| (tm, Angle::new(std::f64::consts::TAU - tm.rad())))
    }

    /// Position at true anomaly `nu`, in the inertial frame. `None` if `nu` lies in
    /// the hyperbolic forbidden arc (the orbit never reaches that direction).
    pub fn position_at_nu(&self, nu: Angle) -> Option<Vector3<f64>> {
        if let Some((lo, hi)) = self.forbidden_arc() {
            if nu.is_between(Some(lo), Some(hi)) {
                return None;
            }
        }
        let r = self.semi_latus_rectum() / (1.0 + self.ecc * nu.rad().cos());
        let local = Vector3::new(r * nu.rad().cos(), r * nu.rad().sin(), 0.0);
        Some(self.rotation() * local)
    }

    /// Velocity at true anomaly `nu`, in the inertial frame. `None` if `nu` lies in
    /// the hyperbolic forbidden arc.
    pub fn velocity_at_nu(&self, nu: Angle) -> Option<Vector3<f64>> {
        if let Some((lo, hi)) = self.forbidden_arc() {
            if nu.is_between(Some(lo), Some(hi)) {
                return None;
            }
        }
        let h_mag = (self.body.mu() * self.semi_latus_rectum()).sqrt();
        let scale = self.body.mu() / h_mag;
        let ape = self.ape.rad();
        let arg = ape + nu.rad();
        let local = Vector3::new(
            -arg.sin() - self.ecc * ape.sin(),
            arg.cos() + self.ecc * ape.cos(),
            0.0,
        ) * scale;
        Some(self.rotation_lan_inc() * local)
    }

    /// Converts epoch `t` to the true anomaly the orbit occupies at that time.
    pub fn time_to_true_anomaly(&self, t: f64) -> Angle {
        match self.conic() {
            ConicSection::Elliptic => {
                let n = self.mean_motion();
                let m = Angle::new(n * (t - self.tpp));
                let e = anomaly::mean_to_eccentric(m, self.ecc);
                anomaly::eccentric_to_true(e, self.ecc)
            }
            ConicSection::Hyperbolic => {
                let theta_max = self.theta_max().unwrap();
                if t == f64::INFINITY {
                    return theta_max;
                }
                if t == f64::NEG_INFINITY {
                    return Angle::new(std::f64::consts::TAU - theta_max.rad());
                }
                let n = self.mean_motion();
                let m = n * (t - self.tpp);
                let h = anomaly::mean_to_hyperbolic(m, self.ecc);
                anomaly::hyperbolic_to_true(h, self.ecc)
            }
            ConicSection::Parabolic => {
                if t.is_infinite() {
                    return Angle::HALF_TURN;
                }
                let n = self.mean_motion();
                let m = n * (t - self.tpp);
                let d = anomaly::mean_to_parabolic(m, self.rpe);
                anomaly::parabolic_to_true(d, self.rpe)
            }
        }
    }

    /// Converts true anomaly `nu` to the epoch at which the orbit occupies it. May
    /// be `±∞` for hyperbolic/parabolic orbits at their asymptotic directions.
    pub fn true_anomaly_to_time(&self, nu: Angle) -> f64 {
        let n = self.mean_motion();
        match self.conic() {
            ConicSection::Elliptic => {
                let e = anomaly::true_to_eccentric(nu, self.ecc);
                let m = anomaly::eccentric_to_mean(e, self.ecc);
                self.tpp + m.rad() / n
            }
            ConicSection::Hyperbolic => {
                let theta_max = self.theta_max().unwrap();
                let h = anomaly::true_to_hyperbolic(nu, self.ecc, theta_max);
                if h.is_infinite() {
                    return self.tpp + h.signum() * f64::INFINITY;
                }
                let m = anomaly::hyperbolic_to_mean(h, self.ecc);
                self.tpp + m / n
            }
            ConicSection::Parabolic => {
                let d = anomaly::true_to_parabolic(nu, self.rpe);
                let m = anomaly::parabolic_to_mean(d, self.rpe);
                self.tpp + m / n
            }
        }
    }

    pub fn position_at(&self, t: f64) -> Option<Vector3<f64>> {
        self.position_at_nu(self.time_to_true_anomaly(t))
    }

    pub fn velocity_at(&self, t: f64) -> Option<Vector3<f64>> {
        self.velocity_at_nu(self.time_to_true_anomaly(t))
    }

    /// Samples a polyline of `(position, true_anomaly)` pairs between `nu1` and
    /// `nu2`, travelling counter-clockwise, with spacing never exceeding `step`.
    /// Samples falling in a hyperbolic forbidden arc are omitted, leaving an
    /// explicit break in the polyline. If both endpoints are absent, samples the
    /// whole orbit (one full revolution for elliptic orbits; the full open domain
    /// for hyperbolic/parabolic orbits).
    pub fn sample(
        &self,
        nu1: Option<Angle>,
        nu2: Option<Angle>,
        step: f64,
    ) -> (Vec<Vector3<f64>>, Vec<Angle>) {
        let (start, span, closed_loop) = match (nu1, nu2) {
            (Some(a), Some(b)) => (a, Self::ccw_span(a, b), false),
            _ => match self.conic() {
                ConicSection::Elliptic => (Angle::ZERO, std::f64::consts::TAU, true),
                ConicSection::Hyperbolic => {
                    let tm = self.theta_max().unwrap();
                    let lo = Angle::new(-tm.rad());
                    (lo, 2.0 * tm.rad(), false)
                }
                ConicSection::Parabolic => {
                    let bound = std::f64::consts::PI - PARABOLIC_SAMPLE_MARGIN;
                    (Angle::new(-bound), 2.0 * bound, false)
                }
            },
        };

        let count = (span / step).ceil().max(1.0) as usize;
        let actual_step = span / count as f64;

        let mut points = Vec::new();
        let mut anomalies = Vec::new();
        let last = if closed_loop { count } else { count + 1 };
        for k in 0..last {
            let theta = Angle::new(start.rad() + k as f64 * actual_step);
            if let Some(p) = self.position_at_nu(theta) {
                points.push(p);
                anomalies.push(theta);
            }
        }
        (points, anomalies)
    }

    /// Counter-clockwise angular span from `a` to `b`, in `[0, 2π]`.
    fn ccw_span(a: Angle, b: Angle) -> f64 {
        let diff = b.rad() - a.rad();
        if diff >= 0.0 {
            diff
        } else {
            diff + std::f64::consts::TAU
        }
    }

    /// Solves Lambert's problem for the zero-revolution transfer orbit from
    /// `(r1, t1)` to `(r2, t2)` about `body`.
    pub fn find_transfer(
        body: Body,
        r1: Vector3<f64>,
        t1: f64,
        r2: Vector3<f64>,
        t2: f64,
    ) -> Result<Orbit, LambertError> {
        lambert::find_transfer(body, r1, t1, r2, t2)
    }
}
