//! An immutable descriptor of a central body.

use crate::orbit::Orbit;

/// Gravitational/geometric description of a central body. Immutable after
/// construction; all derived quantities (default/zero parking orbits) are plain
/// functions of these fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    id: u32,
    name: &'static str,
    mu: f64,
    radius: f64,
    atmosphere_height: Option<f64>,
}

impl Body {
    pub fn new(
        id: u32,
        name: &'static str,
        mu: f64,
        radius: f64,
        atmosphere_height: Option<f64>,
    ) -> Self {
        Body {
            id,
            name,
            mu,
            radius,
            atmosphere_height,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn atmosphere_height(&self) -> Option<f64> {
        self.atmosphere_height
    }

    /// A circular-ish parking orbit 5% above the atmosphere (or the surface, for
    /// airless bodies), rounded up to the next 25 km multiple, with eccentricity 0.2.
    pub fn default_orbit(&self) -> Orbit {
        let h_atm = self.atmosphere_height.unwrap_or(0.0);
        let raw = (self.radius + h_atm) * 1.05;
        let rpe = (raw / 25_000.0).ceil() * 25_000.0;
        Orbit::from_elements(*self, rpe, 0.2, 0.0, 0.0, 0.0, 0.0)
    }

    /// An orbit with all six elements at zero.
    pub fn zero_orbit(&self) -> Orbit {
        Orbit::from_elements(*self, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kerbin() -> Body {
        Body::new(1, "Kerbin", 3.5316e12, 6.0e5, Some(7.0e4))
    }

    #[test]
    fn test_default_orbit_shape() {
        let body = kerbin();
        let orbit = body.default_orbit();
        // (6.0e5 + 7.0e4) * 1.05 = 703500, rounded up to next 25km multiple -> 725000
        assert_eq!(orbit.rpe(), 725_000.0);
        assert_eq!(orbit.ecc(), 0.2);
        assert_eq!(orbit.inc().rad(), 0.0);
        assert_eq!(orbit.ape().rad(), 0.0);
        assert_eq!(orbit.lan().rad(), 0.0);
        assert_eq!(orbit.tpp(), 0.0);
    }

    #[test]
    fn test_default_orbit_airless_body() {
        let body = Body::new(2, "Minmus", 1.7658e9, 6.0e4, None);
        let orbit = body.default_orbit();
        // (6.0e4) * 1.05 = 63000, rounded up to next 25km multiple -> 75000
        assert_eq!(orbit.rpe(), 75_000.0);
    }

    #[test]
    fn test_zero_orbit() {
        let orbit = kerbin().zero_orbit();
        assert_eq!(orbit.rpe(), 0.0);
        assert_eq!(orbit.ecc(), 0.0);
        assert_eq!(orbit.inc().rad(), 0.0);
        assert_eq!(orbit.ape().rad(), 0.0);
        assert_eq!(orbit.lan().rad(), 0.0);
        assert_eq!(orbit.tpp(), 0.0);
    }
}
