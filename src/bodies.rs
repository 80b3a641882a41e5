//! A small static registry of well-known Kerbol-system bodies.
//!
//! Values are taken from the KSP wiki, the same source the teacher crate's
//! `consts` module cites for the Kerbin constants it hardcodes.

use crate::body::Body;
use crate::consts;

pub fn kerbol() -> Body {
    Body::new(0, "Kerbol", consts::KERBOL_MU, 2.616e8, Some(6e8))
}

pub fn kerbin() -> Body {
    Body::new(
        1,
        "Kerbin",
        consts::KERBIN_MU,
        consts::KERBIN_RADIUS,
        Some(consts::KERBIN_ATMOSPHERE_HEIGHT),
    )
}

pub fn mun() -> Body {
    Body::new(2, "Mun", 6.5138398e10, 2.0e5, None)
}

pub fn minmus() -> Body {
    Body::new(3, "Minmus", 1.7658000e9, 6.0e4, None)
}

/// Looks up a body by its display name (case-insensitive).
pub fn by_name(name: &str) -> Option<Body> {
    let lower = name.to_lowercase();
    [kerbol(), kerbin(), mun(), minmus()]
        .into_iter()
        .find(|b| b.name().to_lowercase() == lower)
}
