pub mod angle;
pub mod bodies;
pub mod body;
pub mod consts;
pub mod error;
pub mod lambert;
pub mod orbit;

pub use angle::{Angle, Angle32};
pub use body::Body;
pub use error::LambertError;
pub use orbit::{ConicSection, Orbit};
