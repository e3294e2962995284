//! Celestial bodies and the orbits they follow

pub mod orbit;
pub mod planet;

pub use orbit::{CircularOrbit, Orbit};
pub use planet::Planet;
