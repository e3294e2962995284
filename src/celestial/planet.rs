//! Planets moving along their orbits one day at a time

use std::fmt;

use crate::coordinates::Point;
use crate::{ForecastError, Result};

use super::orbit::Orbit;

/// A named body that owns its orbit and its current position
#[derive(Debug)]
pub struct Planet {
    name: String,
    orbit: Box<dyn Orbit>,
    position: Point,
}

impl Planet {
    /// Creates a planet at the initial position of its orbit
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the name is empty, or any error raised while
    /// computing the initial position.
    pub fn new(name: impl Into<String>, orbit: impl Orbit + 'static) -> Result<Self> {
        Self::with_boxed_orbit(name, Box::new(orbit))
    }

    /// Creates a planet from an already boxed orbit
    pub fn with_boxed_orbit(name: impl Into<String>, orbit: Box<dyn Orbit>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ForecastError::InvalidArgument(
                "A name is required to create a new planet.".to_string(),
            ));
        }

        let position = orbit.initial_position()?;
        Ok(Self {
            name,
            orbit,
            position,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orbit(&self) -> &dyn Orbit {
        self.orbit.as_ref()
    }

    /// Position on the current simulated day
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the planet one day forward
    pub fn advance(&mut self) -> Result<()> {
        self.position = self.orbit.next_position(&self.position)?;
        Ok(())
    }

    /// Moves the planet one day back
    pub fn retreat(&mut self) -> Result<()> {
        self.position = self.orbit.previous_position(&self.position)?;
        Ok(())
    }

    /// Position one day ahead, without moving the planet
    pub fn peek_next(&self) -> Result<Point> {
        self.orbit.next_position(&self.position)
    }

    /// Position one day back, without moving the planet
    pub fn peek_previous(&self) -> Result<Point> {
        self.orbit.previous_position(&self.position)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.name, self.position)
    }
}
