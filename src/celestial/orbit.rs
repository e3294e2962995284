//! Orbital paths around the star
//!
//! An [`Orbit`] turns a body's current position into its position one
//! simulated day later or earlier. Only circular paths with a fixed daily
//! rotation exist today; the trait is the seam for other shapes.

use std::fmt;

use rust_decimal::Decimal;

use crate::constants::MAX_COORDINATE;
use crate::coordinates::{Angle, Point};
use crate::{ForecastError, Result};

/// A path that moves a body one simulated day at a time
pub trait Orbit: fmt::Debug {
    /// Position of a body on its first simulated day
    fn initial_position(&self) -> Result<Point>;

    /// Position one day after `current`
    fn next_position(&self, current: &Point) -> Result<Point>;

    /// Position one day before `current`
    fn previous_position(&self, current: &Point) -> Result<Point>;
}

/// Circular path at a fixed distance from the star
///
/// A body rotates by `angular_displacement` every day; negative
/// displacements (stored normalized, e.g. -1° as 359°) rotate clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    star_distance: Decimal,
    angular_displacement: Angle,
}

impl CircularOrbit {
    /// Creates a circular orbit
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the distance is negative or out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::celestial::{CircularOrbit, Orbit};
    /// use orrery::coordinates::Angle;
    /// use rust_decimal::Decimal;
    ///
    /// let orbit = CircularOrbit::new(Decimal::from(500), Angle::from_degrees(-1)).unwrap();
    /// let start = orbit.initial_position().unwrap();
    /// let next = orbit.next_position(&start).unwrap();
    /// assert_eq!(next.angle(), Some(Angle::from_degrees(359)));
    /// ```
    pub fn new(star_distance: Decimal, angular_displacement: Angle) -> Result<Self> {
        if star_distance.is_sign_negative() && !star_distance.is_zero() {
            return Err(ForecastError::InvalidArgument(format!(
                "A circular orbit needs a non-negative distance to the star, got {star_distance}."
            )));
        }
        if star_distance > MAX_COORDINATE {
            return Err(ForecastError::InvalidArgument(format!(
                "The distance to the star {star_distance} exceeds {MAX_COORDINATE}."
            )));
        }

        Ok(Self {
            star_distance,
            angular_displacement,
        })
    }

    pub fn star_distance(&self) -> Decimal {
        self.star_distance
    }

    pub fn angular_displacement(&self) -> Angle {
        self.angular_displacement
    }
}

// The distance of `current` is ignored: the orbit always places the body at
// its own radius and only the angle moves.
impl Orbit for CircularOrbit {
    fn initial_position(&self) -> Result<Point> {
        Point::polar(self.star_distance, Angle::zero())
    }

    fn next_position(&self, current: &Point) -> Result<Point> {
        Point::polar(self.star_distance, current.bearing() + self.angular_displacement)
    }

    fn previous_position(&self, current: &Point) -> Result<Point> {
        Point::polar(self.star_distance, current.bearing() - self.angular_displacement)
    }
}

impl fmt::Display for CircularOrbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "circular orbit at {} turning {} per day",
            self.star_distance, self.angular_displacement
        )
    }
}
