//! # Planar Point Module
//!
//! A `Point` is an immutable location in the orbital plane with the star at
//! the origin. Points are built either from Cartesian coordinates or from
//! polar coordinates (distance and `Angle`), and both representations are
//! exposed afterwards.
//!
//! ## Representations
//!
//! - Polar construction keeps the exact `Angle` and derives `x`/`y`, rounded
//!   to three fractional digits with round-half-down.
//! - Cartesian construction derives the distance but carries no stored angle;
//!   `angle()` returns `None` and `bearing()` computes `atan2(y, x)` on demand.
//!
//! Relational predicates compare a single coordinate with exact decimal
//! comparison, without tolerance.

use std::fmt;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::angle::Angle;
use super::decimal_sqrt;
use crate::constants::{DEFAULT_ROUNDING, DEFAULT_SCALE, MAX_COORDINATE};
use crate::{ForecastError, Result};

/// Immutable two-dimensional location
///
/// Equality compares the representation as well as the location: a polar
/// point and a Cartesian point at the same `x`/`y` are not `==`, since only
/// the first stores an angle. Use [`Point::same_location`] to compare
/// coordinates alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: Decimal,
    y: Decimal,
    distance: Decimal,
    /// `None` when built from Cartesian coordinates
    angle: Option<Angle>,
}

impl Point {
    /// The origin, at distance zero and angle zero
    pub fn origin() -> Self {
        Point {
            x: Decimal::ZERO,
            y: Decimal::ZERO,
            distance: Decimal::ZERO,
            angle: Some(Angle::zero()),
        }
    }

    /// Creates a point from Cartesian coordinates
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::point::Point;
    /// use rust_decimal::Decimal;
    ///
    /// let p = Point::cartesian(Decimal::from(6), Decimal::from(8)).unwrap();
    /// assert_eq!(p.x(), Decimal::from(6));
    /// assert!(p.angle().is_none());
    /// ```
    pub fn cartesian(x: Decimal, y: Decimal) -> Result<Self> {
        check_coordinate("x", x)?;
        check_coordinate("y", y)?;

        Ok(Point {
            x,
            y,
            distance: decimal_sqrt(x * x + y * y),
            angle: None,
        })
    }

    /// Creates a point from its distance to the origin and its angle
    ///
    /// `x = distance * cos(angle)` and `y = distance * sin(angle)`, each
    /// rounded half down to three fractional digits.
    pub fn polar(distance: Decimal, angle: Angle) -> Result<Self> {
        check_coordinate("distance", distance)?;

        let radians = angle.to_radians();
        let x = project(distance, radians.cos())?;
        let y = project(distance, radians.sin())?;

        Ok(Point {
            x,
            y,
            distance,
            angle: Some(angle),
        })
    }

    pub fn x(&self) -> Decimal {
        self.x
    }

    pub fn y(&self) -> Decimal {
        self.y
    }

    /// Distance from the origin
    pub fn distance(&self) -> Decimal {
        self.distance
    }

    /// The stored polar angle, if the point was built in polar form
    pub fn angle(&self) -> Option<Angle> {
        self.angle
    }

    /// The polar angle, computed from `atan2(y, x)` when none is stored
    pub fn bearing(&self) -> Angle {
        self.angle.unwrap_or_else(|| {
            let x = self.x.to_f64().unwrap_or_default();
            let y = self.y.to_f64().unwrap_or_default();
            Angle::from_decimal_degrees(y.atan2(x).to_degrees()).unwrap_or_default()
        })
    }

    pub fn is_left_of(&self, other: &Point) -> bool {
        self.x < other.x
    }

    pub fn is_right_of(&self, other: &Point) -> bool {
        self.x > other.x
    }

    pub fn is_above(&self, other: &Point) -> bool {
        self.y > other.y
    }

    pub fn is_below(&self, other: &Point) -> bool {
        self.y < other.y
    }

    pub fn is_vertically_aligned(&self, other: &Point) -> bool {
        self.x == other.x
    }

    pub fn is_horizontally_aligned(&self, other: &Point) -> bool {
        self.y == other.y
    }

    /// True when both points have the same `x` and `y`
    pub fn same_location(&self, other: &Point) -> bool {
        self.is_vertically_aligned(other) && self.is_horizontally_aligned(other)
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> Decimal {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        decimal_sqrt(dx * dx + dy * dy)
    }
}

fn check_coordinate(name: &str, value: Decimal) -> Result<()> {
    if value.abs() > MAX_COORDINATE {
        return Err(ForecastError::InvalidArgument(format!(
            "The {name} {value} is outside the supported range of ±{MAX_COORDINATE}."
        )));
    }
    Ok(())
}

fn project(distance: Decimal, factor: f64) -> Result<Decimal> {
    let factor = Decimal::from_f64_retain(factor).ok_or_else(|| {
        ForecastError::InvalidArgument(format!("Cannot project a point with factor {factor}."))
    })?;
    let value = distance.checked_mul(factor).ok_or_else(|| {
        ForecastError::InvalidArgument(format!("Projection of distance {distance} overflows."))
    })?;
    Ok(value.round_dp_with_strategy(DEFAULT_SCALE, DEFAULT_ROUNDING))
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
