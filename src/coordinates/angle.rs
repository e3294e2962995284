//! # Sexagesimal Angle Module
//!
//! This module provides an exact angle representation in degrees, minutes and
//! seconds of arc. Degrees and minutes are integers, seconds are decimals, so
//! repeated daily rotations never accumulate floating point error.
//!
//! ## Normalization
//!
//! Every `Angle` is kept in canonical form:
//! - `0 <= degrees < 360`
//! - `0 <= minutes < 60`
//! - `0 <= seconds < 60`
//!
//! Overflow in any unit carries into the next larger unit and underflow below
//! zero borrows from it. Degrees wrap around the full circle, so an angle is
//! never negative.
//!
//! ## Examples
//!
//! ```rust
//! use orrery::coordinates::angle::Angle;
//!
//! let west = Angle::from_degrees(-1);
//! assert_eq!(west.degrees(), 359);
//!
//! let back = west + Angle::from_degrees(1);
//! assert_eq!(back, Angle::zero());
//! ```

use std::fmt;
use std::ops::{Add, Sub};

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ROUNDING, DEFAULT_SCALE, MAX_DEGREES, MAX_MINUTES, MAX_SECONDS, SECONDS_PER_TURN,
};

/// An angle in degrees, minutes and seconds of arc
///
/// Ordering is lexicographic by degrees, then minutes, then seconds, which
/// matches angular order because every value is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawAngle", into = "RawAngle")]
pub struct Angle {
    degrees: i32,
    minutes: i32,
    seconds: Decimal,
}

/// Unnormalized serde form so configuration files may contain e.g. `-3` degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawAngle {
    degrees: i32,
    #[serde(default)]
    minutes: i32,
    #[serde(default)]
    seconds: Decimal,
}

impl From<RawAngle> for Angle {
    fn from(raw: RawAngle) -> Self {
        Angle::new(raw.degrees, raw.minutes, raw.seconds)
    }
}

impl From<Angle> for RawAngle {
    fn from(angle: Angle) -> Self {
        RawAngle {
            degrees: angle.degrees,
            minutes: angle.minutes,
            seconds: angle.seconds,
        }
    }
}

impl Angle {
    /// Creates a normalized angle from degrees, minutes and seconds
    ///
    /// Any of the components may be negative or exceed its range; the result
    /// is carried and wrapped into canonical form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::angle::Angle;
    /// use rust_decimal::Decimal;
    ///
    /// let angle = Angle::new(10, 75, Decimal::from(-30));
    /// assert_eq!(angle.degrees(), 11);
    /// assert_eq!(angle.minutes(), 14);
    /// assert_eq!(angle.seconds(), Decimal::from(30));
    /// ```
    pub fn new(degrees: i32, minutes: i32, seconds: Decimal) -> Self {
        normalized(i64::from(degrees), i64::from(minutes), seconds)
    }

    /// Creates an angle of whole degrees
    pub fn from_degrees(degrees: i32) -> Self {
        Self::new(degrees, 0, Decimal::ZERO)
    }

    /// Creates an angle of degrees and minutes
    pub fn from_degrees_minutes(degrees: i32, minutes: i32) -> Self {
        Self::new(degrees, minutes, Decimal::ZERO)
    }

    /// Creates an angle from a floating point number of degrees
    ///
    /// Seconds are kept to the default decimal scale. Returns `None` for
    /// non-finite input.
    pub fn from_decimal_degrees(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }
        let seconds = Decimal::from_f64_retain(degrees * 3600.0)?
            .round_dp_with_strategy(DEFAULT_SCALE, DEFAULT_ROUNDING);
        Some(normalized(0, 0, seconds))
    }

    /// The zero angle, 00° 00' 00"
    pub fn zero() -> Self {
        Angle {
            degrees: 0,
            minutes: 0,
            seconds: Decimal::ZERO,
        }
    }

    pub fn degrees(&self) -> i32 {
        self.degrees
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    pub fn seconds(&self) -> Decimal {
        self.seconds
    }

    /// Returns the angle as a single number of degrees for trigonometry
    ///
    /// With the `legacy-formulas` feature the historical conversion is used,
    /// which drops minutes and counts seconds as whole degrees.
    pub fn to_decimal_degrees(&self) -> f64 {
        if cfg!(feature = "legacy-formulas") {
            self.legacy_decimal_degrees()
        } else {
            self.exact_decimal_degrees()
        }
    }

    /// Returns the angle in radians
    pub fn to_radians(&self) -> f64 {
        self.to_decimal_degrees().to_radians()
    }

    fn exact_decimal_degrees(&self) -> f64 {
        let seconds = self.seconds.to_f64().unwrap_or_default();
        f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + seconds / 3600.0
    }

    // Integer division of minutes and `seconds / 60 * 60` are kept as they were.
    fn legacy_decimal_degrees(&self) -> f64 {
        let seconds = self.seconds.to_f64().unwrap_or_default();
        f64::from(self.degrees) + f64::from(self.minutes / 60) + seconds / 60.0 * 60.0
    }
}

/// Brings all three components into range, carrying seconds into minutes and
/// minutes into degrees with floor division.
fn normalized(degrees: i64, minutes: i64, seconds: Decimal) -> Angle {
    // Drop whole turns first so the carry below stays small.
    let seconds = seconds % SECONDS_PER_TURN;

    let mut carry = (seconds / MAX_SECONDS).floor();
    let mut seconds = seconds - carry * MAX_SECONDS;
    // The quotient is rounded to 28 digits and can land one unit off.
    if seconds < Decimal::ZERO {
        seconds += MAX_SECONDS;
        carry -= Decimal::ONE;
    } else if seconds >= MAX_SECONDS {
        seconds -= MAX_SECONDS;
        carry += Decimal::ONE;
    }
    let carry = carry.to_i64().unwrap_or_default();

    let minutes = minutes + carry;
    let degrees = (degrees + minutes.div_euclid(MAX_MINUTES)).rem_euclid(MAX_DEGREES);
    let minutes = minutes.rem_euclid(MAX_MINUTES);

    Angle {
        degrees: degrees as i32,
        minutes: minutes as i32,
        seconds: seconds.normalize(),
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        normalized(
            i64::from(self.degrees) + i64::from(other.degrees),
            i64::from(self.minutes) + i64::from(other.minutes),
            self.seconds + other.seconds,
        )
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Angle {
        normalized(
            i64::from(self.degrees) - i64::from(other.degrees),
            i64::from(self.minutes) - i64::from(other.minutes),
            self.seconds - other.seconds,
        )
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}' {}\"", self.degrees, self.minutes, self.seconds)
    }
}
