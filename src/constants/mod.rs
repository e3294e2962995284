//! Constants module for orbital geometry and the reference scenario

use rust_decimal::{Decimal, RoundingStrategy};

// Angles
/// Degrees in a complete circle
pub const MAX_DEGREES: i64 = 360;
/// Minutes in a degree
pub const MAX_MINUTES: i64 = 60;
/// Seconds in a minute
pub const MAX_SECONDS: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
/// Minutes in a complete circle
pub const MINUTES_PER_TURN: i64 = MAX_DEGREES * MAX_MINUTES;
/// Seconds in a complete circle
pub const SECONDS_PER_TURN: Decimal = Decimal::from_parts(1_296_000, 0, 0, false, 0);

// Decimal arithmetic
/// Fractional digits kept for coordinates derived from polar form
pub const DEFAULT_SCALE: u32 = 3;
/// Rounding applied when a decimal is cut to a fixed scale (round half down)
pub const DEFAULT_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointTowardZero;
/// Largest accepted magnitude for a coordinate or orbit radius.
///
/// Each product of two coordinate differences stays inside the 96-bit
/// mantissa of `Decimal` below this bound. Sums over many such products can
/// still overflow and are checked where they are taken.
pub const MAX_COORDINATE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

// Reference scenario
/// Orbit radius of Ferengi
pub const FERENGI_DISTANCE: i64 = 500;
/// Daily angular displacement of Ferengi in degrees
pub const FERENGI_DISPLACEMENT: i32 = -1;
/// Orbit radius of Betasoide
pub const BETASOIDE_DISTANCE: i64 = 2000;
/// Daily angular displacement of Betasoide in degrees
pub const BETASOIDE_DISPLACEMENT: i32 = -3;
/// Orbit radius of Vulcano
pub const VULCANO_DISTANCE: i64 = 1000;
/// Daily angular displacement of Vulcano in degrees
pub const VULCANO_DISPLACEMENT: i32 = 5;
/// Default forecast horizon in years
pub const DEFAULT_YEARS: u32 = 10;
