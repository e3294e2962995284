pub mod angle;
pub mod point;
pub mod polygon;

pub use angle::Angle;
pub use point::Point;
pub use polygon::Polygon;

use rust_decimal::{Decimal, MathematicalOps};

/// Square root at full `Decimal` precision.
///
/// Only negative inputs have no root, and every caller passes a sum of
/// squares, so the zero fallback is unreachable.
pub(crate) fn decimal_sqrt(value: Decimal) -> Decimal {
    value.sqrt().unwrap_or(Decimal::ZERO)
}
