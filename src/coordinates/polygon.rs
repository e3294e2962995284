//! Polygon measurements over an ordered sequence of points
//!
//! The point order defines the edges, closing from the last point back to the
//! first. Polygons may be non-convex or self-intersecting; none of the
//! algorithms here assume convexity.

use std::fmt;

use rust_decimal::Decimal;

use super::point::Point;
use crate::constants::DEFAULT_ROUNDING;
use crate::{ForecastError, Result};

/// An ordered, growable sequence of vertices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from its vertices in edge order
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    /// Appends a vertex after the current last one
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the polygon has no vertices at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the closed edge sequence as `(previous, current)` pairs,
    /// starting with the edge from the last vertex to the first.
    fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> {
        let previous = self.points.iter().cycle().skip(self.points.len().saturating_sub(1));
        previous.zip(self.points.iter())
    }

    /// Sum of the Euclidean lengths of all edges
    pub fn perimeter(&self) -> Result<Decimal> {
        checked_total(self.edges().map(|(a, b)| a.distance_to(b)))
    }

    /// Signed shoelace area, positive for counter-clockwise vertex order
    pub fn signed_area(&self) -> Result<Decimal> {
        Ok(self.shoelace_sum()? / Decimal::TWO)
    }

    /// Enclosed area, always non-negative
    ///
    /// With the `legacy-formulas` feature the historical trapezoid sum
    /// `Σ (x_j + x_i)(y_j - y_i)` is used instead of the cross product sum.
    /// Both produce the same magnitude for the same vertices.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the sum leaves the `Decimal` range, which takes
    /// tens of thousands of vertices near the coordinate bound.
    pub fn area(&self) -> Result<Decimal> {
        let sum = if cfg!(feature = "legacy-formulas") {
            self.trapezoid_sum()?
        } else {
            self.shoelace_sum()?
        };
        Ok((sum / Decimal::TWO).abs())
    }

    fn shoelace_sum(&self) -> Result<Decimal> {
        checked_total(self.edges().map(|(a, b)| a.x() * b.y() - b.x() * a.y()))
    }

    fn trapezoid_sum(&self) -> Result<Decimal> {
        checked_total(self.edges().map(|(a, b)| (a.x() + b.x()) * (a.y() - b.y())))
    }

    /// True when the area is exactly zero, i.e. all vertices are collinear.
    ///
    /// Polygons with fewer than three vertices are always degenerate.
    pub fn is_degenerate(&self) -> Result<bool> {
        Ok(self.area()?.is_zero())
    }

    /// Crossing number test for `point`
    ///
    /// A horizontal ray is cast from `point` towards positive x and the edges
    /// it crosses are counted; an odd count means the point is inside.
    pub fn contains(&self, point: &Point) -> bool {
        self.edges()
            .filter(|(a, b)| crosses(a, b, point))
            .count()
            % 2
            == 1
    }
}

fn checked_total(mut terms: impl Iterator<Item = Decimal>) -> Result<Decimal> {
    terms.try_fold(Decimal::ZERO, |total, term| {
        total.checked_add(term).ok_or_else(|| {
            ForecastError::InvalidArgument(
                "Polygon measurement exceeds the decimal range.".to_string(),
            )
        })
    })
}

/// Whether the rightward ray from `test` crosses the edge `a`-`b`.
fn crosses(a: &Point, b: &Point, test: &Point) -> bool {
    // Both ends on the same side, including horizontal edges.
    if a.is_above(test) == b.is_above(test) {
        return false;
    }

    let numerator = (a.x() - b.x()) * (test.y() - b.y());
    let divisor = a.y() - b.y();
    let Some(quotient) = numerator.checked_div(divisor) else {
        return false;
    };
    let intersection_x =
        quotient.round_dp_with_strategy(numerator.scale(), DEFAULT_ROUNDING) + b.x();

    test.x() < intersection_x
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, point) in self.points.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, "]")
    }
}
