//! Weather classification from planet and star positions
//!
//! The forecaster is stateless: it looks at the planets' positions on one day
//! (and, for rain picks, the day before and after) and returns the weather
//! for that day. Seasons and counters live in [`crate::simulation`].
//!
//! | Geometry | Weather |
//! |---|---|
//! | planets and star on one line | [`WeatherCondition::Drought`] |
//! | planets on one line, star off it | [`WeatherCondition::OptimalPressureAndTemp`] |
//! | star inside the planets' polygon | [`WeatherCondition::Rain`] |
//! | as above, perimeter at a local maximum | [`WeatherCondition::RainPick`] |
//! | anything else | [`WeatherCondition::None`] |

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::celestial::Planet;
use crate::coordinates::{Point, Polygon};
use crate::{ForecastError, Result};

/// Weather of the solar system on a single day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherCondition {
    #[default]
    None,
    Rain,
    RainPick,
    Drought,
    OptimalPressureAndTemp,
}

impl WeatherCondition {
    /// Human readable name of the condition
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::None => "None",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::RainPick => "Rain Pick",
            WeatherCondition::Drought => "Drought",
            WeatherCondition::OptimalPressureAndTemp => "Optimal Pressure and Temperature",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies the weather for a star and the planets around it
pub struct WeatherForecaster;

impl WeatherForecaster {
    /// Returns the weather for the planets' current positions
    ///
    /// The planets' polygon is built in the order given. Looking ahead and
    /// behind for rain picks uses [`Planet::peek_next`] and
    /// [`Planet::peek_previous`], so no planet is moved.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `planets` is empty, or any error raised by a
    /// planet's orbit while projecting neighbouring days.
    pub fn classify(star: &Point, planets: &[Planet]) -> Result<WeatherCondition> {
        if planets.is_empty() {
            return Err(ForecastError::InvalidArgument(
                "At least one planet is required to get the weather condition.".to_string(),
            ));
        }

        let mut polygon: Polygon = planets.iter().map(Planet::position).collect();

        // A zero area means the planets are aligned.
        if polygon.is_degenerate()? {
            polygon.add_point(*star);
            if polygon.is_degenerate()? {
                return Ok(WeatherCondition::Drought);
            }
            return Ok(WeatherCondition::OptimalPressureAndTemp);
        }

        if polygon.contains(star) {
            if Self::reached_maximum_perimeter(polygon.perimeter()?, planets)? {
                return Ok(WeatherCondition::RainPick);
            }
            return Ok(WeatherCondition::Rain);
        }

        Ok(WeatherCondition::None)
    }

    /// True when `perimeter` is at least the perimeter of the planets'
    /// polygon on both the previous and the next day.
    fn reached_maximum_perimeter(perimeter: Decimal, planets: &[Planet]) -> Result<bool> {
        let previous: Polygon = planets
            .iter()
            .map(Planet::peek_previous)
            .collect::<Result<_>>()?;
        if perimeter < previous.perimeter()? {
            return Ok(false);
        }

        let next: Polygon = planets
            .iter()
            .map(Planet::peek_next)
            .collect::<Result<_>>()?;
        Ok(perimeter >= next.perimeter()?)
    }
}
