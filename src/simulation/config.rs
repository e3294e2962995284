//! Simulation configuration
//!
//! A configuration names the star position, the planets with their circular
//! orbits, the first simulated date and the horizon. It is usually loaded
//! from JSON:
//!
//! ```json
//! {
//!   "star": { "x": 0, "y": 0 },
//!   "planets": [
//!     { "name": "Ferengi", "distance": 500, "displacement": { "degrees": -1 } },
//!     { "name": "Betasoide", "distance": 2000, "displacement": { "degrees": -3 } },
//!     { "name": "Vulcano", "distance": 1000, "displacement": { "degrees": 5 } }
//!   ],
//!   "start_date": "2026-01-01",
//!   "years": 10
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::celestial::{CircularOrbit, Planet};
use crate::constants::{
    BETASOIDE_DISPLACEMENT, BETASOIDE_DISTANCE, DEFAULT_YEARS, FERENGI_DISPLACEMENT,
    FERENGI_DISTANCE, VULCANO_DISPLACEMENT, VULCANO_DISTANCE,
};
use crate::coordinates::{Angle, Point};
use crate::{ForecastError, Result};

/// Position of the star in the orbital plane
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StarConfig {
    #[serde(default)]
    pub x: Decimal,
    #[serde(default)]
    pub y: Decimal,
}

/// One planet on a circular orbit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetConfig {
    pub name: String,
    /// Orbit radius
    pub distance: Decimal,
    /// Rotation per simulated day
    pub displacement: Angle,
}

impl PlanetConfig {
    pub fn new(name: &str, distance: i64, degrees: i32) -> Self {
        Self {
            name: name.to_string(),
            distance: Decimal::from(distance),
            displacement: Angle::from_degrees(degrees),
        }
    }

    /// Builds the planet at the start of its orbit
    pub fn build(&self) -> Result<Planet> {
        let orbit = CircularOrbit::new(self.distance, self.displacement)?;
        Planet::new(self.name.clone(), orbit)
    }
}

/// Everything a simulation run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub star: StarConfig,
    pub planets: Vec<PlanetConfig>,
    /// Calendar date of day 0
    pub start_date: NaiveDate,
    /// Length of the run in calendar years, end date included
    #[serde(default = "default_years")]
    pub years: u32,
    /// Explicit number of days, overriding `years`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u64>,
}

fn default_years() -> u32 {
    DEFAULT_YEARS
}

impl SimulationConfig {
    /// The Ferengi, Betasoide and Vulcano system with the star at the origin
    pub fn reference(start_date: NaiveDate) -> Self {
        Self {
            star: StarConfig::default(),
            planets: vec![
                PlanetConfig::new("Ferengi", FERENGI_DISTANCE, FERENGI_DISPLACEMENT),
                PlanetConfig::new("Betasoide", BETASOIDE_DISTANCE, BETASOIDE_DISPLACEMENT),
                PlanetConfig::new("Vulcano", VULCANO_DISTANCE, VULCANO_DISPLACEMENT),
            ],
            start_date,
            years: DEFAULT_YEARS,
            days: None,
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|err| ForecastError::Config(format!("cannot parse configuration: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.planets.is_empty() {
            return Err(ForecastError::Config(
                "configuration must define at least one planet".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for planet in &self.planets {
            if planet.name.trim().is_empty() {
                return Err(ForecastError::Config("planet names must not be empty".to_string()));
            }
            if !names.insert(planet.name.as_str()) {
                return Err(ForecastError::Config(format!(
                    "planet {} is defined more than once",
                    planet.name
                )));
            }
        }

        self.horizon_days()?;
        Ok(())
    }

    /// Number of simulated days, counting both the start and the end date
    pub fn horizon_days(&self) -> Result<u64> {
        if let Some(days) = self.days {
            return Ok(days);
        }

        let end = self
            .start_date
            .checked_add_months(Months::new(self.years.saturating_mul(12)))
            .ok_or_else(|| {
                ForecastError::Config(format!(
                    "{} years after {} is outside the calendar",
                    self.years, self.start_date
                ))
            })?;
        let span = (end - self.start_date).num_days();
        Ok(span.unsigned_abs() + 1)
    }

    pub fn star_position(&self) -> Result<Point> {
        Point::cartesian(self.star.x, self.star.y)
    }

    /// Builds every configured planet at the start of its orbit
    pub fn build_planets(&self) -> Result<Vec<Planet>> {
        self.planets.iter().map(PlanetConfig::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_configuration() {
        let config = SimulationConfig::reference(date(2026, 1, 1));
        assert_eq!(config.planets.len(), 3);
        assert_eq!(config.planets[1].name, "Betasoide");
        assert_eq!(config.planets[1].distance, Decimal::from(2000));
        assert_eq!(config.planets[1].displacement, Angle::from_degrees(-3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_horizon_includes_end_date() {
        let config = SimulationConfig::reference(date(2026, 1, 1));
        // 2028 and 2032 are leap years
        assert_eq!(config.horizon_days().unwrap(), 3653);

        let mut one_year = config.clone();
        one_year.years = 1;
        assert_eq!(one_year.horizon_days().unwrap(), 366);
    }

    #[test]
    fn test_days_override() {
        let mut config = SimulationConfig::reference(date(2026, 1, 1));
        config.days = Some(30);
        assert_eq!(config.horizon_days().unwrap(), 30);
    }

    #[test]
    fn test_leap_day_start_clamps() {
        let mut config = SimulationConfig::reference(date(2024, 2, 29));
        config.years = 1;
        // 2025-02-28 is the clamped end date
        assert_eq!(config.horizon_days().unwrap(), 366);
    }

    #[test]
    fn test_from_json() {
        let text = r#"{
            "star": { "x": 0, "y": 0 },
            "planets": [
                { "name": "Ferengi", "distance": 500, "displacement": { "degrees": -1 } },
                { "name": "Vulcano", "distance": "1000", "displacement": { "degrees": 5, "minutes": 30 } }
            ],
            "start_date": "2026-01-01"
        }"#;
        let config = SimulationConfig::from_json(text).unwrap();
        assert_eq!(config.years, DEFAULT_YEARS);
        assert_eq!(config.days, None);
        assert_eq!(config.planets[0].displacement, Angle::from_degrees(359));
        assert_eq!(config.planets[1].distance, Decimal::from(1000));
        assert_eq!(
            config.planets[1].displacement,
            Angle::from_degrees_minutes(5, 30)
        );
    }

    #[test]
    fn test_from_json_extreme_displacement_seconds() {
        let text = r#"{
            "planets": [
                {
                    "name": "Ferengi",
                    "distance": 500,
                    "displacement": { "degrees": 0, "seconds": "-79228162514264337593543950335" }
                }
            ],
            "start_date": "2026-01-01"
        }"#;
        let config = SimulationConfig::from_json(text).unwrap();
        assert_eq!(
            config.planets[0].displacement,
            Angle::new(0, 27, Decimal::from(45))
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulationConfig::reference(date(2030, 6, 15));
        let text = config.to_json().unwrap();
        let back = SimulationConfig::from_json(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = SimulationConfig::reference(date(2026, 1, 1));
        config.planets.clear();
        assert!(matches!(config.validate(), Err(ForecastError::Config(_))));

        let mut config = SimulationConfig::reference(date(2026, 1, 1));
        config.planets[2].name = "Ferengi".to_string();
        assert!(matches!(config.validate(), Err(ForecastError::Config(_))));

        let mut config = SimulationConfig::reference(date(2026, 1, 1));
        config.planets[0].name = String::new();
        assert!(matches!(config.validate(), Err(ForecastError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = SimulationConfig::from_json("{ \"planets\": 3 }");
        assert!(matches!(result, Err(ForecastError::Config(_))));
    }

    #[test]
    fn test_build_planets() {
        let config = SimulationConfig::reference(date(2026, 1, 1));
        let planets = config.build_planets().unwrap();
        let names: Vec<&str> = planets.iter().map(Planet::name).collect();
        assert_eq!(names, ["Ferengi", "Betasoide", "Vulcano"]);
        assert_eq!(config.star_position().unwrap(), Point::cartesian(Decimal::ZERO, Decimal::ZERO).unwrap());
    }
}
