//! Day-by-day simulation of the solar system weather
//!
//! A [`Simulation`] owns the star position and the planets. Each call to
//! [`Simulation::step`] classifies the current day and then moves every
//! planet one day forward. A [`SeasonTracker`] folds the daily predictions
//! into season counts and rain-pick dates.
//!
//! A season is a maximal run of days with the same weather. A rain pick is
//! an event inside a rain season and never starts a season of its own.

pub mod config;

pub use config::{PlanetConfig, SimulationConfig, StarConfig};

use std::fmt;

use chrono::{Days, NaiveDate};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::celestial::Planet;
use crate::coordinates::Point;
use crate::forecast::{WeatherCondition, WeatherForecaster};
use crate::store::PredictionStore;
use crate::{ForecastError, Result};

/// Weather predicted for one simulated day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrediction {
    /// Days since the start of the simulation
    pub day: u64,
    pub condition: WeatherCondition,
}

/// A day on which rain peaked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainPick {
    pub day: u64,
    pub date: NaiveDate,
}

/// Season counts and rain picks over a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonReport {
    pub drought_seasons: u64,
    pub rain_seasons: u64,
    pub optimal_seasons: u64,
    pub rain_picks: Vec<RainPick>,
}

impl fmt::Display for SeasonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Drought Seasons: {}", self.drought_seasons)?;
        writeln!(f, "Rain Seasons: {}", self.rain_seasons)?;
        writeln!(f, "Optimal Conditions Seasons: {}", self.optimal_seasons)?;
        let dates: Vec<String> = self.rain_picks.iter().map(|p| p.date.to_string()).collect();
        write!(f, "Rain picks: {}", dates.join(", "))
    }
}

/// Folds daily predictions into a [`SeasonReport`]
#[derive(Debug, Clone)]
pub struct SeasonTracker {
    start_date: NaiveDate,
    season: WeatherCondition,
    report: SeasonReport,
}

impl SeasonTracker {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            season: WeatherCondition::None,
            report: SeasonReport::default(),
        }
    }

    /// The weather of the season in progress
    pub fn season(&self) -> WeatherCondition {
        self.season
    }

    pub fn report(&self) -> &SeasonReport {
        &self.report
    }

    pub fn into_report(self) -> SeasonReport {
        self.report
    }

    /// Accounts for one day; days must be observed in order
    pub fn observe(&mut self, prediction: &DailyPrediction) -> Result<()> {
        if prediction.condition == self.season {
            return Ok(());
        }

        if prediction.condition == WeatherCondition::RainPick {
            let date = self
                .start_date
                .checked_add_days(Days::new(prediction.day))
                .ok_or_else(|| {
                    ForecastError::InvalidArgument(format!(
                        "day {} after {} is outside the calendar",
                        prediction.day, self.start_date
                    ))
                })?;
            debug!("Rain pick on day {} ({date})", prediction.day);
            self.report.rain_picks.push(RainPick {
                day: prediction.day,
                date,
            });
            return Ok(());
        }

        debug!(
            "Day {}: {} season ends, {} season begins",
            prediction.day, self.season, prediction.condition
        );
        self.season = prediction.condition;
        match prediction.condition {
            WeatherCondition::Drought => self.report.drought_seasons += 1,
            WeatherCondition::Rain => self.report.rain_seasons += 1,
            WeatherCondition::OptimalPressureAndTemp => self.report.optimal_seasons += 1,
            WeatherCondition::None | WeatherCondition::RainPick => {}
        }
        Ok(())
    }
}

/// A running simulation
#[derive(Debug)]
pub struct Simulation {
    star: Point,
    planets: Vec<Planet>,
    start_date: NaiveDate,
    horizon_days: u64,
    day: u64,
}

impl Simulation {
    /// Sets up day 0 of a run described by `config`
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let horizon_days = config.horizon_days()?;
        if config
            .start_date
            .checked_add_days(Days::new(horizon_days))
            .is_none()
        {
            return Err(ForecastError::Config(format!(
                "{horizon_days} days after {} is outside the calendar",
                config.start_date
            )));
        }

        Ok(Self {
            star: config.star_position()?,
            planets: config.build_planets()?,
            start_date: config.start_date,
            horizon_days,
            day: 0,
        })
    }

    /// Sets up a run from planets built elsewhere
    pub fn with_planets(
        star: Point,
        planets: Vec<Planet>,
        start_date: NaiveDate,
        horizon_days: u64,
    ) -> Result<Self> {
        if planets.is_empty() {
            return Err(ForecastError::InvalidArgument(
                "At least one planet is required to run a simulation.".to_string(),
            ));
        }
        Ok(Self {
            star,
            planets,
            start_date,
            horizon_days,
            day: 0,
        })
    }

    /// The next day to be classified
    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn horizon_days(&self) -> u64 {
        self.horizon_days
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn star(&self) -> &Point {
        &self.star
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn is_finished(&self) -> bool {
        self.day >= self.horizon_days
    }

    /// Classifies the current day and advances every planet by one day
    ///
    /// Returns `None` once the horizon has been reached.
    pub fn step(&mut self) -> Result<Option<DailyPrediction>> {
        if self.is_finished() {
            return Ok(None);
        }

        let condition = WeatherForecaster::classify(&self.star, &self.planets)?;
        let prediction = DailyPrediction {
            day: self.day,
            condition,
        };
        trace!("Day {}: {}", self.day, condition);

        for planet in self.planets.iter_mut() {
            planet.advance()?;
        }
        self.day += 1;

        Ok(Some(prediction))
    }

    /// Classifies every remaining day
    pub fn predictions(&mut self) -> Result<Vec<DailyPrediction>> {
        let mut predictions = Vec::new();
        while let Some(prediction) = self.step()? {
            predictions.push(prediction);
        }
        Ok(predictions)
    }

    /// Stores a prediction for every remaining day, returning how many were saved
    pub fn populate(&mut self, store: &mut impl PredictionStore) -> Result<usize> {
        let mut saved = 0;
        while let Some(prediction) = self.step()? {
            store.save(prediction)?;
            saved += 1;
        }
        info!("Stored {saved} daily predictions");
        Ok(saved)
    }

    /// Runs the remaining days and summarizes them into seasons
    pub fn run(&mut self) -> Result<SeasonReport> {
        let mut tracker = SeasonTracker::new(self.start_date);
        while let Some(prediction) = self.step()? {
            tracker.observe(&prediction)?;
        }

        let report = tracker.into_report();
        info!(
            "Simulated {} days: {} drought, {} rain, {} optimal seasons, {} rain picks",
            self.day,
            report.drought_seasons,
            report.rain_seasons,
            report.optimal_seasons,
            report.rain_picks.len()
        );
        Ok(report)
    }
}
