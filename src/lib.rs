//! Orrery: weather forecasting for a three-planet solar system
//!
//! This crate simulates planets on circular orbits around a star and
//! classifies the geometric relationship between the planets and the star on
//! each simulated day. Aligned planets bring drought or optimal conditions, a
//! planet triangle enclosing the star brings rain, and the day on which that
//! triangle's perimeter peaks is a rain pick.

use thiserror::Error;

pub mod celestial;
pub mod constants;
pub mod coordinates;
pub mod forecast;
pub mod simulation;
pub mod store;

// Re-export commonly used types
pub use celestial::{CircularOrbit, Orbit, Planet};
pub use coordinates::{Angle, Point, Polygon};
pub use forecast::{WeatherCondition, WeatherForecaster};
pub use simulation::{DailyPrediction, SeasonReport, Simulation, SimulationConfig};
pub use store::{InMemoryPredictionStore, PredictionStore};

/// Main error type for the orrery library
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No prediction stored for day {0}")]
    PredictionNotFound(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, ForecastError>;
