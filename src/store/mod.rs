//! Storage of daily predictions keyed by day
//!
//! The simulation hands every [`DailyPrediction`] to a [`PredictionStore`].
//! Durable backends live outside this crate; [`InMemoryPredictionStore`]
//! keeps everything in a map and can be dumped to or loaded from JSON.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::simulation::DailyPrediction;
use crate::{ForecastError, Result};

/// Somewhere to keep one prediction per day
pub trait PredictionStore {
    /// Saves a prediction, replacing any earlier one for the same day
    fn save(&mut self, prediction: DailyPrediction) -> Result<()>;

    /// Looks up the prediction for `day`
    ///
    /// # Errors
    ///
    /// `PredictionNotFound` if nothing was stored for that day.
    fn find_by_day(&self, day: u64) -> Result<DailyPrediction>;
}

/// Prediction store backed by an ordered map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryPredictionStore {
    predictions: BTreeMap<u64, DailyPrediction>,
}

impl InMemoryPredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// All stored predictions in day order
    pub fn iter(&self) -> impl Iterator<Item = &DailyPrediction> {
        self.predictions.values()
    }

    /// Writes every prediction as a JSON array in day order
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let predictions: Vec<&DailyPrediction> = self.iter().collect();
        fs::write(path, serde_json::to_string_pretty(&predictions)?)?;
        Ok(())
    }

    /// Reads a JSON array written by [`save_json`](Self::save_json)
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let predictions: Vec<DailyPrediction> = serde_json::from_str(&text)?;
        let mut store = Self::new();
        for prediction in predictions {
            store.save(prediction)?;
        }
        Ok(store)
    }
}

impl PredictionStore for InMemoryPredictionStore {
    fn save(&mut self, prediction: DailyPrediction) -> Result<()> {
        self.predictions.insert(prediction.day, prediction);
        Ok(())
    }

    fn find_by_day(&self, day: u64) -> Result<DailyPrediction> {
        self.predictions
            .get(&day)
            .copied()
            .ok_or(ForecastError::PredictionNotFound(day))
    }
}
