//! Forecast configuration

use crate::data::BucketBounds;
use crate::error::{ForecastError, Result};
use crate::grid::ParameterGrid;
use crate::models::moving_average::DEFAULT_WINDOWS;
use crate::models::holt_winters::DEFAULT_SEASON_LENGTH;
use crate::models::SeasonalInit;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one [`Forecaster`](crate::engine::Forecaster)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Moving-average windows tried, in search order
    pub window_candidates: Vec<usize>,
    /// Spacing of the smoothing parameter grid over [0, 1]
    pub grid_step: f64,
    /// Holt-Winters season length, also the number of points it extrapolates
    pub season_length: usize,
    pub seasonal_init: SeasonalInit,
    pub bucket_bounds: BucketBounds,
    /// Evaluate the Holt and Holt-Winters grids on the rayon pool
    pub parallel: bool,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window_candidates: DEFAULT_WINDOWS.to_vec(),
            grid_step: 0.1,
            season_length: DEFAULT_SEASON_LENGTH,
            seasonal_init: SeasonalInit::default(),
            bucket_bounds: BucketBounds::default(),
            parallel: false,
        }
    }
}

impl ForecastConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject empty or zero windows, a zero season length and uneven grid steps
    pub fn validate(&self) -> Result<()> {
        if self.window_candidates.is_empty() {
            return Err(ForecastError::Config(
                "At least one moving average window is required".to_string(),
            ));
        }
        if self.window_candidates.contains(&0) {
            return Err(ForecastError::Config(
                "Moving average windows must be positive".to_string(),
            ));
        }
        if self.season_length == 0 {
            return Err(ForecastError::Config(
                "Season length must be positive".to_string(),
            ));
        }
        self.grid()?;
        Ok(())
    }

    /// Smoothing parameter grid described by `grid_step`
    pub fn grid(&self) -> Result<ParameterGrid> {
        ParameterGrid::unit(self.grid_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ForecastConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_candidates, vec![3, 4, 5, 6, 12]);
        assert_eq!(config.season_length, 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ForecastConfig::from_json_str(r#"{"season_length": 4, "bucket_bounds": "half_open"}"#)
                .unwrap();
        assert_eq!(config.season_length, 4);
        assert_eq!(config.bucket_bounds, BucketBounds::HalfOpen);
        assert_eq!(config.grid_step, 0.1);
        assert_eq!(config.seasonal_init, SeasonalInit::FirstSeason);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(ForecastConfig::from_json_str(r#"{"window_candidates": []}"#).is_err());
        assert!(ForecastConfig::from_json_str(r#"{"season_length": 0}"#).is_err());
        assert!(ForecastConfig::from_json_str(r#"{"grid_step": 0.3}"#).is_err());
        assert!(matches!(
            ForecastConfig::from_json_str("not json"),
            Err(ForecastError::Json(_))
        ));
    }
}
