//! Forecasting models for time series data

use crate::error::Result;
use serde::Serialize;
use std::fmt::Debug;

/// One-step forecast aligned with the actual series.
///
/// `None` marks burn-in positions the model cannot forecast; it is a
/// distinct state from a forecast of zero.
pub type ForecastValues = Vec<Option<f64>>;

/// A forecasting model searched over a finite parameter grid
pub trait ForecastModel: Debug + Sync {
    /// One point of the model's parameter grid
    type Params: Copy + Debug + Send + Sync + Serialize;

    /// Name of the model, as shown in series labels
    fn name(&self) -> &str;

    /// Number of out-of-sample points appended after the observed data
    fn horizon(&self) -> usize;

    /// Feasible grid points for a series of `len` observations, in search order
    fn candidates(&self, len: usize) -> Vec<Self::Params>;

    /// Forecast `actual` with the given parameters
    fn forecast(&self, actual: &[f64], params: &Self::Params) -> Result<ForecastValues>;

    /// Human-readable rendering of fitted parameters, e.g. `Alpha: 0.30 Beta: 0.10`
    fn describe(&self, params: &Self::Params) -> String;
}

pub mod holt;
pub mod holt_winters;
pub mod moving_average;

pub use holt::{holt, Holt, HoltParams};
pub use holt_winters::{holt_winters, HoltWinters, HoltWintersParams, SeasonalInit};
pub use moving_average::{moving_average, MovingAverage};
