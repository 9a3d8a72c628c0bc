//! Holt's linear (double exponential smoothing) forecasts

use crate::error::{ForecastError, Result};
use crate::grid::ParameterGrid;
use crate::models::{ForecastModel, ForecastValues};
use serde::Serialize;

/// Smoothing parameters for Holt's method
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoltParams {
    /// Level smoothing, in [0, 1]
    pub alpha: f64,
    /// Trend smoothing, in [0, 1]
    pub beta: f64,
}

/// Level and trend carried from one observation to the next
#[derive(Debug, Clone, Copy, PartialEq)]
struct HoltState {
    level: f64,
    trend: f64,
}

impl HoltState {
    fn new(level: f64) -> Self {
        Self { level, trend: 0.0 }
    }

    fn update(self, observed: f64, params: HoltParams) -> Self {
        let level = params.alpha * observed + (1.0 - params.alpha) * (self.level + self.trend);
        let trend = params.beta * (level - self.level) + (1.0 - params.beta) * self.trend;
        Self { level, trend }
    }

    fn forecast(&self) -> f64 {
        self.level + self.trend
    }
}

/// One-step Holt forecast.
///
/// Returns `actual.len() + 1` positions. Position 0 is absent. Position
/// `i` in `1..n` is the level plus trend after smoothing
/// `actual[..i]`. The final, out-of-sample position repeats the state
/// reached after the last in-sample step.
pub fn holt(actual: &[f64], alpha: f64, beta: f64) -> Result<ForecastValues> {
    let first = *actual.first().ok_or_else(|| {
        ForecastError::InsufficientData("Holt's method needs at least one observation".to_string())
    })?;
    let params = HoltParams { alpha, beta };
    let initial = HoltState::new(first);

    let states: Vec<HoltState> = actual[..actual.len() - 1]
        .iter()
        .scan(initial, |state, &observed| {
            *state = state.update(observed, params);
            Some(*state)
        })
        .collect();
    let last = states.last().copied().unwrap_or(initial);

    let mut result = Vec::with_capacity(actual.len() + 1);
    result.push(None);
    result.extend(states.iter().map(|state| Some(state.forecast())));
    result.push(Some(last.forecast()));

    Ok(result)
}

/// Holt model searched over an (alpha, beta) grid
#[derive(Debug, Clone)]
pub struct Holt {
    name: String,
    grid: ParameterGrid,
}

impl Holt {
    /// Create a model searching every (alpha, beta) pair of `grid`
    pub fn new(grid: ParameterGrid) -> Self {
        Self {
            name: "Holt's".to_string(),
            grid,
        }
    }
}

impl Default for Holt {
    fn default() -> Self {
        Self::new(ParameterGrid::default())
    }
}

impl ForecastModel for Holt {
    type Params = HoltParams;

    fn name(&self) -> &str {
        &self.name
    }

    fn horizon(&self) -> usize {
        1
    }

    fn candidates(&self, _len: usize) -> Vec<HoltParams> {
        self.grid
            .pairs()
            .map(|(alpha, beta)| HoltParams { alpha, beta })
            .collect()
    }

    fn forecast(&self, actual: &[f64], params: &HoltParams) -> Result<ForecastValues> {
        holt(actual, params.alpha, params.beta)
    }

    fn describe(&self, params: &HoltParams) -> String {
        format!("Alpha: {:.2} Beta: {:.2}", params.alpha, params.beta)
    }
}
