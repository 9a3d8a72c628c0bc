//! Trailing moving average forecasts

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastValues};
use statrs::statistics::Statistics;
use tracing::trace;

/// Window sizes searched when none are configured
pub const DEFAULT_WINDOWS: [usize; 5] = [3, 4, 5, 6, 12];

/// One-step trailing moving average.
///
/// Returns `actual.len() + 1` positions. The first `window` are absent;
/// position `i` holds the mean of `actual[i - window..i]`, so the last
/// position forecasts one step past the observed data.
///
/// Means are computed incrementally by `statrs`, so they can differ from
/// `sum / window` in the last bits.
pub fn moving_average(actual: &[f64], window: usize) -> Result<ForecastValues> {
    if window == 0 || window >= actual.len() {
        return Err(ForecastError::InvalidWindow {
            window,
            len: actual.len(),
        });
    }

    let mut result = vec![None; window];
    result.extend(
        (window..=actual.len()).map(|index| Some(actual[index - window..index].iter().mean())),
    );

    Ok(result)
}

/// Moving average model searched over a fixed set of windows
#[derive(Debug, Clone)]
pub struct MovingAverage {
    name: String,
    windows: Vec<usize>,
}

impl MovingAverage {
    /// Create a model searching the given windows, in the given order
    pub fn new(windows: Vec<usize>) -> Result<Self> {
        if windows.is_empty() || windows.contains(&0) {
            return Err(ForecastError::Config(
                "Moving average windows must be a non-empty set of positive sizes".to_string(),
            ));
        }

        Ok(Self {
            name: "Moving Average".to_string(),
            windows,
        })
    }

    /// Windows searched, in search order
    pub fn windows(&self) -> &[usize] {
        &self.windows
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self {
            name: "Moving Average".to_string(),
            windows: DEFAULT_WINDOWS.to_vec(),
        }
    }
}

impl ForecastModel for MovingAverage {
    type Params = usize;

    fn name(&self) -> &str {
        &self.name
    }

    fn horizon(&self) -> usize {
        1
    }

    fn candidates(&self, len: usize) -> Vec<usize> {
        self.windows
            .iter()
            .copied()
            .filter(|&window| {
                let feasible = window < len;
                if !feasible {
                    trace!(window, len, "skipping infeasible window");
                }
                feasible
            })
            .collect()
    }

    fn forecast(&self, actual: &[f64], window: &usize) -> Result<ForecastValues> {
        moving_average(actual, *window)
    }

    fn describe(&self, window: &usize) -> String {
        format!("Window: {}", window)
    }
}
