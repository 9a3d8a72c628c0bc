//! Additive Holt-Winters (triple exponential smoothing) forecasts
//!
//! The model equations, with `m` the season length:
//! - Forecast: `f_t = l_{t-1} + b_{t-1} + s_{t-m}`
//! - Level: `l_t = α(y_t - s_{t-m}) + (1-α)(l_{t-1} + b_{t-1})`
//! - Trend: `b_t = β(l_{t-1} - l_t) + (1-β)b_{t-1}`
//! - Seasonal: `s_t = γ(y_t - l_t - b_{t-1}) + (1-γ)s_{t-m}`
//! - Extrapolation: `f_{n-1+h} = l + h*b + s_{n-1+h-m}` for `h` in `1..=m`
//!
//! Initial seasonal indices are ratios of each observation to the mean of
//! its season.

use crate::error::{ForecastError, Result};
use crate::grid::ParameterGrid;
use crate::models::{ForecastModel, ForecastValues};
use crate::utils::floor_divisor;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Season length used when none is configured
pub const DEFAULT_SEASON_LENGTH: usize = 3;

/// How the initial seasonal indices are derived from the season ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalInit {
    /// Ratios of the first season only
    #[default]
    FirstSeason,
    /// Per-phase mean of the ratios across every full season
    Averaged,
}

/// Smoothing parameters for the Holt-Winters method
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoltWintersParams {
    /// Level smoothing, in [0, 1]
    pub alpha: f64,
    /// Trend smoothing, in [0, 1]
    pub beta: f64,
    /// Seasonal smoothing, in [0, 1]
    pub gamma: f64,
}

/// Level, trend and one seasonal index per phase
#[derive(Debug, Clone)]
struct HoltWintersState {
    level: f64,
    trend: f64,
    /// Indexed by absolute position modulo the season length
    seasonal: Vec<f64>,
}

impl HoltWintersState {
    /// Forecast `position`, then fold the observed value into the state
    fn step(&mut self, position: usize, observed: f64, params: &HoltWintersParams) -> f64 {
        let phase = position % self.seasonal.len();
        let seasonal = self.seasonal[phase];
        let forecast = self.level + self.trend + seasonal;

        let level = params.alpha * (observed - seasonal)
            + (1.0 - params.alpha) * (self.level + self.trend);
        let trend = params.beta * (self.level - level) + (1.0 - params.beta) * self.trend;
        self.seasonal[phase] =
            params.gamma * (observed - level - self.trend) + (1.0 - params.gamma) * seasonal;

        self.level = level;
        self.trend = trend;
        forecast
    }

    fn extrapolate(&self, position: usize, steps_ahead: usize) -> f64 {
        self.level
            + steps_ahead as f64 * self.trend
            + self.seasonal[position % self.seasonal.len()]
    }
}

/// Initial seasonal indices, one per phase
fn initial_seasonal(actual: &[f64], season_length: usize, init: SeasonalInit) -> Vec<f64> {
    let ratios: Vec<f64> = actual
        .chunks_exact(season_length)
        .flat_map(|season| {
            let average = floor_divisor(season.iter().mean());
            season.iter().map(move |&value| value / average)
        })
        .collect();

    match init {
        SeasonalInit::FirstSeason => ratios[..season_length].to_vec(),
        SeasonalInit::Averaged => (0..season_length)
            .map(|phase| ratios.iter().skip(phase).step_by(season_length).mean())
            .collect(),
    }
}

/// Mean per-step change between the first season and the next.
///
/// Pairs reaching past the end of a series shorter than two seasons are
/// left out; the divisor stays `season_length²`.
fn initial_trend(actual: &[f64], season_length: usize) -> f64 {
    let change: f64 = actual[season_length..]
        .iter()
        .zip(actual)
        .take(season_length)
        .map(|(later, earlier)| later - earlier)
        .sum();

    change / (season_length * season_length) as f64
}

/// Additive Holt-Winters forecast.
///
/// Returns `actual.len() + season_length` positions: the first season is
/// absent, the rest of the observed range holds one-step forecasts and the
/// last `season_length` positions extrapolate one season ahead.
pub fn holt_winters(
    actual: &[f64],
    params: &HoltWintersParams,
    season_length: usize,
    init: SeasonalInit,
) -> Result<ForecastValues> {
    let n = actual.len();
    if season_length == 0 || season_length >= n {
        return Err(ForecastError::InvalidSeasonLength {
            season_length,
            len: n,
        });
    }

    let initial = HoltWintersState {
        level: actual[0],
        trend: initial_trend(actual, season_length),
        seasonal: initial_seasonal(actual, season_length, init),
    };

    let mut burn_in = Vec::with_capacity(n + season_length);
    burn_in.resize(season_length, None);

    let (state, mut result) = actual.iter().enumerate().skip(season_length).fold(
        (initial, burn_in),
        |(mut state, mut result), (position, &observed)| {
            result.push(Some(state.step(position, observed, params)));
            (state, result)
        },
    );

    result.extend((1..=season_length).map(|steps| Some(state.extrapolate(n + steps - 1, steps))));

    Ok(result)
}

/// Holt-Winters model searched over an (alpha, beta, gamma) grid
#[derive(Debug, Clone)]
pub struct HoltWinters {
    name: String,
    grid: ParameterGrid,
    season_length: usize,
    seasonal_init: SeasonalInit,
}

impl HoltWinters {
    /// Create a model searching every (alpha, beta, gamma) triple of `grid`
    pub fn new(grid: ParameterGrid, season_length: usize, seasonal_init: SeasonalInit) -> Result<Self> {
        if season_length == 0 {
            return Err(ForecastError::Config(
                "Season length must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: "Holt Winter's".to_string(),
            grid,
            season_length,
            seasonal_init,
        })
    }

    /// Season length, also the number of extrapolated points
    pub fn season_length(&self) -> usize {
        self.season_length
    }
}

impl Default for HoltWinters {
    fn default() -> Self {
        Self {
            name: "Holt Winter's".to_string(),
            grid: ParameterGrid::default(),
            season_length: DEFAULT_SEASON_LENGTH,
            seasonal_init: SeasonalInit::default(),
        }
    }
}

impl ForecastModel for HoltWinters {
    type Params = HoltWintersParams;

    fn name(&self) -> &str {
        &self.name
    }

    fn horizon(&self) -> usize {
        self.season_length
    }

    fn candidates(&self, _len: usize) -> Vec<HoltWintersParams> {
        self.grid
            .triples()
            .map(|(alpha, beta, gamma)| HoltWintersParams { alpha, beta, gamma })
            .collect()
    }

    fn forecast(&self, actual: &[f64], params: &HoltWintersParams) -> Result<ForecastValues> {
        holt_winters(actual, params, self.season_length, self.seasonal_init)
    }

    fn describe(&self, params: &HoltWintersParams) -> String {
        format!(
            "Alpha: {:.2} Beta: {:.2} Gamma: {:.2}",
            params.alpha, params.beta, params.gamma
        )
    }
}
