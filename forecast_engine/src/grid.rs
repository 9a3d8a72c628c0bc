//! Parameter grids and the exhaustive grid-search fitter

use crate::error::{ForecastError, Result};
use crate::metrics::smape;
use crate::models::{ForecastModel, ForecastValues};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};

/// Lazy Cartesian product: every `outer` item paired with every `inner`
/// item, outer-major.
pub fn product<'a, I, B>(outer: I, inner: &'a [B]) -> impl Iterator<Item = (I::Item, B)> + 'a
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Copy + 'a,
    B: Copy,
{
    outer
        .into_iter()
        .flat_map(move |a| inner.iter().map(move |&b| (a, b)))
}

/// Evenly spaced smoothing parameters covering [0, 1], both ends included
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    axis: Vec<f64>,
}

impl ParameterGrid {
    /// Grid with the given step, which must split [0, 1] into whole steps
    pub fn unit(step: f64) -> Result<Self> {
        if !(step > 0.0 && step <= 1.0) {
            return Err(ForecastError::Config(format!(
                "Grid step must lie in (0, 1], got {}",
                step
            )));
        }

        let steps = (1.0 / step).round();
        if (steps * step - 1.0).abs() > 1e-9 {
            return Err(ForecastError::Config(format!(
                "Grid step {} does not divide [0, 1] evenly",
                step
            )));
        }

        let axis = (0..=steps as usize).map(|i| i as f64 / steps).collect();
        Ok(Self { axis })
    }

    /// Values along a single axis, ascending
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// `(alpha, beta)` points, alpha outermost
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        product(self.axis.iter().copied(), &self.axis)
    }

    /// `(alpha, beta, gamma)` points, alpha outermost and gamma innermost
    pub fn triples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        product(self.pairs(), &self.axis).map(|((alpha, beta), gamma)| (alpha, beta, gamma))
    }
}

impl Default for ParameterGrid {
    fn default() -> Self {
        Self {
            axis: (0..=10).map(|i| i as f64 / 10.0).collect(),
        }
    }
}

/// Best parameters found for one model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitResult<P> {
    pub params: P,
    pub forecast: ForecastValues,
    /// In-sample SMAPE, in percent
    pub smape: f64,
}

fn evaluate<M: ForecastModel>(
    model: &M,
    actual: &[f64],
    params: M::Params,
) -> Result<FitResult<M::Params>> {
    let forecast = model.forecast(actual, &params)?;
    let score = smape(actual, &forecast)?;
    trace!(model = model.name(), ?params, smape = score, "evaluated grid candidate");

    Ok(FitResult {
        params,
        forecast,
        smape: score,
    })
}

/// Search every feasible grid point of `model` for the lowest in-sample SMAPE.
///
/// Ties go to the candidate met first in grid order. Candidates scoring
/// NaN are never chosen. With `parallel` set the grid is evaluated on the
/// rayon pool; the result is identical to the sequential search.
pub fn fit<M: ForecastModel>(
    model: &M,
    actual: &[f64],
    parallel: bool,
) -> Result<FitResult<M::Params>> {
    let candidates = model.candidates(actual.len());
    let total = candidates.len();

    let best = if parallel {
        let scored = candidates
            .into_par_iter()
            .enumerate()
            .map(|(index, params)| evaluate(model, actual, params).map(|fit| (index, fit)))
            .collect::<Result<Vec<_>>>()?;

        scored
            .into_iter()
            .filter(|(_, fit)| !fit.smape.is_nan())
            .min_by(|(left_index, left), (right_index, right)| {
                left.smape
                    .total_cmp(&right.smape)
                    .then(left_index.cmp(right_index))
            })
            .map(|(_, fit)| fit)
    } else {
        let mut best: Option<FitResult<M::Params>> = None;
        for params in candidates {
            let candidate = evaluate(model, actual, params)?;
            let improves = match &best {
                Some(current) => candidate.smape < current.smape,
                None => !candidate.smape.is_nan(),
            };
            if improves {
                best = Some(candidate);
            }
        }
        best
    };

    let best = best.ok_or_else(|| {
        ForecastError::InsufficientData(format!(
            "No feasible {} candidate for a series of {} points",
            model.name(),
            actual.len()
        ))
    })?;

    debug!(
        model = model.name(),
        candidates = total,
        params = ?best.params,
        smape = best.smape,
        "fitted model"
    );

    Ok(best)
}
