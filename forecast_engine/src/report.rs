//! Labelled forecast series ready for display next to the original data

use crate::data::Series;
use crate::error::{ForecastError, Result};
use crate::grid::FitResult;
use crate::models::{ForecastModel, ForecastValues, HoltParams, HoltWintersParams};
use crate::utils::extend_timestamps;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label given to the observed data
pub const ORIGINAL_LABEL: &str = "Original Data";

/// One dated value of a labelled series; `None` marks burn-in positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// A labelled, chronologically ordered series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub name: String,
    pub data: Vec<ForecastPoint>,
}

impl ForecastSeries {
    /// Zip a timestamp axis with forecast values
    pub fn from_parts(name: String, timestamps: &[NaiveDate], values: ForecastValues) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::MisalignedSeries {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }

        let data = timestamps
            .iter()
            .zip(values)
            .map(|(&date, value)| ForecastPoint { date, value })
            .collect();

        Ok(Self { name, data })
    }

    /// The observed series, labelled [`ORIGINAL_LABEL`]
    pub fn original(series: &Series) -> Self {
        Self {
            name: ORIGINAL_LABEL.to_string(),
            data: series
                .points()
                .iter()
                .map(|point| ForecastPoint {
                    date: point.date,
                    value: Some(point.value),
                })
                .collect(),
        }
    }

    /// Dates of every position, including burn-in and extrapolated ones
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.data.iter().map(|point| point.date).collect()
    }

    /// Values of every position, `None` where absent
    pub fn values(&self) -> ForecastValues {
        self.data.iter().map(|point| point.value).collect()
    }

    /// Value at `date`, flattening absent positions and unknown dates
    pub fn value_at(&self, date: NaiveDate) -> Option<f64> {
        self.data
            .iter()
            .find(|point| point.date == date)
            .and_then(|point| point.value)
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the series has no positions
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A fitted model's labelled series together with what it was fitted with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelForecast<P> {
    pub series: ForecastSeries,
    pub params: P,
    /// In-sample SMAPE, in percent
    pub smape: f64,
}

/// Build the label of a fitted model, e.g.
/// `Holt's - 4.21% (Alpha: 0.30 Beta: 0.10)`
pub fn label<M: ForecastModel>(model: &M, params: &M::Params, smape: f64) -> String {
    format!(
        "{} - {:.2}% ({})",
        model.name(),
        smape,
        model.describe(params)
    )
}

/// Extend the original timestamps by the model's horizon and label the best fit
pub fn assemble<M: ForecastModel>(
    model: &M,
    original: &Series,
    fit: FitResult<M::Params>,
) -> Result<ModelForecast<M::Params>> {
    let timestamps = extend_timestamps(&original.dates(), model.horizon(), original.interval())?;
    let name = label(model, &fit.params, fit.smape);
    let series = ForecastSeries::from_parts(name, &timestamps, fit.forecast)?;

    Ok(ModelForecast {
        series,
        params: fit.params,
        smape: fit.smape,
    })
}

/// Original data and the best fit of every model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub original: Series,
    pub moving_average: ModelForecast<usize>,
    pub holt: ModelForecast<HoltParams>,
    pub holt_winters: ModelForecast<HoltWintersParams>,
}

impl ForecastReport {
    /// Original, moving average, Holt and Holt-Winters series, in that order
    pub fn series(&self) -> [ForecastSeries; 4] {
        [
            ForecastSeries::original(&self.original),
            self.moving_average.series.clone(),
            self.holt.series.clone(),
            self.holt_winters.series.clone(),
        ]
    }

    /// The four series as a JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.series())?)
    }
}
