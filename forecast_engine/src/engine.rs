//! Forecast requests and the end-to-end forecasting pipeline

use crate::config::ForecastConfig;
use crate::data::{aggregate, Interval, RangeTotal, Series};
use crate::error::{ForecastError, Result};
use crate::grid::fit;
use crate::models::{Holt, HoltWinters, MovingAverage};
use crate::report::{assemble, ForecastReport};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Date range and bucket interval to forecast over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
}

impl ForecastRequest {
    /// Create a request, rejecting an end date before the start date
    pub fn new(start: NaiveDate, end: NaiveDate, interval: Interval) -> Result<Self> {
        if end < start {
            return Err(ForecastError::InvalidDateRange(format!(
                "End date {} is before start date {}",
                end, start
            )));
        }

        Ok(Self {
            start,
            end,
            interval,
        })
    }

    /// Parse ISO-8601 (`YYYY-MM-DD`) dates and an interval name
    pub fn parse(start: &str, end: &str, interval: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?, interval.parse()?)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    value.trim().parse::<NaiveDate>().map_err(|e| {
        ForecastError::InvalidDateRange(format!("Invalid date '{}': {}", value, e))
    })
}

/// Fits every model to bucketed data and assembles the labelled series
#[derive(Debug, Clone)]
pub struct Forecaster {
    config: ForecastConfig,
    moving_average: MovingAverage,
    holt: Holt,
    holt_winters: HoltWinters,
}

impl Forecaster {
    /// Create a forecaster from a validated configuration
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        let grid = config.grid()?;

        Ok(Self {
            moving_average: MovingAverage::new(config.window_candidates.clone())?,
            holt: Holt::new(grid.clone()),
            holt_winters: HoltWinters::new(grid, config.season_length, config.seasonal_init)?,
            config,
        })
    }

    /// Configuration this forecaster was built with
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Aggregate `source` over the request and forecast the result
    pub fn forecast<S>(&self, source: &S, request: &ForecastRequest) -> Result<ForecastReport>
    where
        S: RangeTotal + ?Sized,
    {
        let original = aggregate(
            source,
            request.start,
            request.end,
            request.interval,
            self.config.bucket_bounds,
        )?;
        self.forecast_series(original)
    }

    /// Forecast an already aggregated series
    pub fn forecast_series(&self, original: Series) -> Result<ForecastReport> {
        if original.is_empty() {
            return Err(ForecastError::InsufficientData(
                "No data found in the requested range".to_string(),
            ));
        }

        let actual = original.values();
        let parallel = self.config.parallel;

        let moving_average = fit(&self.moving_average, &actual, false)?;
        let holt = fit(&self.holt, &actual, parallel)?;
        let holt_winters = fit(&self.holt_winters, &actual, parallel)?;

        let report = ForecastReport {
            moving_average: assemble(&self.moving_average, &original, moving_average)?,
            holt: assemble(&self.holt, &original, holt)?,
            holt_winters: assemble(&self.holt_winters, &original, holt_winters)?,
            original,
        };

        info!(
            points = report.original.len(),
            interval = %report.original.interval(),
            moving_average_smape = report.moving_average.smape,
            holt_smape = report.holt.smape,
            holt_winters_smape = report.holt_winters.smape,
            "forecast complete"
        );

        Ok(report)
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self {
            config: ForecastConfig::default(),
            moving_average: MovingAverage::default(),
            holt: Holt::default(),
            holt_winters: HoltWinters::default(),
        }
    }
}

/// Forecast `source` between `start` and `end` with the default configuration
pub fn forecast<S>(
    source: &S,
    start: NaiveDate,
    end: NaiveDate,
    interval: Interval,
) -> Result<ForecastReport>
where
    S: RangeTotal + ?Sized,
{
    let request = ForecastRequest::new(start, end, interval)?;
    Forecaster::default().forecast(source, &request)
}
