//! Utility functions for the forecast_engine crate

use crate::data::Interval;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;

/// Floor applied to divisors that would otherwise be zero
pub const DIVISOR_FLOOR: f64 = 1e-11;

/// Replace an exactly-zero divisor with [`DIVISOR_FLOOR`]
pub fn floor_divisor(divisor: f64) -> f64 {
    if divisor == 0.0 {
        DIVISOR_FLOOR
    } else {
        divisor
    }
}

/// Round half away from zero to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Create future timestamps for forecasting.
///
/// Appends `horizon` dates to `dates`, the k-th lying `k` intervals after
/// the last observed date.
pub fn extend_timestamps(
    dates: &[NaiveDate],
    horizon: usize,
    interval: Interval,
) -> Result<Vec<NaiveDate>> {
    let last = *dates.last().ok_or_else(|| {
        ForecastError::InsufficientData("Cannot extend an empty timestamp axis".to_string())
    })?;

    let mut extended = Vec::with_capacity(dates.len() + horizon);
    extended.extend_from_slice(dates);

    for step in 1..=horizon {
        let step = u32::try_from(step).map_err(|_| {
            ForecastError::InvalidDateRange(format!("Horizon {} is too large", horizon))
        })?;
        extended.push(interval.advance(last, step)?);
    }

    Ok(extended)
}
