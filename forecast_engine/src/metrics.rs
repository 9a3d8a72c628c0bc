//! Metrics for evaluating forecast performance

use crate::error::{ForecastError, Result};
use crate::utils::{floor_divisor, round2};

/// Symmetric Mean Absolute Percentage Error, in percent, rounded to two decimals.
///
/// `actual` and `forecast` are aligned by index. Positions where the
/// forecast is absent, or lies past the end of `actual`, do not count
/// towards the mean. Each aligned pair contributes
/// `|f - a| / ((|a| + |f|) / 2)`, with a zero divisor floored to `1e-11`.
/// The result lies in `[0, 200]`.
pub fn smape(actual: &[f64], forecast: &[Option<f64>]) -> Result<f64> {
    let (sum, count) = actual
        .iter()
        .zip(forecast.iter())
        .filter_map(|(&a, f)| f.map(|f| (a, f)))
        .fold((0.0, 0usize), |(sum, count), (a, f)| {
            let divisor = floor_divisor(a.abs() + f.abs());
            (sum + (f - a).abs() / (divisor / 2.0), count + 1)
        });

    if count == 0 {
        return Err(ForecastError::EmptyAlignment);
    }

    Ok(round2(sum / count as f64 * 100.0))
}
