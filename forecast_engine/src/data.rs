//! Calendar-bucketed time series data and the interval aggregator

use crate::error::{ForecastError, Result};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Calendar unit a series is bucketed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Day,
    Week,
    Month,
    Year,
}

impl Interval {
    /// Move `date` forward by `count` intervals.
    ///
    /// Month and year steps clamp to the last day of the target month,
    /// so Jan 31 plus one month is the last day of February.
    pub fn advance(self, date: NaiveDate, count: u32) -> Result<NaiveDate> {
        let advanced = match self {
            Interval::Day => date.checked_add_days(Days::new(u64::from(count))),
            Interval::Week => date.checked_add_days(Days::new(7 * u64::from(count))),
            Interval::Month => date.checked_add_months(Months::new(count)),
            Interval::Year => count
                .checked_mul(12)
                .and_then(|months| date.checked_add_months(Months::new(months))),
        };

        advanced.ok_or_else(|| {
            ForecastError::InvalidDateRange(format!(
                "{} plus {} {}(s) is outside the supported calendar",
                date, count, self
            ))
        })
    }

    /// Name used on the wire and in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Interval::Day),
            "week" => Ok(Interval::Week),
            "month" => Ok(Interval::Month),
            "year" => Ok(Interval::Year),
            other => Err(ForecastError::InvalidDateRange(format!(
                "Unsupported interval: {}",
                other
            ))),
        }
    }
}

/// How the upper bound of a week/month/year bucket is drawn.
///
/// Day buckets always cover exactly one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketBounds {
    /// `[start, start + interval]`, both ends inclusive. A date sitting on a
    /// bucket boundary is counted by both adjacent buckets.
    #[default]
    Inclusive,
    /// `[start, start + interval - 1 day]`, so adjacent buckets never overlap.
    HalfOpen,
}

/// Capability to total the underlying values of an inclusive date range.
///
/// Returns `None` when the range holds no data at all, which is distinct
/// from a range whose values sum to zero.
pub trait RangeTotal {
    fn range_total(&self, range_start: NaiveDate, range_end: NaiveDate) -> Option<f64>;
}

impl<F> RangeTotal for F
where
    F: Fn(NaiveDate, NaiveDate) -> Option<f64>,
{
    fn range_total(&self, range_start: NaiveDate, range_end: NaiveDate) -> Option<f64> {
        self(range_start, range_end)
    }
}

/// A single aggregated observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// First date of the bucket
    pub date: NaiveDate,
    /// Total reported for the bucket
    pub value: f64,
}

/// Chronologically ordered observations sharing one interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedSeries")]
pub struct Series {
    interval: Interval,
    points: Vec<TimePoint>,
}

/// Wire form of [`Series`], checked through [`Series::new`]
#[derive(Deserialize)]
struct UncheckedSeries {
    interval: Interval,
    points: Vec<TimePoint>,
}

impl TryFrom<UncheckedSeries> for Series {
    type Error = ForecastError;

    fn try_from(unchecked: UncheckedSeries) -> Result<Self> {
        Series::new(unchecked.interval, unchecked.points)
    }
}

impl Series {
    /// Create a series from points already in chronological order
    pub fn new(interval: Interval, points: Vec<TimePoint>) -> Result<Self> {
        if points.windows(2).any(|pair| pair[0].date >= pair[1].date) {
            return Err(ForecastError::InvalidDateRange(
                "Series points must be in strictly increasing date order".to_string(),
            ));
        }

        Ok(Self { interval, points })
    }

    /// Interval the points were bucketed by
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Observations in chronological order
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    /// Observed values in order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Bucket dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Date of the most recent bucket, if any
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Last date covered by the bucket starting at `bucket_start`
fn bucket_end(bucket_start: NaiveDate, interval: Interval, bounds: BucketBounds) -> Result<NaiveDate> {
    if interval == Interval::Day {
        return Ok(bucket_start);
    }

    let next_start = interval.advance(bucket_start, 1)?;
    match bounds {
        BucketBounds::Inclusive => Ok(next_start),
        BucketBounds::HalfOpen => next_start.pred_opt().ok_or_else(|| {
            ForecastError::InvalidDateRange(format!("No date precedes {}", next_start))
        }),
    }
}

/// Bucket `source` into a regular series between `start` and `end`.
///
/// Buckets start at `start` and step one interval at a time. A bucket is
/// only queried while its last date does not pass `end`, so a trailing
/// partial bucket is never reported. Buckets the source has no data for
/// are left out rather than zero-filled.
pub fn aggregate<S>(
    source: &S,
    start: NaiveDate,
    end: NaiveDate,
    interval: Interval,
    bounds: BucketBounds,
) -> Result<Series>
where
    S: RangeTotal + ?Sized,
{
    if end < start {
        return Err(ForecastError::InvalidDateRange(format!(
            "End date {} is before start date {}",
            end, start
        )));
    }

    let mut points = Vec::new();
    let mut bucket_start = start;
    let mut buckets = 0usize;

    loop {
        let last_day = bucket_end(bucket_start, interval, bounds)?;
        if last_day > end {
            break;
        }

        buckets += 1;
        match source.range_total(bucket_start, last_day) {
            Some(value) => points.push(TimePoint {
                date: bucket_start,
                value,
            }),
            None => trace!(%bucket_start, %last_day, "bucket has no data"),
        }

        bucket_start = interval.advance(bucket_start, 1)?;
    }

    debug!(
        %start,
        %end,
        %interval,
        buckets,
        points = points.len(),
        "aggregated source data"
    );

    Ok(Series { interval, points })
}
