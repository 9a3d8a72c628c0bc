//! # Stockcast
//!
//! `stockcast_workspace` ties a ticker's dated quotes to the forecasting
//! engine in [`forecast_engine`].
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use stockcast_workspace::Stock;
//!
//! let mut stock = Stock::new("DD");
//! let start = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
//! for day in 0..10 {
//!     stock.record(start + chrono::Days::new(day), 70.0 + day as f64);
//! }
//!
//! let report = stock.forecast("2016-01-01", "2016-01-10", "day")?;
//! assert_eq!(report.original.len(), 10);
//! # Ok::<(), stockcast_workspace::ForecastError>(())
//! ```

use chrono::NaiveDate;
pub use forecast_engine::*;

/// A ticker and its recorded values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stock {
    ticker_symbol: String,
    values: ValueLedger,
}

impl Stock {
    /// Creates a stock with no recorded values.
    ///
    /// # Examples
    ///
    /// ```
    /// use stockcast_workspace::Stock;
    ///
    /// let stock = Stock::new("DD");
    /// assert_eq!(stock.ticker_symbol(), "DD");
    /// assert!(stock.values().is_empty());
    /// ```
    pub fn new(ticker_symbol: &str) -> Self {
        Self {
            ticker_symbol: ticker_symbol.to_string(),
            values: ValueLedger::new(),
        }
    }

    /// Returns the ticker symbol.
    pub fn ticker_symbol(&self) -> &str {
        &self.ticker_symbol
    }

    /// Returns the recorded values.
    pub fn values(&self) -> &ValueLedger {
        &self.values
    }

    /// Records a value on the given date.
    pub fn record(&mut self, date: NaiveDate, value: f64) {
        self.values.insert(date, value);
    }

    /// Forecasts the stock's values with the default configuration.
    ///
    /// Dates are ISO-8601 (`YYYY-MM-DD`); `interval` is one of `day`,
    /// `week`, `month` or `year`.
    pub fn forecast(&self, start_date: &str, end_date: &str, interval: &str) -> Result<ForecastReport> {
        self.forecast_with(&Forecaster::default(), start_date, end_date, interval)
    }

    /// Forecasts the stock's values with a configured forecaster.
    pub fn forecast_with(
        &self,
        forecaster: &Forecaster,
        start_date: &str,
        end_date: &str,
        interval: &str,
    ) -> Result<ForecastReport> {
        let request = ForecastRequest::parse(start_date, end_date, interval)?;
        forecaster.forecast(self, &request)
    }
}

impl RangeTotal for Stock {
    fn range_total(&self, range_start: NaiveDate, range_end: NaiveDate) -> Option<f64> {
        self.values.range_total(range_start, range_end)
    }
}
