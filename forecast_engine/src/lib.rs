//! # Forecast Engine
//!
//! Forecasts a scalar time series by fitting three classical models to
//! data bucketed into a calendar interval, picking each model's
//! parameters by exhaustive grid search on SMAPE.
//!
//! ## Features
//!
//! - Interval aggregation (day, week, month, year) over any [`RangeTotal`] source
//! - Trailing moving average, searched over a fixed set of windows
//! - Holt's linear method, searched over an 11 x 11 (alpha, beta) grid
//! - Additive Holt-Winters, searched over an 11 x 11 x 11 (alpha, beta, gamma) grid
//! - Labelled series carrying each model's SMAPE and fitted parameters
//! - Optional parallel grid evaluation with deterministic tie-breaking
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use forecast_engine::{ForecastRequest, Forecaster, ValueLedger};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let ledger: ValueLedger = (0..12)
//!     .map(|day| (start + chrono::Days::new(day), 10.0 + day as f64))
//!     .collect();
//!
//! let request = ForecastRequest::parse("2024-01-01", "2024-01-12", "day")?;
//! let report = Forecaster::default().forecast(&ledger, &request)?;
//!
//! let [original, moving_average, holt, holt_winters] = report.series();
//! assert_eq!(original.len(), 12);
//! assert_eq!(moving_average.len(), 13);
//! assert_eq!(holt.len(), 13);
//! assert_eq!(holt_winters.len(), 15);
//! # Ok::<(), forecast_engine::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod grid;
pub mod ledger;
pub mod metrics;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::data::{aggregate, BucketBounds, Interval, RangeTotal, Series, TimePoint};
pub use crate::engine::{forecast, ForecastRequest, Forecaster};
pub use crate::error::{ForecastError, Result};
pub use crate::grid::{fit, FitResult, ParameterGrid};
pub use crate::ledger::{LedgerEntry, ValueLedger};
pub use crate::metrics::smape;
pub use crate::models::{ForecastModel, ForecastValues};
pub use crate::report::{ForecastPoint, ForecastReport, ForecastSeries, ModelForecast};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
