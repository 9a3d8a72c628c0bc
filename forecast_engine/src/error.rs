//! Error types for the forecast_engine crate

use thiserror::Error;

/// Custom error types for the forecast_engine crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Moving-average window is zero or not shorter than the series
    #[error("Invalid window: window {window} must be positive and less than the series length {len}")]
    InvalidWindow { window: usize, len: usize },

    /// Season length is zero or not shorter than the series
    #[error("Invalid season length: season length {season_length} must be positive and less than the series length {len}")]
    InvalidSeasonLength { season_length: usize, len: usize },

    /// Timestamp axis and forecast values have different lengths
    #[error("Misaligned series: {timestamps} timestamps for {values} values")]
    MisalignedSeries { timestamps: usize, values: usize },

    /// SMAPE was requested over a forecast with no present positions
    #[error("Empty alignment: forecast has no values aligned with the actual series")]
    EmptyAlignment,

    /// Bad date bounds, unparsable date or unknown interval name
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    /// Not enough observations to fit a model
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from JSON (de)serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
