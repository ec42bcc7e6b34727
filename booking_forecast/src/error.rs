//! Error types for the booking_forecast crate

use crate::store::StoreError;
use forecast_math::MathError;
use thiserror::Error;

/// Custom error types for the booking_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Not enough monthly samples to run the forecaster
    #[error("Insufficient data: need at least {required} months, have {available}")]
    InsufficientData { required: usize, available: usize },

    /// Enough samples, but the forecaster produced no values
    #[error("Forecast unavailable: {0}")]
    ForecastUnavailable(String),

    /// Failure reported by the time series store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error loading or validating configuration
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error from the forecasting math
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error from JSON serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ForecastError {
    /// Whether the caller can recover by changing the request or waiting for
    /// more data, as opposed to an infrastructure failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ForecastError::InsufficientData { .. }
                | ForecastError::ForecastUnavailable(_)
                | ForecastError::InvalidParameter(_)
        )
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
