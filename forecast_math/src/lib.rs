//! # Forecast Math
//!
//! Pure calculations behind the monthly booking and revenue forecasts.
//! Everything in this crate is deterministic and free of I/O, so the
//! functions can be called from any thread without coordination.
//!
//! - [`moving_averages`]: trailing simple moving average
//! - [`forecasting`]: trend-adjusted moving average extrapolation
//! - [`accuracy`]: back-test error metrics and their rating

use thiserror::Error;

pub mod accuracy;
pub mod forecasting;
pub mod moving_averages;

pub use accuracy::{calculate_errors, interpret_accuracy, AccuracyRating, ErrorMetrics};
pub use forecasting::{forecast, round_to_cents, TrendAdjustedMovingAverage, DEFAULT_WINDOW};
pub use moving_averages::moving_average;

/// Errors that can occur in forecasting calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;
