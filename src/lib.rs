//! # Hotel Forecast
//!
//! Umbrella crate for the hotel forecasting workspace.
//!
//! - [`math`]: the pure forecasting engine (`forecast_math`)
//! - [`forecast`]: orchestration, storage port, configuration and reports
//!   (`booking_forecast`)
//!
//! ## Example
//!
//! ```
//! use hotel_forecast_workspace::math::{forecast, interpret_accuracy, AccuracyRating};
//!
//! let values = forecast(&[10.0, 12.0, 11.0, 13.0, 14.0], 3, 2);
//! assert_eq!(values, vec![12.33, 12.11]);
//! assert_eq!(interpret_accuracy(15.0), AccuracyRating::Good);
//! ```

pub use booking_forecast as forecast;
pub use forecast_math as math;

pub use booking_forecast::{
    ForecastConfig, ForecastError, ForecastOrchestrator, ForecastReport, Metric, Period,
    TimeSeriesStore,
};
