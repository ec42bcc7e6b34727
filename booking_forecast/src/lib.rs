//! # Booking Forecast
//!
//! Monthly booking-count and revenue forecasting for hotel operations.
//!
//! ## Features
//!
//! - Monthly time series types (`Period`, `Sample`, `TimeSeries`)
//! - A storage port (`TimeSeriesStore`) with in-memory and CSV implementations
//! - Trend-adjusted moving average forecasts from [`forecast_math`]
//! - A hold-out back-test that rates how far the forecast can be trusted
//! - A serialisable report for tables and charts
//!
//! ## Quick Start
//!
//! ```rust
//! use booking_forecast::store::{BookingEntry, InMemoryStore};
//! use booking_forecast::{ForecastOrchestrator, Metric};
//! use chrono::NaiveDate;
//!
//! let mut store = InMemoryStore::new();
//! for (month, count) in [(1, 10), (2, 12), (3, 11), (4, 13), (5, 14)] {
//!     for _ in 0..count {
//!         let day = NaiveDate::from_ymd_opt(2024, month, 15).unwrap();
//!         store.add_booking(BookingEntry::new(day, 120.0));
//!     }
//! }
//!
//! let mut orchestrator = ForecastOrchestrator::new(store);
//! let report = orchestrator.run(
//!     Metric::Bookings,
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
//!     2,
//! )?;
//!
//! assert_eq!(report.forecast_values(), vec![12.33, 12.11]);
//! assert_eq!(orchestrator.store().records().len(), 2);
//! # Ok::<(), booking_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod orchestrator;
pub mod report;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use crate::config::{ErrorAttachment, ForecastConfig};
pub use crate::data::{Metric, Period, Sample, TimeSeries};
pub use crate::error::ForecastError;
pub use crate::orchestrator::ForecastOrchestrator;
pub use crate::report::{BacktestSummary, ForecastReport, PersistenceStatus};
pub use crate::store::{ForecastRecord, TimeSeriesStore};
pub use forecast_math::{AccuracyRating, ErrorMetrics};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
