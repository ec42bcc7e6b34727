//! Time series store: where history comes from and where forecasts go
//!
//! The orchestrator only talks to storage through [`TimeSeriesStore`], so the
//! backing implementation can be swapped (or mocked in tests) freely.

use crate::data::{Metric, Period, Sample};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub mod csv_store;
pub mod memory;

pub use csv_store::CsvStore;
pub use memory::InMemoryStore;

/// Errors raised by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A persisted forecast row, one per forecasted month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub period: Period,
    pub metric: Metric,
    /// Unknown at forecast time
    pub actual_value: Option<f64>,
    pub predicted_value: f64,
    /// Back-test mean relative error, in percent
    pub error: Option<f64>,
}

/// A single booking as seen by the forecaster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookingEntry {
    pub created_at: NaiveDate,
    pub total_price: f64,
}

impl BookingEntry {
    pub fn new(created_at: NaiveDate, total_price: f64) -> Self {
        Self {
            created_at,
            total_price,
        }
    }
}

/// Storage port for monthly history and forecast results.
pub trait TimeSeriesStore {
    /// Monthly samples of `metric` for bookings created in `[start, end]`.
    ///
    /// Bookings are counted, revenue is summed. Samples come back in
    /// ascending month order; months without bookings are absent.
    fn fetch_series(&self, metric: Metric, start: NaiveDate, end: NaiveDate)
        -> StoreResult<Vec<Sample>>;

    /// Persist one forecast record. Duplicates are stored as extra rows.
    fn persist_forecast(&mut self, record: &ForecastRecord) -> StoreResult<()>;
}

impl<S: TimeSeriesStore + ?Sized> TimeSeriesStore for &mut S {
    fn fetch_series(
        &self,
        metric: Metric,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Sample>> {
        (**self).fetch_series(metric, start, end)
    }

    fn persist_forecast(&mut self, record: &ForecastRecord) -> StoreResult<()> {
        (**self).persist_forecast(record)
    }
}

/// Group bookings by creation month and aggregate them for `metric`.
pub fn aggregate_by_month<'a, I>(
    bookings: I,
    metric: Metric,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Sample>
where
    I: IntoIterator<Item = &'a BookingEntry>,
{
    let mut months: BTreeMap<Period, f64> = BTreeMap::new();

    for booking in bookings
        .into_iter()
        .filter(|b| b.created_at >= start && b.created_at <= end)
    {
        let slot = months
            .entry(Period::from_date(booking.created_at))
            .or_insert(0.0);
        match metric {
            Metric::Bookings => *slot += 1.0,
            Metric::Revenue => *slot += booking.total_price,
        }
    }

    months
        .into_iter()
        .map(|(period, value)| Sample::new(period, value))
        .collect()
}
