//! In-memory store backed by a booking ledger

use super::{aggregate_by_month, BookingEntry, ForecastRecord, StoreResult, TimeSeriesStore};
use crate::data::{Metric, Sample};
use chrono::NaiveDate;

/// Keeps bookings and persisted forecasts in vectors
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    bookings: Vec<BookingEntry>,
    records: Vec<ForecastRecord>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given bookings
    pub fn with_bookings(bookings: Vec<BookingEntry>) -> Self {
        Self {
            bookings,
            records: Vec::new(),
        }
    }

    /// Add a booking to the ledger
    pub fn add_booking(&mut self, booking: BookingEntry) {
        self.bookings.push(booking);
    }

    pub fn bookings(&self) -> &[BookingEntry] {
        &self.bookings
    }

    /// Forecast records persisted so far, in insertion order
    pub fn records(&self) -> &[ForecastRecord] {
        &self.records
    }
}

impl TimeSeriesStore for InMemoryStore {
    fn fetch_series(
        &self,
        metric: Metric,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Sample>> {
        Ok(aggregate_by_month(&self.bookings, metric, start, end))
    }

    fn persist_forecast(&mut self, record: &ForecastRecord) -> StoreResult<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
