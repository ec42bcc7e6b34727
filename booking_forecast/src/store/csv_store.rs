//! CSV-backed store
//!
//! Bookings are read from a ledger with a `created_at,total_price` header.
//! `created_at` may be a date (`2024-01-31`) or a timestamp
//! (`2024-01-31 18:05:00`). Forecasts are appended to a second CSV file with
//! the columns `month,data_type,actual_value,predicted_value,error`.

use super::{
    aggregate_by_month, BookingEntry, ForecastRecord, StoreError, StoreResult, TimeSeriesStore,
};
use crate::data::{Metric, Sample};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct BookingRow {
    created_at: String,
    total_price: f64,
}

#[derive(Debug, Serialize)]
struct ForecastRow<'a> {
    month: String,
    data_type: &'a str,
    actual_value: Option<f64>,
    predicted_value: f64,
    error: Option<f64>,
}

/// Store reading bookings from and appending forecasts to CSV files
#[derive(Debug, Clone)]
pub struct CsvStore {
    bookings_path: PathBuf,
    forecasts_path: PathBuf,
}

impl CsvStore {
    /// Create a store over the given files. Nothing is read until the first
    /// fetch, so the ledger always reflects the file contents at fetch time.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(bookings_path: P, forecasts_path: Q) -> Self {
        Self {
            bookings_path: bookings_path.as_ref().to_path_buf(),
            forecasts_path: forecasts_path.as_ref().to_path_buf(),
        }
    }

    pub fn forecasts_path(&self) -> &Path {
        &self.forecasts_path
    }

    /// Load every booking in the ledger
    pub fn load_bookings(&self) -> StoreResult<Vec<BookingEntry>> {
        let file = File::open(&self.bookings_path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut bookings = Vec::new();
        for (line, row) in reader.deserialize::<BookingRow>().enumerate() {
            let row = row?;
            let created_at = parse_created_at(&row.created_at).ok_or_else(|| {
                StoreError::Parse(format!(
                    "Invalid created_at '{}' on data row {}",
                    row.created_at,
                    line + 1
                ))
            })?;
            bookings.push(BookingEntry::new(created_at, row.total_price));
        }

        Ok(bookings)
    }
}

fn parse_created_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .ok()
}

impl TimeSeriesStore for CsvStore {
    fn fetch_series(
        &self,
        metric: Metric,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Sample>> {
        let bookings = self.load_bookings()?;
        Ok(aggregate_by_month(&bookings, metric, start, end))
    }

    fn persist_forecast(&mut self, record: &ForecastRecord) -> StoreResult<()> {
        let needs_header = std::fs::metadata(&self.forecasts_path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.forecasts_path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);

        writer.serialize(ForecastRow {
            month: record.period.to_string(),
            data_type: record.metric.as_str(),
            actual_value: record.actual_value,
            predicted_value: record.predicted_value,
            error: record.error,
        })?;
        writer.flush()?;

        Ok(())
    }
}
