//! Forecast bookings or revenue from a CSV booking ledger.
//!
//! Usage:
//!
//! ```text
//! cargo run --example monthly_forecast -- <ledger.csv> [bookings|revenue] [horizon] [config.json]
//! ```
//!
//! Without a ledger path a year of generated bookings is used. Set `RUST_LOG=debug`
//! for back-test details.

use booking_forecast::store::{BookingEntry, CsvStore, InMemoryStore};
use booking_forecast::{ForecastConfig, ForecastOrchestrator, ForecastReport, Metric, Period};
use chrono::NaiveDate;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let metric: Metric = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(Metric::Bookings);
    let horizon: usize = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(3);
    let config = ForecastConfig::load_or_default(args.get(3).map(Path::new))?;

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid start date")?;
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).ok_or("invalid end date")?;

    let report = match args.first() {
        Some(ledger) => {
            let forecasts = Path::new(ledger).with_file_name("forecasts.csv");
            let store = CsvStore::new(ledger, forecasts);
            let mut orchestrator = ForecastOrchestrator::with_config(store, config)?;
            orchestrator.run(metric, start, end, horizon)?
        }
        None => {
            let mut orchestrator =
                ForecastOrchestrator::with_config(generated_store()?, config)?;
            orchestrator.run(metric, start, end, horizon)?
        }
    };

    print_report(&report)?;
    Ok(())
}

fn generated_store() -> Result<InMemoryStore, Box<dyn std::error::Error>> {
    let monthly_counts = [18, 21, 25, 30, 34, 41, 47, 45, 36, 29, 22, 26];
    let mut store = InMemoryStore::new();
    let mut period = Period::new(2024, 1)?;

    for (i, &count) in monthly_counts.iter().enumerate() {
        for n in 0..count {
            let day = (n % 28) + 1;
            let date = NaiveDate::from_ymd_opt(period.year(), period.month(), day)
                .ok_or("invalid booking date")?;
            let price = 80.0 + (i as f64) * 5.0 + (n % 4) as f64 * 12.5;
            store.add_booking(BookingEntry::new(date, price));
        }
        period = period.succ();
    }

    Ok(store)
}

fn print_report(report: &ForecastReport) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", report);
    println!("Persistence: {:?}", report.persistence);
    println!();
    println!("{}", report.to_json()?);
    Ok(())
}
