//! Forecast output handed to the presentation layer

use crate::data::{Metric, Sample};
use crate::error::Result;
use forecast_math::{AccuracyRating, ErrorMetrics};
use serde::Serialize;
use std::fmt;

/// Outcome of the hold-out back-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BacktestSummary {
    #[serde(flatten)]
    pub metrics: ErrorMetrics,
    /// `None` when no withheld month could be compared
    pub rating: Option<AccuracyRating>,
    /// Months withheld from the end of the history
    pub holdout: usize,
    /// Withheld months that received a back-test forecast
    pub evaluated_points: usize,
}

impl BacktestSummary {
    /// Whether the metrics describe at least one compared month
    pub fn is_defined(&self) -> bool {
        self.evaluated_points > 0
    }

    /// Relative error to store alongside forecasts, if the back-test ran
    pub fn mre_percent(&self) -> Option<f64> {
        self.is_defined().then_some(self.metrics.mre_percent)
    }
}

impl fmt::Display for BacktestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rating {
            Some(rating) => write!(f, "{} ({})", self.metrics, rating),
            None => write!(f, "Back-test unavailable: not enough history"),
        }
    }
}

/// What happened when forecast records were written to the store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PersistenceStatus {
    /// Every record was stored
    Persisted { records: usize },
    /// Persistence is disabled in the configuration
    Skipped,
    /// The store failed after `persisted` records
    Failed { persisted: usize, reason: String },
}

impl PersistenceStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, PersistenceStatus::Failed { .. })
    }
}

/// Historical series, forecast and accuracy for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub metric: Metric,
    pub historical: Vec<Sample>,
    pub forecasted: Vec<Sample>,
    pub backtest: BacktestSummary,
    pub persistence: PersistenceStatus,
}

impl ForecastReport {
    /// Period labels for the chart axis: history first, then forecast
    pub fn labels(&self) -> Vec<String> {
        self.historical
            .iter()
            .chain(self.forecasted.iter())
            .map(|s| s.period.to_string())
            .collect()
    }

    /// Forecasted values only
    pub fn forecast_values(&self) -> Vec<f64> {
        self.forecasted.iter().map(|s| s.value).collect()
    }

    /// Serialize the report as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ForecastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Forecast ({}):", self.metric)?;
        writeln!(f, "  {:<8} {:>12} {:>12}", "Month", "Actual", "Forecast")?;
        for sample in &self.historical {
            writeln!(f, "  {:<8} {:>12.2} {:>12}", sample.period.to_string(), sample.value, "")?;
        }
        for sample in &self.forecasted {
            writeln!(f, "  {:<8} {:>12} {:>12.2}", sample.period.to_string(), "", sample.value)?;
        }
        writeln!(f, "  {}", self.backtest)?;
        Ok(())
    }
}
