//! Forecast orchestration: fetch, validate, forecast, back-test, persist

use crate::config::{ErrorAttachment, ForecastConfig};
use crate::data::{Metric, Sample, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::report::{BacktestSummary, ForecastReport, PersistenceStatus};
use crate::store::{ForecastRecord, TimeSeriesStore};
use crate::utils::{future_periods, holdout_size};
use chrono::NaiveDate;
use forecast_math::{calculate_errors, MathError, TrendAdjustedMovingAverage, DEFAULT_WINDOW};
use tracing::{debug, info, warn};

/// Fewest monthly samples a request must have before anything is computed.
pub const MIN_HISTORY_MONTHS: usize = DEFAULT_WINDOW;

/// Runs forecasts against an injected [`TimeSeriesStore`]
#[derive(Debug)]
pub struct ForecastOrchestrator<S> {
    store: S,
    config: ForecastConfig,
    model: TrendAdjustedMovingAverage,
}

impl<S: TimeSeriesStore> ForecastOrchestrator<S> {
    /// Create an orchestrator with the default configuration
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: ForecastConfig::default(),
            model: TrendAdjustedMovingAverage::default(),
        }
    }

    /// Create an orchestrator with a validated configuration
    pub fn with_config(store: S, config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            model: TrendAdjustedMovingAverage::new(DEFAULT_WINDOW)?,
        })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Forecast `metric` for `horizon` months past the history in
    /// `[start_date, end_date]`.
    ///
    /// Recoverable failures (`InsufficientData`, `ForecastUnavailable`,
    /// `InvalidParameter`) and fetch failures return before anything is
    /// persisted. A persistence failure does not fail the call; it is recorded
    /// in [`ForecastReport::persistence`].
    pub fn run(
        &mut self,
        metric: Metric,
        start_date: NaiveDate,
        end_date: NaiveDate,
        horizon: usize,
    ) -> Result<ForecastReport> {
        self.validate_request(start_date, end_date, horizon)?;

        info!(
            metric = %metric,
            start = %start_date,
            end = %end_date,
            horizon = horizon,
            "Running forecast"
        );

        let series = self.fetch(metric, start_date, end_date)?;
        if series.len() < MIN_HISTORY_MONTHS {
            return Err(ForecastError::InsufficientData {
                required: MIN_HISTORY_MONTHS,
                available: series.len(),
            });
        }

        let values = self
            .model
            .try_forecast(&series.values(), horizon)
            .map_err(|e| match e {
                MathError::InsufficientData(msg) => ForecastError::ForecastUnavailable(msg),
                other => ForecastError::Math(other),
            })?;

        let backtest = self.backtest(&series, horizon);

        let last = series.last_period().ok_or_else(|| {
            ForecastError::DataError("Series has no last period".to_string())
        })?;
        let forecasted: Vec<Sample> = future_periods(last, values.len())
            .into_iter()
            .zip(values)
            .map(|(period, value)| Sample::new(period, value))
            .collect();

        let persistence = self.persist(metric, &forecasted, &backtest);

        info!(
            metric = %metric,
            forecasted = forecasted.len(),
            mre_percent = backtest.metrics.mre_percent,
            evaluated_points = backtest.evaluated_points,
            "Forecast complete"
        );

        Ok(ForecastReport {
            metric,
            historical: series.into_samples(),
            forecasted,
            backtest,
            persistence,
        })
    }

    fn validate_request(&self, start: NaiveDate, end: NaiveDate, horizon: usize) -> Result<()> {
        if start > end {
            return Err(ForecastError::InvalidParameter(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }

        if horizon == 0 || horizon > self.config.max_horizon {
            return Err(ForecastError::InvalidParameter(format!(
                "Horizon must be between 1 and {} months, got {}",
                self.config.max_horizon, horizon
            )));
        }

        Ok(())
    }

    fn fetch(&self, metric: Metric, start: NaiveDate, end: NaiveDate) -> Result<TimeSeries> {
        let samples = self.store.fetch_series(metric, start, end)?;
        let series = TimeSeries::new(samples)?;

        if series.has_gaps() {
            debug!(
                metric = %metric,
                months = series.len(),
                "History has missing months; forecasting over observed months only"
            );
        }

        Ok(series)
    }

    /// Forecast the last `min(horizon, len)` months from the months before
    /// them and compare against what actually happened.
    fn backtest(&self, series: &TimeSeries, horizon: usize) -> BacktestSummary {
        let holdout = holdout_size(series.len(), horizon);
        let (train, test) = series.split_at_holdout(holdout);

        let train_values: Vec<f64> = train.iter().map(|s| s.value).collect();
        let predicted = self.model.forecast(&train_values, holdout);

        let evaluated_points = predicted.len().min(test.len());
        let actual: Vec<f64> = test[..evaluated_points].iter().map(|s| s.value).collect();
        let metrics = calculate_errors(&actual, &predicted[..evaluated_points]);

        debug!(
            holdout = holdout,
            train_len = train.len(),
            evaluated_points = evaluated_points,
            "Back-test finished"
        );

        BacktestSummary {
            metrics,
            rating: (evaluated_points > 0).then(|| metrics.rating()),
            holdout,
            evaluated_points,
        }
    }

    fn persist(
        &mut self,
        metric: Metric,
        forecasted: &[Sample],
        backtest: &BacktestSummary,
    ) -> PersistenceStatus {
        if !self.config.persist {
            return PersistenceStatus::Skipped;
        }

        for (i, sample) in forecasted.iter().enumerate() {
            let error = match self.config.error_attachment {
                ErrorAttachment::FirstPeriod if i > 0 => None,
                _ => backtest.mre_percent(),
            };

            let record = ForecastRecord {
                period: sample.period,
                metric,
                actual_value: None,
                predicted_value: sample.value,
                error,
            };

            if let Err(e) = self.store.persist_forecast(&record) {
                warn!(
                    metric = %metric,
                    period = %sample.period,
                    persisted = i,
                    error = %e,
                    "Failed to persist forecast"
                );
                return PersistenceStatus::Failed {
                    persisted: i,
                    reason: e.to_string(),
                };
            }
        }

        PersistenceStatus::Persisted {
            records: forecasted.len(),
        }
    }
}
