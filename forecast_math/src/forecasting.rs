//! Trend-adjusted moving average forecasting
//!
//! A plain moving average extrapolates to a flat line. This forecaster takes
//! the previous moving-average level and adds `1/window` of the most recent
//! period-over-period change, then feeds each forecast back into the series
//! before producing the next one.

use crate::moving_averages::moving_average;
use crate::{MathError, Result};

/// Window used for monthly booking and revenue forecasts.
pub const DEFAULT_WINDOW: usize = 3;

/// Round to two decimal places, halves away from zero.
///
/// Forecasts are denominated in currency or whole bookings, so two decimals
/// is the precision every caller relies on.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Forecast `horizon` values past the end of `series`.
///
/// Each step computes the moving average of the working series and emits
/// `m[t-1] + (y[t] - y[t-1]) / window`, where `m[t-1]` is the second-to-last
/// moving-average value and `y[t]`, `y[t-1]` are the last two observations.
/// The rounded value is appended to the working series, so later steps
/// extrapolate from earlier forecasts.
///
/// Returns an empty vector when `series` is shorter than `window`. When the
/// series holds exactly `window` values there is only one moving-average
/// point and the result is empty as well; in general the loop stops early as
/// soon as fewer than two moving-average points are available.
pub fn forecast(series: &[f64], window: usize, horizon: usize) -> Vec<f64> {
    if window == 0 || series.len() < window {
        return Vec::new();
    }

    let mut working = series.to_vec();
    let mut forecasts = Vec::with_capacity(horizon);

    for _ in 0..horizon {
        let ma = moving_average(&working, window);
        if ma.len() < 2 {
            break;
        }

        let n = working.len();
        let last = working[n - 1];
        let previous = working[n - 2];
        let level = ma[ma.len() - 2];

        let next = round_to_cents(level + (last - previous) / window as f64);
        forecasts.push(next);
        working.push(next);
    }

    forecasts
}

/// Trend-adjusted moving average model with a validated window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendAdjustedMovingAverage {
    window: usize,
}

impl TrendAdjustedMovingAverage {
    /// Create a new model with the specified window
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(MathError::InvalidInput(
                "Window must be greater than zero".to_string(),
            ));
        }

        Ok(Self { window })
    }

    /// Get the window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Minimum history that yields at least one forecast value.
    pub fn min_history(&self) -> usize {
        self.window + 1
    }

    /// Forecast `horizon` values, see [`forecast`].
    pub fn forecast(&self, series: &[f64], horizon: usize) -> Vec<f64> {
        forecast(series, self.window, horizon)
    }

    /// Like [`Self::forecast`], but reports unusable input as an error
    /// instead of an empty result.
    pub fn try_forecast(&self, series: &[f64], horizon: usize) -> Result<Vec<f64>> {
        if let Some(bad) = series.iter().find(|v| !v.is_finite()) {
            return Err(MathError::InvalidInput(format!(
                "Series contains a non-finite value: {}",
                bad
            )));
        }

        if series.len() < self.min_history() {
            return Err(MathError::InsufficientData(format!(
                "Need at least {} values to forecast, have {}.",
                self.min_history(),
                series.len()
            )));
        }

        Ok(self.forecast(series, horizon))
    }
}

impl Default for TrendAdjustedMovingAverage {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_recurrence_step_by_step() {
        let series = [10.0, 12.0, 11.0, 13.0, 14.0];
        let values = forecast(&series, 3, 2);

        // ma = [11, 12, 12.667]; 12 + (14 - 13) / 3
        assert_eq!(values[0], 12.33);
        // ma[-2] = 38 / 3; 38 / 3 + (12.33 - 14) / 3
        assert_eq!(values[1], 12.11);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_exactly_window_values_stops_immediately() {
        assert!(forecast(&[1.0, 2.0, 3.0], 3, 4).is_empty());
    }

    #[rstest]
    #[case(&[], 3)]
    #[case(&[5.0], 3)]
    #[case(&[5.0, 6.0], 3)]
    #[case(&[5.0, 6.0, 7.0], 0)]
    fn test_short_series_or_zero_window(#[case] series: &[f64], #[case] window: usize) {
        assert!(forecast(series, window, 3).is_empty());
    }

    #[test]
    fn test_zero_horizon() {
        assert!(forecast(&[1.0, 2.0, 3.0, 4.0], 3, 0).is_empty());
    }

    #[rstest]
    #[case(0.004, 0.0)]
    #[case(0.005, 0.01)]
    #[case(-0.005, -0.01)]
    #[case(12.345_678, 12.35)]
    #[case(7.0, 7.0)]
    fn test_round_to_cents(#[case] input: f64, #[case] expected: f64) {
        assert_relative_eq!(round_to_cents(input), expected);
    }

    #[test]
    fn test_model_rejects_zero_window() {
        assert!(matches!(
            TrendAdjustedMovingAverage::new(0),
            Err(MathError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_model_defaults_to_three() {
        let model = TrendAdjustedMovingAverage::default();
        assert_eq!(model.window(), DEFAULT_WINDOW);
        assert_eq!(model.min_history(), 4);
    }

    #[test]
    fn test_try_forecast_errors() {
        let model = TrendAdjustedMovingAverage::default();

        assert!(matches!(
            model.try_forecast(&[1.0, 2.0, 3.0], 2),
            Err(MathError::InsufficientData(_))
        ));
        assert!(matches!(
            model.try_forecast(&[1.0, f64::NAN, 3.0, 4.0], 2),
            Err(MathError::InvalidInput(_))
        ));

        let values = model.try_forecast(&[10.0, 12.0, 11.0, 13.0, 14.0], 2).unwrap();
        assert_eq!(values, vec![12.33, 12.11]);
    }
}
