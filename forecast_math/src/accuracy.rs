//! Forecast accuracy metrics
//!
//! Error metrics are computed over a back-test window: actual values that
//! were held out of training, compared with what the model predicted for
//! them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Back-test error metrics
///
/// The all-zero value doubles as the "no data" sentinel returned for empty or
/// mismatched input. Check [`ErrorMetrics::is_sentinel`] before reading a zero
/// as a perfect forecast.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Relative Error in percent, over non-zero actual values only
    pub mre_percent: f64,
}

impl ErrorMetrics {
    /// The "no data" sentinel
    pub const SENTINEL: ErrorMetrics = ErrorMetrics {
        mae: 0.0,
        rmse: 0.0,
        mre_percent: 0.0,
    };

    /// Whether every metric is zero.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }

    /// Accuracy rating derived from the relative error
    pub fn rating(&self) -> AccuracyRating {
        interpret_accuracy(self.mre_percent)
    }

    /// The metrics as a `(mae, rmse, mre_percent)` tuple
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.mae, self.rmse, self.mre_percent)
    }
}

impl fmt::Display for ErrorMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MAE: {:.2}, RMSE: {:.2}, MRE: {:.2}%",
            self.mae, self.rmse, self.mre_percent
        )
    }
}

/// Calculate MAE, RMSE and mean relative error between two series.
///
/// Returns [`ErrorMetrics::SENTINEL`] when the inputs are empty or differ in
/// length. Indices whose actual value is zero are left out of the relative
/// error average; if every actual value is zero the relative error is 0.0.
pub fn calculate_errors(actual: &[f64], predicted: &[f64]) -> ErrorMetrics {
    if actual.len() != predicted.len() || actual.is_empty() {
        return ErrorMetrics::SENTINEL;
    }

    let n = actual.len() as f64;

    let abs_errors: Vec<f64> = actual
        .iter()
        .zip(predicted.iter())
        .map(|(&a, &p)| (a - p).abs())
        .collect();

    let mae = abs_errors.iter().sum::<f64>() / n;
    let rmse = (abs_errors.iter().map(|e| e.powi(2)).sum::<f64>() / n).sqrt();

    let relative: Vec<f64> = actual
        .iter()
        .zip(abs_errors.iter())
        .filter(|(&a, _)| a != 0.0)
        .map(|(&a, &e)| e / a.abs() * 100.0)
        .collect();

    let mre_percent = if relative.is_empty() {
        0.0
    } else {
        relative.iter().sum::<f64>() / relative.len() as f64
    };

    ErrorMetrics {
        mae,
        rmse,
        mre_percent,
    }
}

/// Accuracy rating for a mean relative error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyRating {
    /// Below 10%
    High,
    /// 10% to 20% inclusive
    Good,
    /// Above 20% up to 50% inclusive
    Acceptable,
    /// Above 50%
    Poor,
}

impl AccuracyRating {
    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            AccuracyRating::High => "High accuracy",
            AccuracyRating::Good => "Good accuracy",
            AccuracyRating::Acceptable => "Acceptable accuracy",
            AccuracyRating::Poor => "Poor accuracy",
        }
    }
}

impl fmt::Display for AccuracyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a mean relative error (in percent).
pub fn interpret_accuracy(mre_percent: f64) -> AccuracyRating {
    if mre_percent < 10.0 {
        AccuracyRating::High
    } else if mre_percent <= 20.0 {
        AccuracyRating::Good
    } else if mre_percent <= 50.0 {
        AccuracyRating::Acceptable
    } else {
        AccuracyRating::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_regression_metrics() {
        let actual = [10.0, 20.0, 30.0, 40.0, 50.0];
        let predicted = [12.0, 18.0, 33.0, 37.0, 52.0];

        let metrics = calculate_errors(&actual, &predicted);

        assert_relative_eq!(metrics.mae, 2.4);
        assert_relative_eq!(metrics.rmse, 6.0_f64.sqrt(), epsilon = 1e-12);
        // (20 + 10 + 10 + 7.5 + 4) / 5
        assert_relative_eq!(metrics.mre_percent, 10.3, epsilon = 1e-12);
        assert!(!metrics.is_sentinel());
    }

    #[test]
    fn test_zero_actuals_are_excluded() {
        let metrics = calculate_errors(&[0.0, 10.0], &[5.0, 12.0]);

        assert_relative_eq!(metrics.mae, 3.5);
        assert_relative_eq!(metrics.mre_percent, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_all_zero_actuals() {
        let metrics = calculate_errors(&[0.0, 0.0], &[1.0, 3.0]);

        assert_relative_eq!(metrics.mae, 2.0);
        assert_eq!(metrics.mre_percent, 0.0);
    }

    #[test]
    fn test_sentinel_inputs() {
        assert!(calculate_errors(&[], &[]).is_sentinel());
        assert!(calculate_errors(&[1.0], &[1.0, 2.0]).is_sentinel());
        assert_eq!(calculate_errors(&[], &[]).as_tuple(), (0.0, 0.0, 0.0));
    }

    #[rstest]
    #[case(0.0, AccuracyRating::High)]
    #[case(9.99, AccuracyRating::High)]
    #[case(10.0, AccuracyRating::Good)]
    #[case(20.0, AccuracyRating::Good)]
    #[case(20.01, AccuracyRating::Acceptable)]
    #[case(50.0, AccuracyRating::Acceptable)]
    #[case(50.01, AccuracyRating::Poor)]
    fn test_interpret_accuracy(#[case] mre: f64, #[case] expected: AccuracyRating) {
        assert_eq!(interpret_accuracy(mre), expected);
    }

    #[test]
    fn test_display() {
        let metrics = ErrorMetrics {
            mae: 1.0,
            rmse: 1.5,
            mre_percent: 12.346,
        };
        assert_eq!(metrics.to_string(), "MAE: 1.00, RMSE: 1.50, MRE: 12.35%");
        assert_eq!(metrics.rating().to_string(), "Good accuracy");
    }
}
