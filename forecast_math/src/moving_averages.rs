//! Moving average calculation
//!
//! Only the trailing simple moving average is needed by the forecaster.

/// Trailing simple moving average of `series` over `window` values.
///
/// The value at output index `k` is the mean of `series[k..k + window]`, so the
/// output has `series.len() - window + 1` entries in the same order as the
/// input. A series shorter than the window (or a zero window) yields an empty
/// vector: that is the "insufficient data" signal, not an error.
pub fn moving_average(series: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || series.len() < window {
        return Vec::new();
    }

    series
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sma_calculation() {
        let ma = moving_average(&[2.0, 4.0, 6.0, 8.0], 3);

        assert_eq!(ma.len(), 2);
        assert_relative_eq!(ma[0], 4.0); // (2 + 4 + 6) / 3
        assert_relative_eq!(ma[1], 6.0); // (4 + 6 + 8) / 3
    }

    #[test]
    fn test_window_equal_to_length() {
        let ma = moving_average(&[1.0, 2.0, 3.0], 3);
        assert_eq!(ma, vec![2.0]);
    }

    #[test]
    fn test_insufficient_data_is_empty() {
        assert!(moving_average(&[1.0, 2.0], 3).is_empty());
        assert!(moving_average(&[], 1).is_empty());
    }

    #[test]
    fn test_zero_window_is_empty() {
        assert!(moving_average(&[1.0, 2.0, 3.0], 0).is_empty());
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let series = [3.5, 1.25, 9.0];
        assert_eq!(moving_average(&series, 1), series.to_vec());
    }
}
