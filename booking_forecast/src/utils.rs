//! Utility functions for the booking_forecast crate

use crate::data::Period;

/// The `horizon` months immediately following `last`
pub fn future_periods(last: Period, horizon: usize) -> Vec<Period> {
    let mut periods = Vec::with_capacity(horizon);
    let mut current = last;

    for _ in 0..horizon {
        current = current.succ();
        periods.push(current);
    }

    periods
}

/// Number of trailing samples withheld for the back-test
pub fn holdout_size(series_len: usize, horizon: usize) -> usize {
    horizon.min(series_len)
}
