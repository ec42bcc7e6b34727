//! Monthly time series data handling for forecasting

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month
///
/// Ordering follows the calendar. The `"YYYY-MM"` text form is only used at
/// the edges (display, parsing, serde); years beyond four digits or before
/// year zero keep their full signed width, e.g. `"10000-01"` or `"-005-03"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a new period, validating the month
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::DataError(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }

        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following calendar month
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of months from `self` to `other` (negative if `other` is earlier)
    pub fn months_until(&self, other: &Period) -> i64 {
        (other.year as i64 - self.year as i64) * 12 + (other.month as i64 - self.month as i64)
    }

    /// First day of the month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ForecastError::DataError(format!("Invalid period '{}', expected YYYY-MM", s));
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        // Years are zero-padded to at least four characters and may be
        // negative or wider than four digits.
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year_digits = year.strip_prefix('-').unwrap_or(year);
        if year.len() < 4 || !all_digits(year_digits) || month.len() != 2 || !all_digits(month) {
            return Err(invalid());
        }

        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Period::new(year, month)
    }
}

impl TryFrom<String> for Period {
    type Error = ForecastError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

/// Which series to forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Number of bookings created per month
    Bookings,
    /// Sum of booking prices per month
    Revenue,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Bookings => "bookings",
            Metric::Revenue => "revenue",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bookings" => Ok(Metric::Bookings),
            "revenue" => Ok(Metric::Revenue),
            other => Err(ForecastError::InvalidParameter(format!(
                "Unknown metric: {}",
                other
            ))),
        }
    }
}

/// One monthly observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub period: Period,
    pub value: f64,
}

impl Sample {
    pub fn new(period: Period, value: f64) -> Self {
        Self { period, value }
    }
}

/// Month-ordered series of samples
///
/// Periods are strictly increasing. Missing months are allowed and are not
/// filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    samples: Vec<Sample>,
}

impl TimeSeries {
    /// Create a new time series, checking ordering and values
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if let Some(bad) = samples.iter().find(|s| !s.value.is_finite()) {
            return Err(ForecastError::DataError(format!(
                "Non-finite value {} for {}",
                bad.value, bad.period
            )));
        }

        if let Some(pair) = samples.windows(2).find(|w| w[0].period >= w[1].period) {
            return Err(ForecastError::DataError(format!(
                "Periods must be strictly increasing: {} is followed by {}",
                pair[0].period, pair[1].period
            )));
        }

        Ok(Self { samples })
    }

    /// Build from `(period, value)` pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Period, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(period, value)| Sample::new(period, value))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    pub fn periods(&self) -> Vec<Period> {
        self.samples.iter().map(|s| s.period).collect()
    }

    pub fn first_period(&self) -> Option<Period> {
        self.samples.first().map(|s| s.period)
    }

    pub fn last_period(&self) -> Option<Period> {
        self.samples.last().map(|s| s.period)
    }

    /// Whether any consecutive samples are more than one month apart
    pub fn has_gaps(&self) -> bool {
        self.samples
            .windows(2)
            .any(|w| w[0].period.months_until(&w[1].period) > 1)
    }

    /// Split into a training prefix and the last `holdout` samples.
    ///
    /// `holdout` is capped at the series length.
    pub fn split_at_holdout(&self, holdout: usize) -> (&[Sample], &[Sample]) {
        let cut = self.samples.len() - holdout.min(self.samples.len());
        self.samples.split_at(cut)
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}
