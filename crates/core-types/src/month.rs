use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month (year plus month number), the grain of the entire
/// forecasting pipeline.
///
/// The derived `Ord` on `(year, month)` gives chronological ordering, which
/// the feature builder relies on when sorting monthly rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// Month number in `1..=12`.
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The absolute month index since the 1970 epoch: January 1970 is 0,
    /// February 1970 is 1, and so on. Months before 1970 are negative.
    pub fn ordinal(&self) -> i64 {
        (self.year as i64 - 1970) * 12 + (self.month as i64 - 1)
    }

    /// Inverts `ordinal`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        Self {
            year: (1970 + ordinal.div_euclid(12)) as i32,
            month: (ordinal.rem_euclid(12) + 1) as u32,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
