use std::fmt;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::calendar::month_name;

/// Errors raised when a month/year pair does not name a reportable month.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("year must be a four-digit year, got {0}")]
    InvalidYear(i32),
}

/// A calendar month anchoring every report derivation.
///
/// The day count is resolved once at construction by rolling over to the
/// first day of the following month and stepping back one day, so leap years
/// fall out of the date arithmetic rather than a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    month: u32,
    year: i32,
    first_day: NaiveDate,
    days_in_month: u32,
}

impl Period {
    pub const MIN_YEAR: i32 = 1000;
    pub const MAX_YEAR: i32 = 9999;

    /// Builds a period for `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError`] if the month is outside 1..=12 or the year is
    /// not a four-digit year.
    ///
    /// # Example
    ///
    /// ```
    /// use report_core::{Period, PeriodError};
    ///
    /// let feb = Period::new(2, 2024).unwrap();
    /// assert_eq!(feb.days_in_month(), 29);
    ///
    /// assert_eq!(Period::new(13, 2024), Err(PeriodError::InvalidMonth(13)));
    /// ```
    pub fn new(
        month: u32,
        year: i32,
    ) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(PeriodError::InvalidYear(year));
        }

        let first_day =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::InvalidYear(year))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or(PeriodError::InvalidYear(year))?;

        Ok(Self {
            month,
            year,
            first_day,
            days_in_month: last_day.day(),
        })
    }

    /// The period containing `date`.
    pub fn containing(date: NaiveDate) -> Result<Self, PeriodError> {
        Self::new(date.month(), date.year())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Date of day 1.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Returns `true` if `day` is a day-of-month inside this period.
    pub fn contains_day(
        &self,
        day: u32,
    ) -> bool {
        (1..=self.days_in_month).contains(&day)
    }
}

impl fmt::Display for Period {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {}", month_name(self), self.year)
    }
}
