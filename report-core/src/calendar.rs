//! Calendar derivations for a report month.
//!
//! Every function here is pure except [`is_today`], which reads the local
//! clock. All functions take an already validated [`Period`], so none of
//! them can fail.
//!
//! # Grid Layout
//!
//! The calendar grid has seven columns starting on Sunday. Day 1 is placed
//! in column [`first_day_offset`]; the slots before it and after the last
//! day are blank:
//!
//! | Sun | Mon | Tue | Wed | Thu | Fri | Sat |
//! |-----|-----|-----|-----|-----|-----|-----|
//! |     |     |     | 1   | 2   | 3   | 4   |
//! | 5   | 6   | ... |     |     |     |     |
//!
//! # Example
//!
//! ```
//! use report_core::Period;
//! use report_core::calendar;
//!
//! let january = Period::new(1, 2025).unwrap();
//!
//! assert_eq!(calendar::days_in_month(&january), 31);
//! assert_eq!(calendar::weekday_name(&january, 1), "Wed");
//! assert_eq!(calendar::first_day_offset(&january), 3);
//! assert!(calendar::is_weekend(&january, 4));
//! ```

use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::models::Period;

/// Short weekday names indexed from Sunday, matching the grid columns.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of days in the period's month.
///
/// # Example
///
/// ```
/// use report_core::{Period, calendar};
///
/// assert_eq!(calendar::days_in_month(&Period::new(2, 2024).unwrap()), 29);
/// assert_eq!(calendar::days_in_month(&Period::new(2, 2023).unwrap()), 28);
/// ```
pub fn days_in_month(period: &Period) -> u32 {
    period.days_in_month()
}

/// The ordered day numbers `1..=days_in_month`.
pub fn day_sequence(period: &Period) -> RangeInclusive<u32> {
    1..=days_in_month(period)
}

/// Weekday index (0 = Sunday) of day 1, used to left-pad the grid.
pub fn first_day_offset(period: &Period) -> u32 {
    period.first_day().weekday().num_days_from_sunday()
}

/// Weekday index (0 = Sunday) of `day`.
fn weekday_index(
    period: &Period,
    day: u32,
) -> usize {
    // +6 rather than -1 keeps day 0 from underflowing
    ((first_day_offset(period) + day + 6) % 7) as usize
}

/// Short English weekday name ("Mon", "Tue", ...) for `day`.
pub fn weekday_name(
    period: &Period,
    day: u32,
) -> &'static str {
    WEEKDAY_NAMES[weekday_index(period, day)]
}

/// Returns `true` if `day` falls on a Saturday or Sunday.
pub fn is_weekend(
    period: &Period,
    day: u32,
) -> bool {
    let index = weekday_index(period, day) as u32;
    index == Weekday::Sun.num_days_from_sunday() || index == Weekday::Sat.num_days_from_sunday()
}

/// Returns `true` if `day` of `period` is `today`.
pub fn is_today_on(
    period: &Period,
    day: u32,
    today: NaiveDate,
) -> bool {
    today.year() == period.year() && today.month() == period.month() && today.day() == day
}

/// Returns `true` if `day` of `period` is the current local date.
///
/// This reads the wall clock on every call; renderers take an explicit date
/// through [`is_today_on`] instead.
pub fn is_today(
    period: &Period,
    day: u32,
) -> bool {
    is_today_on(period, day, Local::now().date_naive())
}

/// Long English month name ("January", ...).
pub fn month_name(period: &Period) -> &'static str {
    MONTH_NAMES[(period.month() - 1) as usize]
}

/// Number of week rows needed to show the whole month in a 7-column grid.
pub fn grid_rows(period: &Period) -> u32 {
    (first_day_offset(period) + days_in_month(period)).div_ceil(7)
}

/// One entry per grid slot, row-major: `None` for blank slots, `Some(day)`
/// otherwise. The length is always `grid_rows * 7`.
///
/// # Example
///
/// ```
/// use report_core::{Period, calendar};
///
/// // February 2026 starts on a Sunday and fills exactly four rows.
/// let cells = calendar::grid_cells(&Period::new(2, 2026).unwrap());
///
/// assert_eq!(cells.len(), 28);
/// assert_eq!(cells[0], Some(1));
/// assert_eq!(cells[27], Some(28));
/// ```
pub fn grid_cells(period: &Period) -> Vec<Option<u32>> {
    let offset = first_day_offset(period) as usize;
    let total = grid_rows(period) as usize * 7;

    let mut cells = vec![None; offset];
    cells.extend(day_sequence(period).map(Some));
    cells.resize(total, None);
    cells
}
