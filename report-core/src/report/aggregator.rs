//! Day classification and summary counts.
//!
//! # Status Precedence
//!
//! | Worked flag | Weekend | Status      |
//! |-------------|---------|-------------|
//! | `true`      | any     | `Worked`    |
//! | `false`     | yes     | `Weekend`   |
//! | `false`     | no      | `NotWorked` |
//!
//! # Example
//!
//! ```
//! use report_core::{DayStatus, Period, WorkedDaySet};
//! use report_core::report::{days_info, summary, worked_only};
//!
//! let period = Period::new(1, 2025).unwrap();
//! let mut worked = WorkedDaySet::with_len(31);
//! for index in [0, 1, 2, 5, 6] {
//!     worked.toggle(index).unwrap();
//! }
//!
//! let days = days_info(&period, &worked);
//! assert_eq!(days.len(), 31);
//! assert_eq!(days[3].status, DayStatus::Weekend);
//!
//! let totals = summary(&days);
//! assert_eq!(totals.worked_days_count, 5);
//!
//! let reported: Vec<u32> = worked_only(&days).iter().map(|d| d.day).collect();
//! assert_eq!(reported, [1, 2, 3, 6, 7]);
//! ```

use crate::calendar;
use crate::models::{DayInfo, DayStatus, Period, ReportSummary};
use crate::worked_days::WorkedDaySet;

/// Classifies one day of `period`. `day` is 1-based.
pub fn classify(
    period: &Period,
    worked: &WorkedDaySet,
    day: u32,
) -> DayInfo {
    let is_worked = day
        .checked_sub(1)
        .is_some_and(|index| worked.get(index as usize));

    let status = if is_worked {
        DayStatus::Worked
    } else if calendar::is_weekend(period, day) {
        DayStatus::Weekend
    } else {
        DayStatus::NotWorked
    };

    DayInfo {
        day,
        weekday: calendar::weekday_name(period, day),
        status,
    }
}

/// Classifies every day of the month, in day order.
pub fn days_info(
    period: &Period,
    worked: &WorkedDaySet,
) -> Vec<DayInfo> {
    calendar::day_sequence(period)
        .map(|day| classify(period, worked, day))
        .collect()
}

/// Counts worked days and unworked weekend days.
pub fn summary(days: &[DayInfo]) -> ReportSummary {
    days.iter()
        .fold(ReportSummary::default(), |mut totals, info| {
            match info.status {
                DayStatus::Worked => totals.worked_days_count += 1,
                DayStatus::Weekend => totals.weekend_days_count += 1,
                DayStatus::NotWorked => {}
            }
            totals
        })
}

/// The worked days only, in day order. This is what the exports list;
/// days that were not worked are left out entirely.
pub fn worked_only(days: &[DayInfo]) -> Vec<DayInfo> {
    days.iter().copied().filter(DayInfo::is_worked).collect()
}
