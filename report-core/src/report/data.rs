use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::calendar;
use crate::models::{DayInfo, Period, ReportCriteria, ReportSummary};
use crate::report::aggregator::{days_info, summary, worked_only};
use crate::worked_days::WorkedDaySet;

/// Snapshot of everything an exporter needs for one report.
///
/// Built once per export so every section of a document reads the same
/// state. `generated_on` doubles as "today" for calendar highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportData {
    pub criteria: ReportCriteria,
    pub days_info: Vec<DayInfo>,
    pub worked_only: Vec<DayInfo>,
    pub summary: ReportSummary,
    pub generated_on: NaiveDate,
}

impl ReportData {
    pub fn build(
        criteria: ReportCriteria,
        worked: &WorkedDaySet,
        generated_on: NaiveDate,
    ) -> Self {
        let period = criteria.period();
        if worked.len() != period.days_in_month() as usize {
            warn!(
                worked_len = worked.len(),
                days_in_month = period.days_in_month(),
                "worked days do not match the month length"
            );
        }

        let days_info = days_info(&period, worked);
        let worked_only = worked_only(&days_info);
        let summary = summary(&days_info);
        debug!(
            period = %period,
            worked = summary.worked_days_count,
            weekend = summary.weekend_days_count,
            "aggregated report data"
        );

        Self {
            criteria,
            days_info,
            worked_only,
            summary,
            generated_on,
        }
    }

    pub fn period(&self) -> Period {
        self.criteria.period()
    }

    pub fn month_name(&self) -> &'static str {
        calendar::month_name(&self.criteria.period())
    }

    /// Full-month classification for `day`, if it belongs to the month.
    pub fn day(
        &self,
        day: u32,
    ) -> Option<&DayInfo> {
        day.checked_sub(1)
            .and_then(|index| self.days_info.get(index as usize))
    }

    pub fn is_today(
        &self,
        day: u32,
    ) -> bool {
        calendar::is_today_on(&self.criteria.period(), day, self.generated_on)
    }

    /// Generation date as a US-style short date, e.g. `1/31/2025`.
    pub fn generated_on_label(&self) -> String {
        self.generated_on.format("%-m/%-d/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::DayStatus;

    fn criteria() -> ReportCriteria {
        ReportCriteria::new("Acme", "Apollo", "Backend", Period::new(1, 2025).unwrap()).unwrap()
    }

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn build_aggregates_full_month_and_worked_days() {
        let mut worked = WorkedDaySet::with_len(31);
        worked.toggle(0).unwrap();
        worked.toggle(3).unwrap();

        let data = ReportData::build(criteria(), &worked, date(2025, 1, 31));

        assert_eq!(data.days_info.len(), 31);
        assert_eq!(data.worked_only.len(), 2);
        assert_eq!(data.summary.worked_days_count, 2);
        assert_eq!(data.summary.weekend_days_count, 7);
    }

    #[test]
    fn day_lookup_is_one_based() {
        let data = ReportData::build(criteria(), &WorkedDaySet::with_len(31), date(2025, 2, 1));

        assert_eq!(data.day(1).map(|d| d.weekday), Some("Wed"));
        assert_eq!(data.day(4).map(|d| d.status), Some(DayStatus::Weekend));
        assert!(data.day(0).is_none());
        assert!(data.day(32).is_none());
    }

    #[test]
    fn is_today_uses_generation_date() {
        let data = ReportData::build(criteria(), &WorkedDaySet::with_len(31), date(2025, 1, 15));

        assert!(data.is_today(15));
        assert!(!data.is_today(16));
    }

    #[test]
    fn generated_on_label_is_unpadded_us_date() {
        let data = ReportData::build(criteria(), &WorkedDaySet::with_len(31), date(2025, 3, 7));

        assert_eq!(data.generated_on_label(), "3/7/2025");
    }

    #[test]
    fn month_name_comes_from_period() {
        let data = ReportData::build(criteria(), &WorkedDaySet::with_len(31), date(2025, 3, 7));

        assert_eq!(data.month_name(), "January");
    }
}
