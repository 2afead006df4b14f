//! Editing session for one open report.
//!
//! This holds the form and the worked-day toggles while the user edits a
//! report, keeping the worked days sized to the selected month. Nothing here
//! is persisted; the session is dropped once the report is closed.

use chrono::NaiveDate;
use tracing::debug;

use crate::form::{ReportForm, ValidationError};
use crate::models::{DayInfo, Period, PeriodError, ReportSummary};
use crate::report::{self, ReportData};
use crate::worked_days::{WorkedDayError, WorkedDaySet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSession {
    form: ReportForm,
    period: Period,
    worked: WorkedDaySet,
}

impl ReportSession {
    /// Opens a session for `form`, with no days worked.
    pub fn new(form: ReportForm) -> Result<Self, PeriodError> {
        let period = form.period()?;
        Ok(Self {
            worked: WorkedDaySet::with_len(period.days_in_month() as usize),
            form,
            period,
        })
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn worked_days(&self) -> &WorkedDaySet {
        &self.worked
    }

    pub fn set_client_name(
        &mut self,
        value: impl Into<String>,
    ) {
        self.form.client_name = value.into();
    }

    pub fn set_project_name(
        &mut self,
        value: impl Into<String>,
    ) {
        self.form.project_name = value.into();
    }

    pub fn set_subject(
        &mut self,
        value: impl Into<String>,
    ) {
        self.form.subject = value.into();
    }

    /// Switches the report month and resizes the worked days to match.
    ///
    /// An invalid month/year is rejected and leaves the session unchanged.
    pub fn set_period(
        &mut self,
        month: u32,
        year: i32,
    ) -> Result<(), PeriodError> {
        let period = Period::new(month, year)?;
        debug!(from = %self.period, to = %period, "report period changed");

        self.form.month = month;
        self.form.year = year;
        self.period = period;
        self.worked.resize(period.days_in_month() as usize);
        Ok(())
    }

    /// Flips the worked flag of `day` (1-based).
    pub fn toggle_day(
        &mut self,
        day: u32,
    ) -> Result<(), WorkedDayError> {
        // day 0 wraps to an index no month reaches
        self.worked.toggle((day as usize).wrapping_sub(1))
    }

    pub fn days_info(&self) -> Vec<DayInfo> {
        report::days_info(&self.period, &self.worked)
    }

    pub fn summary(&self) -> ReportSummary {
        report::summary(&self.days_info())
    }

    /// Validates the form and snapshots the report for export.
    ///
    /// The session is left untouched either way, so a failed export can be
    /// retried without re-entering anything.
    pub fn prepare_export(
        &self,
        generated_on: NaiveDate,
    ) -> Result<ReportData, ValidationError> {
        let criteria = self.form.validate()?;
        Ok(ReportData::build(criteria, &self.worked, generated_on))
    }
}
