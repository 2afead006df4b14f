use serde::Serialize;

/// Aggregate counts for one report. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub worked_days_count: usize,
    /// Unworked Saturdays and Sundays only, not every weekend day of the
    /// month. A worked Saturday counts toward `worked_days_count` instead,
    /// so the two totals never overlap.
    pub weekend_days_count: usize,
}

impl ReportSummary {
    /// "`n` days", the wording used in both export formats.
    pub fn worked_days_label(&self) -> String {
        format!("{} days", self.worked_days_count)
    }

    pub fn weekend_days_label(&self) -> String {
        format!("{} days", self.weekend_days_count)
    }
}
