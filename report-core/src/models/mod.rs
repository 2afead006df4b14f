mod day_info;
mod period;
mod report_criteria;
mod report_summary;

pub use day_info::{DayInfo, DayStatus};
pub use period::{Period, PeriodError};
pub use report_criteria::ReportCriteria;
pub use report_summary::ReportSummary;
