//! Output file names.
//!
//! Names embed the client name as typed, so anything a filesystem would
//! treat as a separator or reserved character is replaced with `_`.
//!
//! ```
//! use report_core::{Period, ReportCriteria};
//! use report_export::{PdfLayout, filename};
//!
//! let criteria = ReportCriteria::new("Acme/West", "Apollo", "Backend", Period::new(1, 2025)?)?;
//!
//! assert_eq!(
//!     filename::spreadsheet_name(&criteria),
//!     "activity-report-Acme_West-January-2025.xlsx"
//! );
//! assert_eq!(
//!     filename::pdf_name(&criteria, PdfLayout::Calendar),
//!     "activity-report-calendar-Acme_West-January-2025.pdf"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::LazyLock;

use regex::Regex;
use report_core::ReportCriteria;
use report_core::calendar;

use crate::format::PdfLayout;

static RESERVED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\\/:*?"<>|\x00-\x1f\x7f]"#).expect("reserved character pattern is valid")
});

/// Replaces path separators, reserved and control characters with `_`.
pub fn sanitize(component: &str) -> String {
    RESERVED.replace_all(component.trim(), "_").into_owned()
}

/// `activity-report-<client>-<MonthName>-<year>.xlsx`
pub fn spreadsheet_name(criteria: &ReportCriteria) -> String {
    let period = criteria.period();
    format!(
        "activity-report-{}-{}-{}.xlsx",
        sanitize(criteria.client_name()),
        calendar::month_name(&period),
        period.year()
    )
}

/// `activity-report-<calendar|plain>-<client>-<MonthName>-<year>.pdf`
pub fn pdf_name(
    criteria: &ReportCriteria,
    layout: PdfLayout,
) -> String {
    let period = criteria.period();
    format!(
        "activity-report-{}-{}-{}-{}.pdf",
        layout.file_tag(),
        sanitize(criteria.client_name()),
        calendar::month_name(&period),
        period.year()
    )
}
