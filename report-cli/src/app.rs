//! Report pipeline: role check, session, validation, export, sink.
//!
//! Failures of one report never abort the others. Each is logged, recorded
//! in the [`RunSummary`] and reflected in the process exit status.

use std::path::PathBuf;

use chrono::NaiveDate;
use report_core::{
    AccessPolicy, PeriodError, ReportForm, ReportSession, ValidationError, WorkedDayError,
};
use report_export::{
    ExportError, ExportFormat, ExporterRegistry, FileSink, PdfExporter, PdfLayout,
    SpreadsheetExporter,
};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::csv_loader::BatchRow;

/// Caller holds none of the allowed roles.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("not authorized to generate activity reports (roles: {})", display_roles(.roles))]
pub struct AccessDenied {
    pub roles: Vec<String>,
}

fn display_roles(roles: &[String]) -> String {
    if roles.is_empty() {
        "none".to_string()
    } else {
        roles.join(", ")
    }
}

/// Why a single report was not written.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Period(#[from] PeriodError),

    #[error(transparent)]
    WorkedDay(#[from] WorkedDayError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ReportError {
    /// User-facing lines; validation problems get one line per field.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(err) => err.messages(),
            other => vec![other.to_string()],
        }
    }
}

/// One report to produce: the form, the days to mark worked and a label
/// used in log lines and messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub label: String,
    pub form: ReportForm,
    pub worked_days: Vec<u32>,
}

impl From<BatchRow> for ReportRequest {
    fn from(row: BatchRow) -> Self {
        Self {
            label: format!("row {}", row.row),
            form: row.form,
            worked_days: row.worked_days,
        }
    }
}

#[derive(Debug)]
pub enum ReportOutcome {
    Written(PathBuf),
    Failed(ReportError),
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(String, ReportOutcome)>,
}

impl RunSummary {
    pub fn written(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|(_, outcome)| match outcome {
                ReportOutcome::Written(path) => Some(path),
                ReportOutcome::Failed(_) => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<(&str, &ReportError)> {
        self.outcomes
            .iter()
            .filter_map(|(label, outcome)| match outcome {
                ReportOutcome::Failed(err) => Some((label.as_str(), err)),
                ReportOutcome::Written(_) => None,
            })
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().is_empty()
    }
}

/// Rejects callers whose roles do not intersect the policy.
pub fn ensure_authorized(
    policy: &AccessPolicy,
    roles: &[String],
) -> Result<(), AccessDenied> {
    if policy.is_authorized(roles) {
        Ok(())
    } else {
        warn!(?roles, "report access denied");
        Err(AccessDenied {
            roles: roles.to_vec(),
        })
    }
}

/// Registry with both exporters; PDFs use `layout`.
pub fn build_registry(
    layout: PdfLayout,
    creator: &str,
) -> ExporterRegistry {
    let mut registry = ExporterRegistry::new();
    registry.register(Box::new(SpreadsheetExporter::new(creator)));
    registry.register(Box::new(PdfExporter::new(layout, creator)));
    registry
}

/// Opens a session for `request` and marks its worked days.
///
/// The form is validated first, so blank fields are reported ahead of a bad
/// period or an out-of-month day.
pub fn open_session(request: &ReportRequest) -> Result<ReportSession, ReportError> {
    request.form.validate()?;
    let mut session = ReportSession::new(request.form.clone())?;
    for day in &request.worked_days {
        session.toggle_day(*day)?;
    }
    Ok(session)
}

/// Validates, renders and stores one report.
///
/// The session is only read, so a failed export can be retried as is.
pub fn export_session(
    session: &ReportSession,
    registry: &ExporterRegistry,
    format: ExportFormat,
    sink: &mut dyn FileSink,
    generated_on: NaiveDate,
) -> Result<PathBuf, ReportError> {
    let data = session.prepare_export(generated_on)?;
    let file = registry.export(format, &data)?;
    Ok(sink.write(&file)?)
}

pub fn generate_report(
    request: &ReportRequest,
    registry: &ExporterRegistry,
    format: ExportFormat,
    sink: &mut dyn FileSink,
    generated_on: NaiveDate,
) -> Result<PathBuf, ReportError> {
    let session = open_session(request)?;
    export_session(&session, registry, format, sink, generated_on)
}

/// Generates every request in order, continuing past failures.
pub fn run(
    requests: &[ReportRequest],
    registry: &ExporterRegistry,
    format: ExportFormat,
    sink: &mut dyn FileSink,
    generated_on: NaiveDate,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for request in requests {
        let outcome = match generate_report(request, registry, format, sink, generated_on) {
            Ok(path) => ReportOutcome::Written(path),
            Err(err) => {
                error!(report = %request.label, error = %err, "report not generated");
                ReportOutcome::Failed(err)
            }
        };
        summary.outcomes.push((request.label.clone(), outcome));
    }

    info!(
        total = requests.len(),
        failed = summary.failures().len(),
        "report run finished"
    );
    summary
}
