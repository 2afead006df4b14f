//! CSV loader for batch report generation.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive and must match exactly. Surrounding whitespace
//! in every cell is ignored.
//!
//! | Column         | Required | Type    | Notes                                   |
//! |----------------|----------|---------|-----------------------------------------|
//! | `client_name`  | yes      | string  | blank cells fail at export, not here    |
//! | `project_name` | yes      | string  |                                         |
//! | `subject`      | yes      | string  |                                         |
//! | `month`        | yes      | integer | `1`–`12`                                |
//! | `year`         | yes      | integer | four digits                             |
//! | `worked_days`  | no       | string  | day list, e.g. `1-3,6,7`; empty = none  |
//!
//! ### Example
//!
//! ```csv
//! client_name,project_name,subject,month,year,worked_days
//! Acme Corp,Apollo,Backend work,1,2025,"1-3,6,7"
//! Globex,Hydra,Audit,2,2024,
//! ```

use std::fs;
use std::io;
use std::path::Path;

use report_core::{Period, PeriodError, ReportForm};
use serde::Deserialize;
use tracing::debug;

use crate::day_list::{DayListError, parse_day_list};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    client_name: String,
    project_name: String,
    subject: String,
    month: u32,
    year: i32,
    #[serde(default)]
    worked_days: String,
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One report to generate, as read from the batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub form: ReportForm,
    pub worked_days: Vec<u32>,
}

/// Errors that can occur while loading a batch file.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read batch file: {0}")]
    Io(#[from] io::Error),

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("invalid worked days on row {row}: {source}")]
    InvalidDays {
        row: usize,
        #[source]
        source: DayListError,
    },

    #[error("invalid period on row {row}: {source}")]
    InvalidPeriod {
        row: usize,
        #[source]
        source: PeriodError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<BatchRow, CsvLoadError> {
    Period::new(row.month, row.year).map_err(|source| CsvLoadError::InvalidPeriod {
        row: row_number,
        source,
    })?;

    let worked_days =
        parse_day_list(&row.worked_days).map_err(|source| CsvLoadError::InvalidDays {
            row: row_number,
            source,
        })?;

    Ok(BatchRow {
        row: row_number,
        form: ReportForm {
            client_name: row.client_name,
            project_name: row.project_name,
            subject: row.subject,
            month: row.month,
            year: row.year,
        },
        worked_days,
    })
}

/// Parse CSV text and return one [`BatchRow`] per data row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or a
///   required column is missing.
/// * [`CsvLoadError::InvalidPeriod`] / [`CsvLoadError::InvalidDays`] naming
///   the first offending row.
pub fn load_from_str(input: &str) -> Result<Vec<BatchRow>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let rows = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = rows.len(), "loaded batch rows");
    Ok(rows)
}

/// Reads `path` and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<BatchRow>, CsvLoadError> {
    let contents = fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
