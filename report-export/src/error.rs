use std::io;

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Failure while rendering or writing an exported document.
///
/// None of these are retried automatically; the caller keeps its session
/// and may export again.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet generation failed: {0}")]
    Spreadsheet(#[from] XlsxError),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("I/O error writing report: {0}")]
    Io(#[from] io::Error),

    #[error("no exporter registered for format '{0}'")]
    UnknownFormat(String),
}
