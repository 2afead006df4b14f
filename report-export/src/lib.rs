//! Spreadsheet and PDF rendering for activity reports.
//!
//! Exporters turn a [`ReportData`](report_core::ReportData) snapshot into
//! document bytes; a [`FileSink`] decides where those bytes go.
//!
//! ```
//! use chrono::NaiveDate;
//! use report_core::{ReportForm, ReportSession};
//! use report_export::{
//!     ExportFormat, ExporterRegistry, FileSink, MemorySink, PdfExporter, PdfLayout,
//!     SpreadsheetExporter,
//! };
//!
//! let form = ReportForm {
//!     client_name: "Acme".into(),
//!     project_name: "Apollo".into(),
//!     subject: "Backend".into(),
//!     month: 1,
//!     year: 2025,
//! };
//! let mut session = ReportSession::new(form)?;
//! session.toggle_day(2)?;
//! let data = session.prepare_export(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())?;
//!
//! let mut registry = ExporterRegistry::new();
//! registry.register(Box::new(SpreadsheetExporter::default()));
//! registry.register(Box::new(PdfExporter::new(PdfLayout::Table, "Activity Report Generator")));
//!
//! let file = registry.export(ExportFormat::Xlsx, &data)?;
//! let mut sink = MemorySink::default();
//! sink.write(&file)?;
//!
//! assert_eq!(sink.files[0].file_name, "activity-report-Acme-January-2025.xlsx");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod document;
mod error;
mod exporter;
pub mod filename;
mod format;
pub mod pdf;
mod sink;
pub mod workbook;

pub use document::{DEFAULT_CREATOR, DocumentInfo, REPORT_TITLE};
pub use error::ExportError;
pub use exporter::{ExportedFile, Exporter, ExporterRegistry};
pub use format::{ExportFormat, PdfLayout};
pub use pdf::{PdfDocumentLayout, PdfExporter};
pub use sink::{DirectorySink, FileSink, MemorySink};
pub use workbook::{SpreadsheetExporter, WorkbookLayout};
