//! PDF export.
//!
//! Each page is first built as a display list of [`PdfOp`]s in top-left
//! millimetre coordinates, then replayed onto `printpdf`. Tests inspect the
//! display list directly.
//!
//! | Layout                | Pages | Body                                  |
//! |-----------------------|-------|---------------------------------------|
//! | [`PdfLayout::Table`]    | 1+    | worked-day table, header repeated     |
//! | [`PdfLayout::Calendar`] | 1     | month grid, legend and summary        |

pub mod calendar;
pub mod ops;
mod render;
pub mod table;

use report_core::ReportData;
use tracing::debug;

pub use ops::{FontWeight, PdfOp, PdfPage, RgbColor};

use crate::document::{DEFAULT_CREATOR, DocumentInfo};
use crate::error::ExportError;
use crate::exporter::Exporter;
use crate::filename;
use crate::format::{ExportFormat, PdfLayout};

/// Complete PDF content: document properties plus one display list per page.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfDocumentLayout {
    pub info: DocumentInfo,
    pub pages: Vec<PdfPage>,
}

impl PdfDocumentLayout {
    pub fn build(
        data: &ReportData,
        layout: PdfLayout,
        creator: &str,
    ) -> Self {
        let info = DocumentInfo::for_report(data, creator);
        let (info, pages) = match layout {
            PdfLayout::Table => (info, table::layout(data)),
            PdfLayout::Calendar => (info.with_keyword("calendar"), vec![calendar::layout(data)]),
        };
        debug!(%layout, pages = pages.len(), "built PDF layout");
        Self { info, pages }
    }

    /// Writes the document as PDF bytes.
    ///
    /// # Errors
    /// [`ExportError::Pdf`] when `printpdf` fails to load fonts or serialize.
    pub fn render(&self) -> Result<Vec<u8>, ExportError> {
        render::render(self)
    }
}

/// Writes reports as A4 portrait PDFs in the configured layout.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    layout: PdfLayout,
    creator: String,
}

impl PdfExporter {
    pub fn new(
        layout: PdfLayout,
        creator: impl Into<String>,
    ) -> Self {
        Self {
            layout,
            creator: creator.into(),
        }
    }

    pub fn layout(&self) -> PdfLayout {
        self.layout
    }

    pub fn document(
        &self,
        data: &ReportData,
    ) -> PdfDocumentLayout {
        PdfDocumentLayout::build(data, self.layout, &self.creator)
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new(PdfLayout::default(), DEFAULT_CREATOR)
    }
}

impl Exporter for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn file_name(
        &self,
        data: &ReportData,
    ) -> String {
        filename::pdf_name(&data.criteria, self.layout)
    }

    fn render(
        &self,
        data: &ReportData,
    ) -> Result<Vec<u8>, ExportError> {
        self.document(data).render()
    }
}
