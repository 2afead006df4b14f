use std::collections::HashMap;

use report_core::ReportData;
use tracing::info;

use crate::error::ExportError;
use crate::format::ExportFormat;

/// A rendered document, ready to be handed to a [`FileSink`](crate::FileSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

/// One implementation per output format. Each exporter is registered with
/// an [`ExporterRegistry`] at startup.
pub trait Exporter: Send + Sync {
    /// Format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// File name for the report described by `data`.
    fn file_name(
        &self,
        data: &ReportData,
    ) -> String;

    /// Renders the complete document in memory.
    ///
    /// # Errors
    /// Whatever the underlying document library raises.
    fn render(
        &self,
        data: &ReportData,
    ) -> Result<Vec<u8>, ExportError>;

    /// Renders `data` and pairs the bytes with their file name.
    fn export(
        &self,
        data: &ReportData,
    ) -> Result<ExportedFile, ExportError> {
        let bytes = self.render(data)?;
        let file_name = self.file_name(data);
        info!(
            format = %self.format(),
            file = %file_name,
            size = bytes.len(),
            "rendered report"
        );
        Ok(ExportedFile {
            file_name,
            format: self.format(),
            bytes,
        })
    }
}

/// Registry of [`Exporter`] instances, keyed by format.
///
/// Typical lifetime:
/// 1. Create with `ExporterRegistry::new()`.
/// 2. Call `register` once per output format.
/// 3. Call `export` for each report.
pub struct ExporterRegistry {
    exporters: HashMap<ExportFormat, Box<dyn Exporter>>,
}

impl ExporterRegistry {
    pub fn new() -> Self {
        Self {
            exporters: HashMap::new(),
        }
    }

    /// Register an exporter.
    ///
    /// An exporter already registered for the same format is replaced.
    pub fn register(
        &mut self,
        exporter: Box<dyn Exporter>,
    ) {
        self.exporters.insert(exporter.format(), exporter);
    }

    /// Registered formats, in a stable order.
    pub fn available_formats(&self) -> Vec<ExportFormat> {
        let mut formats: Vec<_> = self.exporters.keys().copied().collect();
        formats.sort_unstable_by_key(|f| f.as_str());
        formats
    }

    pub fn get(
        &self,
        format: ExportFormat,
    ) -> Option<&dyn Exporter> {
        self.exporters.get(&format).map(|e| e.as_ref())
    }

    /// Dispatch to the exporter registered for `format`.
    ///
    /// # Errors
    /// * [`ExportError::UnknownFormat`] when nothing is registered for `format`.
    /// * Any error the chosen exporter returns.
    pub fn export(
        &self,
        format: ExportFormat,
        data: &ReportData,
    ) -> Result<ExportedFile, ExportError> {
        let exporter = self
            .get(format)
            .ok_or_else(|| ExportError::UnknownFormat(format.to_string()))?;

        exporter.export(data)
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
