//! Spreadsheet export.
//!
//! The workbook is first described as plain rows ([`WorkbookLayout`]) and
//! only then written through `rust_xlsxwriter`, so the sheet structure can
//! be checked without decoding an `.xlsx` file.
//!
//! | Sheet         | Contents                                       |
//! |---------------|------------------------------------------------|
//! | `Summary`     | label/value pairs describing the report        |
//! | `Worked Days` | `Day \| Weekday \| Status`, one row per worked day |

use report_core::ReportData;
use rust_xlsxwriter::{Color, DocProperties, Format, FormatAlign, FormatBorder, Workbook};
use tracing::debug;

use crate::document::{DEFAULT_CREATOR, DocumentInfo, REPORT_TITLE};
use crate::error::ExportError;
use crate::exporter::Exporter;
use crate::filename;
use crate::format::ExportFormat;

pub const SUMMARY_SHEET: &str = "Summary";
pub const WORKED_DAYS_SHEET: &str = "Worked Days";

/// How a row is styled when written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Title,
    Section,
    /// Column headings of a table.
    Header,
    /// Bold label in the first column, plain value after it.
    Field,
    Plain,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub style: RowStyle,
    pub cells: Vec<String>,
}

impl SheetRow {
    fn new(
        style: RowStyle,
        cells: &[&str],
    ) -> Self {
        Self {
            style,
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn field(
        label: &str,
        value: &str,
    ) -> Self {
        Self::new(RowStyle::Field, &[label, value])
    }

    fn blank() -> Self {
        Self {
            style: RowStyle::Blank,
            cells: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub name: &'static str,
    pub column_widths: Vec<f64>,
    pub rows: Vec<SheetRow>,
}

impl SheetLayout {
    /// Cell text at `row`/`col`, if present.
    pub fn cell(
        &self,
        row: usize,
        col: usize,
    ) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(col))
            .map(String::as_str)
    }
}

/// Complete workbook content, in sheet order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookLayout {
    pub info: DocumentInfo,
    pub sheets: Vec<SheetLayout>,
}

impl WorkbookLayout {
    pub fn build(
        data: &ReportData,
        creator: &str,
    ) -> Self {
        let layout = Self {
            info: DocumentInfo::for_report(data, creator),
            sheets: vec![summary_sheet(data), worked_days_sheet(data)],
        };
        debug!(
            sheets = layout.sheets.len(),
            worked_rows = data.worked_only.len(),
            "built workbook layout"
        );
        layout
    }

    pub fn sheet(
        &self,
        name: &str,
    ) -> Option<&SheetLayout> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&'static str> {
        self.sheets.iter().map(|s| s.name).collect()
    }

    /// Writes the layout as `.xlsx` bytes.
    ///
    /// # Errors
    /// [`ExportError::Spreadsheet`] for anything `rust_xlsxwriter` rejects.
    pub fn render(&self) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let formats = SheetFormats::new();

        let properties = DocProperties::new()
            .set_title(&self.info.title)
            .set_subject(&self.info.subject)
            .set_author(&self.info.author)
            .set_keywords(self.info.keyword_list())
            .set_comment(format!("Created by {}", self.info.creator));
        workbook.set_properties(&properties);

        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet.name)?;

            for (col, width) in sheet.column_widths.iter().enumerate() {
                worksheet.set_column_width(col as u16, *width)?;
            }

            for (row_index, row) in sheet.rows.iter().enumerate() {
                let row_index = row_index as u32;
                for (col, value) in row.cells.iter().enumerate() {
                    let col = col as u16;
                    match formats.for_cell(row.style, col) {
                        Some(format) => {
                            worksheet.write_string_with_format(row_index, col, value, format)?
                        }
                        None => worksheet.write_string(row_index, col, value)?,
                    };
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

struct SheetFormats {
    title: Format,
    section: Format,
    header: Format,
    label: Format,
    centered: Format,
}

impl SheetFormats {
    fn new() -> Self {
        Self {
            title: Format::new().set_bold().set_font_size(16),
            section: Format::new().set_bold().set_font_size(12),
            header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(0x2C3E50))
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
            label: Format::new().set_bold(),
            centered: Format::new()
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
        }
    }

    fn for_cell(
        &self,
        style: RowStyle,
        col: u16,
    ) -> Option<&Format> {
        match style {
            RowStyle::Title => Some(&self.title),
            RowStyle::Section => Some(&self.section),
            RowStyle::Header => Some(&self.header),
            RowStyle::Field if col == 0 => Some(&self.label),
            RowStyle::Plain => Some(&self.centered),
            RowStyle::Field | RowStyle::Blank => None,
        }
    }
}

fn summary_sheet(data: &ReportData) -> SheetLayout {
    let criteria = &data.criteria;
    let period = criteria.period().to_string();
    let worked = data.summary.worked_days_label();
    let weekend = data.summary.weekend_days_label();
    let generated_on = data.generated_on_label();

    SheetLayout {
        name: SUMMARY_SHEET,
        column_widths: vec![22.0, 40.0],
        rows: vec![
            SheetRow::new(RowStyle::Title, &[REPORT_TITLE]),
            SheetRow::blank(),
            SheetRow::field("Client:", criteria.client_name()),
            SheetRow::field("Project:", criteria.project_name()),
            SheetRow::field("Subject:", criteria.subject()),
            SheetRow::field("Period:", &period),
            SheetRow::blank(),
            SheetRow::new(RowStyle::Section, &["Summary"]),
            SheetRow::field("Total Days Worked:", &worked),
            SheetRow::field("Weekend Days:", &weekend),
            SheetRow::field("Generated on:", &generated_on),
        ],
    }
}

fn worked_days_sheet(data: &ReportData) -> SheetLayout {
    let mut rows = vec![SheetRow::new(RowStyle::Header, &["Day", "Weekday", "Status"])];
    rows.extend(data.worked_only.iter().map(|info| {
        SheetRow::new(
            RowStyle::Plain,
            &[info.padded_day().as_str(), info.weekday, info.status.as_str()],
        )
    }));

    SheetLayout {
        name: WORKED_DAYS_SHEET,
        column_widths: vec![8.0, 12.0, 12.0],
        rows,
    }
}

/// Writes reports as two-sheet `.xlsx` workbooks.
#[derive(Debug, Clone)]
pub struct SpreadsheetExporter {
    creator: String,
}

impl SpreadsheetExporter {
    pub fn new(creator: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
        }
    }

    pub fn layout(
        &self,
        data: &ReportData,
    ) -> WorkbookLayout {
        WorkbookLayout::build(data, &self.creator)
    }
}

impl Default for SpreadsheetExporter {
    fn default() -> Self {
        Self::new(DEFAULT_CREATOR)
    }
}

impl Exporter for SpreadsheetExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn file_name(
        &self,
        data: &ReportData,
    ) -> String {
        filename::spreadsheet_name(&data.criteria)
    }

    fn render(
        &self,
        data: &ReportData,
    ) -> Result<Vec<u8>, ExportError> {
        self.layout(data).render()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use report_core::{Period, ReportCriteria, WorkedDaySet};

    use super::*;

    fn data(worked_days: &[usize]) -> ReportData {
        let criteria =
            ReportCriteria::new("Acme Corp", "Apollo", "Backend work", Period::new(1, 2025).unwrap())
                .unwrap();
        let mut worked = WorkedDaySet::with_len(31);
        for day in worked_days {
            worked.toggle(day - 1).unwrap();
        }
        ReportData::build(
            criteria,
            &worked,
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
        )
    }

    fn texts(row: &SheetRow) -> Vec<&str> {
        row.cells.iter().map(String::as_str).collect()
    }

    // =========================================================================
    // Sheet structure
    // =========================================================================

    #[test]
    fn workbook_has_summary_then_worked_days() {
        let layout = WorkbookLayout::build(&data(&[1]), DEFAULT_CREATOR);

        assert_eq!(layout.sheet_names(), vec!["Summary", "Worked Days"]);
    }

    #[test]
    fn summary_rows_follow_fixed_order() {
        let layout = WorkbookLayout::build(&data(&[1, 2, 3, 6, 7]), DEFAULT_CREATOR);
        let summary = layout.sheet(SUMMARY_SHEET).unwrap();

        let rows: Vec<Vec<&str>> = summary.rows.iter().map(texts).collect();

        assert_eq!(
            rows,
            vec![
                vec!["Activity Report"],
                vec![],
                vec!["Client:", "Acme Corp"],
                vec!["Project:", "Apollo"],
                vec!["Subject:", "Backend work"],
                vec!["Period:", "January 2025"],
                vec![],
                vec!["Summary"],
                vec!["Total Days Worked:", "5 days"],
                vec!["Weekend Days:", "8 days"],
                vec!["Generated on:", "2/3/2025"],
            ]
        );
    }

    #[test]
    fn worked_days_sheet_lists_only_worked_days() {
        let layout = WorkbookLayout::build(&data(&[3, 14]), DEFAULT_CREATOR);
        let sheet = layout.sheet(WORKED_DAYS_SHEET).unwrap();

        let rows: Vec<Vec<&str>> = sheet.rows.iter().map(texts).collect();

        assert_eq!(
            rows,
            vec![
                vec!["Day", "Weekday", "Status"],
                vec!["03", "Fri", "Worked"],
                vec!["14", "Tue", "Worked"],
            ]
        );
        assert_eq!(sheet.rows[0].style, RowStyle::Header);
    }

    #[test]
    fn worked_days_sheet_with_nothing_worked_has_only_header() {
        let layout = WorkbookLayout::build(&data(&[]), DEFAULT_CREATOR);

        assert_eq!(layout.sheet(WORKED_DAYS_SHEET).unwrap().rows.len(), 1);
    }

    #[test]
    fn cell_lookup_handles_missing_cells() {
        let layout = WorkbookLayout::build(&data(&[]), DEFAULT_CREATOR);
        let summary = layout.sheet(SUMMARY_SHEET).unwrap();

        assert_eq!(summary.cell(2, 1), Some("Acme Corp"));
        assert_eq!(summary.cell(1, 0), None);
        assert_eq!(summary.cell(99, 0), None);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn document_info_comes_from_criteria() {
        let layout = WorkbookLayout::build(&data(&[]), "Custom Tool");

        assert_eq!(layout.info.title, "Activity Report");
        assert_eq!(layout.info.author, "Acme Corp");
        assert_eq!(layout.info.subject, "Backend work");
        assert_eq!(layout.info.creator, "Custom Tool");
    }

    #[test]
    fn render_produces_zip_container() {
        let bytes = SpreadsheetExporter::default()
            .render(&data(&[1, 2]))
            .unwrap();

        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn exporter_names_file_after_client_and_period() {
        let exporter = SpreadsheetExporter::default();

        assert_eq!(
            exporter.file_name(&data(&[])),
            "activity-report-Acme Corp-January-2025.xlsx"
        );
        assert_eq!(exporter.format(), ExportFormat::Xlsx);
    }
}
