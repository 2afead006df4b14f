//! Session → exporter → sink, for every format and layout.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use report_core::{ReportData, ReportForm, ReportSession};
use report_export::pdf::PdfOp;
use report_export::workbook::{SUMMARY_SHEET, WORKED_DAYS_SHEET};
use report_export::{
    DEFAULT_CREATOR, DirectorySink, ExportFormat, Exporter, ExporterRegistry, FileSink,
    PdfExporter, PdfLayout, SpreadsheetExporter,
};

fn january_report(client_name: &str) -> ReportData {
    let form = ReportForm {
        client_name: client_name.to_string(),
        project_name: "Apollo".to_string(),
        subject: "Backend work".to_string(),
        month: 1,
        year: 2025,
    };
    let mut session = ReportSession::new(form).expect("valid period");
    for day in [1, 2, 3, 6, 7] {
        session.toggle_day(day).expect("day inside January");
    }
    session
        .prepare_export(NaiveDate::from_ymd_opt(2025, 1, 7).expect("valid date"))
        .expect("form is complete")
}

fn registry(layout: PdfLayout) -> ExporterRegistry {
    let mut registry = ExporterRegistry::new();
    registry.register(Box::new(SpreadsheetExporter::new(DEFAULT_CREATOR)));
    registry.register(Box::new(PdfExporter::new(layout, DEFAULT_CREATOR)));
    registry
}

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "report-export-it-{tag}-{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn spreadsheet_lists_the_five_worked_days() {
    let layout = SpreadsheetExporter::default().layout(&january_report("Acme Corp"));

    let detail = layout.sheet(WORKED_DAYS_SHEET).expect("detail sheet");
    let days: Vec<&str> = detail.rows[1..]
        .iter()
        .map(|row| row.cells[0].as_str())
        .collect();

    assert_eq!(layout.sheet_names(), vec![SUMMARY_SHEET, WORKED_DAYS_SHEET]);
    assert_eq!(days, ["01", "02", "03", "06", "07"]);
    assert_eq!(
        layout.sheet(SUMMARY_SHEET).and_then(|s| s.cell(8, 1)),
        Some("5 days")
    );
}

#[test]
fn calendar_highlights_generation_day() {
    let data = january_report("Acme Corp");
    let doc = PdfExporter::new(PdfLayout::Calendar, DEFAULT_CREATOR).document(&data);

    let today_borders = doc.pages[0]
        .ops
        .iter()
        .filter(|op| matches!(op, PdfOp::StrokeRect { thickness, .. } if *thickness == 1.0))
        .count();

    assert_eq!(today_borders, 1);
}

#[test]
fn every_format_lands_in_the_output_directory() {
    let dir = scratch_dir("all-formats");
    let mut sink = DirectorySink::new(&dir);
    let data = january_report("Acme/West");

    for layout in [PdfLayout::Table, PdfLayout::Calendar] {
        let registry = registry(layout);
        for format in [ExportFormat::Xlsx, ExportFormat::Pdf] {
            let file = registry.export(format, &data).expect("export succeeds");
            sink.write(&file).expect("write succeeds");
        }
    }

    let mut names: Vec<String> = fs::read_dir(&dir)
        .expect("output dir exists")
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec![
            "activity-report-Acme_West-January-2025.xlsx",
            "activity-report-calendar-Acme_West-January-2025.pdf",
            "activity-report-plain-Acme_West-January-2025.pdf",
        ]
    );

    let pdf = fs::read(dir.join("activity-report-plain-Acme_West-January-2025.pdf"))
        .expect("pdf written");
    assert!(pdf.starts_with(b"%PDF"));
    let xlsx = fs::read(dir.join("activity-report-Acme_West-January-2025.xlsx"))
        .expect("xlsx written");
    assert!(xlsx.starts_with(b"PK"));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn exporters_are_reentrant() {
    let data = january_report("Acme Corp");
    let exporter = PdfExporter::new(PdfLayout::Table, DEFAULT_CREATOR);

    assert_eq!(exporter.document(&data), exporter.document(&data));
    assert_eq!(exporter.file_name(&data), exporter.file_name(&data));
}
