//! Calendar layout: a month grid with one colored cell per day, followed by
//! a legend and the summary block.

use report_core::calendar;
use report_core::{DayStatus, ReportData};

use super::ops::{FontWeight, MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PdfPage, RgbColor};

const TITLE_Y: f32 = 20.0;
const SUBTITLE_Y: f32 = 30.0;
const CLIENT_Y: f32 = 45.0;
const CELL_HEIGHT: f32 = 20.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
const CELL_WIDTH: f32 = CONTENT_WIDTH / 7.0;
const CELL_BORDER: f32 = 0.2;
const TODAY_BORDER: f32 = 1.0;
const FOOTER_Y: f32 = PAGE_HEIGHT_MM - 10.0;

const LEGEND: [(RgbColor, &str); 3] = [
    (RgbColor::WORKED, "Worked Days"),
    (RgbColor::WEEKEND, "Weekends"),
    (RgbColor::WHITE, "Regular Days"),
];

/// Position of the day grid on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Top of the weekday header row.
    pub top: f32,
    pub rows: u32,
}

impl GridGeometry {
    /// Top-left corner of the cell at `index` (row-major, header excluded).
    pub fn cell_origin(
        &self,
        index: usize,
    ) -> (f32, f32) {
        let row = (index / 7) as f32;
        let col = (index % 7) as f32;
        (
            MARGIN_MM + col * CELL_WIDTH,
            self.top + CELL_HEIGHT * (row + 1.0),
        )
    }

    /// y just below the last grid row.
    pub fn bottom(&self) -> f32 {
        self.top + CELL_HEIGHT * (self.rows + 1) as f32
    }
}

pub fn layout(data: &ReportData) -> PdfPage {
    let mut page = PdfPage::new();

    let y = draw_header(&mut page, data);
    let grid = draw_grid(&mut page, data, y);
    draw_legend_and_summary(&mut page, data, grid.bottom() + 15.0);

    page.centered_text(
        PAGE_WIDTH_MM / 2.0,
        FOOTER_Y,
        format!("Generated on: {}", data.generated_on_label()),
        8.0,
        FontWeight::Regular,
        RgbColor::FOOTER,
    );
    page
}

/// Grid placement for `data`, matching what [`layout`] draws.
pub fn grid_geometry(data: &ReportData) -> GridGeometry {
    GridGeometry {
        top: header_bottom() + 10.0,
        rows: calendar::grid_rows(&data.period()),
    }
}

fn header_bottom() -> f32 {
    CLIENT_Y + 6.0 + 5.0 * 2.0 + 10.0
}

/// Returns the y where the calendar section starts.
fn draw_header(
    page: &mut PdfPage,
    data: &ReportData,
) -> f32 {
    let criteria = &data.criteria;
    let center = PAGE_WIDTH_MM / 2.0;

    page.centered_text(
        center,
        TITLE_Y,
        "Activity Report",
        18.0,
        FontWeight::Bold,
        RgbColor::HEADING,
    );
    page.centered_text(
        center,
        SUBTITLE_Y,
        criteria.period().to_string(),
        14.0,
        FontWeight::Regular,
        RgbColor::HEADING,
    );

    page.text(
        MARGIN_MM,
        CLIENT_Y,
        "Client Information",
        10.0,
        FontWeight::Bold,
        RgbColor::BODY,
    );
    let lines = [
        format!("Client: {}", criteria.client_name()),
        format!("Project: {}", criteria.project_name()),
        format!("Subject: {}", criteria.subject()),
    ];
    let mut y = CLIENT_Y + 6.0;
    for line in lines {
        page.text(MARGIN_MM + 5.0, y, line, 10.0, FontWeight::Regular, RgbColor::BODY);
        y += 5.0;
    }

    header_bottom()
}

fn draw_grid(
    page: &mut PdfPage,
    data: &ReportData,
    y: f32,
) -> GridGeometry {
    page.text(MARGIN_MM, y, "Calendar View", 12.0, FontWeight::Bold, RgbColor::BODY);

    let grid = grid_geometry(data);

    for (col, name) in calendar::WEEKDAY_NAMES.iter().enumerate() {
        let x = MARGIN_MM + col as f32 * CELL_WIDTH;
        page.fill_rect(x, grid.top, CELL_WIDTH, CELL_HEIGHT, RgbColor::HEADER_CELL);
        page.stroke_rect(x, grid.top, CELL_WIDTH, CELL_HEIGHT, RgbColor::GRID_LINE, CELL_BORDER);
        page.centered_text(
            x + CELL_WIDTH / 2.0,
            grid.top + CELL_HEIGHT / 2.0 + 2.0,
            *name,
            9.0,
            FontWeight::Bold,
            RgbColor::HEADING,
        );
    }

    for (index, cell) in calendar::grid_cells(&data.period()).into_iter().enumerate() {
        let (x, y) = grid.cell_origin(index);
        match cell {
            Some(day) => draw_day_cell(page, data, day, x, y),
            None => {
                page.fill_rect(x, y, CELL_WIDTH, CELL_HEIGHT, RgbColor::EMPTY_CELL);
                page.stroke_rect(x, y, CELL_WIDTH, CELL_HEIGHT, RgbColor::EMPTY_BORDER, CELL_BORDER);
            }
        }
    }

    grid
}

/// Fills the cell by status, then borders it; today's border is drawn over
/// the fill rather than replacing it.
fn draw_day_cell(
    page: &mut PdfPage,
    data: &ReportData,
    day: u32,
    x: f32,
    y: f32,
) {
    let status = data
        .day(day)
        .map_or(DayStatus::NotWorked, |info| info.status);
    let is_today = data.is_today(day);

    let (fill, text_color) = match status {
        DayStatus::Worked => (RgbColor::WORKED, RgbColor::WHITE),
        DayStatus::Weekend => (RgbColor::WEEKEND, RgbColor::DAY_TEXT),
        DayStatus::NotWorked => (RgbColor::WHITE, RgbColor::DAY_TEXT),
    };
    page.fill_rect(x, y, CELL_WIDTH, CELL_HEIGHT, fill);

    if is_today {
        page.stroke_rect(x, y, CELL_WIDTH, CELL_HEIGHT, RgbColor::TODAY, TODAY_BORDER);
    } else {
        page.stroke_rect(x, y, CELL_WIDTH, CELL_HEIGHT, RgbColor::GRID_LINE, CELL_BORDER);
    }

    let weight = if is_today {
        FontWeight::Bold
    } else {
        FontWeight::Regular
    };
    page.centered_text(
        x + CELL_WIDTH / 2.0,
        y + CELL_HEIGHT / 2.0 + 2.0,
        day.to_string(),
        11.0,
        weight,
        text_color,
    );
}

fn draw_legend_and_summary(
    page: &mut PdfPage,
    data: &ReportData,
    y: f32,
) {
    page.text(MARGIN_MM, y, "Legend:", 10.0, FontWeight::Bold, RgbColor::HEADING);

    for (i, (color, label)) in LEGEND.into_iter().enumerate() {
        let item_y = y + 8.0 + i as f32 * 8.0;
        page.fill_rect(MARGIN_MM + 5.0, item_y - 3.0, 8.0, 5.0, color);
        page.stroke_rect(
            MARGIN_MM + 5.0,
            item_y - 3.0,
            8.0,
            5.0,
            RgbColor::GRID_LINE,
            CELL_BORDER,
        );
        page.text(MARGIN_MM + 18.0, item_y, label, 9.0, FontWeight::Regular, RgbColor::DAY_TEXT);
    }

    let summary_y = y + 35.0;
    page.text(MARGIN_MM, summary_y, "Summary:", 10.0, FontWeight::Bold, RgbColor::HEADING);
    let totals = [
        format!("Total Days Worked: {}", data.summary.worked_days_label()),
        format!("Weekend Days: {}", data.summary.weekend_days_label()),
    ];
    for (i, line) in totals.into_iter().enumerate() {
        page.text(
            MARGIN_MM + 5.0,
            summary_y + 8.0 + i as f32 * 5.0,
            line,
            9.0,
            FontWeight::Regular,
            RgbColor::HEADING,
        );
    }
}
