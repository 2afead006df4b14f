//! Table layout: client block, summary and a `Day | Weekday | Status` grid
//! of worked days. Rows that do not fit continue on a new page under a
//! repeated header row.

use report_core::{DayInfo, ReportData};

use super::ops::{FontWeight, MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PdfPage, RgbColor};

const TITLE_Y: f32 = 12.0;
const RULE_Y: f32 = 15.0;
const INFO_Y: f32 = 25.0;
const LINE_HEIGHT: f32 = 5.0;
const INDENT: f32 = 5.0;

const TABLE_Y: f32 = INFO_Y + LINE_HEIGHT * 10.0;
const ROW_HEIGHT: f32 = 8.0;
const COLUMN_WIDTHS: [f32; 3] = [20.0, 30.0, 30.0];
const COLUMN_TITLES: [&str; 3] = ["Day", "Weekday", "Status"];
const TABLE_FONT_SIZE: f32 = 9.0;
const GRID_THICKNESS: f32 = 0.1;

const FOOTER_Y: f32 = PAGE_HEIGHT_MM - 5.0;
/// Lowest y a table row may reach before it moves to the next page.
const TABLE_BOTTOM: f32 = PAGE_HEIGHT_MM - MARGIN_MM;

pub fn layout(data: &ReportData) -> Vec<PdfPage> {
    let mut page = PdfPage::new();
    draw_header(&mut page, data);

    let mut pages = Vec::new();
    let mut y = draw_column_titles(&mut page, TABLE_Y);

    for (index, info) in data.worked_only.iter().enumerate() {
        if y + ROW_HEIGHT > TABLE_BOTTOM {
            draw_footer(&mut page, data);
            pages.push(std::mem::take(&mut page));
            y = draw_column_titles(&mut page, MARGIN_MM);
        }
        draw_row(&mut page, y, index, info);
        y += ROW_HEIGHT;
    }

    draw_footer(&mut page, data);
    pages.push(page);
    pages
}

fn draw_header(
    page: &mut PdfPage,
    data: &ReportData,
) {
    let criteria = &data.criteria;

    page.centered_text(
        PAGE_WIDTH_MM / 2.0,
        TITLE_Y,
        "Activity Report",
        16.0,
        FontWeight::Bold,
        RgbColor::HEADING,
    );
    page.line(
        (MARGIN_MM, RULE_Y),
        (PAGE_WIDTH_MM - MARGIN_MM, RULE_Y),
        RgbColor::HEADING,
        0.5,
    );

    let lines = [
        format!("Client Name: {}", criteria.client_name()),
        format!("Project: {}", criteria.project_name()),
        format!("Subject: {}", criteria.subject()),
        format!("Period: {}", criteria.period()),
    ];
    section(page, INFO_Y, "Client Information", &lines);

    let totals = [
        format!("Total Days Worked: {}", data.summary.worked_days_label()),
        format!("Weekend Days: {}", data.summary.weekend_days_label()),
    ];
    section(page, INFO_Y + LINE_HEIGHT * 6.0, "Summary", &totals);
}

fn section(
    page: &mut PdfPage,
    y: f32,
    heading: &str,
    lines: &[String],
) {
    page.text(MARGIN_MM, y, heading, 10.0, FontWeight::Bold, RgbColor::BODY);
    for (i, line) in lines.iter().enumerate() {
        page.text(
            MARGIN_MM + INDENT,
            y + LINE_HEIGHT * (i + 1) as f32,
            line.as_str(),
            10.0,
            FontWeight::Regular,
            RgbColor::BODY,
        );
    }
}

/// Draws the dark header row at `y` and returns the y of the first body row.
fn draw_column_titles(
    page: &mut PdfPage,
    y: f32,
) -> f32 {
    draw_cells(
        page,
        y,
        COLUMN_TITLES,
        Some(RgbColor::HEADING),
        RgbColor::WHITE,
        FontWeight::Bold,
    );
    y + ROW_HEIGHT
}

fn draw_row(
    page: &mut PdfPage,
    y: f32,
    index: usize,
    info: &DayInfo,
) {
    let fill = (index % 2 == 1).then_some(RgbColor::ALTERNATE_ROW);
    let padded = info.padded_day();
    draw_cells(
        page,
        y,
        [padded.as_str(), info.weekday, info.status.as_str()],
        fill,
        RgbColor::DAY_TEXT,
        FontWeight::Regular,
    );
}

fn draw_cells(
    page: &mut PdfPage,
    y: f32,
    values: [&str; 3],
    fill: Option<RgbColor>,
    text_color: RgbColor,
    weight: FontWeight,
) {
    let mut x = MARGIN_MM;
    for (width, value) in COLUMN_WIDTHS.into_iter().zip(values) {
        if let Some(color) = fill {
            page.fill_rect(x, y, width, ROW_HEIGHT, color);
        }
        page.stroke_rect(x, y, width, ROW_HEIGHT, RgbColor::HEADING, GRID_THICKNESS);
        page.centered_text(
            x + width / 2.0,
            y + ROW_HEIGHT / 2.0 + 1.2,
            value,
            TABLE_FONT_SIZE,
            weight,
            text_color,
        );
        x += width;
    }
}

fn draw_footer(
    page: &mut PdfPage,
    data: &ReportData,
) {
    page.centered_text(
        PAGE_WIDTH_MM / 2.0,
        FOOTER_Y,
        format!("Generated on: {}", data.generated_on_label()),
        8.0,
        FontWeight::Regular,
        RgbColor::FOOTER,
    );
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use report_core::{Period, ReportCriteria, WorkedDaySet};

    use super::*;
    use crate::pdf::ops::PdfOp;

    fn data(
        worked_days: &[usize],
        month: u32,
    ) -> ReportData {
        let period = Period::new(month, 2025).unwrap();
        let criteria = ReportCriteria::new("Acme", "Apollo", "Backend", period).unwrap();
        let mut worked = WorkedDaySet::with_len(period.days_in_month() as usize);
        for day in worked_days {
            worked.toggle(day - 1).unwrap();
        }
        ReportData::build(
            criteria,
            &worked,
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
        )
    }

    #[test]
    fn single_page_lists_header_block_and_rows() {
        let pages = layout(&data(&[1, 2, 3, 6, 7], 1));

        assert_eq!(pages.len(), 1);
        let texts = pages[0].texts();
        assert_eq!(texts[0], "Activity Report");
        assert!(texts.contains(&"Client Name: Acme"));
        assert!(texts.contains(&"Period: January 2025"));
        assert!(texts.contains(&"Total Days Worked: 5 days"));
        assert!(texts.contains(&"Weekend Days: 8 days"));
        assert_eq!(texts.last(), Some(&"Generated on: 2/3/2025"));
    }

    #[test]
    fn rows_appear_in_day_order() {
        let pages = layout(&data(&[7, 2], 1));
        let texts = pages[0].texts();

        let first = texts.iter().position(|t| *t == "02").unwrap();
        let second = texts.iter().position(|t| *t == "07").unwrap();

        assert!(first < second);
        assert_eq!(texts[first + 1], "Thu");
        assert_eq!(texts[first + 2], "Worked");
    }

    #[test]
    fn alternate_rows_are_shaded() {
        let pages = layout(&data(&[1, 2], 1));

        let shaded = pages[0]
            .ops
            .iter()
            .filter(|op| {
                matches!(op, PdfOp::FillRect { color, .. } if *color == RgbColor::ALTERNATE_ROW)
            })
            .count();

        // only the second row, one rect per column
        assert_eq!(shaded, 3);
    }

    #[test]
    fn full_month_continues_on_second_page_with_header() {
        let all: Vec<usize> = (1..=31).collect();
        let pages = layout(&data(&all, 1));

        assert_eq!(pages.len(), 2);
        let continued = pages[1].texts();
        assert_eq!(&continued[..3], &["Day", "Weekday", "Status"]);
        assert!(continued.contains(&"31"));
        assert_eq!(continued.last(), Some(&"Generated on: 2/3/2025"));
    }

    #[test]
    fn every_row_is_drawn_exactly_once() {
        let all: Vec<usize> = (1..=31).collect();
        let pages = layout(&data(&all, 1));

        let worked_cells = pages
            .iter()
            .flat_map(|p| p.texts())
            .filter(|t| *t == "Worked")
            .count();

        assert_eq!(worked_cells, 31);
    }

    #[test]
    fn rows_stay_above_bottom_margin() {
        let all: Vec<usize> = (1..=31).collect();
        let pages = layout(&data(&all, 1));

        for page in &pages {
            for op in &page.ops {
                if let PdfOp::StrokeRect { y, height, .. } = op {
                    assert!(y + height <= TABLE_BOTTOM);
                }
            }
        }
    }
}
