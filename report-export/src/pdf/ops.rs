//! Drawing primitives for one PDF page.
//!
//! Coordinates are millimetres from the top-left corner of the page; text
//! positions are baselines. The renderer flips them into PDF space.

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;

/// Points to millimetres.
const PT_TO_MM: f32 = 25.4 / 72.0;

/// Average Helvetica glyph advance as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(
        r: u8,
        g: u8,
        b: u8,
    ) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    pub const WHITE: Self = Self::gray(255);
    pub const HEADING: Self = Self::new(44, 62, 80);
    pub const BODY: Self = Self::new(52, 73, 94);
    pub const DAY_TEXT: Self = Self::new(45, 55, 72);
    pub const FOOTER: Self = Self::gray(128);
    pub const WORKED: Self = Self::new(72, 187, 120);
    pub const WEEKEND: Self = Self::new(237, 242, 247);
    pub const TODAY: Self = Self::new(66, 153, 225);
    pub const GRID_LINE: Self = Self::gray(200);
    pub const EMPTY_CELL: Self = Self::gray(250);
    pub const EMPTY_BORDER: Self = Self::gray(220);
    pub const HEADER_CELL: Self = Self::gray(240);
    pub const ALTERNATE_ROW: Self = Self::gray(240);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PdfOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        weight: FontWeight,
        color: RgbColor,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: RgbColor,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: RgbColor,
        thickness: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: RgbColor,
        thickness: f32,
    },
}

impl PdfOp {
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Estimated rendered width of `text` in millimetres.
///
/// Builtin fonts carry no metrics we can query, so this uses an average
/// glyph width. Good enough for centering short labels.
pub fn text_width(
    text: &str,
    size: f32,
) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_WIDTH * PT_TO_MM
}

/// Ordered drawing operations for a single page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfPage {
    pub ops: Vec<PdfOp>,
}

impl PdfPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        text: impl Into<String>,
        size: f32,
        weight: FontWeight,
        color: RgbColor,
    ) {
        self.ops.push(PdfOp::Text {
            x,
            y,
            text: text.into(),
            size,
            weight,
            color,
        });
    }

    /// Text horizontally centered on `center_x`.
    pub fn centered_text(
        &mut self,
        center_x: f32,
        y: f32,
        text: impl Into<String>,
        size: f32,
        weight: FontWeight,
        color: RgbColor,
    ) {
        let text = text.into();
        let x = center_x - text_width(&text, size) / 2.0;
        self.text(x, y, text, size, weight, color);
    }

    pub fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: RgbColor,
    ) {
        self.ops.push(PdfOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: RgbColor,
        thickness: f32,
    ) {
        self.ops.push(PdfOp::StrokeRect {
            x,
            y,
            width,
            height,
            color,
            thickness,
        });
    }

    pub fn line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        color: RgbColor,
        thickness: f32,
    ) {
        self.ops.push(PdfOp::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    /// All text drawn on the page, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops.iter().filter_map(PdfOp::text_content).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text_width_grows_with_length_and_size() {
        assert!(text_width("abcd", 10.0) > text_width("ab", 10.0));
        assert!(text_width("ab", 20.0) > text_width("ab", 10.0));
        assert_eq!(text_width("", 12.0), 0.0);
    }

    #[test]
    fn centered_text_straddles_center() {
        let mut page = PdfPage::new();
        page.centered_text(100.0, 20.0, "Title", 18.0, FontWeight::Bold, RgbColor::HEADING);

        match &page.ops[0] {
            PdfOp::Text { x, size, text, .. } => {
                let width = text_width(text, *size);
                assert!((x + width / 2.0 - 100.0).abs() < 1e-4);
            }
            other => panic!("expected text op, got {other:?}"),
        }
    }

    #[test]
    fn texts_skip_shapes() {
        let mut page = PdfPage::new();
        page.fill_rect(0.0, 0.0, 10.0, 10.0, RgbColor::WHITE);
        page.text(0.0, 5.0, "a", 9.0, FontWeight::Regular, RgbColor::BODY);
        page.line((0.0, 0.0), (1.0, 1.0), RgbColor::HEADING, 0.5);
        page.text(0.0, 9.0, "b", 9.0, FontWeight::Regular, RgbColor::BODY);

        assert_eq!(page.texts(), vec!["a", "b"]);
    }
}
