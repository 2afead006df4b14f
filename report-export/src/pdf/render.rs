//! Replays a [`PdfDocumentLayout`] onto a `printpdf` document.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
    Rgb,
};
use tracing::debug;

use super::PdfDocumentLayout;
use super::ops::{FontWeight, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PdfOp, PdfPage, RgbColor};
use crate::error::ExportError;

const MM_TO_PT: f32 = 72.0 / 25.4;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(
        &self,
        weight: FontWeight,
    ) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn pdf_error(err: impl ToString) -> ExportError {
    ExportError::Pdf(err.to_string())
}

pub fn render(layout: &PdfDocumentLayout) -> Result<Vec<u8>, ExportError> {
    let info = &layout.info;
    let (doc, first_page, first_layer) = PdfDocument::new(
        info.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let doc = doc
        .with_author(info.author.as_str())
        .with_creator(info.creator.as_str())
        .with_subject(info.subject.as_str())
        .with_keywords(info.keywords.clone());

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
    };

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };
        draw_page(&layer, &fonts, page);
    }

    debug!(pages = layout.pages.len(), "rendered PDF pages");
    doc.save_to_bytes().map_err(pdf_error)
}

fn draw_page(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    page: &PdfPage,
) {
    for op in &page.ops {
        match op {
            PdfOp::Text {
                x,
                y,
                text,
                size,
                weight,
                color,
            } => {
                layer.set_fill_color(pdf_color(*color));
                layer.use_text(text.as_str(), *size, Mm(*x), flip(*y), fonts.get(*weight));
            }
            PdfOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                layer.set_fill_color(pdf_color(*color));
                layer.add_rect(rect(*x, *y, *width, *height).with_mode(PaintMode::Fill));
            }
            PdfOp::StrokeRect {
                x,
                y,
                width,
                height,
                color,
                thickness,
            } => {
                layer.set_outline_color(pdf_color(*color));
                layer.set_outline_thickness(thickness * MM_TO_PT);
                layer.add_rect(rect(*x, *y, *width, *height).with_mode(PaintMode::Stroke));
            }
            PdfOp::Line {
                from,
                to,
                color,
                thickness,
            } => {
                layer.set_outline_color(pdf_color(*color));
                layer.set_outline_thickness(thickness * MM_TO_PT);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm(from.0), flip(from.1)), false),
                        (Point::new(Mm(to.0), flip(to.1)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}

/// Top-left y to PDF's bottom-left y.
fn flip(y: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - y)
}

fn rect(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> Rect {
    Rect::new(Mm(x), flip(y + height), Mm(x + width), flip(y))
}

fn pdf_color(color: RgbColor) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flip_measures_from_page_bottom() {
        assert_eq!(flip(0.0), Mm(PAGE_HEIGHT_MM));
        assert_eq!(flip(PAGE_HEIGHT_MM), Mm(0.0));
        assert_eq!(flip(20.0), Mm(277.0));
    }
}
