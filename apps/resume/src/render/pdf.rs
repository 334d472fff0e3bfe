//! PDF generation: a backend trait plus the `printpdf` implementation that
//! flows layout rows down A4 pages.

use encoding_rs::WINDOWS_1252;
use printpdf::color::Color as PdfColor;
use printpdf::graphics::{LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder};
use printpdf::matrix::TextMatrix;
use printpdf::ops::Op;
use printpdf::xobject::DictItem;
use printpdf::{BuiltinFont, Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, Rgb};
use thiserror::Error;
use tracing::{debug, info};

use crate::layout::page::{mm_to_pt, pt_to_mm};
use crate::layout::text::wrap_to_width;
use crate::layout::{
    get_metrics, layout_resume, Align, Col, Color, Component, FontStyle, PageConfig, Row,
    RuleProps, Text,
};
use crate::models::ResumeData;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("row {row} spans {span} grid columns (maximum {max})")]
    ColumnOverflow { row: usize, span: u32, max: u8 },

    #[error("row {row} contains a zero-width column")]
    InvalidColumn { row: usize },

    #[error("row {row} is {height_mm:.1} mm tall but a page holds only {available_mm:.1} mm")]
    RowTooTall {
        row: usize,
        height_mm: f32,
        available_mm: f32,
    },

    #[error("PDF backend failure: {0}")]
    Backend(String),
}

/// Turns layout rows into a finished PDF byte stream.
///
/// Implementations own pagination. A failed render returns no bytes at all.
pub trait PdfBackend: Send + Sync {
    fn render(&self, rows: &[Row]) -> Result<Vec<u8>, PdfError>;
}

/// Lays out `resume` and renders it through `backend`.
pub fn render_pdf(resume: &ResumeData, backend: &dyn PdfBackend) -> Result<Vec<u8>, PdfError> {
    let rows = layout_resume(resume);
    let bytes = backend.render(&rows)?;
    info!(rows = rows.len(), bytes = bytes.len(), "PDF generated");
    Ok(bytes)
}

// ────────────────────────────────────────────────────────────────────────────
// printpdf backend
// ────────────────────────────────────────────────────────────────────────────

/// Where a row ended up after pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRow {
    pub row_index: usize,
    pub page: usize,
    /// Distance from the top edge of the page.
    pub top_mm: f32,
    pub height_mm: f32,
}

pub struct PrintPdfBackend {
    page: PageConfig,
    title: String,
}

impl PrintPdfBackend {
    pub fn new(page: PageConfig, title: impl Into<String>) -> Self {
        PrintPdfBackend {
            page,
            title: title.into(),
        }
    }

    /// Assigns every row to a page. Rows are never split; a row that does not
    /// fit in the remaining space opens a new page, and spacer rows that would
    /// land at the top of a fresh page are dropped. A row taller than a whole
    /// page is an error.
    pub fn paginate(&self, rows: &[Row]) -> Result<Vec<PlacedRow>, PdfError> {
        self.validate(rows)?;

        let available = self.page.content_height_mm();
        let mut placed = Vec::with_capacity(rows.len());
        let mut page = 0usize;
        let mut cursor = 0.0_f32;

        for (row_index, row) in rows.iter().enumerate() {
            let height_mm = self.measure_row(row);
            if height_mm > available {
                return Err(PdfError::RowTooTall {
                    row: row_index,
                    height_mm,
                    available_mm: available,
                });
            }

            if cursor > 0.0 && cursor + height_mm > available {
                page += 1;
                cursor = 0.0;
            }
            if cursor == 0.0 && page > 0 && row.is_spacer() {
                continue;
            }

            placed.push(PlacedRow {
                row_index,
                page,
                top_mm: self.page.margin_top_mm + cursor,
                height_mm,
            });
            cursor += height_mm;
        }

        Ok(placed)
    }

    fn validate(&self, rows: &[Row]) -> Result<(), PdfError> {
        let max = self.page.grid_columns;
        for (row, r) in rows.iter().enumerate() {
            if r.cols.iter().any(|col| col.size == 0) {
                return Err(PdfError::InvalidColumn { row });
            }
            let span = r.span();
            if span > max as u32 {
                return Err(PdfError::ColumnOverflow { row, span, max });
            }
        }
        Ok(())
    }

    fn grid_unit_mm(&self) -> f32 {
        self.page.content_width_mm() / self.page.grid_columns as f32
    }

    fn line_height_mm(&self, size_pt: f32) -> f32 {
        pt_to_mm(size_pt * self.page.line_height_factor)
    }

    /// Height a row occupies: its declared height, grown to fit the tallest column.
    pub fn measure_row(&self, row: &Row) -> f32 {
        let unit = self.grid_unit_mm();
        row.cols
            .iter()
            .map(|col| self.measure_col(col, col.size as f32 * unit))
            .fold(row.height_mm, f32::max)
    }

    fn measure_col(&self, col: &Col, width_mm: f32) -> f32 {
        col.components
            .iter()
            .map(|component| match component {
                Component::Text(text) => {
                    let lines = self.text_lines(text, width_mm).len() as f32;
                    text.props.top_mm + lines * self.line_height_mm(text.props.size_pt)
                }
                Component::Rule(rule) => pt_to_mm(rule.thickness_pt),
            })
            .sum()
    }

    /// Explicit `\n` breaks first, then greedy wrapping to the column width.
    fn text_lines(&self, text: &Text, width_mm: f32) -> Vec<String> {
        let metrics = get_metrics(text.props.style);
        let max_width_pt = mm_to_pt(width_mm);
        text.content
            .split('\n')
            .flat_map(|line| wrap_to_width(line, metrics, text.props.size_pt, max_width_pt))
            .collect()
    }

    fn draw_row(&self, row: &Row, top_mm: f32, ops: &mut Vec<Op>) {
        let unit = self.grid_unit_mm();
        let mut offset_units = 0u32;

        for col in &row.cols {
            let x_mm = self.page.margin_left_mm + offset_units as f32 * unit;
            let width_mm = col.size as f32 * unit;
            let mut y_mm = top_mm;

            for component in &col.components {
                match component {
                    Component::Text(text) => {
                        y_mm = self.draw_text(text, x_mm, y_mm + text.props.top_mm, width_mm, ops);
                    }
                    Component::Rule(rule) => {
                        y_mm = self.draw_rule(rule, x_mm, y_mm, width_mm, ops);
                    }
                }
            }
            offset_units += col.size as u32;
        }
    }

    /// Draws each wrapped line and returns the y position below the text.
    fn draw_text(&self, text: &Text, x_mm: f32, top_mm: f32, width_mm: f32, ops: &mut Vec<Op>) -> f32 {
        let props = &text.props;
        let metrics = get_metrics(props.style);
        let line_height = self.line_height_mm(props.size_pt);
        let mut y_mm = top_mm;

        for line in self.text_lines(text, width_mm) {
            let baseline_mm = y_mm + line_height * 0.8;
            y_mm += line_height;
            if line.trim().is_empty() {
                continue;
            }

            let line_width_mm = pt_to_mm(metrics.measure_str(&line, props.size_pt));
            let slack = (width_mm - line_width_mm).max(0.0);
            let line_x = match props.align {
                Align::Left => x_mm,
                Align::Center => x_mm + slack / 2.0,
                Align::Right => x_mm + slack,
            };

            ops.push(Op::StartTextSection);
            ops.push(Op::SetFillColor { col: to_pdf_color(props.color) });
            ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(props.size_pt),
                font: builtin_font(props.style),
            });
            ops.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(
                    Pt(mm_to_pt(line_x)),
                    Pt(mm_to_pt(self.page.height_mm - baseline_mm)),
                ),
            });
            // Registers the font in the page resources; emits no operator.
            ops.push(Op::WriteTextBuiltinFont {
                items: Vec::new(),
                font: builtin_font(props.style),
            });
            ops.push(Op::Unknown {
                key: "Tj".to_string(),
                value: vec![DictItem::String {
                    data: encode_win_ansi(&line),
                    literal: false,
                }],
            });
            ops.push(Op::EndTextSection);
        }

        y_mm
    }

    fn draw_rule(&self, rule: &RuleProps, x_mm: f32, top_mm: f32, width_mm: f32, ops: &mut Vec<Op>) -> f32 {
        let thickness_mm = pt_to_mm(rule.thickness_pt);
        let y_pt = mm_to_pt(self.page.height_mm - (top_mm + thickness_mm / 2.0));
        let x_start = mm_to_pt(x_mm);
        let x_end = mm_to_pt(x_mm + width_mm * rule.length.clamp(0.0, 1.0));

        let line = Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    LinePoint { p: Point { x: Pt(x_start), y: Pt(y_pt) }, bezier: false },
                    LinePoint { p: Point { x: Pt(x_end), y: Pt(y_pt) }, bezier: false },
                ],
            }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::EvenOdd,
        };
        ops.push(Op::SetOutlineThickness { pt: Pt(rule.thickness_pt) });
        ops.push(Op::SetOutlineColor { col: to_pdf_color(rule.color) });
        ops.push(Op::DrawPolygon { polygon: line });

        top_mm + thickness_mm
    }
}

impl Default for PrintPdfBackend {
    fn default() -> Self {
        Self::new(PageConfig::a4(), "Resume")
    }
}

impl PdfBackend for PrintPdfBackend {
    fn render(&self, rows: &[Row]) -> Result<Vec<u8>, PdfError> {
        let placements = self.paginate(rows)?;
        let page_count = placements.last().map_or(1, |p| p.page + 1);

        let mut page_ops: Vec<Vec<Op>> = (0..page_count).map(|_| Vec::new()).collect();
        for placed in &placements {
            self.draw_row(&rows[placed.row_index], placed.top_mm, &mut page_ops[placed.page]);
        }

        let mut doc = PdfDocument::new(&self.title);
        doc.pages = page_ops
            .into_iter()
            .map(|ops| PdfPage::new(Mm(self.page.width_mm), Mm(self.page.height_mm), ops))
            .collect();

        // `secure` would strip the raw `Tj` operators carrying WinAnsi text.
        let options = PdfSaveOptions {
            secure: false,
            ..Default::default()
        };
        let mut warnings = Vec::new();
        let bytes = doc.save(&options, &mut warnings);
        debug!(pages = page_count, warnings = warnings.len(), "printpdf document saved");

        if bytes.is_empty() {
            return Err(PdfError::Backend("printpdf produced an empty document".to_string()));
        }
        Ok(bytes)
    }
}

/// Encodes `text` as Windows-1252, the byte encoding the builtin fonts declare
/// (`/WinAnsiEncoding`). Characters outside that code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        let (bytes, _, unmappable) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
        if unmappable {
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

fn builtin_font(style: FontStyle) -> BuiltinFont {
    match style {
        FontStyle::Normal => BuiltinFont::Helvetica,
        FontStyle::Bold => BuiltinFont::HelveticaBold,
        FontStyle::Italic => BuiltinFont::HelveticaOblique,
        FontStyle::BoldItalic => BuiltinFont::HelveticaBoldOblique,
    }
}

fn to_pdf_color(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(
        color.red as f32 / 255.0,
        color.green as f32 / 255.0,
        color.blue as f32 / 255.0,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TextProps;
    use crate::models::{Experience, Personal};

    fn text_row(height_mm: f32, content: &str) -> Row {
        Row::new(height_mm).col(Col::new(12).text(content, TextProps::default()))
    }

    fn sample_resume() -> ResumeData {
        ResumeData {
            personal: Personal {
                name: "Jane Doe".to_string(),
                title: "Engineer".to_string(),
                email: "jane@example.com".to_string(),
                ..Default::default()
            },
            experience: vec![Experience {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                description: vec!["Shipped the thing".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_pdf(&sample_resume(), &PrintPdfBackend::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output should be a PDF");
    }

    #[test]
    fn test_empty_resume_still_renders() {
        let bytes = render_pdf(&ResumeData::default(), &PrintPdfBackend::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_no_rows_yields_single_page() {
        let backend = PrintPdfBackend::default();
        assert!(backend.paginate(&[]).unwrap().is_empty());
        assert!(backend.render(&[]).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_documents_flow_onto_new_pages() {
        let backend = PrintPdfBackend::default();
        let rows: Vec<Row> = (0..100).map(|i| text_row(10.0, &format!("row {i}"))).collect();
        let placed = backend.paginate(&rows).unwrap();

        assert_eq!(placed.len(), 100);
        assert!(placed.last().unwrap().page >= 3);

        let page = PageConfig::a4();
        let bottom = page.height_mm - page.margin_bottom_mm;
        for p in &placed {
            assert!(p.top_mm >= page.margin_top_mm);
            assert!(p.top_mm + p.height_mm <= bottom + 1e-3, "{p:?} overflows the page");
        }
        // Rows keep their order across pages.
        assert!(placed.windows(2).all(|w| w[0].row_index < w[1].row_index));
    }

    #[test]
    fn test_spacers_are_dropped_at_top_of_new_page() {
        let backend = PrintPdfBackend::default();
        let mut rows: Vec<Row> = (0..27).map(|i| text_row(10.0, &format!("row {i}"))).collect();
        rows.push(Row::spacer(20.0));
        rows.push(text_row(10.0, "after"));

        let placed = backend.paginate(&rows).unwrap();
        assert!(placed.iter().all(|p| p.row_index != 27));
        let last = placed.last().unwrap();
        assert_eq!(last.row_index, 28);
        assert_eq!(last.page, 1);
        assert_eq!(last.top_mm, PageConfig::a4().margin_top_mm);
    }

    #[test]
    fn test_multiline_text_grows_row() {
        let backend = PrintPdfBackend::default();
        let row = text_row(2.0, "one\ntwo\nthree");
        assert!(backend.measure_row(&row) > 2.0);
        assert_eq!(backend.measure_row(&Row::spacer(7.0)), 7.0);
    }

    #[test]
    fn test_row_taller_than_page_is_rejected() {
        let tall = vec!["line"; 120].join("\n");
        let rows = vec![text_row(10.0, "first"), text_row(6.0, &tall)];

        let err = PrintPdfBackend::default().paginate(&rows).unwrap_err();
        match err {
            PdfError::RowTooTall { row, height_mm, available_mm } => {
                assert_eq!(row, 1);
                assert!(height_mm > available_mm);
                assert_eq!(available_mm, PageConfig::a4().content_height_mm());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(
            encode_win_ansi("• café — ·"),
            vec![0x95, b' ', b'c', b'a', b'f', 0xE9, b' ', 0x97, b' ', 0xB7]
        );
        assert_eq!(encode_win_ansi("plain"), b"plain".to_vec());
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }

    #[test]
    fn test_text_is_written_in_win_ansi() {
        let bytes = PrintPdfBackend::default()
            .render(&[text_row(10.0, "• Full-time •")])
            .unwrap();

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().values().next().unwrap();
        let raw = doc.get_page_content(page_id).unwrap();
        let content = lopdf::content::Content::decode(&raw).unwrap();

        let shown: Vec<Vec<u8>> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(lopdf::Object::String(bytes, _)) => Some(bytes.clone()),
                _ => None,
            })
            .collect();

        assert_eq!(shown, vec![b"\x95 Full-time \x95".to_vec()]);
    }

    #[test]
    fn test_column_overflow_is_rejected() {
        let row = Row::new(5.0)
            .col(Col::new(8).text("left", TextProps::default()))
            .col(Col::new(8).text("right", TextProps::default()));
        let err = PrintPdfBackend::default().render(&[row]).unwrap_err();
        assert!(matches!(err, PdfError::ColumnOverflow { row: 0, span: 16, max: 12 }));
    }

    #[test]
    fn test_zero_width_column_is_rejected() {
        let row = Row::new(5.0).col(Col::new(0));
        let err = PrintPdfBackend::default().render(&[row]).unwrap_err();
        assert!(matches!(err, PdfError::InvalidColumn { row: 0 }));
    }
}
