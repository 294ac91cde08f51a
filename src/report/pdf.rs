//! Minimal PDF writer for line-oriented text documents
//!
//! Produces a PDF 1.4 file with A4 pages, the built-in Helvetica font at
//! 12pt, and one text line per 10 mm row. Rows flow onto a new page when the
//! next one would cross the 15 mm bottom margin.
//!
//! The output contains no timestamps or identifiers, so the same lines always
//! produce the same bytes.

use std::fmt::Write as _;

const MM_TO_PT: f64 = 72.0 / 25.4;
const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 10.0;
const BOTTOM_MARGIN_MM: f64 = 15.0;
const LINE_HEIGHT_MM: f64 = 10.0;
const CELL_PADDING_MM: f64 = 1.0;
const FONT_SIZE_PT: f64 = 12.0;

/// Horizontal placement of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One row of the document
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Text { text: String, align: Align },
    Blank,
}

impl Line {
    pub fn left(text: impl Into<String>) -> Self {
        Line::Text {
            text: text.into(),
            align: Align::Left,
        }
    }

    pub fn centered(text: impl Into<String>) -> Self {
        Line::Text {
            text: text.into(),
            align: Align::Center,
        }
    }
}

/// Number of rows that fit on one page
pub fn rows_per_page() -> usize {
    ((PAGE_HEIGHT_MM - BOTTOM_MARGIN_MM - MARGIN_MM) / LINE_HEIGHT_MM).floor() as usize
}

/// Split lines into pages
///
/// Blank rows at the top of a page are dropped. There is always at least one
/// page, even for an empty document.
pub fn paginate(lines: &[Line]) -> Vec<Vec<&Line>> {
    let capacity = rows_per_page();
    let mut pages: Vec<Vec<&Line>> = Vec::new();
    let mut current: Vec<&Line> = Vec::new();

    for line in lines {
        if current.len() == capacity {
            pages.push(std::mem::take(&mut current));
        }
        if current.is_empty() && !pages.is_empty() && matches!(line, Line::Blank) {
            continue;
        }
        current.push(line);
    }
    pages.push(current);

    pages
}

/// Render lines into a complete PDF file
pub fn render(lines: &[Line]) -> Vec<u8> {
    let pages = paginate(lines);
    let mut objects: Vec<String> = Vec::with_capacity(3 + pages.len() * 2);

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", page_object_id(i)))
        .collect();

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );

    for (i, page) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            PAGE_WIDTH_MM * MM_TO_PT,
            PAGE_HEIGHT_MM * MM_TO_PT,
            page_object_id(i) + 1
        ));
        let content = page_content(page);
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        let _ = write!(out, "{} 0 obj\n{}\nendobj\n", i + 1, body);
    }

    let xref_offset = out.len();
    let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in &offsets {
        let _ = write!(out, "{:010} 00000 n \n", offset);
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    );

    out.into_bytes()
}

fn page_object_id(index: usize) -> usize {
    4 + index * 2
}

fn page_content(rows: &[&Line]) -> String {
    let mut content = String::new();
    let font_size_mm = FONT_SIZE_PT / MM_TO_PT;

    for (row, line) in rows.iter().enumerate() {
        let Line::Text { text, align } = line else {
            continue;
        };
        let top = MARGIN_MM + row as f64 * LINE_HEIGHT_MM;
        let baseline = top + 0.5 * LINE_HEIGHT_MM + 0.3 * font_size_mm;
        let cell_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let x = match align {
            Align::Left => MARGIN_MM + CELL_PADDING_MM,
            Align::Center => MARGIN_MM + (cell_width - text_width_mm(text)) / 2.0,
        };

        let _ = writeln!(
            content,
            "BT /F1 {:.0} Tf {:.2} {:.2} Td ({}) Tj ET",
            FONT_SIZE_PT,
            x * MM_TO_PT,
            (PAGE_HEIGHT_MM - baseline) * MM_TO_PT,
            escape(text)
        );
    }

    content
}

/// Escape a string for a PDF literal, replacing characters Helvetica cannot encode
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(c);
            }
            ' '..='~' => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

/// Width of `text` in millimetres, using Helvetica advance widths
pub fn text_width_mm(text: &str) -> f64 {
    let units: u32 = text.chars().map(glyph_width).sum();
    units as f64 * FONT_SIZE_PT / 1000.0 / MM_TO_PT
}

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

fn glyph_width(c: char) -> u32 {
    match c {
        ' '..='~' => HELVETICA_WIDTHS[c as usize - 32] as u32,
        // rendered as '?'
        _ => 556,
    }
}
