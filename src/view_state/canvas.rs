//! Rectangular grid of styled rows.
//!
//! A `Canvas` is what content renders into and what the viewport pads and trims.
//! Every row is exactly `width` display columns wide.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Cursor position as `(column, row)` within a canvas.
pub type CursorPos = (usize, usize);

/// Styled rows of equal display width plus an optional cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Canvas {
    width: usize,
    rows: Vec<Line<'static>>,
    cursor: Option<CursorPos>,
}

impl Canvas {
    /// Build a canvas from rows, padding or truncating each one to `width`.
    pub fn from_rows(width: usize, rows: Vec<Line<'static>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| fit_line(row, width))
            .collect();
        Self {
            width,
            rows,
            cursor: None,
        }
    }

    /// A canvas of blank rows.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: (0..height).map(|_| blank_line(width)).collect(),
            cursor: None,
        }
    }

    /// Stack canvases top to bottom. The result is as wide as the widest part.
    pub fn stack(parts: Vec<Canvas>) -> Self {
        let width = parts.iter().map(|c| c.width).max().unwrap_or(0);
        let mut rows = Vec::new();
        let mut cursor = None;

        for part in parts {
            if cursor.is_none() {
                cursor = part.cursor.map(|(col, row)| (col, row + rows.len()));
            }
            rows.extend(part.rows.into_iter().map(|row| fit_line(row, width)));
        }

        Self {
            width,
            rows,
            cursor,
        }
    }

    /// Width in display columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> &[Line<'static>] {
        &self.rows
    }

    /// Cursor position, if the content shows one.
    pub fn cursor(&self) -> Option<CursorPos> {
        self.cursor
    }

    /// Set or clear the cursor. Positions outside the canvas are dropped.
    pub fn set_cursor(&mut self, cursor: Option<CursorPos>) {
        self.cursor = cursor.filter(|&(col, row)| row < self.rows.len() && col <= self.width);
    }

    /// Add `cols` blank columns on the left.
    pub fn pad_left(&mut self, cols: usize) {
        if cols == 0 {
            return;
        }
        for row in &mut self.rows {
            row.spans.insert(0, Span::raw(" ".repeat(cols)));
        }
        self.width += cols;
        self.cursor = self.cursor.map(|(col, row)| (col + cols, row));
    }

    /// Add `cols` blank columns on the right.
    pub fn pad_right(&mut self, cols: usize) {
        if cols == 0 {
            return;
        }
        for row in &mut self.rows {
            row.spans.push(Span::raw(" ".repeat(cols)));
        }
        self.width += cols;
    }

    /// Add `rows` blank rows at the bottom.
    pub fn pad_bottom(&mut self, rows: usize) {
        let width = self.width;
        self.rows.extend((0..rows).map(|_| blank_line(width)));
    }

    /// Remove `rows` rows from the top. A cursor on a removed row is hidden.
    pub fn trim_top(&mut self, rows: usize) {
        let rows = rows.min(self.rows.len());
        self.rows.drain(..rows);
        self.cursor = self
            .cursor
            .and_then(|(col, row)| row.checked_sub(rows).map(|row| (col, row)));
    }

    /// Remove `rows` rows from the bottom. A cursor on a removed row is hidden.
    pub fn trim_bottom(&mut self, rows: usize) {
        let keep = self.rows.len().saturating_sub(rows);
        self.rows.truncate(keep);
        self.cursor = self.cursor.filter(|&(_, row)| row < keep);
    }

    /// Remove `cols` columns from the right. A cursor past the new edge is hidden.
    pub fn trim_right(&mut self, cols: usize) {
        let width = self.width.saturating_sub(cols);
        self.rows = std::mem::take(&mut self.rows)
            .into_iter()
            .map(|row| fit_line(row, width))
            .collect();
        self.width = width;
        self.cursor = self.cursor.filter(|&(col, _)| col <= width);
    }

    /// Plain text of each row, for tests and logging.
    pub fn to_plain_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }
}

fn blank_line(width: usize) -> Line<'static> {
    if width == 0 {
        Line::default()
    } else {
        Line::from(Span::raw(" ".repeat(width)))
    }
}

/// Display width of a line.
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| str_width(&s.content)).sum()
}

/// Display width of a string. Control characters count as zero.
pub fn str_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Pad or truncate a line to exactly `width` columns.
///
/// A wide character straddling the edge is replaced by a space.
fn fit_line(line: Line<'static>, width: usize) -> Line<'static> {
    let current = line_width(&line);
    if current == width {
        return line;
    }

    let style = line.style;
    let alignment = line.alignment;
    let spans = line.spans;

    let mut out: Vec<Span<'static>> = Vec::with_capacity(spans.len() + 1);
    let mut used = 0;

    for span in spans {
        if used >= width {
            break;
        }
        let span_width = str_width(&span.content);
        if used + span_width <= width {
            used += span_width;
            out.push(span);
            continue;
        }

        let mut text = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            text.push(c);
        }
        out.push(Span::styled(text, span.style));
        break;
    }

    if used < width {
        out.push(Span::raw(" ".repeat(width - used)));
    }

    let fitted = Line::from(out).style(style);
    match alignment {
        Some(alignment) => fitted.alignment(alignment),
        None => fitted,
    }
}
