//! Layout tree rendering.
//!
//! Turns a [`LayoutBlock`] into a [`Canvas`] at a given width. Text blocks are
//! flow content: they wrap to whatever width they are given.
//!
//! This is THE canonical height calculation. `block_rows` must agree with
//! `render_block(..).height()` for every block and width.

use super::canvas::{str_width, Canvas};
use crate::model::{LayoutBlock, TextAlign, TextStyle};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Maps semantic text styles to terminal styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextPalette {
    /// Style for `TextStyle::Plain`.
    pub plain: Style,
    /// Style for `TextStyle::Title`.
    pub title: Style,
}

impl TextPalette {
    fn style(&self, style: TextStyle) -> Style {
        match style {
            TextStyle::Plain => self.plain,
            TextStyle::Title => self.title,
        }
    }
}

/// Render `block` at `width` columns.
pub fn render_block(block: &LayoutBlock, width: usize, palette: &TextPalette) -> Canvas {
    match block {
        LayoutBlock::Text {
            content,
            style,
            align,
        } => {
            let style = palette.style(*style);
            let rows = wrap_text(content, width)
                .into_iter()
                .map(|row| {
                    let indent = match align {
                        TextAlign::Left => 0,
                        TextAlign::Center => width.saturating_sub(str_width(&row)) / 2,
                    };
                    let mut spans = Vec::with_capacity(2);
                    if indent > 0 {
                        spans.push(Span::raw(" ".repeat(indent)));
                    }
                    spans.push(Span::styled(row, style));
                    Line::from(spans)
                })
                .collect();
            Canvas::from_rows(width, rows)
        }
        LayoutBlock::Padding { child, left, right } => {
            let (left, inner, right) = split_insets(width, *left, *right);
            let mut canvas = render_block(child, inner, palette);
            canvas.pad_left(left);
            canvas.pad_right(right);
            canvas
        }
        LayoutBlock::Stack(children) => {
            let parts: Vec<Canvas> = children
                .iter()
                .map(|child| render_block(child, width, palette))
                .collect();
            if parts.is_empty() {
                Canvas::blank(width, 0)
            } else {
                Canvas::stack(parts)
            }
        }
    }
}

/// Number of rows `block` occupies at `width` columns.
pub fn block_rows(block: &LayoutBlock, width: usize) -> usize {
    match block {
        LayoutBlock::Text { content, .. } => wrap_text(content, width).len(),
        LayoutBlock::Padding { child, left, right } => {
            let (_, inner, _) = split_insets(width, *left, *right);
            block_rows(child, inner)
        }
        LayoutBlock::Stack(children) => children.iter().map(|c| block_rows(c, width)).sum(),
    }
}

/// Split `width` into `(left, inner, right)`, shrinking insets that do not fit.
fn split_insets(width: usize, left: u16, right: u16) -> (usize, usize, usize) {
    let left = usize::from(left).min(width);
    let right = usize::from(right).min(width - left);
    (left, width - left - right, right)
}

/// Greedy word wrap.
///
/// `\n` forces a break, so a trailing newline yields a trailing empty row and an
/// empty string yields a single empty row. Words wider than `width` are broken
/// across rows. At width zero every logical line becomes one empty row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in text.split('\n') {
        if width == 0 {
            rows.push(String::new());
        } else {
            wrap_line(line, width, &mut rows);
        }
    }
    rows
}

fn wrap_line(line: &str, width: usize, rows: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;
    let mut started = false;

    for word in line.split(' ') {
        let word_width = str_width(word);

        if started && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if started {
            rows.push(std::mem::take(&mut current));
        }
        started = true;
        current_width = 0;

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Hard-break a word that cannot fit on any row.
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    rows.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_line_is_single_row() {
        assert_eq!(wrap_text("200: OK", 20), vec!["200: OK"]);
    }

    #[test]
    fn wrap_trailing_newline_adds_blank_row() {
        assert_eq!(wrap_text("200: OK\n", 20), vec!["200: OK", ""]);
    }

    #[test]
    fn wrap_empty_is_one_blank_row() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn wrap_breaks_at_spaces() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_exact_fit_stays_on_row() {
        assert_eq!(wrap_text("abcde fghij", 11), vec!["abcde fghij"]);
        assert_eq!(wrap_text("abcde fghij", 10), vec!["abcde", "fghij"]);
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_long_word_after_short_word() {
        assert_eq!(wrap_text("a bcdefgh", 4), vec!["a", "bcde", "fgh"]);
    }

    #[test]
    fn wrap_keeps_interior_double_spaces() {
        assert_eq!(wrap_text("a  b", 10), vec!["a  b"]);
    }

    #[test]
    fn wrap_zero_width_is_one_row_per_line() {
        assert_eq!(wrap_text("a\nb\n", 0), vec!["", "", ""]);
    }

    #[test]
    fn wrap_rows_never_exceed_width() {
        let text = "Standard response for successful HTTP requests. The actual response will depend on the request method used.";
        for width in 1..40 {
            for row in wrap_text(text, width) {
                assert!(str_width(&row) <= width, "{row:?} wider than {width}");
            }
        }
    }

    #[test]
    fn centered_text_is_indented() {
        let block = LayoutBlock::centered("ab");
        let canvas = render_block(&block, 6, &TextPalette::default());
        assert_eq!(canvas.to_plain_rows(), vec!["  ab  "]);
    }

    #[test]
    fn padding_insets_child() {
        let block = LayoutBlock::padded(LayoutBlock::text("abc def"), 5, 0);
        let canvas = render_block(&block, 8, &TextPalette::default());
        assert_eq!(canvas.to_plain_rows(), vec!["     abc", "     def"]);
    }

    #[test]
    fn padding_wider_than_width_shrinks() {
        let block = LayoutBlock::padded(LayoutBlock::text("abc"), 5, 5);
        let canvas = render_block(&block, 3, &TextPalette::default());
        assert_eq!(canvas.width(), 3);
        assert_eq!(canvas.height(), 1);
    }

    #[test]
    fn stack_concatenates_children() {
        let block = LayoutBlock::Stack(vec![LayoutBlock::text("a\n"), LayoutBlock::text("b")]);
        let canvas = render_block(&block, 2, &TextPalette::default());
        assert_eq!(canvas.to_plain_rows(), vec!["a ", "  ", "b "]);
    }

    #[test]
    fn empty_stack_has_no_rows() {
        let block = LayoutBlock::Stack(Vec::new());
        let canvas = render_block(&block, 10, &TextPalette::default());
        assert_eq!(canvas.height(), 0);
        assert_eq!(block_rows(&block, 10), 0);
    }

    #[test]
    fn block_rows_matches_render_height() {
        let block = LayoutBlock::Stack(vec![
            LayoutBlock::centered("STATCODE: The Manual for HTTP Status Codes\n"),
            LayoutBlock::styled("DESCRIPTION", TextStyle::Title),
            LayoutBlock::padded(
                LayoutBlock::text("The server cannot or will not process the request due to an apparent client error."),
                5,
                0,
            ),
        ]);
        for width in [0, 1, 7, 20, 80] {
            assert_eq!(
                block_rows(&block, width),
                render_block(&block, width, &TextPalette::default()).height(),
                "width {width}"
            );
        }
    }

    #[test]
    fn title_style_is_applied() {
        let palette = TextPalette {
            plain: Style::default(),
            title: Style::default().add_modifier(ratatui::style::Modifier::BOLD),
        };
        let canvas = render_block(&LayoutBlock::styled("CATEGORY", TextStyle::Title), 10, &palette);
        assert_eq!(canvas.rows()[0].spans[0].style, palette.title);
    }
}
