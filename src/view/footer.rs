//! Footer with the quit key and a position hint.

use super::styles::Palette;
use crate::view_state::ScrollInfo;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Where the viewport is in the content: `Lines 1-20/140 (14%)`, or `All`
/// when everything fits.
pub fn position_hint(info: ScrollInfo) -> String {
    if info.fits() {
        return "All".to_string();
    }
    format!(
        "Lines {}-{}/{} ({}%)",
        info.top + 1,
        info.bottom(),
        info.total,
        info.percent()
    )
}

const QUIT_KEY: &str = " Q ";
const QUIT_LABEL: &str = " Quit";

/// The two footer lines: a blank spacer, then the menu.
///
/// When the menu would not fit in `width` columns the ` Quit` label is
/// dropped so the position hint stays visible.
pub fn footer_lines(info: ScrollInfo, palette: &Palette, width: u16) -> Vec<Line<'static>> {
    let hint = format!("  {}", position_hint(info));
    let full_width = QUIT_KEY.width() + QUIT_LABEL.width() + hint.width();

    let mut menu = vec![Span::styled(QUIT_KEY, palette.menu)];
    if full_width <= usize::from(width) {
        menu.push(Span::styled(QUIT_LABEL, palette.hint));
    }
    menu.push(Span::styled(hint, palette.hint));

    vec![Line::default(), Line::from(menu)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_is_all_when_content_fits() {
        let info = ScrollInfo {
            top: 0,
            visible: 20,
            total: 12,
        };
        assert_eq!(position_hint(info), "All");
    }

    #[test]
    fn hint_shows_visible_range_and_percent() {
        let info = ScrollInfo {
            top: 0,
            visible: 10,
            total: 100,
        };
        assert_eq!(position_hint(info), "Lines 1-10/100 (10%)");
    }

    #[test]
    fn hint_at_end_is_full_percent() {
        let info = ScrollInfo {
            top: 90,
            visible: 10,
            total: 100,
        };
        assert_eq!(position_hint(info), "Lines 91-100/100 (100%)");
    }

    fn menu_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn footer_menu_line_has_quit_key() {
        let lines = footer_lines(ScrollInfo::default(), &Palette::default(), 80);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[0].content, " Q ");
        assert_eq!(lines[1].spans[1].content, " Quit");
    }

    #[test]
    fn narrow_footer_drops_quit_label_but_keeps_hint() {
        let info = ScrollInfo {
            top: 40,
            visible: 10,
            total: 50,
        };

        let wide = footer_lines(info, &Palette::default(), 31);
        assert_eq!(menu_text(&wide[1]), " Q  Quit  Lines 41-50/50 (100%)");

        let narrow = footer_lines(info, &Palette::default(), 30);
        assert_eq!(menu_text(&narrow[1]), " Q   Lines 41-50/50 (100%)");
    }
}
