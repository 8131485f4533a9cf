//! Scroll commands and the trim-top transition rule.

use crate::model::KeyAction;

/// A navigation command recorded by key routing and applied on the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollCommand {
    /// One row up.
    LineUp,
    /// One row down.
    LineDown,
    /// One page up.
    PageUp,
    /// One page down.
    PageDown,
    /// First row.
    ToTop,
    /// Last page.
    ToEnd,
}

impl ScrollCommand {
    /// Scroll command for a key action. `None` for non-scroll actions.
    pub fn from_action(action: KeyAction) -> Option<Self> {
        match action {
            KeyAction::ScrollUp => Some(Self::LineUp),
            KeyAction::ScrollDown => Some(Self::LineDown),
            KeyAction::PageUp => Some(Self::PageUp),
            KeyAction::PageDown => Some(Self::PageDown),
            KeyAction::ScrollToTop => Some(Self::ToTop),
            KeyAction::ScrollToBottom => Some(Self::ToEnd),
            KeyAction::Quit => None,
        }
    }
}

/// Largest valid trim-top for this content and viewport.
pub fn max_trim_top(content_rows: usize, viewport_rows: usize) -> usize {
    content_rows.saturating_sub(viewport_rows)
}

/// Rows moved by a page command.
///
/// One row of overlap is kept between pages, so a one-row viewport does not
/// move on a page command.
pub fn page_step(viewport_rows: usize) -> usize {
    viewport_rows.saturating_sub(1)
}

/// Resolve a possibly bottom-relative trim-top.
///
/// Negative values count from the bottom: `-1` is the last page.
pub fn resolve_trim_top(trim_top: isize, content_rows: usize, viewport_rows: usize) -> isize {
    if trim_top < 0 {
        content_rows as isize - viewport_rows as isize + trim_top + 1
    } else {
        trim_top
    }
}

/// Apply `command` to `trim_top`.
///
/// The result is always within `[0, max_trim_top]`; when the content fits it is 0.
pub fn next_trim_top(
    trim_top: isize,
    command: Option<ScrollCommand>,
    content_rows: usize,
    viewport_rows: usize,
) -> usize {
    if content_rows <= viewport_rows {
        return 0;
    }

    let current = resolve_trim_top(trim_top, content_rows, viewport_rows);
    let max = max_trim_top(content_rows, viewport_rows) as isize;
    let page = page_step(viewport_rows) as isize;
    let clamp = |value: isize| value.clamp(0, max) as usize;

    match command {
        Some(ScrollCommand::LineUp) => clamp(current - 1),
        Some(ScrollCommand::LineDown) => clamp(current + 1),
        Some(ScrollCommand::PageUp) => clamp(current - page),
        Some(ScrollCommand::PageDown) => clamp(current + page),
        Some(ScrollCommand::ToTop) => 0,
        Some(ScrollCommand::ToEnd) => max as usize,
        None => clamp(current),
    }
}
