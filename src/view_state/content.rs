//! Content that a scroll viewport can wrap.
//!
//! Instead of probing wrapped content at runtime for optional methods, every
//! content type declares what it supports through [`Capabilities`] and gets
//! declining default implementations for the rest.

use super::canvas::{Canvas, CursorPos};
use super::layout::{block_rows, render_block, TextPalette};
use crate::model::LayoutBlock;
use crossterm::event::{KeyEvent, MouseEvent};

/// How content is sized before the viewport scrolls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Wraps to the width it is given; height follows from the width.
    Flow,
    /// Has intrinsic width and height.
    Fixed,
}

/// What a content type supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Sizing mode.
    pub sizing: Sizing,
    /// `rows` returns a value.
    pub reports_rows: bool,
    /// `cursor` may return a position and rendered canvases may carry one.
    pub reports_cursor: bool,
    /// `handle_key` may consume keys.
    pub accepts_keys: bool,
    /// `handle_mouse` may consume mouse events.
    pub accepts_mouse: bool,
}

impl Capabilities {
    /// Flow content that only renders.
    pub const FLOW: Self = Self {
        sizing: Sizing::Flow,
        reports_rows: true,
        reports_cursor: false,
        accepts_keys: false,
        accepts_mouse: false,
    };
}

/// Result of offering a key to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was consumed.
    Handled,
    /// The key was declined and is handed back.
    Unhandled(KeyEvent),
}

/// Content rendered inside a [`ScrollViewport`](super::viewport::ScrollViewport).
///
/// `width` is `Some(cols)` for flow content and `None` for fixed content.
pub trait ScrollContent {
    /// Declared capabilities.
    fn capabilities(&self) -> Capabilities;

    /// Render at natural size.
    fn render(&self, width: Option<usize>) -> Canvas;

    /// Total rows at this width, when `reports_rows`.
    fn rows(&self, _width: Option<usize>) -> Option<usize> {
        None
    }

    /// Current cursor position, when `reports_cursor`.
    fn cursor(&self, _width: Option<usize>) -> Option<CursorPos> {
        None
    }

    /// Offer a key, when `accepts_keys`.
    fn handle_key(&mut self, _width: Option<usize>, key: KeyEvent) -> KeyOutcome {
        KeyOutcome::Unhandled(key)
    }

    /// Offer a mouse event in content coordinates, when `accepts_mouse`.
    fn handle_mouse(&mut self, _width: Option<usize>, _event: MouseEvent) -> bool {
        false
    }
}

/// A layout tree plus the palette to draw it with.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContent {
    root: LayoutBlock,
    palette: TextPalette,
}

impl LayoutContent {
    /// Wrap a layout tree.
    pub fn new(root: LayoutBlock, palette: TextPalette) -> Self {
        Self { root, palette }
    }

    /// The wrapped layout tree.
    pub fn root(&self) -> &LayoutBlock {
        &self.root
    }
}

impl ScrollContent for LayoutContent {
    fn capabilities(&self) -> Capabilities {
        Capabilities::FLOW
    }

    fn render(&self, width: Option<usize>) -> Canvas {
        render_block(&self.root, width.unwrap_or(0), &self.palette)
    }

    fn rows(&self, width: Option<usize>) -> Option<usize> {
        Some(block_rows(&self.root, width.unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn layout_content_is_flow_without_cursor_or_input() {
        let content = LayoutContent::new(LayoutBlock::text("x"), TextPalette::default());
        let caps = content.capabilities();
        assert_eq!(caps.sizing, Sizing::Flow);
        assert!(caps.reports_rows);
        assert!(!caps.reports_cursor);
        assert!(!caps.accepts_keys);
        assert!(!caps.accepts_mouse);
    }

    #[test]
    fn layout_content_declines_keys() {
        let mut content = LayoutContent::new(LayoutBlock::text("x"), TextPalette::default());
        let key = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(content.handle_key(Some(10), key), KeyOutcome::Unhandled(key));
    }

    #[test]
    fn layout_content_rows_follow_width() {
        let content = LayoutContent::new(LayoutBlock::text("aaa bbb ccc"), TextPalette::default());
        assert_eq!(content.rows(Some(11)), Some(1));
        assert_eq!(content.rows(Some(3)), Some(3));
    }
}
