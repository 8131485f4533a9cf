//! Scrollable viewport over arbitrarily tall content.
//!
//! The viewport renders its content at natural size, pads it up to the viewport
//! and, when it does not fit, trims rows from the top and bottom around the
//! current scroll offset. Navigation keys only record a [`ScrollCommand`]; the
//! command is applied once, on the next render, against that render's content
//! and viewport size. This way a resize between keystrokes re-clamps naturally.
//!
//! # Invariants
//! - After any render, `trim_top` is within `[0, max(0, content_rows - viewport_rows)]`
//! - When the content fits, `trim_top` is 0
//! - A cursor whose row is outside the visible window is hidden

use super::canvas::{Canvas, CursorPos};
use super::content::{Capabilities, KeyOutcome, ScrollContent, Sizing};
use super::scroll::{next_trim_top, ScrollCommand};
use super::types::{ScrollInfo, ViewportDimensions};
use crate::config::KeyBindings;
use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};
use tracing::debug;

/// Box wrapper that makes flow or fixed content vertically scrollable.
#[derive(Debug)]
pub struct ScrollViewport<C> {
    content: C,
    bindings: KeyBindings,
    /// Rows scrolled off the top. Negative values count from the bottom until
    /// the next render resolves them.
    trim_top: isize,
    pending: Option<ScrollCommand>,
    forward_keys: bool,
    old_cursor: Option<CursorPos>,
    rows_max_cached: usize,
    last_info: ScrollInfo,
}

impl<C: ScrollContent> ScrollViewport<C> {
    /// Wrap `content`, routing navigation keys through `bindings`.
    pub fn new(content: C, bindings: KeyBindings) -> Self {
        Self {
            content,
            bindings,
            trim_top: 0,
            pending: None,
            forward_keys: false,
            old_cursor: None,
            rows_max_cached: 0,
            last_info: ScrollInfo::default(),
        }
    }

    /// The wrapped content.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Key bindings used for navigation.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Current scroll offset (rows trimmed from the top).
    pub fn scroll_position(&self) -> isize {
        self.trim_top
    }

    /// Set the scroll offset. Negative values count from the bottom (`-1` is
    /// the last page). Clamped on the next render.
    pub fn set_scroll_position(&mut self, position: isize) {
        self.trim_top = position;
    }

    /// Queue a scroll command for the next render. Replaces any queued command.
    pub fn command(&mut self, command: ScrollCommand) {
        self.pending = Some(command);
    }

    /// The command waiting for the next render, if any.
    pub fn pending_command(&self) -> Option<ScrollCommand> {
        self.pending
    }

    /// Whether the last render left keys to be offered to the content first.
    pub fn forwards_keys(&self) -> bool {
        self.forward_keys
    }

    /// Scroll state from the last render.
    pub fn scroll_info(&self) -> ScrollInfo {
        self.last_info
    }

    /// Total content rows at this width.
    ///
    /// Queries the content when it reports rows and caches the answer; content
    /// that does not report rows gets the last cached value (initially 0).
    pub fn content_rows(&mut self, cols: usize) -> usize {
        if self.content.capabilities().reports_rows {
            let width = self.content_width(cols);
            if let Some(rows) = self.content.rows(width) {
                self.rows_max_cached = rows;
            }
        }
        self.rows_max_cached
    }

    fn content_width(&self, cols: usize) -> Option<usize> {
        match self.content.capabilities().sizing {
            Sizing::Flow => Some(cols),
            Sizing::Fixed => None,
        }
    }

    /// Render into exactly `size`.
    pub fn render(&mut self, size: ViewportDimensions) -> Canvas {
        let (max_cols, max_rows) = (size.cols(), size.rows());

        let caps = self.content.capabilities();
        let mut canvas = self.content.render(self.content_width(max_cols));
        let (canv_cols, canv_rows) = (canvas.width(), canvas.height());

        if canv_cols < max_cols {
            canvas.pad_right(max_cols - canv_cols);
        }
        if canv_rows < max_rows {
            canvas.pad_bottom(max_rows - canv_rows);
        }

        if canv_cols <= max_cols && canv_rows <= max_rows {
            self.trim_top = 0;
            self.pending = None;
            self.old_cursor = None;
            self.forward_keys = forwards_to(caps, &canvas);
            self.last_info = ScrollInfo {
                top: 0,
                visible: max_rows,
                total: canv_rows,
            };
            return canvas;
        }

        let total_rows = canvas.height();
        let cursor = canvas.cursor().filter(|_| caps.reports_cursor);
        self.adjust_trim_top(total_rows, max_rows, cursor);

        let trim_top = self.trim_top.max(0) as usize;
        let trim_end = total_rows.saturating_sub(max_rows + trim_top);
        let trim_right = canvas.width().saturating_sub(max_cols);

        canvas.trim_top(trim_top);
        canvas.trim_bottom(trim_end);
        canvas.trim_right(trim_right);

        self.forward_keys = forwards_to(caps, &canvas);
        self.last_info = ScrollInfo {
            top: trim_top,
            visible: max_rows,
            total: total_rows,
        };

        canvas
    }

    /// Apply the pending command, then keep a moved cursor in view.
    fn adjust_trim_top(&mut self, total_rows: usize, max_rows: usize, cursor: Option<CursorPos>) {
        let command = self.pending.take();
        let mut trim_top = next_trim_top(self.trim_top, command, total_rows, max_rows);

        if let Some(old) = self.old_cursor.take() {
            if let Some((_, row)) = cursor.filter(|&c| c != old) {
                if row < trim_top {
                    trim_top = row;
                } else if row >= trim_top + max_rows {
                    trim_top = (row + 1).saturating_sub(max_rows);
                }
            }
        }

        if command.is_some() {
            debug!(?command, from = self.trim_top, to = trim_top, total_rows, max_rows, "Scrolled");
        }
        self.trim_top = trim_top as isize;
    }

    /// Route a key press.
    ///
    /// When the last render showed a content cursor and the content accepts
    /// keys, the content sees the key first. Otherwise, or when the content
    /// declines, navigation keys queue a scroll command; a declining content
    /// may hand back a different key than it was given. Everything else is
    /// handed back unhandled.
    pub fn handle_key(&mut self, size: ViewportDimensions, mut key: KeyEvent) -> KeyOutcome {
        if self.forward_keys {
            let caps = self.content.capabilities();
            let width = self.content_width(size.cols());
            if caps.reports_cursor {
                self.old_cursor = self.content.cursor(width);
            }

            match self.content.handle_key(width, key) {
                KeyOutcome::Handled => return KeyOutcome::Handled,
                KeyOutcome::Unhandled(returned) => key = returned,
            }
        }

        let Some(command) = self.bindings.get(key).and_then(ScrollCommand::from_action) else {
            return KeyOutcome::Unhandled(key);
        };

        self.pending = Some(command);
        KeyOutcome::Handled
    }

    /// Route a mouse event given in viewport coordinates.
    ///
    /// Content that accepts mouse input receives the event with its row shifted
    /// by the scroll offset. Otherwise the wheel scrolls by one row.
    /// Returns whether the event was consumed.
    pub fn handle_mouse(&mut self, size: ViewportDimensions, event: MouseEvent) -> bool {
        if self.content.capabilities().accepts_mouse {
            let width = self.content_width(size.cols());
            let offset = u16::try_from(self.trim_top.max(0)).unwrap_or(u16::MAX);
            let translated = MouseEvent {
                row: event.row.saturating_add(offset),
                ..event
            };
            if self.content.handle_mouse(width, translated) {
                return true;
            }
        }

        match event.kind {
            MouseEventKind::ScrollUp => {
                self.pending = Some(ScrollCommand::LineUp);
                true
            }
            MouseEventKind::ScrollDown => {
                self.pending = Some(ScrollCommand::LineDown);
                true
            }
            _ => false,
        }
    }
}

/// Keys go to the content only when it takes keys and shows a cursor.
fn forwards_to(caps: Capabilities, canvas: &Canvas) -> bool {
    caps.accepts_keys && caps.reports_cursor && canvas.cursor().is_some()
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
