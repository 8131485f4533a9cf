//! Core view-state value types.

use ratatui::layout::Rect;

/// Size of the area the viewport renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportDimensions {
    /// Width in terminal columns.
    pub width: u16,
    /// Height in terminal rows.
    pub height: u16,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width as a column count.
    pub fn cols(self) -> usize {
        usize::from(self.width)
    }

    /// Height as a row count.
    pub fn rows(self) -> usize {
        usize::from(self.height)
    }
}

impl From<Rect> for ViewportDimensions {
    fn from(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }
}

/// Scroll state reported after a render, for position hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollInfo {
    /// First visible content row.
    pub top: usize,
    /// Rows visible in the viewport.
    pub visible: usize,
    /// Rows of content (after padding to the viewport).
    pub total: usize,
}

impl ScrollInfo {
    /// True when every content row is visible.
    pub fn fits(self) -> bool {
        self.total <= self.visible
    }

    /// One-based index of the last visible row.
    pub fn bottom(self) -> usize {
        (self.top + self.visible).min(self.total)
    }

    /// Percentage of the content at or above the bottom of the viewport.
    pub fn percent(self) -> usize {
        if self.total == 0 {
            100
        } else {
            self.bottom() * 100 / self.total
        }
    }
}
