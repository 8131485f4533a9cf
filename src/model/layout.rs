//! Layout tree of display blocks.
//!
//! A `LayoutBlock` describes *what* to draw; `view_state::canvas` turns it into
//! rows for a given width.

/// Semantic text style. Mapped to terminal colors by `view::styles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// Body text.
    #[default]
    Plain,
    /// Section labels.
    Title,
}

/// Horizontal alignment of wrapped text rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered in the available width.
    Center,
}

/// One node of the layout tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutBlock {
    /// A paragraph that wraps to the available width.
    Text {
        /// Raw text; `\n` forces a line break.
        content: String,
        /// Style applied to every row.
        style: TextStyle,
        /// Alignment of every wrapped row.
        align: TextAlign,
    },
    /// A child rendered with blank columns on each side.
    Padding {
        /// Wrapped block.
        child: Box<LayoutBlock>,
        /// Blank columns on the left.
        left: u16,
        /// Blank columns on the right.
        right: u16,
    },
    /// Children stacked top to bottom.
    Stack(Vec<LayoutBlock>),
}

impl LayoutBlock {
    /// Left-aligned plain text.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: TextStyle::Plain,
            align: TextAlign::Left,
        }
    }

    /// Left-aligned text with a style.
    pub fn styled(content: impl Into<String>, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            style,
            align: TextAlign::Left,
        }
    }

    /// Centered plain text.
    pub fn centered(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: TextStyle::Plain,
            align: TextAlign::Center,
        }
    }

    /// Wrap `child` in left/right insets.
    pub fn padded(child: LayoutBlock, left: u16, right: u16) -> Self {
        Self::Padding {
            child: Box::new(child),
            left,
            right,
        }
    }

    /// Children of a `Stack`, or an empty slice.
    pub fn children(&self) -> &[LayoutBlock] {
        match self {
            Self::Stack(children) => children,
            _ => &[],
        }
    }

    /// Text of a `Text` block, looking through any `Padding`.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            Self::Padding { child, .. } => child.text_content(),
            Self::Stack(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_looks_through_padding() {
        let block = LayoutBlock::padded(LayoutBlock::text("body"), 5, 0);
        assert_eq!(block.text_content(), Some("body"));
    }

    #[test]
    fn stack_has_no_text_content() {
        let block = LayoutBlock::Stack(vec![LayoutBlock::text("a")]);
        assert_eq!(block.text_content(), None);
        assert_eq!(block.children().len(), 1);
    }
}
