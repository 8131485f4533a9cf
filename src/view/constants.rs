//! Layout dimension constants for TUI rendering.

/// Height of the footer in lines (blank spacer + menu line).
pub const FOOTER_HEIGHT: u16 = 2;

/// Columns of margin on each side of the body.
pub const BODY_MARGIN: u16 = 1;
