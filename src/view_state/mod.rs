//! View-state layer - Canvases, layout rendering, and scrolling
//!
//! This module sits between the layout tree produced by the formatter and the
//! terminal shell. Nothing here touches the terminal: every operation takes a
//! size and returns a [`Canvas`], so the whole layer is testable without a TTY.
//!
//! # Module Structure
//!
//! - `types`: ViewportDimensions and ScrollInfo
//! - `canvas`: Canvas - fixed-width styled rows with an optional cursor
//! - `layout`: LayoutBlock rendering and word wrap
//! - `content`: ScrollContent - capability-declaring content trait
//! - `scroll`: ScrollCommand and the trim-top transition rule
//! - `viewport`: ScrollViewport - vertical scrolling over any ScrollContent

pub mod canvas;
pub mod content;
pub mod layout;
pub mod scroll;
pub mod types;
pub mod viewport;

pub use canvas::{Canvas, CursorPos};
pub use content::{Capabilities, KeyOutcome, LayoutContent, ScrollContent, Sizing};
pub use layout::{block_rows, render_block, wrap_text, TextPalette};
pub use scroll::{next_trim_top, ScrollCommand};
pub use types::{ScrollInfo, ViewportDimensions};
pub use viewport::ScrollViewport;
