//! Reference entries as layout trees.
//!
//! Every entry becomes the same man-page shaped block: a centered title, then
//! the STATUS MESSAGE, CATEGORY and DESCRIPTION sections, each a bold label
//! followed by an inset body.

use crate::model::{FormatError, LayoutBlock, ReferenceEntry, ReferenceTable, TextStyle};

/// Title line at the top of every entry.
pub const TITLE: &str = "STATCODE: The Manual for HTTP Status Codes\n";

/// Left inset of section bodies, in columns.
pub const BODY_INSET: u16 = 5;

fn section(label: &str, body: String) -> [LayoutBlock; 2] {
    [
        LayoutBlock::styled(label, TextStyle::Title),
        LayoutBlock::padded(LayoutBlock::text(body), BODY_INSET, 0),
    ]
}

/// Lay out a single entry shown under `key`.
pub fn format_entry(entry: &ReferenceEntry, key: &str) -> LayoutBlock {
    let mut blocks = Vec::with_capacity(7);
    blocks.push(LayoutBlock::centered(TITLE));
    blocks.extend(section(
        "STATUS MESSAGE",
        format!("{key}: {}\n", entry.message()),
    ));
    blocks.extend(section("CATEGORY", format!("{}\n", entry.category())));
    blocks.extend(section("DESCRIPTION", entry.description().to_string()));
    LayoutBlock::Stack(blocks)
}

/// Lay out every entry of `table`, in table order.
///
/// # Errors
///
/// Returns `FormatError::EmptyTable` when there is nothing to show.
pub fn format_all(table: &ReferenceTable) -> Result<LayoutBlock, FormatError> {
    if table.is_empty() {
        return Err(FormatError::EmptyTable);
    }

    Ok(LayoutBlock::Stack(
        table
            .iter()
            .map(|(key, entry)| format_entry(entry, key))
            .collect(),
    ))
}
