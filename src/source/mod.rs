//! Reference data sources.
//!
//! This module loads the reference table:
//! - The table embedded in the binary (default)
//! - A TOML file given with `--data` or `data_file` in the config
//!
//! Loading happens once at startup. The returned [`ReferenceTable`] is read-only
//! for the rest of the process.

use crate::model::error::DataError;
use crate::model::{ReferenceEntry, ReferenceTable};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

/// Table compiled into the binary.
pub const EMBEDDED_TABLE: &str = include_str!("../../data/code_descriptions.toml");

/// Where the reference table comes from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// The table shipped inside the binary.
    Embedded,
    /// A TOML file on disk.
    File(PathBuf),
}

impl TableSource {
    /// Pick the file source when a path is configured, else the embedded table.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => TableSource::File(path),
            None => TableSource::Embedded,
        }
    }

    /// Load and validate the table.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Read` when the file cannot be read, `DataError::Parse`
    /// when it is not valid TOML or does not match the entry schema, and the
    /// validation variants from [`ReferenceTable::from_entries`].
    pub fn load(&self) -> Result<ReferenceTable, DataError> {
        let table = match self {
            TableSource::Embedded => parse_table(EMBEDDED_TABLE, "embedded table")?,
            TableSource::File(path) => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| DataError::Read {
                        path: path.clone(),
                        source,
                    })?;
                parse_table(&contents, &path.display().to_string())?
            }
        };

        info!(source = ?self, entries = table.len(), "Reference table loaded");
        Ok(table)
    }
}

/// On-disk layout: an ordered array of `[[entry]]` tables.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    entry: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    key: RawKey,
    message: String,
    category: String,
    #[serde(default)]
    description: String,
}

/// Keys may be written as `key = 200` or `key = "200"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawKey {
    Code(i64),
    Name(String),
}

impl RawKey {
    fn into_string(self) -> String {
        match self {
            RawKey::Code(code) => code.to_string(),
            RawKey::Name(name) => name,
        }
    }
}

/// Parse TOML table contents.
///
/// `origin` names the source in error messages.
pub fn parse_table(contents: &str, origin: &str) -> Result<ReferenceTable, DataError> {
    let file: TableFile = toml::from_str(contents).map_err(|e| DataError::Parse {
        origin: origin.to_string(),
        reason: e.to_string(),
    })?;

    ReferenceTable::from_entries(file.entry.into_iter().map(|raw| {
        (
            raw.key.into_string(),
            ReferenceEntry::new(raw.message, raw.category, raw.description),
        )
    }))
}
