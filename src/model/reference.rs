//! Reference table of status code and header descriptions.

use super::error::DataError;
use std::collections::HashMap;

/// Description of one status code or header.
///
/// Immutable once loaded; the table only hands out shared references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    message: String,
    category: String,
    description: String,
}

impl ReferenceEntry {
    /// Create a new entry.
    pub fn new(
        message: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// Short status message, e.g. "Not Found".
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Category, e.g. "Client Error" or "Request Header".
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Long-form description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Normalize a raw key or user token into its table key.
///
/// Integers are converted to their canonical decimal form (`"0200"` → `"200"`),
/// everything else is case-folded. Surrounding whitespace is ignored.
/// Returns `None` for empty input.
pub fn normalize_key(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<i64>() {
        Ok(code) => Some(code.to_string()),
        Err(_) => Some(trimmed.to_lowercase()),
    }
}

/// Read-only mapping from normalized key to [`ReferenceEntry`].
///
/// Preserves the order entries were loaded in; list mode iterates in that order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<(String, ReferenceEntry)>,
    index: HashMap<String, usize>,
}

impl ReferenceTable {
    /// Build a table from raw `(key, entry)` pairs.
    ///
    /// Keys are normalized with [`normalize_key`]. Fails on empty keys, keys that
    /// collide after normalization, and entries with an empty message or category.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = (K, ReferenceEntry)>,
        K: AsRef<str>,
    {
        let mut table = Self::default();

        for (position, (raw_key, entry)) in entries.into_iter().enumerate() {
            let key = normalize_key(raw_key.as_ref()).ok_or(DataError::EmptyKey { position })?;

            if entry.message.trim().is_empty() {
                return Err(DataError::MalformedEntry {
                    key,
                    field: "message",
                });
            }
            if entry.category.trim().is_empty() {
                return Err(DataError::MalformedEntry {
                    key,
                    field: "category",
                });
            }
            if table.index.contains_key(&key) {
                return Err(DataError::DuplicateKey { key });
            }

            table.index.insert(key.clone(), table.entries.len());
            table.entries.push((key, entry));
        }

        Ok(table)
    }

    /// Look up an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&ReferenceEntry> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Iterate `(normalized key, entry)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_entry() -> ReferenceEntry {
        ReferenceEntry::new("OK", "Success", "Standard response.")
    }

    #[test]
    fn normalize_numeric_strips_leading_zeros_and_sign() {
        assert_eq!(normalize_key("0200").as_deref(), Some("200"));
        assert_eq!(normalize_key("+404").as_deref(), Some("404"));
        assert_eq!(normalize_key(" 500 ").as_deref(), Some("500"));
    }

    #[test]
    fn normalize_header_case_folds() {
        assert_eq!(
            normalize_key("Cache-Control").as_deref(),
            Some("cache-control")
        );
    }

    #[test]
    fn normalize_empty_is_none() {
        assert_eq!(normalize_key(""), None);
        assert_eq!(normalize_key("   "), None);
    }

    #[test]
    fn from_entries_normalizes_keys() {
        let table = ReferenceTable::from_entries([
            ("0200", ok_entry()),
            ("Content-Type", ReferenceEntry::new("Media type", "Entity Header", "")),
        ])
        .unwrap();

        assert!(table.get("200").is_some());
        assert!(table.get("content-type").is_some());
        assert!(table.get("Content-Type").is_none());
    }

    #[test]
    fn from_entries_preserves_order() {
        let table = ReferenceTable::from_entries([
            ("500", ok_entry()),
            ("100", ok_entry()),
            ("accept", ok_entry()),
        ])
        .unwrap();

        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["500", "100", "accept"]);
    }

    #[test]
    fn from_entries_rejects_duplicates_after_normalization() {
        let err = ReferenceTable::from_entries([("Host", ok_entry()), ("HOST", ok_entry())])
            .unwrap_err();
        assert!(matches!(err, DataError::DuplicateKey { key } if key == "host"));
    }

    #[test]
    fn from_entries_rejects_empty_key() {
        let err = ReferenceTable::from_entries([("200", ok_entry()), (" ", ok_entry())])
            .unwrap_err();
        assert!(matches!(err, DataError::EmptyKey { position: 1 }));
    }

    #[test]
    fn from_entries_rejects_empty_message() {
        let err =
            ReferenceTable::from_entries([("200", ReferenceEntry::new("", "Success", "x"))])
                .unwrap_err();
        assert!(matches!(
            err,
            DataError::MalformedEntry {
                field: "message",
                ..
            }
        ));
    }

    #[test]
    fn empty_description_is_allowed() {
        let table =
            ReferenceTable::from_entries([("204", ReferenceEntry::new("No Content", "Success", ""))])
                .unwrap();
        assert_eq!(table.len(), 1);
    }
}
