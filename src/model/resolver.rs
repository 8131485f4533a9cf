//! Lookup resolver: raw user token → reference entry.

use super::error::LookupError;
use super::reference::{normalize_key, ReferenceEntry, ReferenceTable};
use tracing::debug;

/// Resolve a user-supplied token against the table.
///
/// Integers are looked up by canonical decimal form, anything else by its
/// case-folded form. Malformed input is never an error in itself; it simply
/// normalizes to a key that is not in the table.
pub fn resolve<'t>(table: &'t ReferenceTable, token: &str) -> Result<&'t ReferenceEntry, LookupError> {
    let key = normalize_key(token).ok_or(LookupError::EmptyToken)?;

    let found = table.get(&key);
    debug!(token, key = %key, found = found.is_some(), "Resolved lookup token");

    found.ok_or_else(|| LookupError::NotFound {
        token: token.to_string(),
    })
}
