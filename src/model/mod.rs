//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod key_action;
pub mod layout;
pub mod reference;
pub mod resolver;

// Re-export for convenience
pub use error::{AppError, DataError, FormatError, LookupError};
pub use key_action::KeyAction;
pub use layout::{LayoutBlock, TextAlign, TextStyle};
pub use reference::{normalize_key, ReferenceEntry, ReferenceTable};
pub use resolver::resolve;
