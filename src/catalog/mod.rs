//! Message catalog
//!
//! Supplies the raw reply template for a code, an optional sub-identifier
//! and the client's language.

mod resource;

pub use resource::{MessageEntry, MessageResource};

/// Lookup of raw reply templates.
pub trait MessageCatalog: Send + Sync {
    /// Returns the template registered for `code` (and `sub_id`, when given)
    /// in `language`, falling back to the default language.
    fn message(&self, code: u16, sub_id: Option<&str>, language: Option<&str>) -> Option<String>;

    /// Whether replies can be rendered in `language`.
    fn supports_language(&self, language: &str) -> bool;
}
