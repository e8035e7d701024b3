//! Entities: surface spans with their normalized serialization forms.
//!
//! Entities never outlive the CSC that contains them; they are plain
//! owned values created during role binding.

use serde::{Deserialize, Serialize};

/// A surface span paired with its normalized form.
///
/// `text` is the span joined by single spaces and lowercased; `normalized`
/// is the uppercased, diacritic-preserving form with internal whitespace
/// collapsed to `_`, as emitted by the serializers.
///
/// # Examples
///
/// ```
/// use ptil::Entity;
///
/// let e = Entity::from_span("  The   Boy ");
/// assert_eq!(e.text, "the boy");
/// assert_eq!(e.normalized, "THE_BOY");
///
/// let n = Entity::from_span("niño");
/// assert_eq!(n.normalized, "NIÑO");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Lowercased, whitespace-trimmed surface span.
    pub text: String,
    /// Uppercase form used in serialization. Diacritics are preserved.
    pub normalized: String,
}

impl Entity {
    /// Builds an entity from a raw surface span.
    ///
    /// Whitespace runs collapse to single spaces in `text` and to a single
    /// `_` in `normalized`.
    #[must_use]
    pub fn from_span(span: &str) -> Self {
        let words: Vec<&str> = span.split_whitespace().collect();
        let text = words.join(" ").to_lowercase();
        let normalized = text.to_uppercase().replace(' ', "_");
        Self { text, normalized }
    }

    /// True if the span was empty or whitespace-only.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
