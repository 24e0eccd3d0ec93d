use super::placeholder::{self, PlaceholderRef};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Placeholder '{{{name}}}' not found in template")]
    PlaceholderNotFound { name: String },

    #[error("Placeholder '{{{name}}}' occurs {count} times, expected exactly one")]
    DuplicatePlaceholder { name: String, count: usize },
}

/// An immutable parsed deck template.
///
/// Holds the raw template text exactly as read, plus the scanned placeholder
/// occurrences. Parsing never fails: any content that is not a well-formed
/// placeholder token is opaque deck material and passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckTemplate {
    text: String,
    placeholders: Vec<PlaceholderRef>,
}

impl DeckTemplate {
    /// Parses template text, scanning it for placeholder occurrences.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let placeholders = placeholder::scan(&text);
        Self { text, placeholders }
    }

    /// Returns the raw template text, byte-for-byte as provided.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns all placeholder occurrences in document order.
    pub fn placeholders(&self) -> &[PlaceholderRef] {
        &self.placeholders
    }

    /// Returns the deduplicated placeholder names in first-appearance order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for p in &self.placeholders {
            if !names.contains(&p.name()) {
                names.push(p.name());
            }
        }
        names
    }

    /// Returns how many times the named placeholder occurs in the template.
    pub fn occurrences(&self, name: &str) -> usize {
        self.placeholders.iter().filter(|p| p.name() == name).count()
    }

    /// Verifies the named placeholder occurs exactly once.
    ///
    /// The canonical relaxation deck carries a single `{ff_settings}` slot;
    /// callers that depend on that shape check it here before rendering.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::PlaceholderNotFound`] if the placeholder is
    /// absent, or [`TemplateError::DuplicatePlaceholder`] if it occurs more
    /// than once.
    pub fn expect_unique(&self, name: &str) -> Result<&PlaceholderRef, TemplateError> {
        let mut occurrences = self.placeholders.iter().filter(|p| p.name() == name);
        let first = occurrences.next().ok_or_else(|| TemplateError::PlaceholderNotFound {
            name: name.to_string(),
        })?;
        let extra = occurrences.count();
        if extra > 0 {
            return Err(TemplateError::DuplicatePlaceholder {
                name: name.to_string(),
                count: extra + 1,
            });
        }
        Ok(first)
    }
}
