use super::deck::DeckTemplate;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// A placeholder that rendering found no value for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingValue {
    /// The placeholder name.
    pub name: String,
    /// The 1-based line of its first occurrence in the template.
    pub line: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("No substitution value for {}", format_missing(.0))]
    MissingValues(Vec<MissingValue>),
}

fn format_missing(missing: &[MissingValue]) -> String {
    let items: Vec<String> = missing
        .iter()
        .map(|m| format!("'{{{}}}' (first used on line {})", m.name, m.line))
        .collect();
    items.join(", ")
}

/// An ordered map from placeholder name to replacement text.
///
/// Replacement text may span multiple lines; force-field settings usually do
/// (`pair_style` plus one `pair_coeff` per species). Deserializes from a TOML
/// table of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Substitutions(BTreeMap<String, String>);

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous value for the name if any.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Folds `overrides` into this map; entries in `overrides` win.
    pub fn merge(&mut self, overrides: Substitutions) {
        self.0.extend(overrides.0);
    }
}

impl FromIterator<(String, String)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The result of rendering a deck template.
///
/// Carries the output text plus bookkeeping: how many occurrences each name
/// replaced, and which provided keys matched no placeholder at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDeck {
    text: String,
    counts: BTreeMap<String, usize>,
    unused_keys: Vec<String>,
}

impl RenderedDeck {
    /// Returns the rendered deck text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the deck, returning the rendered text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns per-name substitution counts, in name order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns the provided substitution keys that matched no placeholder.
    pub fn unused_keys(&self) -> &[String] {
        &self.unused_keys
    }
}

/// Renders a deck template by substituting placeholder occurrences.
///
/// Every occurrence whose name has an entry in `substitutions` is replaced by
/// the mapped text; all other bytes are copied through unchanged. The output
/// is not re-scanned, so replacement text containing `{...}` is emitted
/// verbatim. Rendering is deterministic: the same template and map always
/// produce byte-identical output.
///
/// # Errors
///
/// Fails with [`RenderError::MissingValues`] before producing any output if
/// any scanned placeholder has no entry in the map; the error names every
/// missing placeholder and the line of its first occurrence.
pub fn render(
    template: &DeckTemplate,
    substitutions: &Substitutions,
) -> Result<RenderedDeck, RenderError> {
    let mut missing: Vec<MissingValue> = Vec::new();
    for ph in template.placeholders() {
        if !substitutions.contains(ph.name()) && !missing.iter().any(|m| m.name == ph.name()) {
            missing.push(MissingValue {
                name: ph.name().to_string(),
                line: ph.line(),
            });
        }
    }
    if !missing.is_empty() {
        return Err(RenderError::MissingValues(missing));
    }

    let text = template.text();
    let mut out = String::with_capacity(text.len());
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut cursor = 0usize;
    for ph in template.placeholders() {
        let span = ph.span();
        out.push_str(&text[cursor..span.start]);
        // presence verified above
        out.push_str(substitutions.get(ph.name()).unwrap_or_default());
        *counts.entry(ph.name().to_string()).or_insert(0) += 1;
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);

    let unused_keys = substitutions
        .iter()
        .filter(|(name, _)| !counts.contains_key(*name))
        .map(|(name, _)| name.to_string())
        .collect();

    Ok(RenderedDeck {
        text: out,
        counts,
        unused_keys,
    })
}
