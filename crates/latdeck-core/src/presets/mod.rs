//! Built-in deck templates shipped with the library.
//!
//! Each entry in the catalog has a stable registry name so pipeline drivers
//! can refer to decks without carrying template files around.

use crate::core::template::deck::DeckTemplate;

/// Catalog entry for a built-in deck template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinDeck {
    name: &'static str,
    description: &'static str,
    text: &'static str,
}

impl BuiltinDeck {
    /// Returns the registry name of the deck.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns a one-line description of what the deck does.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the raw template text of the deck.
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Parses the deck into a [`DeckTemplate`].
    pub fn template(&self) -> DeckTemplate {
        DeckTemplate::parse(self.text)
    }
}

const BUILTIN_DECKS: &[BuiltinDeck] = &[BuiltinDeck {
    name: "lattice-relax",
    description: "Relax a periodic cell to its minimum-energy lattice; writes lattice.txt and data.relaxed.",
    text: include_str!("decks/lattice-relax.in"),
}];

/// Returns all built-in decks in catalog order.
pub fn all() -> &'static [BuiltinDeck] {
    BUILTIN_DECKS
}

/// Looks up a built-in deck by its registry name.
pub fn get(name: &str) -> Option<&'static BuiltinDeck> {
    BUILTIN_DECKS.iter().find(|deck| deck.name == name)
}

/// Iterates the registry names of all built-in decks.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN_DECKS.iter().map(|deck| deck.name)
}
