//! Deck template representation and rendering.
//!
//! A deck template is an ordered sequence of plain-text simulation directives
//! containing zero or more brace-delimited placeholders (canonically
//! `{ff_settings}`). This module provides the parsed template model
//! ([`deck::DeckTemplate`]), the placeholder scanner ([`placeholder`]), and the
//! substitution transform ([`render`]).

pub mod deck;
pub mod placeholder;
pub mod render;
