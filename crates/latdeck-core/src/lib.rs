//! # latdeck Core Library
//!
//! A library for preparing LAMMPS-style simulation input decks from parameterized
//! templates: plain-text directive files with brace-delimited placeholders that
//! are filled in with caller-supplied text before being handed to the external
//! simulation engine.
//!
//! ## Architectural Philosophy
//!
//! The library is organized into three layers with a clear separation of concerns:
//!
//! - **[`core`]: The Foundation.** Contains the template data model
//!   (`DeckTemplate`), the placeholder scanner, the rendering engine
//!   (`Substitutions`, `RenderedDeck`), and deck file I/O.
//!
//! - **[`presets`]: The Catalog.** Built-in deck templates shipped with the
//!   library, such as the periodic-cell lattice-relaxation deck, addressable by
//!   stable registry names.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties scanning and rendering together into the single entry point a
//!   simulation pipeline calls once per run.

pub mod core;
pub mod presets;
pub mod workflows;
