use crate::core::template::deck::DeckTemplate;
use crate::core::template::render::RenderedDeck;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading deck templates and writing rendered decks.
///
/// This trait provides a common API for deck file I/O, so higher layers can
/// stay agnostic of the concrete on-disk representation. Implementors handle
/// format-specific concerns; the shipped implementation is plain text.
pub trait DeckFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a deck template from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails or the content is not
    /// valid for the format.
    fn read_from(reader: &mut impl BufRead) -> Result<DeckTemplate, Self::Error>;

    /// Writes a rendered deck to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(deck: &RenderedDeck, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a deck template from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or reading fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<DeckTemplate, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a rendered deck to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(deck: &RenderedDeck, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(deck, &mut writer)
    }
}
