use super::traits::DeckFile;
use crate::core::template::deck::DeckTemplate;
use crate::core::template::render::RenderedDeck;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckIoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Plain-text deck files.
///
/// The only on-disk representation the external simulation engine accepts:
/// directives one per line, `#` comments, UTF-8. Reading preserves the
/// template byte-for-byte; writing emits exactly the rendered text.
pub struct TextDeckFile;

impl DeckFile for TextDeckFile {
    type Error = DeckIoError;

    fn read_from(reader: &mut impl BufRead) -> Result<DeckTemplate, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(DeckTemplate::parse(text))
    }

    fn write_to(deck: &RenderedDeck, writer: &mut impl Write) -> Result<(), Self::Error> {
        writer.write_all(deck.text().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
