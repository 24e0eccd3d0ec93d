use latdeck::core::io::text::DeckIoError;
use latdeck::core::template::deck::TemplateError;
use latdeck::core::template::render::RenderError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    DeckIo(#[from] DeckIoError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown built-in deck '{0}'. Run 'latdeck decks list' to see the available decks.")]
    UnknownDeck(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to read substitution file '{path}' for key '{key}': {source}", path = path.display())]
    SubstitutionFile {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
