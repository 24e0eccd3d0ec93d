use crate::cli::RenderArgs;
use crate::config::{DeckSource, PartialRenderConfig};
use crate::error::{CliError, Result};
use latdeck::core::io::text::TextDeckFile;
use latdeck::core::io::traits::DeckFile;
use latdeck::core::template::deck::DeckTemplate;
use latdeck::{presets, workflows};
use tracing::{info, warn};

pub fn run(args: RenderArgs) -> Result<()> {
    let partial = match &args.config {
        Some(path) => PartialRenderConfig::from_file(path)?,
        None => PartialRenderConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let plan = partial.merge_with_cli(&args)?;

    let template = load_template(&plan.source)?;
    info!(
        "Template loaded with {} placeholder occurrence(s).",
        template.placeholders().len()
    );

    let rendered = workflows::render::run(&template, &plan.substitutions)?;

    for key in rendered.unused_keys() {
        warn!("Substitution '{}' matches no placeholder in the template.", key);
    }
    for (name, count) in rendered.counts() {
        info!("Substituted '{{{}}}' at {} occurrence(s).", name, count);
    }

    TextDeckFile::write_to_path(&rendered, &plan.output)?;

    println!("✓ Rendered deck written to: {}", plan.output.display());
    Ok(())
}

/// Loads a deck template from a file or the built-in catalog.
pub(crate) fn load_template(source: &DeckSource) -> Result<DeckTemplate> {
    match source {
        DeckSource::File(path) => {
            info!("Loading deck template from {:?}", path);
            TextDeckFile::read_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })
        }
        DeckSource::Builtin(name) => {
            info!("Loading built-in deck template '{}'", name);
            presets::get(name)
                .map(|deck| deck.template())
                .ok_or_else(|| CliError::UnknownDeck(name.clone()))
        }
    }
}
