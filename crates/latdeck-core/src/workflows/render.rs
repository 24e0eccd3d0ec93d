use crate::core::template::deck::DeckTemplate;
use crate::core::template::render::{self, RenderError, RenderedDeck, Substitutions};

/// Renders a deck template with the given substitutions.
///
/// The stateless, synchronous entry point for producing a simulation-ready
/// input deck: call once per run, hand the output to the engine.
///
/// # Errors
///
/// Returns [`RenderError::MissingValues`] if any placeholder in the template
/// has no substitution value; no partial output is produced.
pub fn run(
    template: &DeckTemplate,
    substitutions: &Substitutions,
) -> Result<RenderedDeck, RenderError> {
    render::render(template, substitutions)
}
