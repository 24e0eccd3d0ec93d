use crate::cli::InspectArgs;
use crate::config::DeckSource;
use crate::error::Result;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let source = DeckSource::from_cli(&args.source)?;
    let template = super::render::load_template(&source)?;

    if template.placeholders().is_empty() {
        println!("No placeholders found.");
    } else {
        println!("{:<24} {:>6}  {}", "PLACEHOLDER", "COUNT", "FIRST LINE");
        for name in template.names() {
            let first_line = template
                .placeholders()
                .iter()
                .find(|p| p.name() == name)
                .map(|p| p.line())
                .unwrap_or_default();
            println!(
                "{:<24} {:>6}  {}",
                format!("{{{}}}", name),
                template.occurrences(name),
                first_line
            );
        }
    }

    if let Some(name) = &args.require {
        info!("Checking that '{{{}}}' occurs exactly once.", name);
        template.expect_unique(name)?;
        println!("✓ Placeholder '{{{}}}' occurs exactly once.", name);
    }

    Ok(())
}
