use crate::cli::{DecksArgs, DecksCommands};
use crate::error::{CliError, Result};
use latdeck::presets;
use std::path::Path;
use tracing::info;

pub fn run(args: DecksArgs) -> Result<()> {
    match args.command {
        DecksCommands::List => {
            handle_list();
        }
        DecksCommands::Show { name, output } => {
            handle_show(&name, output.as_deref())?;
        }
    }
    Ok(())
}

fn handle_list() {
    for deck in presets::all() {
        println!("{:<16} {}", deck.name(), deck.description());
    }
}

fn handle_show(name: &str, output: Option<&Path>) -> Result<()> {
    let deck = presets::get(name).ok_or_else(|| CliError::UnknownDeck(name.to_string()))?;
    match output {
        Some(path) => {
            info!("Writing built-in deck '{}' to {:?}", name, path);
            std::fs::write(path, deck.text())?;
            println!("✓ Deck template written to: {}", path.display());
        }
        None => {
            print!("{}", deck.text());
        }
    }
    Ok(())
}
