use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, William A. Goddard III",
    version,
    about = "latdeck - A command-line tool for preparing LAMMPS-style simulation input decks from parameterized templates.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a deck template into a simulation-ready input deck.
    Render(RenderArgs),
    /// Inspect the placeholders of a deck template.
    Inspect(InspectArgs),
    /// List or display the built-in deck templates.
    Decks(DecksArgs),
}

/// Where a deck template comes from: a file on disk or a built-in deck.
#[derive(Args, Debug, Clone, Default)]
#[group(required = false, multiple = false)]
pub struct TemplateSource {
    /// Path to the deck template file.
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Name of a built-in deck template (see 'latdeck decks list').
    #[arg(short, long, value_name = "NAME")]
    pub deck: Option<String>,
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: TemplateSource,

    /// Path for the rendered output deck.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to the configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a substitution value inline, overriding the config file.
    /// Can be used multiple times. Example: -S ff_settings='pair_style eam'
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Read a substitution value from a file, overriding the config file.
    /// Can be used multiple times. Example: --set-file ff_settings=ff/eam.in
    #[arg(long = "set-file", value_name = "KEY=PATH")]
    pub set_files: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: TemplateSource,

    /// Fail unless the named placeholder occurs exactly once.
    #[arg(long, value_name = "NAME")]
    pub require: Option<String>,
}

/// Arguments for the `decks` subcommand.
#[derive(Args, Debug)]
pub struct DecksArgs {
    #[command(subcommand)]
    pub command: DecksCommands,
}

/// Available commands for the built-in deck catalog.
#[derive(Subcommand, Debug)]
pub enum DecksCommands {
    /// List the available built-in deck templates.
    List,
    /// Print a built-in deck template.
    Show {
        /// Name of the deck to display.
        #[arg(required = true)]
        name: String,

        /// Write the template to a file instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
