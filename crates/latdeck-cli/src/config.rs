use crate::cli::{RenderArgs, TemplateSource};
use crate::error::{CliError, Result};
use crate::utils::parser;
use latdeck::core::template::render::Substitutions;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a deck template comes from once CLI and config are reconciled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    File(PathBuf),
    Builtin(String),
}

impl DeckSource {
    /// Resolves the template source from CLI flags alone, for subcommands
    /// that take no config file.
    pub fn from_cli(source: &TemplateSource) -> Result<Self> {
        match (&source.template, &source.deck) {
            (Some(path), None) => Ok(DeckSource::File(path.clone())),
            (None, Some(name)) => Ok(DeckSource::Builtin(name.clone())),
            _ => Err(CliError::Argument(
                "a deck template is required: pass --template <PATH> or --deck <NAME>".to_string(),
            )),
        }
    }
}

/// Fully resolved plan for a single render run.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderPlan {
    pub source: DeckSource,
    pub output: PathBuf,
    pub substitutions: Substitutions,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRenderConfig {
    template: Option<PathBuf>,
    deck: Option<String>,
    output: Option<PathBuf>,
    substitutions: Option<BTreeMap<String, String>>,
    #[serde(rename = "substitution-files")]
    substitution_files: Option<BTreeMap<String, PathBuf>>,
}

impl PartialRenderConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Produces the final render plan, with CLI arguments taking precedence
    /// over config-file values.
    pub fn merge_with_cli(mut self, args: &RenderArgs) -> Result<RenderPlan> {
        let source = match (&args.source.template, &args.source.deck) {
            (Some(path), None) => DeckSource::File(path.clone()),
            (None, Some(name)) => DeckSource::Builtin(name.clone()),
            _ => match (self.template.take(), self.deck.take()) {
                (Some(path), None) => DeckSource::File(path),
                (None, Some(name)) => DeckSource::Builtin(name),
                (Some(_), Some(_)) => {
                    return Err(CliError::Config(
                        "`template` and `deck` are mutually exclusive in the config file."
                            .to_string(),
                    ));
                }
                (None, None) => {
                    return Err(CliError::Config(
                        "A deck template is required either in the config file (`template` or `deck`) or via --template/--deck.".to_string(),
                    ));
                }
            },
        };

        let output = args
            .output
            .clone()
            .or_else(|| self.output.take())
            .ok_or_else(|| {
                CliError::Config(
                    "An output path is required either in the config file (`output`) or via --output.".to_string(),
                )
            })?;

        let mut substitutions = self.file_substitutions()?;
        substitutions.merge(cli_substitutions(args)?);

        Ok(RenderPlan {
            source,
            output,
            substitutions,
        })
    }

    /// Collects the substitutions declared in the config file: inline values
    /// from `[substitutions]` plus file-sourced values from
    /// `[substitution-files]`. A key in both tables is a config error.
    fn file_substitutions(&mut self) -> Result<Substitutions> {
        let mut map: Substitutions = self
            .substitutions
            .take()
            .unwrap_or_default()
            .into_iter()
            .collect();
        for (key, path) in self.substitution_files.take().unwrap_or_default() {
            if map.contains(&key) {
                return Err(CliError::Config(format!(
                    "Substitution '{key}' appears in both `substitutions` and `substitution-files`."
                )));
            }
            let value = read_substitution_file(&key, &path)?;
            map.set(key, value);
        }
        Ok(map)
    }
}

/// Collects the substitutions given on the command line. Inline `--set`
/// values win over `--set-file` values of the same key.
fn cli_substitutions(args: &RenderArgs) -> Result<Substitutions> {
    let mut map = Substitutions::new();
    for assignment in &args.set_files {
        let (key, path) =
            parser::parse_assignment(assignment).map_err(|e| CliError::Argument(e.to_string()))?;
        let value = read_substitution_file(key, Path::new(path))?;
        map.set(key, value);
    }
    for assignment in &args.set_values {
        let (key, value) =
            parser::parse_assignment(assignment).map_err(|e| CliError::Argument(e.to_string()))?;
        map.set(key, value);
    }
    Ok(map)
}

fn read_substitution_file(key: &str, path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::SubstitutionFile {
        key: key.to_string(),
        path: path.to_path_buf(),
        source,
    })?;
    // Trailing newlines come from the editor, not the directive block.
    Ok(raw.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn parse_render_args(args: &[&str]) -> RenderArgs {
        let mut full = vec!["latdeck", "render"];
        full.extend_from_slice(args);
        let cli = Cli::parse_from(full);
        match cli.command {
            Commands::Render(render_args) => render_args,
            _ => panic!("Expected 'render' subcommand"),
        }
    }

    #[test]
    fn cli_flags_alone_build_a_plan() {
        let args = parse_render_args(&[
            "--deck",
            "lattice-relax",
            "-o",
            "in.lammps",
            "-S",
            "ff_settings=pair_style eam",
        ]);
        let plan = PartialRenderConfig::default().merge_with_cli(&args).unwrap();

        assert_eq!(plan.source, DeckSource::Builtin("lattice-relax".to_string()));
        assert_eq!(plan.output, PathBuf::from("in.lammps"));
        assert_eq!(plan.substitutions.get("ff_settings"), Some("pair_style eam"));
    }

    #[test]
    fn config_file_supplies_everything_cli_omits() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("render.toml");
        fs::write(
            &cfg_path,
            r#"
            deck = "lattice-relax"
            output = "in.lammps"

            [substitutions]
            ff_settings = "pair_style eam"
            "#,
        )
        .unwrap();

        let args = parse_render_args(&["-c", cfg_path.to_str().unwrap()]);
        let plan = PartialRenderConfig::from_file(&cfg_path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(plan.source, DeckSource::Builtin("lattice-relax".to_string()));
        assert_eq!(plan.output, PathBuf::from("in.lammps"));
        assert_eq!(plan.substitutions.get("ff_settings"), Some("pair_style eam"));
    }

    #[test]
    fn cli_values_override_config_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("render.toml");
        fs::write(
            &cfg_path,
            r#"
            deck = "lattice-relax"
            output = "from-config.lammps"

            [substitutions]
            ff_settings = "pair_style lj/cut 10.0"
            mass_lines = "mass 1 58.71"
            "#,
        )
        .unwrap();

        let template_path = dir.path().join("custom.relax");
        fs::write(&template_path, "{ff_settings}\n").unwrap();

        let args = parse_render_args(&[
            "-t",
            template_path.to_str().unwrap(),
            "-o",
            "from-cli.lammps",
            "-S",
            "ff_settings=pair_style eam",
        ]);
        let plan = PartialRenderConfig::from_file(&cfg_path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(plan.source, DeckSource::File(template_path));
        assert_eq!(plan.output, PathBuf::from("from-cli.lammps"));
        assert_eq!(plan.substitutions.get("ff_settings"), Some("pair_style eam"));
        // Untouched config entries survive the merge.
        assert_eq!(plan.substitutions.get("mass_lines"), Some("mass 1 58.71"));
    }

    #[test]
    fn substitution_files_are_read_and_trailing_newlines_dropped() {
        let dir = tempdir().unwrap();
        let ff_path = dir.path().join("eam.in");
        fs::write(
            &ff_path,
            "pair_style eam/alloy\npair_coeff * * NiAlH_jea.eam.alloy Ni\n",
        )
        .unwrap();

        let cfg_path = dir.path().join("render.toml");
        fs::write(
            &cfg_path,
            format!(
                r#"
                deck = "lattice-relax"
                output = "in.lammps"

                [substitution-files]
                ff_settings = "{}"
                "#,
                ff_path.to_str().unwrap()
            ),
        )
        .unwrap();

        let args = parse_render_args(&["-c", cfg_path.to_str().unwrap()]);
        let plan = PartialRenderConfig::from_file(&cfg_path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(
            plan.substitutions.get("ff_settings"),
            Some("pair_style eam/alloy\npair_coeff * * NiAlH_jea.eam.alloy Ni")
        );
    }

    #[test]
    fn inline_set_wins_over_set_file_for_the_same_key() {
        let dir = tempdir().unwrap();
        let ff_path = dir.path().join("eam.in");
        fs::write(&ff_path, "pair_style eam/alloy\n").unwrap();

        let args = parse_render_args(&[
            "--deck",
            "lattice-relax",
            "-o",
            "in.lammps",
            "--set-file",
            &format!("ff_settings={}", ff_path.to_str().unwrap()),
            "-S",
            "ff_settings=pair_style eam",
        ]);
        let plan = PartialRenderConfig::default().merge_with_cli(&args).unwrap();

        assert_eq!(plan.substitutions.get("ff_settings"), Some("pair_style eam"));
    }

    #[test]
    fn key_in_both_config_tables_is_rejected() {
        let dir = tempdir().unwrap();
        let ff_path = dir.path().join("eam.in");
        fs::write(&ff_path, "pair_style eam\n").unwrap();

        let cfg_path = dir.path().join("render.toml");
        fs::write(
            &cfg_path,
            format!(
                r#"
                deck = "lattice-relax"
                output = "in.lammps"

                [substitutions]
                ff_settings = "pair_style eam"

                [substitution-files]
                ff_settings = "{}"
                "#,
                ff_path.to_str().unwrap()
            ),
        )
        .unwrap();

        let args = parse_render_args(&["-c", cfg_path.to_str().unwrap()]);
        let result = PartialRenderConfig::from_file(&cfg_path)
            .unwrap()
            .merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn missing_template_source_is_a_config_error() {
        let args = parse_render_args(&["-o", "in.lammps"]);
        let result = PartialRenderConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn missing_output_is_a_config_error() {
        let args = parse_render_args(&["--deck", "lattice-relax"]);
        let result = PartialRenderConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn template_and_deck_both_in_config_file_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("render.toml");
        fs::write(
            &cfg_path,
            r#"
            template = "in.relax"
            deck = "lattice-relax"
            output = "in.lammps"
            "#,
        )
        .unwrap();

        let args = parse_render_args(&["-c", cfg_path.to_str().unwrap()]);
        let result = PartialRenderConfig::from_file(&cfg_path)
            .unwrap()
            .merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("render.toml");
        fs::write(&cfg_path, "not-a-key = true\n").unwrap();

        let result = PartialRenderConfig::from_file(&cfg_path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_substitution_file_reports_key_and_path() {
        let args = parse_render_args(&[
            "--deck",
            "lattice-relax",
            "-o",
            "in.lammps",
            "--set-file",
            "ff_settings=/nonexistent/eam.in",
        ]);
        let result = PartialRenderConfig::default().merge_with_cli(&args);
        match result {
            Err(CliError::SubstitutionFile { key, path, .. }) => {
                assert_eq!(key, "ff_settings");
                assert_eq!(path, PathBuf::from("/nonexistent/eam.in"));
            }
            other => panic!("Expected SubstitutionFile error, got {:?}", other),
        }
    }

    #[test]
    fn source_from_cli_requires_one_flag() {
        let source = TemplateSource::default();
        assert!(matches!(
            DeckSource::from_cli(&source),
            Err(CliError::Argument(_))
        ));
    }
}
