mod args;

use std::path::PathBuf;

pub(crate) use args::known_args;
use clap::{CommandFactory, Parser, error::ErrorKind};
use eyre::Result;
use railmirror_codegen::TemplateSet;
use railmirror_project::{Config, Paths, SourceFile, discover_components, find_component};
use tracing::debug;

use crate::{
    ops::{self, Input, InputKind, MirrorOptions},
    reports::{MirrorReport, Report, TerminalOutput},
};

/// Extension trait for exiting on project errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for railmirror_project::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mirror")]
#[command(version)]
#[command(about = "Mirror React prototype components into Rails scaffolding")]
pub(crate) struct Cli {
    /// Mirror every component, then the models when the types file exists
    #[arg(long)]
    all: bool,

    /// Mirror a single component by name
    #[arg(long, value_name = "NAME")]
    component: Option<String>,

    /// Mirror only the models inferred from the types file
    #[arg(long)]
    models_only: bool,

    /// Print rendered artifacts instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// Append an entry to the component mapping log after writing
    #[arg(long)]
    update_docs: bool,

    /// Print the extracted descriptions as JSON instead of rendering
    #[arg(long)]
    describe: bool,

    /// Path to mirror.toml (defaults to ./mirror.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// What a run mirrors, after flag precedence is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Models,
    Component(String),
    All,
}

impl Cli {
    /// `--models-only` wins over `--component`, which wins over `--all`.
    pub fn action(&self) -> Option<Action> {
        if self.models_only {
            Some(Action::Models)
        } else if let Some(name) = &self.component {
            Some(Action::Component(name.clone()))
        } else if self.all {
            Some(Action::All)
        } else {
            None
        }
    }

    pub fn run(&self) -> Result<()> {
        let Some(action) = self.action() else {
            Self::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "one of --all, --component=<NAME> or --models-only is required",
                )
                .exit();
        };

        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let inputs = inputs(&action, &config.paths);

        if self.describe {
            return self.run_describe(&inputs);
        }

        let templates = TemplateSet::load(&config.paths.templates)?;
        let opts = MirrorOptions {
            output_dir: &config.paths.output,
            templates: &templates,
            dry_run: self.dry_run,
            mapping_log: self
                .update_docs
                .then_some(config.paths.mapping_log.as_path()),
        };

        let mut report = MirrorReport::new(opts.output_dir, opts.mapping_log);
        for input in &inputs {
            let source = SourceFile::read(&input.path, input.kind.what()).unwrap_or_exit();
            report.push(ops::mirror(input.kind, &source, &opts)?);
        }
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn run_describe(&self, inputs: &[Input]) -> Result<()> {
        let mut records = Vec::with_capacity(inputs.len());
        for input in inputs {
            let source = SourceFile::read(&input.path, input.kind.what()).unwrap_or_exit();
            records.push(ops::describe(input.kind, &source));
        }
        println!("{}", serde_json::to_string_pretty(&records)?);

        Ok(())
    }
}

/// Resolve the files an action reads, in processing order.
///
/// A missing component directory or named component is fatal here; the
/// types file is only required by `--models-only`.
fn inputs(action: &Action, paths: &Paths) -> Vec<Input> {
    match action {
        Action::Models => vec![Input::models(&paths.types)],
        Action::Component(name) => {
            let path = find_component(&paths.components, name).unwrap_or_exit();
            vec![Input::component(path)]
        }
        Action::All => {
            let mut inputs: Vec<Input> = discover_components(&paths.components)
                .unwrap_or_exit()
                .into_iter()
                .map(Input::component)
                .collect();

            if paths.types.is_file() {
                inputs.push(Input::models(&paths.types));
            } else {
                debug!(types = %paths.types.display(), "no types file, skipping models");
            }
            inputs
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("mirror")
            .chain(args.iter().copied())
            .map(Into::into);
        Cli::try_parse_from(known_args(argv)).unwrap()
    }

    #[test]
    fn test_models_only_wins() {
        let cli = parse(&["--all", "--component=Card", "--models-only"]);
        assert_eq!(cli.action(), Some(Action::Models));
    }

    #[test]
    fn test_component_wins_over_all() {
        let cli = parse(&["--all", "--component", "Card"]);
        assert_eq!(cli.action(), Some(Action::Component("Card".into())));
    }

    #[test]
    fn test_all() {
        let cli = parse(&["--all", "--dry-run"]);
        assert_eq!(cli.action(), Some(Action::All));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_no_action() {
        assert_eq!(parse(&[]).action(), None);
        assert_eq!(parse(&["--dry-run", "--update-docs"]).action(), None);
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        let cli = parse(&["--verbose", "stray", "--all", "-x", "--force=yes"]);
        assert_eq!(cli.action(), Some(Action::All));
    }

    #[test]
    fn test_config_flag() {
        let cli = parse(&["-c", "custom.toml", "--models-only"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.action(), Some(Action::Models));
    }

    #[test]
    fn test_inputs_for_all() {
        let temp = TempDir::new().unwrap();
        let components = temp.path().join("components");
        fs::create_dir_all(&components).unwrap();
        fs::write(components.join("B.tsx"), "").unwrap();
        fs::write(components.join("A.tsx"), "").unwrap();

        let mut paths = Paths {
            components: components.clone(),
            types: temp.path().join("types.ts"),
            ..Paths::default()
        };

        let kinds = |inputs: Vec<Input>| -> Vec<InputKind> {
            inputs.into_iter().map(|i| i.kind).collect()
        };

        let found = inputs(&Action::All, &paths);
        assert_eq!(found[0].path, components.join("A.tsx"));
        assert_eq!(kinds(found), vec![InputKind::Component, InputKind::Component]);

        fs::write(&paths.types, "interface Tag { label: string }").unwrap();
        assert_eq!(
            kinds(inputs(&Action::All, &paths)),
            vec![
                InputKind::Component,
                InputKind::Component,
                InputKind::Models
            ]
        );

        paths.types = temp.path().join("missing.ts");
        assert_eq!(
            inputs(&Action::Models, &paths),
            vec![Input::models(temp.path().join("missing.ts"))]
        );
    }
}
