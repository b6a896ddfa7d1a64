//! Mirror operation - analysis and generation for one input file.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use railmirror_analyze::{analyze_component, analyze_models};
use railmirror_codegen::{Codegen, ComponentGenerator, MappingEntry, ModelGenerator, TemplateSet};
use railmirror_project::SourceFile;
use serde_json::{Value, json};
use tracing::warn;

use crate::reports::{GenerationResult, SourceReport};

/// How an input file is analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Component,
    Models,
}

impl InputKind {
    /// Name used when the file is missing
    pub fn what(self) -> &'static str {
        match self {
            InputKind::Component => "component",
            InputKind::Models => "types file",
        }
    }
}

/// A file queued for mirroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub kind: InputKind,
    pub path: PathBuf,
}

impl Input {
    pub fn component(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: InputKind::Component,
            path: path.into(),
        }
    }

    pub fn models(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: InputKind::Models,
            path: path.into(),
        }
    }
}

/// Options for the mirror operation.
pub struct MirrorOptions<'a> {
    /// Root of the generated Rails tree.
    pub output_dir: &'a Path,
    /// Templates resolved for this run.
    pub templates: &'a TemplateSet,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Mapping log to append to after writing, if any.
    pub mapping_log: Option<&'a Path>,
}

/// Analyze one source file and render (or preview) its artifacts.
pub fn mirror(kind: InputKind, source: &SourceFile, opts: &MirrorOptions) -> Result<SourceReport> {
    match kind {
        InputKind::Component => {
            let generator = ComponentGenerator::new(
                analyze_component(&source.content),
                &source.path,
                opts.templates.clone(),
            );
            let subjects = vec![generator.name().to_string()];
            run(&generator, source, subjects, opts)
        }
        InputKind::Models => {
            let models = analyze_models(&source.content);
            if models.is_empty() {
                warn!(path = %source.path.display(), "no type declarations found");
            }
            let subjects = models.iter().map(|m| m.name.clone()).collect();
            let generator = ModelGenerator::new(models, &source.path, opts.templates.clone());
            run(&generator, source, subjects, opts)
        }
    }
}

fn run(
    generator: &impl Codegen,
    source: &SourceFile,
    subjects: Vec<String>,
    opts: &MirrorOptions,
) -> Result<SourceReport> {
    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err_with(|| format!("failed to mirror '{}'", source.path.display()))?;

        if let Some(log) = opts.mapping_log {
            let artifacts = written.all().cloned().collect();
            MappingEntry::new(source.path.clone(), subjects.clone(), artifacts).append(log)?;
        }
        GenerationResult::Written(written)
    };

    Ok(SourceReport {
        source: source.path.clone(),
        subjects,
        result,
    })
}

/// The extracted description record of one source file, as JSON.
pub fn describe(kind: InputKind, source: &SourceFile) -> Value {
    let path = source.path.display().to_string();
    match kind {
        InputKind::Component => json!({
            "source": path,
            "component": analyze_component(&source.content),
        }),
        InputKind::Models => json!({
            "source": path,
            "models": analyze_models(&source.content),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const CARD: &str = r#"
interface CardProps { title: string }
export function Card({ title }: CardProps) {
  const handleClick = () => {};
  return <div className="card" onClick={handleClick}>{title}</div>;
}
"#;

    fn source(dir: &Path, name: &str, content: &str) -> SourceFile {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        SourceFile::read(path, "component").unwrap()
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("rails");
        let log = temp.path().join("docs/mapping.md");
        let templates = TemplateSet::builtin();
        let opts = MirrorOptions {
            output_dir: &output,
            templates: &templates,
            dry_run: true,
            mapping_log: Some(&log),
        };

        let report = mirror(InputKind::Component, &source(temp.path(), "Card.tsx", CARD), &opts)
            .unwrap();

        assert!(matches!(report.result, GenerationResult::Preview(ref files) if files.len() == 4));
        assert!(!output.exists());
        assert!(!log.exists());
    }

    #[test]
    fn test_write_appends_mapping_entry() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("rails");
        let log = temp.path().join("docs/mapping.md");
        let templates = TemplateSet::builtin();
        let opts = MirrorOptions {
            output_dir: &output,
            templates: &templates,
            dry_run: false,
            mapping_log: Some(&log),
        };

        let report = mirror(InputKind::Component, &source(temp.path(), "Card.tsx", CARD), &opts)
            .unwrap();

        assert_eq!(report.subjects, vec!["Card".to_string()]);
        assert!(output.join("app/components/card_component.rb").is_file());
        let text = fs::read_to_string(&log).unwrap();
        assert!(text.contains("- Mirrors: `Card`"));
        assert!(text.contains("- `app/javascript/controllers/card_controller.js`"));
    }

    #[test]
    fn test_models_subjects() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("rails");
        let templates = TemplateSet::builtin();
        let opts = MirrorOptions {
            output_dir: &output,
            templates: &templates,
            dry_run: false,
            mapping_log: None,
        };
        let types = source(
            temp.path(),
            "index.ts",
            "interface User { email: string }\ninterface Post { authorId: string }",
        );

        let report = mirror(InputKind::Models, &types, &opts).unwrap();

        assert_eq!(report.subjects, vec!["User".to_string(), "Post".to_string()]);
        assert!(output.join("app/models/user.rb").is_file());
        assert!(output.join("app/models/post.rb").is_file());
    }

    #[test]
    fn test_describe_component() {
        let temp = TempDir::new().unwrap();
        let record = describe(InputKind::Component, &source(temp.path(), "Card.tsx", CARD));

        assert_eq!(record["component"]["name"], "Card");
        assert_eq!(record["component"]["handlers"][0]["kind"], "click");
        assert_eq!(record["component"]["styles"][0], "card");
    }
}
