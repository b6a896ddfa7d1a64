//! Generators for the two output families.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use railmirror_analyze::{ComponentDescription, ModelDescription};
use railmirror_core::{GeneratedFile, WriteResult};
use tracing::{info, warn};

use crate::{
    TemplateKind, TemplateSet,
    files::{ComponentContext, ModelFile},
};

/// Common surface of the component and model generators.
///
/// `preview` and `generate` both render through [`GeneratedFile::render`],
/// so a dry run shows exactly the text a real run writes.
pub trait Codegen {
    /// Artifacts produced by this generator, in output order
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>>;

    /// Render every artifact without touching the filesystem
    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.relative_path(),
                content: file.render(),
            })
            .collect()
    }

    /// Write every artifact under `output_dir`
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = file.relative_path();
            let outcome = file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to generate '{}'", path.display()))?;

            match outcome {
                WriteResult::Written => {
                    info!(path = %path.display(), "wrote artifact");
                    result.written.push(path);
                }
                WriteResult::Skipped => {
                    warn!(path = %path.display(), "kept existing stub");
                    result.skipped.push(path);
                }
            }
        }

        Ok(result)
    }
}

/// Result of writing a generator's artifacts
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, relative to the output directory
    pub written: Vec<PathBuf>,
    /// Stubs left alone because they already existed
    pub skipped: Vec<PathBuf>,
}

impl GenerateResult {
    /// Every artifact path, written or kept
    pub fn all(&self) -> impl Iterator<Item = &PathBuf> {
        self.written.iter().chain(&self.skipped)
    }
}

/// A rendered artifact for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from the output directory
    pub path: PathBuf,
    pub content: String,
}

/// Mirrors one component into class, markup, stylesheet and controller.
pub struct ComponentGenerator {
    context: ComponentContext,
    templates: TemplateSet,
}

impl ComponentGenerator {
    /// When the extractor found no component name, the source file's stem
    /// is used instead.
    pub fn new(
        mut description: ComponentDescription,
        source_path: &Path,
        templates: TemplateSet,
    ) -> Self {
        if description.name.is_empty() {
            description.name = source_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
        }
        let context = ComponentContext::new(description, &source_path.display().to_string());

        Self { context, templates }
    }

    pub fn name(&self) -> &str {
        &self.context.description.name
    }
}

impl Codegen for ComponentGenerator {
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        self.context
            .artifacts(&self.templates)
            .into_iter()
            .map(|artifact| Box::new(artifact) as Box<dyn GeneratedFile + '_>)
            .collect()
    }
}

/// Mirrors every entity of a types file into ActiveRecord models.
pub struct ModelGenerator {
    models: Vec<ModelDescription>,
    source_path: String,
    templates: TemplateSet,
}

impl ModelGenerator {
    pub fn new(models: Vec<ModelDescription>, source_path: &Path, templates: TemplateSet) -> Self {
        Self {
            models,
            source_path: source_path.display().to_string(),
            templates,
        }
    }
}

impl Codegen for ModelGenerator {
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let template = self.templates.get(TemplateKind::Model);
        self.models
            .iter()
            .map(|model| {
                Box::new(ModelFile::new(model, &self.source_path, template))
                    as Box<dyn GeneratedFile + '_>
            })
            .collect()
    }
}
