//! Placeholder substitution and template lookup.
//!
//! A template is plain text with `{{key}}` placeholders. Rendering replaces
//! every occurrence of each supplied key and nothing else: a placeholder the
//! map does not know about is left in the output untouched, so partial or
//! user-edited templates still render.

use std::path::Path;

use eyre::{Context, Result};
use indexmap::IndexMap;
use tracing::debug;

/// Ordered placeholder values.
///
/// Keys are substituted in insertion order, which keeps rendering
/// deterministic even when a value itself contains `{{...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: IndexMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a placeholder value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Substitute every `{{key}}` in `template` with its value.
pub fn render(template: &str, placeholders: &Placeholders) -> String {
    placeholders
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{{{key}}}}}"), value)
        })
}

/// The templates the generator knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    ComponentClass,
    ComponentMarkup,
    Stylesheet,
    StimulusController,
    Model,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::ComponentClass,
        TemplateKind::ComponentMarkup,
        TemplateKind::Stylesheet,
        TemplateKind::StimulusController,
        TemplateKind::Model,
    ];

    /// File name looked up in the override directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::ComponentClass => "component.rb.tmpl",
            TemplateKind::ComponentMarkup => "component.html.erb.tmpl",
            TemplateKind::Stylesheet => "component.css.tmpl",
            TemplateKind::StimulusController => "controller.js.tmpl",
            TemplateKind::Model => "model.rb.tmpl",
        }
    }

    /// Built-in template text
    pub fn builtin(&self) -> &'static str {
        match self {
            TemplateKind::ComponentClass => include_str!("../templates/component.rb.tmpl"),
            TemplateKind::ComponentMarkup => include_str!("../templates/component.html.erb.tmpl"),
            TemplateKind::Stylesheet => include_str!("../templates/component.css.tmpl"),
            TemplateKind::StimulusController => include_str!("../templates/controller.js.tmpl"),
            TemplateKind::Model => include_str!("../templates/model.rb.tmpl"),
        }
    }
}

/// The resolved set of templates for one run.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: IndexMap<TemplateKind, String>,
}

impl TemplateSet {
    /// Built-in templates only.
    pub fn builtin() -> Self {
        Self {
            templates: TemplateKind::ALL
                .iter()
                .map(|kind| (*kind, kind.builtin().to_string()))
                .collect(),
        }
    }

    /// Use `dir/<file>` for each template that exists there, the built-in
    /// text otherwise. A missing directory simply means no overrides.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut set = Self::builtin();

        for kind in TemplateKind::ALL {
            let path = dir.join(kind.file_name());
            if !path.is_file() {
                continue;
            }
            let text = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read template '{}'", path.display()))?;
            debug!(template = %path.display(), "using override template");
            set.templates.insert(kind, text);
        }

        Ok(set)
    }

    pub fn get(&self, kind: TemplateKind) -> &str {
        self.templates
            .get(&kind)
            .map_or_else(|| kind.builtin(), String::as_str)
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}
