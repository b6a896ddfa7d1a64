//! ActiveRecord models mirrored from type declarations.

use std::path::PathBuf;

use railmirror_analyze::{Association, FormatKind, ModelDescription, Validation};
use railmirror_core::{GeneratedFile, to_pascal_case, to_snake_case};

use crate::{CodeBuilder, Placeholders, render};

/// Ordering scope appended to every model
pub const DEFAULT_SCOPE: &str = "default_scope { order(created_at: :desc) }";

/// One `app/models/*.rb` file.
pub struct ModelFile<'a> {
    pub model: &'a ModelDescription,
    placeholders: Placeholders,
    template: &'a str,
}

impl<'a> ModelFile<'a> {
    pub fn new(model: &'a ModelDescription, source_path: &str, template: &'a str) -> Self {
        let mut placeholders = Placeholders::new();
        placeholders
            .set("model_name", to_pascal_case(&model.name))
            .set("file_name", to_snake_case(&model.name))
            .set("source_path", source_path)
            .set("associations", associations(&model.associations))
            .set("validations", validations(&model.validations))
            .set("scopes", CodeBuilder::nested(1).line(DEFAULT_SCOPE).build());

        Self {
            model,
            placeholders,
            template,
        }
    }
}

impl GeneratedFile for ModelFile<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(format!("app/models/{}.rb", to_snake_case(&self.model.name)))
    }

    fn render(&self) -> String {
        render(self.template, &self.placeholders)
    }
}

/// `belongs_to` / `has_many` declaration lines
pub fn associations(associations: &[Association]) -> String {
    CodeBuilder::nested(1)
        .each(associations, |b, association| {
            let line = match association {
                Association::BelongsTo { name, optional, .. } => {
                    let name = to_snake_case(name);
                    if *optional {
                        format!("belongs_to :{name}, optional: true")
                    } else {
                        format!("belongs_to :{name}")
                    }
                }
                Association::HasMany { name, field } => format!(
                    "has_many :{}, class_name: \"{}\"",
                    to_snake_case(field),
                    to_pascal_case(name)
                ),
            };
            b.line(&line)
        })
        .build()
}

/// `validates` declaration lines
pub fn validations(validations: &[Validation]) -> String {
    CodeBuilder::nested(1)
        .each(validations, |b, validation| {
            let line = match validation {
                Validation::Presence { field } => {
                    format!("validates :{}, presence: true", to_snake_case(field))
                }
                Validation::Format {
                    field,
                    format,
                    allow_blank,
                } => {
                    let pattern = match format {
                        FormatKind::Email => "URI::MailTo::EMAIL_REGEXP",
                        FormatKind::Url => "URI::DEFAULT_PARSER.make_regexp(%w[http https])",
                    };
                    let blank = if *allow_blank { ", allow_blank: true" } else { "" };
                    format!(
                        "validates :{}, format: {{ with: {pattern} }}{blank}",
                        to_snake_case(field)
                    )
                }
            };
            b.line(&line)
        })
        .build()
}
