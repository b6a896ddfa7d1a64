//! Entity extraction from TypeScript type declarations.
//!
//! Associations and validations are inferred from naming alone:
//!
//! - `author_id: string` (or `authorId`) becomes `belongs_to author`; the type
//!   must mention `string`, `number` or `uuid`. The stem is snake-cased, so
//!   `projectOwnerId` becomes `project_owner`.
//! - `tags: Tag[]` becomes `has_many` with entity name `tag`. Only one trailing
//!   `s` is stripped; irregular plurals are not corrected.
//! - Every required field gets a presence check. Names containing `email` or
//!   `url` get a format check as well, whatever their type or optionality.

use railmirror_core::to_snake_case;
use serde::Serialize;
use tracing::debug;

use crate::fields::{Field, declarations};

/// One entity inferred from an interface or object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescription {
    pub name: String,
    pub fields: Vec<Field>,
    pub associations: Vec<Association>,
    pub validations: Vec<Validation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Association {
    /// Singular relation from an `_id` field; `name` is the stripped stem in snake_case
    BelongsTo {
        name: String,
        field: String,
        optional: bool,
    },
    /// Plural relation from an array field; `name` is the field minus one `s`
    HasMany { name: String, field: String },
}

impl Association {
    pub fn name(&self) -> &str {
        match self {
            Association::BelongsTo { name, .. } | Association::HasMany { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Validation {
    Presence {
        field: String,
    },
    Format {
        field: String,
        format: FormatKind,
        /// Set for optional fields
        allow_blank: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Email,
    Url,
}

/// Extract every entity declared in a types file.
///
/// Declarations named `*Props` describe components, not entities, and are
/// skipped.
pub fn analyze_models(source: &str) -> Vec<ModelDescription> {
    let models: Vec<ModelDescription> = declarations(source)
        .into_iter()
        .filter(|decl| !decl.name.ends_with("Props"))
        .map(|decl| ModelDescription::from_fields(decl.name, decl.fields))
        .collect();

    debug!(models = models.len(), "analyzed type declarations");
    models
}

impl ModelDescription {
    /// Build a model and infer its associations and validations.
    pub fn from_fields(name: impl Into<String>, fields: Vec<Field>) -> Self {
        let associations = fields.iter().filter_map(infer_association).collect();
        let validations = fields.iter().flat_map(infer_validations).collect();

        Self {
            name: name.into(),
            fields,
            associations,
            validations,
        }
    }
}

const KEY_TYPES: &[&str] = &["string", "number", "uuid"];

fn infer_association(field: &Field) -> Option<Association> {
    if let Some(stem) = id_stem(&field.name) {
        let ty = field.ty.to_lowercase();
        if KEY_TYPES.iter().any(|key| ty.contains(key)) {
            return Some(Association::BelongsTo {
                name: to_snake_case(stem),
                field: field.name.clone(),
                optional: field.optional,
            });
        }
    }

    if field.ty.trim_end().ends_with("[]") {
        let name = field.name.strip_suffix('s').unwrap_or(&field.name);
        return Some(Association::HasMany {
            name: name.to_string(),
            field: field.name.clone(),
        });
    }

    None
}

/// `author_id` / `authorId` -> `author`
fn id_stem(name: &str) -> Option<&str> {
    if let Some(stem) = name.strip_suffix("_id") {
        return (!stem.is_empty()).then_some(stem);
    }
    let stem = name.strip_suffix("Id")?;
    stem.chars()
        .last()
        .is_some_and(|c| c.is_lowercase() || c.is_ascii_digit())
        .then_some(stem)
}

fn infer_validations(field: &Field) -> Vec<Validation> {
    let mut validations = Vec::new();

    if !field.optional {
        validations.push(Validation::Presence {
            field: field.name.clone(),
        });
    }

    let lower = field.name.to_lowercase();
    let format = if lower.contains("email") {
        Some(FormatKind::Email)
    } else if lower.contains("url") {
        Some(FormatKind::Url)
    } else {
        None
    };
    if let Some(format) = format {
        validations.push(Validation::Format {
            field: field.name.clone(),
            format,
            allow_blank: field.optional,
        });
    }

    validations
}
