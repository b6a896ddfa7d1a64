//! Rails scaffolding generation for railmirror.
//!
//! Fills `{{key}}` templates from the description records produced by
//! `railmirror-analyze` and writes the results under an output directory.
//!
//! # Module Organization
//!
//! - [`code_builder`] - Indented multi-line placeholder values
//! - [`template`] - Placeholder substitution and template overrides
//! - [`files`] - Component and model artifacts
//! - [`generator`] - Preview and write (ComponentGenerator, ModelGenerator)
//! - [`mapping_log`] - Markdown log of source-to-artifact mappings

pub mod code_builder;
pub mod files;
pub mod generator;
pub mod mapping_log;
pub mod template;

pub use code_builder::CodeBuilder;
pub use generator::{Codegen, ComponentGenerator, GenerateResult, ModelGenerator, PreviewFile};
pub use mapping_log::MappingEntry;
pub use template::{Placeholders, TemplateKind, TemplateSet, render};
