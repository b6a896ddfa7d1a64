//! Core utilities and types for the railmirror generator.
//!
//! This crate provides the naming converters and the generated-file
//! abstraction shared by the analysis and code generation crates.

mod file;
mod naming;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, append_file, write_file};
// String utilities
pub use naming::{to_kebab_case, to_pascal_case, to_snake_case};
