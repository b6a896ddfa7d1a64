//! Structural extraction for railmirror.
//!
//! Turns raw React component text and TypeScript type declarations into
//! flat description records using a fixed sequence of regular expressions.
//! Nothing here parses: a pattern that finds nothing yields an empty or
//! default value, so arbitrary or incomplete source never fails.
//!
//! - [`analyze_component`] - props, state, handlers, hooks, children, icons, styles
//! - [`analyze_models`] - entity fields with inferred associations and validations

mod component;
mod fields;
mod model;
mod patterns;

pub use component::{ComponentDescription, Handler, HandlerKind, StateVar, analyze_component};
pub use fields::{Declaration, Field, declarations, parse_fields};
pub use model::{Association, FormatKind, ModelDescription, Validation, analyze_models};
