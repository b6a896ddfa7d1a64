//! Project configuration and source reading for railmirror.
//!
//! [`Config`] is loaded once from `mirror.toml` (or defaults) and never
//! mutated afterwards. The source helpers turn a missing required path into
//! an [`Error::MissingInput`] naming the path that was expected.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod sources;

pub use config::{CONFIG_FILE, Config, Paths};
pub use error::{Error, Result};
pub use sources::{SourceFile, discover_components, find_component};
