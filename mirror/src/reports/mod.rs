//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod mirror;
mod output;

pub use mirror::{GenerationResult, MirrorReport, SourceReport};
pub use output::{Report, TerminalOutput};
