//! Core operations.
//!
//! This module contains the business logic for mirroring,
//! separated from CLI argument parsing and output rendering.

pub mod mirror;

pub use mirror::{Input, InputKind, MirrorOptions, describe, mirror};
