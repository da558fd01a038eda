//! Generation pipeline for the Forma scaffolding generator.
//!
//! Given a list of entity tokens and a [`forma_config::GenerationConfig`],
//! the [`Generator`] renders one TSX component per entity, normalizes it
//! through a [`SourceFormatter`] and writes it atomically to the output
//! directory.
//!
//! # Module Organization
//!
//! - [`discover`] - Entity discovery from a directory tree
//! - [`format`] - Formatter seam and the dprint-backed default
//! - [`generator`] - The per-entity pipeline and its reports
//! - [`index`] - `index.ts` aggregation
//! - [`template`] - Template compilation, helpers and rendering

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod discover;
mod error;
pub mod format;
pub mod generator;
pub mod index;
pub mod template;

pub use discover::discover_entities;
pub use error::{Error, Result};
pub use format::{
    Dialect, FormatError, FormatOptions, SourceFormatter, TypeScriptFormatter, format_with_retry,
};
pub use generator::{
    COMPONENT_EXTENSION, EntityFailure, GenerationReport, Generator, GeneratorBuilder, Preview,
};
pub use index::IndexFile;
pub use template::{DEFAULT_TEMPLATE, Helpers, RenderContext, TemplateRenderer};
