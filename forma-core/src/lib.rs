//! Core utilities and types for the Forma scaffolding generator.
//!
//! This crate provides the pieces every other Forma crate builds on:
//! case conventions and the [`NamingStrategy`] seam, the shared
//! configuration [`Error`] type, and [`GeneratedArtifact`] for writing
//! generated files to disk.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod artifact;
mod error;
pub mod naming;

pub use artifact::GeneratedArtifact;
pub use error::{Error, Result, SourceContext};
pub use naming::{
    ConfiguredNaming, Convention, EntityCase, FileCase, NamingStrategy, PropertyCase, to_case,
    to_case_named,
};
