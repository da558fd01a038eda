//! Configuration for a Forma generation run.
//!
//! A [`GenerationConfig`] is usually read from `forma.toml`. Every key is
//! optional and every field has a deterministic default, so an empty file
//! (or no file at all) yields a complete, valid configuration.

mod config;
mod options;
mod parse;

pub use config::{CONFIG_FILE_NAME, GenerationConfig};
pub use forma_core::{EntityCase, Error, FileCase, PropertyCase, Result};
pub use options::{Eol, ExportType, StrictMode, Visibility};
