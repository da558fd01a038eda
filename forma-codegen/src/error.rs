use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::format::FormatError;

/// Result type for generation operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to compile template '{name}'")]
    #[diagnostic(
        code(forma::template),
        help("the component template is malformed; no files were generated")
    )]
    Template {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("failed to render '{entity}'")]
    #[diagnostic(code(forma::render))]
    Render {
        entity: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("failed to format '{entity}'")]
    #[diagnostic(code(forma::format))]
    Format {
        entity: String,
        #[source]
        source: FormatError,
    },

    #[error("failed to create output directory '{path}'")]
    #[diagnostic(code(forma::output_dir))]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(forma::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list directories in '{path}'")]
    #[diagnostic(help("pass the directory whose subdirectories name the components"))]
    Discover {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
