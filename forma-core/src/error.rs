use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration and naming operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the configuration source and its filename together so parse errors
/// can point at the offending span.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'forma init' to create a default configuration"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(forma::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown {target} case '{value}'")]
    #[diagnostic(
        code(forma::unknown_convention),
        help("valid values are: {expected}")
    )]
    UnknownConvention {
        target: &'static str,
        value: String,
        expected: String,
    },
}

impl Error {
    /// Create an unknown convention error for the given naming target
    pub fn unknown_convention(
        target: &'static str,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Box<Self> {
        Box::new(Error::UnknownConvention {
            target,
            value: value.into(),
            expected: expected.join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_convention_message() {
        let err = Error::unknown_convention("file-name", "kebab", &["pascal", "camel"]);
        assert_eq!(err.to_string(), "unknown file-name case 'kebab'");
        match *err {
            Error::UnknownConvention { expected, .. } => assert_eq!(expected, "pascal, camel"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_keeps_span() {
        let src = "convertCaseFile = \n";
        let ctx = SourceContext::new(src, "forma.toml");
        let toml_err = toml::from_str::<toml::Table>(src).unwrap_err();

        let err = ctx.parse_error(toml_err);
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(ctx.filename(), "forma.toml");
        assert_eq!(ctx.src(), src);
    }
}
