//! Formatting of rendered source text.
//!
//! [`SourceFormatter`] is the seam between the pipeline and the formatting
//! library. [`format_with_retry`] wraps a formatter with the per-entity
//! recovery rule: log the first failure, retry the identical call once, and
//! give up on the entity if the retry fails too.

use std::path::Path;

use dprint_plugin_typescript::{
    FormatTextOptions,
    configuration::{Configuration, ConfigurationBuilder, SortOrder},
    format_text,
};
use forma_config::Eol;

use crate::{Error, Result};

/// Syntax the formatter parses the input as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    TypeScript,
    #[default]
    Tsx,
}

impl Dialect {
    /// File extension for this dialect.
    pub fn extension(&self) -> &'static str {
        match self {
            Dialect::TypeScript => "ts",
            Dialect::Tsx => "tsx",
        }
    }
}

/// Options for a single formatting call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub dialect: Dialect,
    /// Line endings of the output; `None` keeps whatever the input uses.
    pub line_ending: Option<Eol>,
}

impl FormatOptions {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            line_ending: None,
        }
    }

    /// Resolve the line ending to use for `source`.
    ///
    /// Auto-detection picks the style of the first line break and falls back
    /// to LF for single-line input.
    pub fn resolve_line_ending(&self, source: &str) -> Eol {
        if let Some(eol) = self.line_ending {
            return eol;
        }
        match source.find('\n') {
            Some(i) if i > 0 && source.as_bytes()[i - 1] == b'\r' => Eol::Crlf,
            _ => Eol::Lf,
        }
    }
}

/// Error reported by a formatter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Normalizes source text into its canonical formatted form.
pub trait SourceFormatter {
    fn format(
        &self,
        source: &str,
        options: &FormatOptions,
    ) -> std::result::Result<String, FormatError>;
}

/// TypeScript/TSX formatter backed by dprint.
///
/// Uses an 80 column line width, two space indentation and double quotes.
/// Export declarations keep their order, so `index.ts` lists components in
/// generation order.
pub struct TypeScriptFormatter {
    config: Configuration,
}

impl TypeScriptFormatter {
    pub fn new() -> Self {
        Self {
            config: ConfigurationBuilder::new()
                .line_width(80)
                .module_sort_export_declarations(SortOrder::Maintain)
                .build(),
        }
    }
}

impl Default for TypeScriptFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFormatter for TypeScriptFormatter {
    fn format(
        &self,
        source: &str,
        options: &FormatOptions,
    ) -> std::result::Result<String, FormatError> {
        let eol = options.resolve_line_ending(source);
        let extension = options.dialect.extension();
        let file_name = format!("file.{}", extension);
        let text = Eol::Lf.apply(source);

        let formatted = format_text(FormatTextOptions {
            path: Path::new(&file_name),
            extension: Some(extension),
            text: text.clone(),
            config: &self.config,
            external_formatter: None,
        })
        .map_err(|e| FormatError::new(e.to_string()))?;

        // dprint returns None when the input is already formatted
        Ok(eol.apply(&formatted.unwrap_or(text)))
    }
}

/// Format `source` for `entity`, retrying once on failure.
///
/// The retry uses the unmodified input. Deterministic formatters therefore
/// fail the same way twice; the second error is returned.
pub fn format_with_retry(
    formatter: &dyn SourceFormatter,
    entity: &str,
    source: &str,
    options: &FormatOptions,
) -> Result<String> {
    match formatter.format(source, options) {
        Ok(formatted) => Ok(formatted),
        Err(err) => {
            tracing::warn!(
                entity,
                error = %err,
                "there were some problems with component generation, retrying format"
            );
            formatter.format(source, options).map_err(|source| {
                Box::new(Error::Format {
                    entity: entity.to_string(),
                    source,
                })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Fails the first `failures` calls, then echoes its input.
    struct Flaky {
        failures: usize,
        calls: Cell<usize>,
    }

    impl Flaky {
        fn new(failures: usize) -> Self {
            Self {
                failures,
                calls: Cell::new(0),
            }
        }
    }

    impl SourceFormatter for Flaky {
        fn format(
            &self,
            source: &str,
            _options: &FormatOptions,
        ) -> std::result::Result<String, FormatError> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            if call < self.failures {
                Err(FormatError::new(format!("failure {}", call + 1)))
            } else {
                Ok(source.to_uppercase())
            }
        }
    }

    #[test]
    fn test_retry_not_needed() {
        let formatter = Flaky::new(0);
        let out = format_with_retry(&formatter, "Foo", "abc", &FormatOptions::default()).unwrap();
        assert_eq!(out, "ABC");
        assert_eq!(formatter.calls.get(), 1);
    }

    #[test]
    fn test_retry_recovers_transient_failure() {
        let formatter = Flaky::new(1);
        let out = format_with_retry(&formatter, "Foo", "abc", &FormatOptions::default()).unwrap();
        assert_eq!(out, "ABC");
        assert_eq!(formatter.calls.get(), 2);
    }

    #[test]
    fn test_retry_gives_up_after_second_failure() {
        let formatter = Flaky::new(usize::MAX);
        let err =
            format_with_retry(&formatter, "Bad", "abc", &FormatOptions::default()).unwrap_err();
        assert_eq!(formatter.calls.get(), 2);
        match *err {
            Error::Format { entity, source } => {
                assert_eq!(entity, "Bad");
                assert_eq!(source.message, "failure 2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_line_ending() {
        let auto = FormatOptions::default();
        assert_eq!(auto.resolve_line_ending("a\r\nb\n"), Eol::Crlf);
        assert_eq!(auto.resolve_line_ending("a\nb\r\n"), Eol::Lf);
        assert_eq!(auto.resolve_line_ending("single line"), Eol::Lf);
        assert_eq!(auto.resolve_line_ending("\nleading"), Eol::Lf);

        let fixed = FormatOptions {
            line_ending: Some(Eol::Crlf),
            ..Default::default()
        };
        assert_eq!(fixed.resolve_line_ending("a\nb"), Eol::Crlf);
    }

    #[test]
    fn test_typescript_formatter_normalizes() {
        let formatter = TypeScriptFormatter::new();
        let options = FormatOptions::new(Dialect::TypeScript);
        let out = formatter.format("const   x={a:1}\n", &options).unwrap();
        assert_eq!(out, "const x = { a: 1 };\n");

        // formatting is stable
        assert_eq!(formatter.format(&out, &options).unwrap(), out);
    }

    #[test]
    fn test_typescript_formatter_tsx() {
        let formatter = TypeScriptFormatter::new();
        let out = formatter
            .format(
                "export const Foo = () => <div   className='x'>hi</div>\n",
                &FormatOptions::new(Dialect::Tsx),
            )
            .unwrap();
        assert!(out.contains("<div className=\"x\">hi</div>"));
        assert!(out.ends_with(";\n"));
    }

    #[test]
    fn test_typescript_formatter_keeps_crlf() {
        let formatter = TypeScriptFormatter::new();
        let out = formatter
            .format(
                "const a = 1\r\nconst b = 2\r\n",
                &FormatOptions::new(Dialect::TypeScript),
            )
            .unwrap();
        assert_eq!(out, "const a = 1;\r\nconst b = 2;\r\n");
    }

    #[test]
    fn test_typescript_formatter_keeps_export_order() {
        let formatter = TypeScriptFormatter::new();
        let source = "export * from \"./Foo\";\nexport * from \"./Bar\";\n";
        let out = formatter
            .format(source, &FormatOptions::new(Dialect::TypeScript))
            .unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::new("unexpected token");
        assert_eq!(err.to_string(), "unexpected token");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_typescript_formatter_rejects_invalid_source() {
        let formatter = TypeScriptFormatter::new();
        let result = formatter.format("export const = {;", &FormatOptions::default());
        assert!(result.is_err());
    }
}
