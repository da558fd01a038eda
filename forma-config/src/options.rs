//! Enumerated configuration choices other than case conventions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Line-ending style of generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Eol {
    #[serde(rename = "LF", alias = "lf")]
    Lf,
    #[serde(rename = "CRLF", alias = "crlf")]
    Crlf,
}

impl Eol {
    /// The line-ending style of the current platform.
    pub fn native() -> Self {
        if cfg!(windows) { Eol::Crlf } else { Eol::Lf }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Eol::Lf => "LF",
            Eol::Crlf => "CRLF",
        }
    }

    /// The character sequence this style ends lines with.
    pub fn sequence(&self) -> &'static str {
        match self {
            Eol::Lf => "\n",
            Eol::Crlf => "\r\n",
        }
    }

    /// Rewrite every line ending in `text` to this style.
    pub fn apply(&self, text: &str) -> String {
        let normalized = text.replace("\r\n", "\n");
        match self {
            Eol::Lf => normalized,
            Eol::Crlf => normalized.replace('\n', "\r\n"),
        }
    }
}

impl Default for Eol {
    fn default() -> Self {
        Self::native()
    }
}

/// Visibility keyword printed in front of generated class members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
    None,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
            Visibility::None => "none",
        }
    }

    /// The keyword followed by a space, or nothing for [`Visibility::None`].
    pub fn prefix(&self) -> &'static str {
        match self {
            Visibility::Public => "public ",
            Visibility::Protected => "protected ",
            Visibility::Private => "private ",
            Visibility::None => "",
        }
    }
}

/// Marker appended to generated property declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum StrictMode {
    #[default]
    #[serde(rename = "none")]
    None,
    /// `?`
    #[serde(rename = "?", alias = "optional")]
    Optional,
    /// `!`
    #[serde(rename = "!", alias = "required")]
    Required,
}

impl StrictMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrictMode::None => "none",
            StrictMode::Optional => "?",
            StrictMode::Required => "!",
        }
    }

    /// The marker text, empty for [`StrictMode::None`].
    pub fn mark(&self) -> &'static str {
        match self {
            StrictMode::None => "",
            StrictMode::Optional => "?",
            StrictMode::Required => "!",
        }
    }
}

/// How generated components are exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    #[default]
    Named,
    Default,
}

impl ExportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportType::Named => "named",
            ExportType::Default => "default",
        }
    }
}

impl fmt::Display for Eol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StrictMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eol_apply() {
        assert_eq!(Eol::Crlf.apply("a\nb\r\nc"), "a\r\nb\r\nc");
        assert_eq!(Eol::Lf.apply("a\r\nb\nc"), "a\nb\nc");
        assert_eq!(Eol::Crlf.sequence(), "\r\n");
    }

    #[test]
    fn test_visibility_prefix() {
        assert_eq!(Visibility::Protected.prefix(), "protected ");
        assert_eq!(Visibility::None.prefix(), "");
    }

    #[test]
    fn test_strict_mode_deserialize() {
        let optional: StrictMode = serde_json::from_str(r#""?""#).unwrap();
        assert_eq!(optional, StrictMode::Optional);

        let required: StrictMode = serde_json::from_str(r#""required""#).unwrap();
        assert_eq!(required, StrictMode::Required);
        assert_eq!(required.mark(), "!");

        assert!(serde_json::from_str::<StrictMode>(r#""maybe""#).is_err());
    }

    #[test]
    fn test_eol_deserialize() {
        let eol: Eol = serde_json::from_str(r#""CRLF""#).unwrap();
        assert_eq!(eol, Eol::Crlf);
        assert_eq!(serde_json::to_string(&Eol::Lf).unwrap(), r#""LF""#);
    }

    #[test]
    fn test_display() {
        assert_eq!(ExportType::Default.to_string(), "default");
        assert_eq!(StrictMode::Optional.to_string(), "?");
        assert_eq!(Visibility::Private.to_string(), "private");
    }
}
