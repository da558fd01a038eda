//! Case conventions for generated file names, entity names and property names.
//!
//! Each naming target has its own closed enum because their option sets
//! differ: only file names support `param` (kebab-case) and only property
//! names support `snake`. Unknown values can only appear when parsing from
//! a string, which fails with [`Error::UnknownConvention`].

use std::{fmt, str::FromStr};

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A closed set of casing rules for one naming target.
pub trait Convention: Copy + FromStr<Err = Box<Error>> {
    /// Human-readable name of the naming target, used in error messages.
    const TARGET: &'static str;

    /// Accepted spellings, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Apply the convention to a raw identifier.
    fn apply(self, raw: &str) -> String;
}

/// Convert `raw` using the given convention.
pub fn to_case<C: Convention>(raw: &str, convention: C) -> String {
    convention.apply(raw)
}

/// Convert `raw` using a convention given by name.
///
/// Fails without touching the input if the name is not part of `C`'s domain.
pub fn to_case_named<C: Convention>(raw: &str, convention: &str) -> Result<String> {
    let convention: C = convention.parse()?;
    Ok(convention.apply(raw))
}

#[derive(Clone, Copy)]
enum Case {
    Pascal,
    Camel,
    Snake,
    Kebab,
    Preserve,
}

// heck can re-split its own output ("a.b" -> "AB" -> "Ab"), so conversion
// repeats until the result is stable.
const MAX_PASSES: usize = 4;

impl Case {
    fn apply(self, raw: &str) -> String {
        let mut current = self.convert(raw);
        for _ in 1..MAX_PASSES {
            let next = self.convert(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn convert(self, raw: &str) -> String {
        match self {
            Case::Pascal => raw.to_upper_camel_case(),
            Case::Camel => raw.to_lower_camel_case(),
            Case::Snake => raw.to_snake_case(),
            Case::Kebab => raw.to_kebab_case(),
            Case::Preserve => raw.to_string(),
        }
    }
}

/// Casing applied to generated file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FileCase {
    #[default]
    Pascal,
    /// kebab-case
    Param,
    Camel,
    None,
}

impl FileCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCase::Pascal => "pascal",
            FileCase::Param => "param",
            FileCase::Camel => "camel",
            FileCase::None => "none",
        }
    }
}

impl Convention for FileCase {
    const TARGET: &'static str = "file-name";
    const VARIANTS: &'static [&'static str] = &["pascal", "param", "camel", "none"];

    fn apply(self, raw: &str) -> String {
        match self {
            FileCase::Pascal => Case::Pascal,
            FileCase::Param => Case::Kebab,
            FileCase::Camel => Case::Camel,
            FileCase::None => Case::Preserve,
        }
        .apply(raw)
    }
}

impl FromStr for FileCase {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pascal" => Ok(FileCase::Pascal),
            "param" | "kebab" => Ok(FileCase::Param),
            "camel" => Ok(FileCase::Camel),
            "none" => Ok(FileCase::None),
            _ => Err(Error::unknown_convention(Self::TARGET, s, Self::VARIANTS)),
        }
    }
}

/// Casing applied to the entity identifier placed inside generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EntityCase {
    #[default]
    Pascal,
    Camel,
    None,
}

impl EntityCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCase::Pascal => "pascal",
            EntityCase::Camel => "camel",
            EntityCase::None => "none",
        }
    }
}

impl Convention for EntityCase {
    const TARGET: &'static str = "entity-name";
    const VARIANTS: &'static [&'static str] = &["pascal", "camel", "none"];

    fn apply(self, raw: &str) -> String {
        match self {
            EntityCase::Pascal => Case::Pascal,
            EntityCase::Camel => Case::Camel,
            EntityCase::None => Case::Preserve,
        }
        .apply(raw)
    }
}

impl FromStr for EntityCase {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pascal" => Ok(EntityCase::Pascal),
            "camel" => Ok(EntityCase::Camel),
            "none" => Ok(EntityCase::None),
            _ => Err(Error::unknown_convention(Self::TARGET, s, Self::VARIANTS)),
        }
    }
}

/// Casing applied to property names inside generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PropertyCase {
    Pascal,
    #[default]
    Camel,
    Snake,
    None,
}

impl PropertyCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCase::Pascal => "pascal",
            PropertyCase::Camel => "camel",
            PropertyCase::Snake => "snake",
            PropertyCase::None => "none",
        }
    }
}

impl Convention for PropertyCase {
    const TARGET: &'static str = "property-name";
    const VARIANTS: &'static [&'static str] = &["pascal", "camel", "snake", "none"];

    fn apply(self, raw: &str) -> String {
        match self {
            PropertyCase::Pascal => Case::Pascal,
            PropertyCase::Camel => Case::Camel,
            PropertyCase::Snake => Case::Snake,
            PropertyCase::None => Case::Preserve,
        }
        .apply(raw)
    }
}

impl FromStr for PropertyCase {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pascal" => Ok(PropertyCase::Pascal),
            "camel" => Ok(PropertyCase::Camel),
            "snake" => Ok(PropertyCase::Snake),
            "none" => Ok(PropertyCase::None),
            _ => Err(Error::unknown_convention(Self::TARGET, s, Self::VARIANTS)),
        }
    }
}

// serde's `try_from` needs a `TryFrom<String>` with a displayable error;
// the message ends up inside the toml parse diagnostic.
macro_rules! try_from_string {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = String;

                fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
                    value.parse().map_err(|e: Box<Error>| match *e {
                        Error::UnknownConvention { expected, .. } => format!(
                            "unknown {} case '{}', expected one of: {}",
                            <$ty as Convention>::TARGET,
                            value,
                            expected
                        ),
                        other => other.to_string(),
                    })
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

try_from_string!(FileCase, EntityCase, PropertyCase);

/// Maps raw entity tokens to the names used in generated output.
///
/// [`ConfiguredNaming`] is the implementation driven by configuration;
/// callers can substitute their own to override naming wholesale.
pub trait NamingStrategy: Send + Sync {
    /// Name used for the output file stem.
    fn file_name(&self, raw: &str) -> String;

    /// Identifier used for the entity inside generated code.
    fn entity_name(&self, raw: &str) -> String;

    /// Identifier used for a property inside generated code.
    fn property_name(&self, raw: &str) -> String;
}

/// Naming strategy built from the three configured conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfiguredNaming {
    pub file: FileCase,
    pub entity: EntityCase,
    pub property: PropertyCase,
}

impl ConfiguredNaming {
    pub fn new(file: FileCase, entity: EntityCase, property: PropertyCase) -> Self {
        Self {
            file,
            entity,
            property,
        }
    }
}

impl NamingStrategy for ConfiguredNaming {
    fn file_name(&self, raw: &str) -> String {
        to_case(raw, self.file)
    }

    fn entity_name(&self, raw: &str) -> String {
        to_case(raw, self.entity)
    }

    fn property_name(&self, raw: &str) -> String {
        to_case(raw, self.property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "button",
        "ButtonGroup",
        "button-group",
        "button_group",
        "AppBar",
        "toggle button",
        "CSSBaseline",
        "useMediaQuery",
        "a.b",
        "x_1_y",
        "a-1-b",
        "a1B",
        "İstanbul",
        "",
    ];

    fn assert_idempotent<C: Convention + fmt::Debug>(conventions: &[C]) {
        for &convention in conventions {
            for sample in SAMPLES {
                let once = to_case(sample, convention);
                let twice = to_case(&once, convention);
                assert_eq!(once, twice, "{convention:?} is not idempotent on {sample:?}");
            }
        }
    }

    #[test]
    fn test_file_case() {
        assert_eq!(to_case("button_group", FileCase::Pascal), "ButtonGroup");
        assert_eq!(to_case("AppBar", FileCase::Param), "app-bar");
        assert_eq!(to_case("button-group", FileCase::Camel), "buttonGroup");
        assert_eq!(to_case("button-group", FileCase::None), "button-group");
    }

    #[test]
    fn test_entity_case() {
        assert_eq!(to_case("button-group", EntityCase::Pascal), "ButtonGroup");
        assert_eq!(to_case("ButtonGroup", EntityCase::Camel), "buttonGroup");
        assert_eq!(to_case("button-group", EntityCase::None), "button-group");
    }

    #[test]
    fn test_property_case() {
        assert_eq!(to_case("class_name", PropertyCase::Pascal), "ClassName");
        assert_eq!(to_case("class_name", PropertyCase::Camel), "className");
        assert_eq!(to_case("className", PropertyCase::Snake), "class_name");
        assert_eq!(to_case("className", PropertyCase::None), "className");
    }

    #[test]
    fn test_idempotent() {
        assert_idempotent(&[FileCase::Pascal, FileCase::Param, FileCase::Camel, FileCase::None]);
        assert_idempotent(&[EntityCase::Pascal, EntityCase::Camel, EntityCase::None]);
        assert_idempotent(&[
            PropertyCase::Pascal,
            PropertyCase::Camel,
            PropertyCase::Snake,
            PropertyCase::None,
        ]);
    }

    #[test]
    fn test_separators_and_digits_settle() {
        assert_eq!(to_case("a.b", FileCase::Pascal), "Ab");
        assert_eq!(to_case("x_1_y", EntityCase::Pascal), "X1y");
        assert_eq!(to_case("a1B", PropertyCase::Pascal), "A1b");

        let kebab = to_case("İstanbul", FileCase::Param);
        assert_eq!(to_case(&kebab, FileCase::Param), kebab);
        let snake = to_case("İstanbul", PropertyCase::Snake);
        assert_eq!(to_case(&snake, PropertyCase::Snake), snake);
    }

    #[test]
    fn test_deterministic_across_targets() {
        for sample in SAMPLES {
            assert_eq!(
                to_case(sample, EntityCase::Pascal),
                to_case(sample, PropertyCase::Pascal)
            );
            assert_eq!(
                to_case(sample, EntityCase::Camel),
                to_case(sample, PropertyCase::Camel)
            );
            assert_eq!(
                to_case(sample, FileCase::Pascal),
                to_case(sample, EntityCase::Pascal)
            );
        }
    }

    #[test]
    fn test_none_is_identity() {
        for sample in SAMPLES.iter().chain(&["Weird  Name!", "ß-unicode_Ünïcode"]) {
            assert_eq!(to_case(sample, FileCase::None), *sample);
            assert_eq!(to_case(sample, EntityCase::None), *sample);
            assert_eq!(to_case(sample, PropertyCase::None), *sample);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(FileCase::from_str("param").unwrap(), FileCase::Param);
        assert_eq!(FileCase::from_str("kebab").unwrap(), FileCase::Param);
        assert_eq!(FileCase::from_str("Pascal").unwrap(), FileCase::Pascal);
        assert_eq!(EntityCase::from_str("camel").unwrap(), EntityCase::Camel);
        assert_eq!(PropertyCase::from_str("snake").unwrap(), PropertyCase::Snake);
    }

    #[test]
    fn test_unknown_convention() {
        // snake is a property-only convention and param is file-only
        let err = to_case_named::<EntityCase>("button_group", "snake").unwrap_err();
        match *err {
            Error::UnknownConvention {
                target,
                value,
                expected,
            } => {
                assert_eq!(target, "entity-name");
                assert_eq!(value, "snake");
                assert_eq!(expected, "pascal, camel, none");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(to_case_named::<PropertyCase>("x", "param").is_err());
        assert!(to_case_named::<FileCase>("x", "snake").is_err());
        assert_eq!(
            to_case_named::<FileCase>("AppBar", "param").unwrap(),
            "app-bar"
        );
    }

    #[test]
    fn test_deserialize() {
        let case: FileCase = serde_json::from_str(r#""param""#).unwrap();
        assert_eq!(case, FileCase::Param);

        let err = serde_json::from_str::<PropertyCase>(r#""kebab""#).unwrap_err();
        assert!(
            err.to_string()
                .contains("unknown property-name case 'kebab', expected one of: pascal, camel, snake, none")
        );
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&FileCase::Param).unwrap(), r#""param""#);
        assert_eq!(serde_json::to_string(&PropertyCase::Snake).unwrap(), r#""snake""#);
    }

    #[test]
    fn test_configured_naming() {
        let naming = ConfiguredNaming::new(FileCase::Param, EntityCase::Pascal, PropertyCase::Snake);
        assert_eq!(naming.file_name("ButtonGroup"), "button-group");
        assert_eq!(naming.entity_name("button-group"), "ButtonGroup");
        assert_eq!(naming.property_name("className"), "class_name");
    }
}
