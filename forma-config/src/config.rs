use std::path::{Path, PathBuf};

use forma_core::{ConfiguredNaming, EntityCase, FileCase, PropertyCase};
use serde::{Deserialize, Serialize};

use crate::options::{Eol, ExportType, StrictMode, Visibility};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "forma.toml";

/// Run-wide generation settings.
///
/// Keys use the camelCase spelling of the original option names, so
/// `convert_case_file` is written `convertCaseFile` in `forma.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerationConfig {
    /// Directory generated files are written to.
    pub results_path: PathBuf,
    pub pluralize_names: bool,
    pub no_configs: bool,
    /// Casing of output file names.
    pub convert_case_file: FileCase,
    /// Casing of the entity identifier inside generated code.
    pub convert_case_entity: EntityCase,
    /// Casing of property identifiers inside generated code.
    pub convert_case_property: PropertyCase,
    pub convert_eol: Eol,
    pub property_visibility: Visibility,
    pub lazy: bool,
    pub active_record: bool,
    pub generate_constructor: bool,
    pub generate_repository: bool,
    /// Emit a props type alongside each component.
    pub generate_type: bool,
    /// Path to an external naming strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_naming_strategy_path: Option<PathBuf>,
    pub relation_ids: bool,
    pub strict_mode: StrictMode,
    pub skip_schema: bool,
    /// Emit an `index.ts` re-exporting every generated component.
    pub index_file: bool,
    pub export_type: ExportType,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from("output"),
            pluralize_names: true,
            no_configs: false,
            convert_case_file: FileCase::Pascal,
            convert_case_entity: EntityCase::Pascal,
            convert_case_property: PropertyCase::Camel,
            convert_eol: Eol::native(),
            property_visibility: Visibility::Public,
            lazy: false,
            active_record: true,
            generate_constructor: true,
            generate_repository: true,
            generate_type: true,
            custom_naming_strategy_path: None,
            relation_ids: false,
            strict_mode: StrictMode::None,
            skip_schema: false,
            index_file: false,
            export_type: ExportType::Named,
        }
    }
}

impl GenerationConfig {
    /// The naming strategy described by the three case conventions.
    pub fn naming(&self) -> ConfiguredNaming {
        ConfiguredNaming::new(
            self.convert_case_file,
            self.convert_case_entity,
            self.convert_case_property,
        )
    }

    /// Return a copy writing to a different output directory.
    pub fn with_results_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_path = path.into();
        self
    }

    /// Return a copy with index file emission set.
    pub fn with_index_file(mut self, enabled: bool) -> Self {
        self.index_file = enabled;
        self
    }

    /// The output directory.
    pub fn results_path(&self) -> &Path {
        &self.results_path
    }

    /// Serialize the configuration as `forma.toml` content.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.results_path(), Path::new("output"));
        assert_eq!(config.convert_case_file, FileCase::Pascal);
        assert_eq!(config.convert_case_entity, EntityCase::Pascal);
        assert_eq!(config.convert_case_property, PropertyCase::Camel);
        assert_eq!(config.property_visibility, Visibility::Public);
        assert_eq!(config.strict_mode, StrictMode::None);
        assert_eq!(config.export_type, ExportType::Named);
        assert!(config.pluralize_names);
        assert!(config.generate_type);
        assert!(!config.index_file);
        assert!(config.custom_naming_strategy_path.is_none());
    }

    #[test]
    fn test_builders() {
        let config = GenerationConfig::default()
            .with_results_path("components")
            .with_index_file(true);
        assert_eq!(config.results_path(), Path::new("components"));
        assert!(config.index_file);
    }

    #[test]
    fn test_naming() {
        let config = GenerationConfig {
            convert_case_file: FileCase::Param,
            ..Default::default()
        };
        let naming = config.naming();
        assert_eq!(naming.file, FileCase::Param);
        assert_eq!(naming.entity, EntityCase::Pascal);
        assert_eq!(naming.property, PropertyCase::Camel);
    }
}
