//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use forma_core::{Error, Result, SourceContext};

use crate::{CONFIG_FILE_NAME, GenerationConfig};

impl FromStr for GenerationConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

impl GenerationConfig {
    /// Parse a configuration file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a configuration file if it exists, otherwise return the defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<GenerationConfig> {
    let source_ctx = SourceContext::new(content, filename);
    toml::from_str(content).map_err(|e| source_ctx.parse_error(e))
}
