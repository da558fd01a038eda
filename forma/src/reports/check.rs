//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Whether the file exists. A missing file means the defaults apply.
    pub found: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// The effective configuration as TOML.
    pub effective: String,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        if self.found {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            out.preformatted(&format!(
                "✓ {} not found, using defaults",
                self.config_path.display()
            ));
        }

        out.newline();
        out.divider("Effective configuration");
        out.preformatted(self.effective.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            config_path: PathBuf::from("forma.toml"),
            found: true,
            warnings: vec!["customNamingStrategyPath is ignored".to_string()],
            effective: "indexFile = true\n".to_string(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "warning: customNamingStrategyPath is ignored",
                "",
                "✓ forma.toml is valid",
                "",
                "── Effective configuration ──",
                "indexFile = true",
            ]
        );
    }

    #[test]
    fn test_render_missing_file() {
        let report = CheckReport {
            config_path: PathBuf::from("forma.toml"),
            found: false,
            warnings: vec![],
            effective: String::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines[0], "✓ forma.toml not found, using defaults");
    }
}
