//! index.ts aggregation file.

use std::path::{Path, PathBuf};

use forma_config::ExportType;
use indexmap::IndexMap;

/// Re-exports every generated component from a single module.
#[derive(Debug, Clone)]
pub struct IndexFile {
    /// File stem -> component identifier, in first-generated order.
    entries: IndexMap<String, String>,
    export_type: ExportType,
}

impl IndexFile {
    pub const FILE_NAME: &'static str = "index.ts";

    pub fn new(export_type: ExportType) -> Self {
        Self {
            entries: IndexMap::new(),
            export_type,
        }
    }

    /// Record a generated component. A repeated file stem replaces the earlier entry.
    pub fn add(&mut self, file_name: impl Into<String>, component_name: impl Into<String>) {
        self.entries.insert(file_name.into(), component_name.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::FILE_NAME)
    }

    /// Render the (unformatted) module source.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "export {};\n".to_string();
        }

        let mut out = String::new();
        for (file_name, component_name) in &self.entries {
            let line = match self.export_type {
                ExportType::Named => format!("export * from \"./{}\";\n", file_name),
                ExportType::Default => format!(
                    "export {{ default as {} }} from \"./{}\";\n",
                    component_name, file_name
                ),
            };
            out.push_str(&line);
        }
        out
    }
}
