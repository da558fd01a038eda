//! Generate command report data structures.

use std::path::{Path, PathBuf};

use forma_codegen::{EntityFailure, GenerationReport, Preview};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Number of entities discovered.
    pub entity_count: usize,
    pub warnings: Vec<String>,
    pub result: GenerationResult,
    pub failures: Vec<Failure>,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk, relative to the output directory.
    Written { files: Vec<String> },
    /// Dry-run preview as `(path, content)` pairs.
    Preview { files: Vec<(String, String)> },
}

/// An entity that could not be generated.
#[derive(Debug, PartialEq, Eq)]
pub struct Failure {
    pub entity: String,
    /// The error and its causes, joined with `: `.
    pub message: String,
}

impl From<EntityFailure> for Failure {
    fn from(failure: EntityFailure) -> Self {
        Self {
            entity: failure.entity,
            message: format!("{:#}", eyre::Report::new(*failure.error)),
        }
    }
}

impl GenerateReport {
    pub fn from_run(entity_count: usize, warnings: Vec<String>, run: GenerationReport) -> Self {
        let mut files: Vec<String> = run
            .written
            .iter()
            .map(|path| relative(path, &run.output_dir))
            .collect();
        if let Some(index) = &run.index {
            files.push(relative(index, &run.output_dir));
        }

        Self {
            output_dir: run.output_dir.clone(),
            entity_count,
            warnings,
            result: GenerationResult::Written { files },
            failures: run.failures.into_iter().map(Failure::from).collect(),
        }
    }

    pub fn from_preview(
        output_dir: &Path,
        entity_count: usize,
        warnings: Vec<String>,
        preview: Preview,
    ) -> Self {
        let files = preview
            .files
            .iter()
            .map(|file| (relative(file.path(), output_dir), file.content().to_string()))
            .collect();

        Self {
            output_dir: output_dir.to_path_buf(),
            entity_count,
            warnings,
            result: GenerationResult::Preview { files },
            failures: preview.failures.into_iter().map(Failure::from).collect(),
        }
    }

    /// Whether every entity was generated.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written { files } => {
                out.key_value("Entities", &self.entity_count.to_string());
                out.key_value("Generated", &self.output_dir.display().to_string());
                for file in files {
                    out.added_item(file);
                }
            }
            GenerationResult::Preview { files } => {
                for (path, content) in files {
                    out.divider(path);
                    out.preformatted(content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} file{} would be generated in {}",
                    files.len(),
                    if files.len() == 1 { "" } else { "s" },
                    self.output_dir.display()
                ));
            }
        }

        if !self.failures.is_empty() {
            out.newline();
            out.section(&format!("Failed ({})", self.failures.len()));
            for failure in &self.failures {
                out.failed_item(&failure.entity, &failure.message);
            }
        }
    }
}

fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
