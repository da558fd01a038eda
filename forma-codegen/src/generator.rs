//! The generation pipeline.
//!
//! For every entity token: name → render → format → write. Failures are
//! isolated per entity; only a malformed template or an output directory
//! that cannot be created stop the whole run.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use forma_config::{ExportType, GenerationConfig};
use forma_core::{GeneratedArtifact, NamingStrategy};

use crate::{
    Error, Result,
    format::{Dialect, FormatOptions, SourceFormatter, TypeScriptFormatter, format_with_retry},
    index::IndexFile,
    template::{DEFAULT_TEMPLATE, Helpers, RenderContext, TemplateRenderer},
};

/// Extension of generated component files.
pub const COMPONENT_EXTENSION: &str = "tsx";

/// A generation unit that could not be produced.
#[derive(Debug)]
pub struct EntityFailure {
    /// The entity token, or the index file name.
    pub entity: String,
    pub error: Box<Error>,
}

impl EntityFailure {
    /// Log the failure at `error` level and record it.
    fn logged(entity: &str, error: Box<Error>) -> Self {
        tracing::error!(entity, %error, "component generation failed");
        Self {
            entity: entity.to_string(),
            error,
        }
    }
}

/// Outcome of [`Generator::run`].
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    /// Files written, in processing order.
    pub written: Vec<PathBuf>,
    /// Path of the index file, if one was written.
    pub index: Option<PathBuf>,
    pub failures: Vec<EntityFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Look up the failure recorded for an entity.
    pub fn failure(&self, entity: &str) -> Option<&EntityFailure> {
        self.failures.iter().find(|f| f.entity == entity)
    }
}

/// Outcome of [`Generator::preview`].
#[derive(Debug, Default)]
pub struct Preview {
    pub files: Vec<GeneratedArtifact>,
    pub failures: Vec<EntityFailure>,
}

/// Configures a [`Generator`].
pub struct GeneratorBuilder {
    config: GenerationConfig,
    template: String,
    naming: Option<Arc<dyn NamingStrategy>>,
    formatter: Option<Box<dyn SourceFormatter>>,
}

impl GeneratorBuilder {
    /// Use a different template source.
    pub fn template(mut self, source: impl Into<String>) -> Self {
        self.template = source.into();
        self
    }

    /// Replace the configured naming conventions.
    pub fn naming_strategy(mut self, naming: impl NamingStrategy + 'static) -> Self {
        self.naming = Some(Arc::new(naming));
        self
    }

    /// Replace the dprint-backed formatter.
    pub fn formatter(mut self, formatter: impl SourceFormatter + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Compile the template and build the generator.
    pub fn build(self) -> Result<Generator> {
        let naming = self
            .naming
            .unwrap_or_else(|| Arc::new(self.config.naming()));
        let helpers = Helpers::from_config(&self.config, Arc::clone(&naming));
        let renderer = TemplateRenderer::compile(&self.template, helpers)?;
        let formatter = self
            .formatter
            .unwrap_or_else(|| Box::new(TypeScriptFormatter::new()));

        Ok(Generator {
            config: self.config,
            naming,
            renderer,
            formatter,
        })
    }
}

/// Generates one component file per entity token.
pub struct Generator {
    config: GenerationConfig,
    naming: Arc<dyn NamingStrategy>,
    renderer: TemplateRenderer,
    formatter: Box<dyn SourceFormatter>,
}

impl Generator {
    /// Build a generator with the default template, naming and formatter.
    pub fn new(config: GenerationConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: GenerationConfig) -> GeneratorBuilder {
        GeneratorBuilder {
            config,
            template: DEFAULT_TEMPLATE.to_string(),
            naming: None,
            formatter: None,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate every entity into the configured output directory.
    ///
    /// Returns an error only if the output directory cannot be created.
    /// Per-entity failures are logged and collected in the report.
    pub fn run<S: AsRef<str>>(&self, entities: &[S]) -> Result<GenerationReport> {
        let output_dir = self.config.results_path();
        std::fs::create_dir_all(output_dir).map_err(|source| {
            Box::new(Error::CreateOutputDir {
                path: output_dir.to_path_buf(),
                source,
            })
        })?;

        let mut report = GenerationReport {
            output_dir: output_dir.to_path_buf(),
            ..Default::default()
        };
        let mut index = IndexFile::new(self.config.export_type);

        for entity in entities {
            let entity = entity.as_ref();
            tracing::debug!(entity, "generating component");

            let result = self
                .build_artifact(entity)
                .and_then(|(artifact, context)| {
                    write_artifact(&artifact)?;
                    Ok((artifact, context))
                });

            match result {
                Ok((artifact, context)) => {
                    index.add(context.file_name, context.component_name);
                    report.written.push(artifact.path().to_path_buf());
                }
                Err(error) => report.failures.push(EntityFailure::logged(entity, error)),
            }
        }

        if self.config.index_file {
            match self
                .build_index(&index, output_dir)
                .and_then(|artifact| write_artifact(&artifact).map(|()| artifact))
            {
                Ok(artifact) => report.index = Some(artifact.path().to_path_buf()),
                Err(error) => report
                    .failures
                    .push(EntityFailure::logged(IndexFile::FILE_NAME, error)),
            }
        }

        tracing::info!(
            written = report.written.len(),
            failed = report.failures.len(),
            output = %output_dir.display(),
            "generation finished"
        );
        Ok(report)
    }

    /// Produce every artifact without touching the filesystem.
    pub fn preview<S: AsRef<str>>(&self, entities: &[S]) -> Preview {
        let mut preview = Preview::default();
        let mut index = IndexFile::new(self.config.export_type);

        for entity in entities {
            let entity = entity.as_ref();
            match self.build_artifact(entity) {
                Ok((artifact, context)) => {
                    index.add(context.file_name, context.component_name);
                    preview.files.push(artifact);
                }
                Err(error) => preview.failures.push(EntityFailure::logged(entity, error)),
            }
        }

        if self.config.index_file {
            match self.build_index(&index, self.config.results_path()) {
                Ok(artifact) => preview.files.push(artifact),
                Err(error) => preview
                    .failures
                    .push(EntityFailure::logged(IndexFile::FILE_NAME, error)),
            }
        }

        preview
    }

    /// The render context for one entity token.
    pub fn context(&self, entity: &str) -> RenderContext {
        RenderContext {
            component_name: self.naming.entity_name(entity),
            entity_token: entity.to_string(),
            file_name: self.naming.file_name(entity),
            export_default: self.config.export_type == ExportType::Default,
            generate_type: self.config.generate_type,
        }
    }

    fn build_artifact(&self, entity: &str) -> Result<(GeneratedArtifact, RenderContext)> {
        let context = self.context(entity);
        let rendered = self.renderer.render(&context)?;
        let formatted = self.format(entity, &rendered, Dialect::Tsx)?;
        let path = self
            .config
            .results_path()
            .join(format!("{}.{}", context.file_name, COMPONENT_EXTENSION));

        Ok((GeneratedArtifact::new(path, formatted), context))
    }

    fn build_index(&self, index: &IndexFile, output_dir: &Path) -> Result<GeneratedArtifact> {
        let formatted = self.format(IndexFile::FILE_NAME, &index.render(), Dialect::TypeScript)?;
        Ok(GeneratedArtifact::new(index.path(output_dir), formatted))
    }

    fn format(&self, entity: &str, source: &str, dialect: Dialect) -> Result<String> {
        // Line endings are fixed before formatting; the formatter keeps them.
        let source = self.config.convert_eol.apply(source);
        format_with_retry(
            self.formatter.as_ref(),
            entity,
            &source,
            &FormatOptions::new(dialect),
        )
    }
}

fn write_artifact(artifact: &GeneratedArtifact) -> Result<()> {
    artifact.write().map_err(|source| {
        Box::new(Error::Write {
            path: artifact.path().to_path_buf(),
            source,
        })
    })
}
