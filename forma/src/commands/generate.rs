use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use forma_codegen::{Generator, discover_entities};
use forma_config::{CONFIG_FILE_NAME, GenerationConfig};

use super::{UnwrapOrExit, config_warnings};
use crate::reports::{GenerateReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Directory whose subdirectories name the components to generate
    pub root: PathBuf,

    /// Path to forma.toml (defaults are used if it does not exist)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Output directory (overrides resultsPath)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write an index.ts re-exporting every component
    #[arg(long)]
    pub index: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config();
        let warnings = config_warnings(&config);

        let entities = discover_entities(&self.root).unwrap_or_exit();
        if entities.is_empty() {
            tracing::warn!(root = %self.root.display(), "no entities found");
        }
        tracing::debug!(count = entities.len(), "discovered entities");

        let generator = Generator::new(config).unwrap_or_exit();
        let output_dir = generator.config().results_path().to_path_buf();

        let report = if self.dry_run {
            let preview = generator.preview(&entities);
            GenerateReport::from_preview(&output_dir, entities.len(), warnings, preview)
        } else {
            let run = generator.run(&entities).unwrap_or_exit();
            GenerateReport::from_run(entities.len(), warnings, run)
        };

        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn load_config(&self) -> GenerationConfig {
        let mut config = GenerationConfig::from_file_or_default(&self.config).unwrap_or_exit();
        if let Some(output) = &self.output {
            config = config.with_results_path(output);
        }
        if self.index {
            config = config.with_index_file(true);
        }
        config
    }
}
