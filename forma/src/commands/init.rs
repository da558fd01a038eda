use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use forma_config::{CONFIG_FILE_NAME, GenerationConfig};
use forma_core::GeneratedArtifact;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the configuration
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        write_default_config(&self.output, self.force)?;
        println!("Created {}", self.output.display());
        Ok(())
    }
}

/// Write a config file with every option at its default.
fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        eyre::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = GenerationConfig::default()
        .to_toml()
        .wrap_err("Failed to serialize default configuration")?;
    GeneratedArtifact::new(path, content)
        .write()
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), "wrote default configuration");
    Ok(())
}
