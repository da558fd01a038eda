use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use forma_config::{CONFIG_FILE_NAME, GenerationConfig};

use super::{UnwrapOrExit, config_warnings};
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to forma.toml (defaults to ./forma.toml)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let found = self.config.exists();
        let config = GenerationConfig::from_file_or_default(&self.config).unwrap_or_exit();
        let effective = config
            .to_toml()
            .wrap_err("Failed to serialize configuration")?;

        let report = CheckReport {
            config_path: self.config.clone(),
            found,
            warnings: config_warnings(&config),
            effective,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
