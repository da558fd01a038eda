mod check;
mod generate;
mod init;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use forma_config::GenerationConfig;
use generate::GenerateCommand;
use init::InitCommand;
use tracing_subscriber::EnvFilter;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for forma_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for forma_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Warnings about settings that are accepted but have no effect.
fn config_warnings(config: &GenerationConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(path) = &config.custom_naming_strategy_path {
        warnings.push(format!(
            "customNamingStrategyPath '{}' is ignored; the configured case conventions are used",
            path.display()
        ));
    }
    warnings
}

#[derive(Parser)]
#[command(name = "forma")]
#[command(version)]
#[command(about = "Scaffold formatted TSX components from a directory of entities")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.init_logging();

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }

    /// Install the stderr subscriber. `RUST_LOG` takes precedence over the flags.
    fn init_logging(&self) {
        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one component per subdirectory of ROOT
    Generate(GenerateCommand),

    /// Write a forma.toml with every option at its default
    Init(InitCommand),

    /// Validate forma.toml and print the effective configuration
    Check(CheckCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "forma", "-vv", "generate", "src", "-c", "custom.toml", "-o", "out", "--index",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.root, std::path::PathBuf::from("src"));
        assert_eq!(cmd.config, std::path::PathBuf::from("custom.toml"));
        assert_eq!(cmd.output, Some(std::path::PathBuf::from("out")));
        assert!(cmd.index);
        assert!(cmd.dry_run);
    }

    #[test]
    fn test_config_warnings() {
        assert!(config_warnings(&GenerationConfig::default()).is_empty());

        let config = GenerationConfig {
            custom_naming_strategy_path: Some("naming.js".into()),
            ..Default::default()
        };
        let warnings = config_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("naming.js"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["forma", "-q", "-v", "check"]).is_err());
    }
}
