//! `quill config` — inspect and bootstrap the configuration file.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use quill_config::{QuillConfig, ValidationReport, write_config};

use crate::terminal_output::{note_error, note_success, note_warn};

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration (file + environment) as YAML
    Show,
    /// Validate the effective configuration
    Validate,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub async fn run(
    cmd: ConfigCommands,
    path: &Path,
    config: &QuillConfig,
    report: &ValidationReport,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let yaml = serde_yaml::to_string(config).context("Failed to serialize config")?;
            println!("# {}", path.display());
            print!("{yaml}");
        }
        ConfigCommands::Validate => {
            for warning in &report.warnings {
                note_warn(&warning.to_string());
            }
            for error in &report.errors {
                note_error(&error.to_string());
            }
            if !report.is_valid() {
                bail!("{} has {} error(s)", path.display(), report.errors.len());
            }
            note_success(&format!("{} is valid", path.display()));
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            write_config(&QuillConfig::default(), path).await?;
            note_success(&format!("Wrote default config to {}", path.display()));
        }
    }
    Ok(())
}
