//! The `convert` command

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::ProjectConfig;
use crate::converter::Converter;

/// Arguments for the `convert` command.
#[derive(Args)]
pub struct ConvertCommand {
    /// Root directory of the Gradle project (defaults to the current
    /// directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

impl ConvertCommand {
    /// Runs the conversion and prints a summary of the staged outputs.
    pub async fn execute(self) -> Result<()> {
        let root = self.path.unwrap_or_else(|| PathBuf::from("."));
        let config = ProjectConfig::load(&root)?;

        let summary = Converter::new(root, config)?.run().await?;

        println!(
            "{} Wrote catalog to {} ({} libraries, {} shared versions)",
            "✓".green(),
            summary.catalog_path.display(),
            summary.libraries,
            summary.shared_versions
        );
        println!(
            "{} Rewrote {} build file{}",
            "✓".green(),
            summary.modules,
            if summary.modules == 1 { "" } else { "s" }
        );
        println!(
            "Review the staged files, then run {} to apply the conversion",
            summary.script_path.display().to_string().cyan()
        );

        Ok(())
    }
}
