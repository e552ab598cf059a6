//! The `scan` command

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::ProjectConfig;
use crate::coordinate;
use crate::core::VerscatError;
use crate::scanner::{discover_modules, scan_modules};

/// Output format for the scan report.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// One coordinate per line
    #[default]
    Text,
    /// A JSON array of coordinate objects
    Json,
}

/// Arguments for the `scan` command.
#[derive(Args)]
pub struct ScanCommand {
    /// Root directory of the Gradle project (defaults to the current
    /// directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// One deduplicated coordinate as reported by `scan`.
#[derive(Debug, Serialize)]
struct CoordinateReport {
    group: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    /// Classifiers seen for the coordinates; the undecorated form is not
    /// listed
    classifiers: Vec<String>,
}

impl ScanCommand {
    /// Scans the project and prints its deduplicated coordinates.
    pub async fn execute(self) -> Result<()> {
        let root = self.path.unwrap_or_else(|| PathBuf::from("."));
        if !root.is_dir() {
            return Err(VerscatError::ProjectNotFound {
                path: root.display().to_string(),
            }
            .into());
        }

        let config = ProjectConfig::load(&root)?;
        let modules = discover_modules(&root)?;
        if modules.is_empty() {
            return Err(VerscatError::NoModulesFound {
                path: root.display().to_string(),
            }
            .into());
        }

        let observed = scan_modules(&modules, &config.configurations).await?;

        let mut reports: Vec<CoordinateReport> = coordinate::collect(observed)
            .into_iter()
            .map(|coord| {
                let (group, name, version, classifiers) = coord.into_parts();
                CoordinateReport {
                    group,
                    name,
                    version,
                    classifiers: classifiers.into_iter().flatten().collect(),
                }
            })
            .collect();
        reports.sort_by(|a, b| {
            (&a.group, &a.name, &a.version).cmp(&(&b.group, &b.name, &b.version))
        });

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
            OutputFormat::Text => {
                for report in &reports {
                    let mut line = format!("{}:{}", report.group, report.name);
                    if let Some(version) = &report.version {
                        line.push(':');
                        line.push_str(version);
                    }
                    if !report.classifiers.is_empty() {
                        line.push_str(&format!(
                            " (classifiers: {})",
                            report.classifiers.join(", ")
                        ));
                    }
                    println!("{line}");
                }
            }
        }

        Ok(())
    }
}
