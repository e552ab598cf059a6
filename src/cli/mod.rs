//! Command-line interface for verscat
//!
//! Two commands cover the tool's surface:
//! - `convert` - run the full conversion pipeline and stage the outputs
//! - `scan` - extract and print the deduplicated coordinates, for
//!   inspecting what a conversion would be built from
//!
//! Global `--verbose` / `--quiet` flags control log verbosity; an explicit
//! `RUST_LOG` always wins.

mod convert;
mod scan;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Main CLI structure for verscat.
#[derive(Parser)]
#[command(name = "verscat", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Gradle project to a version catalog.
    ///
    /// Scans every module, generates the catalog, rewrites the build files,
    /// and stages everything with an executable copy script.
    Convert(convert::ConvertCommand),

    /// Print the deduplicated dependency coordinates of a project.
    Scan(scan::ScanCommand),
}

impl Cli {
    /// Initializes logging and runs the selected command.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        match self.command {
            Commands::Convert(cmd) => cmd.execute().await,
            Commands::Scan(cmd) => cmd.execute().await,
        }
    }

    fn init_logging(&self) {
        let default_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
