//! Common test utilities for verscat integration tests

// Allow dead code because these utilities are shared across test files and
// not every test file uses all of them
#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary Gradle project to run verscat against.
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    /// Creates an empty project in a fresh temporary directory.
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("Failed to create temp directory")?;
        Ok(Self { temp })
    }

    /// Root directory of the project.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Writes a file under the project root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Reads a file under the project root.
    pub fn read_file(&self, relative: &str) -> Result<String> {
        let path = self.root().join(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Whether a file exists under the project root.
    pub fn has_file(&self, relative: &str) -> bool {
        self.root().join(relative).exists()
    }

    /// Absolute path of a file under the project root.
    pub fn path_of(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Runs verscat in the project directory.
    pub fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let binary = env!("CARGO_BIN_EXE_verscat");
        let output = Command::new(binary)
            .args(args)
            .current_dir(self.root())
            .env("NO_COLOR", "1")
            .output()
            .context("Failed to run verscat command")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Captured output of one verscat invocation.
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}
