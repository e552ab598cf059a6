//! Conversion script generation
//!
//! Every staged output file has a target location it should eventually be
//! copied to. The conversion script collects those (output, target) pairs
//! and emits an executable POSIX shell script performing the copies, so
//! applying the conversion stays a single explicit action the user takes
//! after reviewing the staged files.

use anyhow::Result;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::utils::fs::{make_executable, safe_write};

/// One staged output and the location it should be copied to.
#[derive(Debug, Clone)]
pub struct FilePreparation {
    /// Staged file written by the conversion run
    pub output: PathBuf,
    /// Final on-disk location the script copies the output to
    pub target: PathBuf,
}

/// Accumulates file preparations and renders the copy script.
#[derive(Debug, Default)]
pub struct ConversionScript {
    preparations: Vec<FilePreparation>,
}

impl ConversionScript {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a staged output and its copy target.
    pub fn add(&mut self, output: impl Into<PathBuf>, target: impl Into<PathBuf>) {
        self.preparations.push(FilePreparation {
            output: output.into(),
            target: target.into(),
        });
    }

    /// Renders the script text: a shebang, `set -ex`, and one copy line per
    /// registered preparation in registration order.
    pub fn render(&self) -> String {
        let mut script = String::from("#!/bin/sh\nset -ex\n\n");
        for preparation in &self.preparations {
            let _ = writeln!(
                script,
                "cp {} {}",
                preparation.output.display(),
                preparation.target.display()
            );
        }
        script
    }

    /// Writes the script to `path` and marks it executable.
    pub fn write(&self, path: &Path) -> Result<()> {
        safe_write(path, &self.render())?;
        make_executable(path)?;

        tracing::debug!(
            script = %path.display(),
            files = self.preparations.len(),
            "wrote conversion script"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_copies_in_registration_order() {
        let mut script = ConversionScript::new();
        script.add("build/verscat/libs.versions.toml", "gradle/libs.versions.toml");
        script.add("core/build/verscat/build.gradle.new", "core/build.gradle");

        let rendered = script.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "#!/bin/sh");
        assert_eq!(lines[1], "set -ex");
        assert_eq!(lines[2], "");
        assert_eq!(
            lines[3],
            "cp build/verscat/libs.versions.toml gradle/libs.versions.toml"
        );
        assert_eq!(
            lines[4],
            "cp core/build/verscat/build.gradle.new core/build.gradle"
        );
    }

    #[test]
    fn test_write_produces_executable_script() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out/convert.sh");

        let mut script = ConversionScript::new();
        script.add("a", "b");
        script.write(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("#!/bin/sh\n"));
        assert!(content.contains("cp a b\n"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111);
        }
    }
}
