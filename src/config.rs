//! Project configuration (verscat.toml)
//!
//! A project may carry an optional `verscat.toml` at its root to override
//! the recognized configuration buckets, the staging subdirectory, or the
//! catalog copy target. A missing file means defaults everywhere; a present
//! but unparsable file is an error, never silently ignored.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::VerscatError;

/// File name of the optional project configuration.
pub const CONFIG_FILE_NAME: &str = "verscat.toml";

/// Settings controlling a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Dependency buckets whose declarations are extracted and rewritten.
    ///
    /// Dependencies declared in any other configuration are not discovered.
    pub configurations: Vec<String>,

    /// Subdirectory of `build/` receiving staged outputs.
    pub build_subdir: String,

    /// Where the conversion script copies the catalog, relative to the
    /// project root.
    pub catalog_target: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            configurations: [
                "api",
                "implementation",
                "runtimeOnly",
                "testImplementation",
                "testRuntimeOnly",
            ]
            .map(String::from)
            .to_vec(),
            build_subdir: "verscat".to_string(),
            catalog_target: "gradle/libs.versions.toml".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Loads the configuration for a project root, falling back to defaults
    /// when no `verscat.toml` exists.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read configuration file: {}", path.display()))?;

        let config: Self = toml::from_str(&content).map_err(|e| VerscatError::ConfigParseError {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(file = %path.display(), "loaded project configuration");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig::load(temp.path()).unwrap();
        assert_eq!(config.configurations.len(), 5);
        assert_eq!(config.build_subdir, "verscat");
        assert_eq!(config.catalog_target, "gradle/libs.versions.toml");
    }

    #[test]
    fn test_partial_override() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "configurations = [\"implementation\"]\nbuild-subdir = \"catalog-staging\"\n",
        )
        .unwrap();

        let config = ProjectConfig::load(temp.path()).unwrap();
        assert_eq!(config.configurations, vec!["implementation".to_string()]);
        assert_eq!(config.build_subdir, "catalog-staging");
        // untouched field keeps its default
        assert_eq!(config.catalog_target, "gradle/libs.versions.toml");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "unknown-key = 1\n").unwrap();
        assert!(ProjectConfig::load(temp.path()).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "configurations = [").unwrap();

        let err = ProjectConfig::load(temp.path()).unwrap_err();
        assert!(err.to_string().contains("verscat.toml"));
    }
}
