//! Conversion pipeline orchestration
//!
//! Runs the whole conversion as one batch: concurrent module scans up to a
//! join barrier, then a strictly sequential chain of deterministic
//! transformations. Shared versions are resolved and given identifiers
//! before any library is encoded, because library rows may reference
//! version keys.
//!
//! Nothing is applied to the project in place. All outputs are staged under
//! `build/<subdir>/` directories, and the generated `convert.sh` performs
//! the copies when the user runs it.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogTable, LibraryEntry, resolve_shared_versions, writer};
use crate::config::ProjectConfig;
use crate::coordinate;
use crate::core::VerscatError;
use crate::rewrite::{build_rules, rewrite_file};
use crate::scanner::{discover_modules, scan_modules};
use crate::script::ConversionScript;

/// Name of the generated catalog file.
pub const CATALOG_FILE_NAME: &str = "libs.versions.toml";

/// Name of the generated copy script.
pub const SCRIPT_FILE_NAME: &str = "convert.sh";

/// What a conversion run produced, for reporting.
#[derive(Debug)]
pub struct ConversionSummary {
    /// Staged catalog location
    pub catalog_path: PathBuf,
    /// Generated copy script location
    pub script_path: PathBuf,
    /// Number of modules whose build files were rewritten
    pub modules: usize,
    /// Number of library entries in the catalog
    pub libraries: usize,
    /// Number of shared version entries in the catalog
    pub shared_versions: usize,
}

/// Drives a full conversion of one project.
pub struct Converter {
    root: PathBuf,
    config: ProjectConfig,
}

impl Converter {
    /// Creates a converter for the project at `root`.
    pub fn new(root: impl Into<PathBuf>, config: ProjectConfig) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(VerscatError::ProjectNotFound {
                path: root.display().to_string(),
            }
            .into());
        }
        Ok(Self { root, config })
    }

    /// Runs the pipeline and stages every output.
    pub async fn run(&self) -> Result<ConversionSummary> {
        let modules = discover_modules(&self.root)?;
        if modules.is_empty() {
            return Err(VerscatError::NoModulesFound {
                path: self.root.display().to_string(),
            }
            .into());
        }

        let observed = scan_modules(&modules, &self.config.configurations).await?;
        tracing::info!(
            modules = modules.len(),
            observations = observed.len(),
            "collected dependency declarations"
        );

        let coordinates = coordinate::collect(observed);

        let mut versions = CatalogTable::new("versions");
        versions.insert_all(resolve_shared_versions(&coordinates));

        let group_to_key: HashMap<String, String> = versions
            .iter()
            .map(|(key, entry)| (entry.group.clone(), key.clone()))
            .collect();

        let mut libraries = CatalogTable::new("libraries");
        libraries.insert_all(
            coordinates
                .into_iter()
                .map(|coordinate| {
                    let version_ref = group_to_key.get(coordinate.group()).map(String::as_str);
                    LibraryEntry::from_coordinate(coordinate, version_ref)
                })
                .collect(),
        );

        let rules = build_rules(&libraries)?;

        let staging_dir = self.staging_dir(&self.root);
        let catalog_path = staging_dir.join(CATALOG_FILE_NAME);
        writer::write_catalog(&catalog_path, &versions, &libraries)
            .with_context(|| format!("Failed to write catalog: {}", catalog_path.display()))?;

        let mut script = ConversionScript::new();
        script.add(&catalog_path, self.root.join(&self.config.catalog_target));

        for module in &modules {
            let staged = self
                .staging_dir(&module.dir)
                .join(format!("{}.new", module.build_file_name()));
            rewrite_file(&module.build_file, &staged, &rules)?;
            script.add(&staged, &module.build_file);
        }

        let script_path = staging_dir.join(SCRIPT_FILE_NAME);
        script.write(&script_path)?;

        tracing::info!(
            catalog = %catalog_path.display(),
            script = %script_path.display(),
            "conversion staged"
        );

        Ok(ConversionSummary {
            catalog_path,
            script_path,
            modules: modules.len(),
            libraries: libraries.len(),
            shared_versions: versions.len(),
        })
    }

    fn staging_dir(&self, dir: &Path) -> PathBuf {
        dir.join("build").join(&self.config.build_subdir)
    }
}
