//! Module discovery and concurrent dependency extraction
//!
//! Discovery walks the project tree for `build.gradle` / `build.gradle.kts`
//! files, skipping hidden directories and `build/` output directories. Each
//! discovered module is then scanned by its own task; observations land in a
//! shared concurrent set, and a join barrier guarantees every scan has
//! completed before anything downstream reads the set. Everything after the
//! barrier is a small, fast, sequential batch computation - the per-module
//! scan is the only parallelism worth having here.

pub mod extract;

use anyhow::{Context, Result};
use dashmap::DashSet;
use futures::future::try_join_all;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

use crate::coordinate::RawDependency;
use extract::DeclarationExtractor;

/// File names recognized as a module's build script.
const BUILD_FILE_NAMES: &[&str] = &["build.gradle", "build.gradle.kts"];

/// One discovered Gradle module: its directory and its build file.
#[derive(Debug, Clone)]
pub struct GradleModule {
    /// Directory containing the build file
    pub dir: PathBuf,
    /// Full path of the build file
    pub build_file: PathBuf,
}

impl GradleModule {
    /// File name of the module's build file (`build.gradle` or
    /// `build.gradle.kts`).
    pub fn build_file_name(&self) -> &str {
        self.build_file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("build.gradle")
    }
}

/// Discovers every Gradle module under `root`, in stable path order.
///
/// Hidden directories and directories named `build` (Gradle output) are not
/// descended into.
pub fn discover_modules(root: &Path) -> Result<Vec<GradleModule>> {
    let mut modules = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            return false;
        }
        !(entry.file_type().is_dir() && name == "build")
    });

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if BUILD_FILE_NAMES.contains(&name.as_ref()) {
            let build_file = entry.path().to_path_buf();
            let dir = build_file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            modules.push(GradleModule { dir, build_file });
        }
    }

    modules.sort_by(|a, b| a.build_file.cmp(&b.build_file));

    tracing::debug!(root = %root.display(), modules = modules.len(), "discovered modules");

    Ok(modules)
}

/// Scans every module concurrently and returns the deduplicated set of
/// dependency observations.
///
/// Each module scan is an independent unit of work inserting into a shared
/// [`DashSet`]; only membership matters, never insertion order. The awaited
/// join is the barrier separating collection from every later pipeline
/// stage.
pub async fn scan_modules(
    modules: &[GradleModule],
    configurations: &[String],
) -> Result<HashSet<RawDependency>> {
    let extractor = Arc::new(DeclarationExtractor::new(configurations)?);
    let observed: Arc<DashSet<RawDependency>> = Arc::new(DashSet::new());

    let tasks: Vec<_> = modules
        .iter()
        .cloned()
        .map(|module| {
            let extractor = Arc::clone(&extractor);
            let observed = Arc::clone(&observed);
            tokio::spawn(async move { scan_module(&module, &extractor, &observed).await })
        })
        .collect();

    for task_result in try_join_all(tasks).await.context("module scan task failed")? {
        task_result?;
    }

    Ok(observed.iter().map(|dep| dep.key().clone()).collect())
}

async fn scan_module(
    module: &GradleModule,
    extractor: &DeclarationExtractor,
    observed: &DashSet<RawDependency>,
) -> Result<()> {
    let text = tokio::fs::read_to_string(&module.build_file)
        .await
        .with_context(|| format!("Failed to read build file: {}", module.build_file.display()))?;

    let mut count = 0usize;
    for dependency in extractor.extract(&text) {
        observed.insert(dependency);
        count += 1;
    }

    tracing::debug!(
        module = %module.dir.display(),
        declarations = count,
        "scanned module"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn default_configurations() -> Vec<String> {
        ["api", "implementation", "runtimeOnly", "testImplementation", "testRuntimeOnly"]
            .map(String::from)
            .to_vec()
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_discover_finds_nested_modules() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "build.gradle", "");
        write(temp.path(), "core/build.gradle", "");
        write(temp.path(), "app/build.gradle.kts", "");

        let modules = discover_modules(temp.path()).unwrap();
        assert_eq!(modules.len(), 3);
        // path order: app/ sorts before the root build file and core/
        assert_eq!(modules[0].build_file_name(), "build.gradle.kts");
    }

    #[test]
    fn test_discover_skips_build_and_hidden_dirs() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "build.gradle", "");
        write(temp.path(), "build/generated/build.gradle", "");
        write(temp.path(), ".gradle/cache/build.gradle", "");

        let modules = discover_modules(temp.path()).unwrap();
        assert_eq!(modules.len(), 1);
    }

    #[tokio::test]
    async fn test_scan_deduplicates_across_modules() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "a/build.gradle",
            "dependencies {\n  implementation(\"g:n:1.0\")\n}\n",
        );
        write(
            temp.path(),
            "b/build.gradle",
            "dependencies {\n  implementation(\"g:n:1.0\")\n  api(\"g2:m:2.0\")\n}\n",
        );

        let modules = discover_modules(temp.path()).unwrap();
        let observed = scan_modules(&modules, &default_configurations()).await.unwrap();

        assert_eq!(observed.len(), 2);
    }

    #[tokio::test]
    async fn test_scan_missing_build_file_is_fatal() {
        let module = GradleModule {
            dir: PathBuf::from("/nonexistent"),
            build_file: PathBuf::from("/nonexistent/build.gradle"),
        };

        let result = scan_modules(&[module], &default_configurations()).await;
        assert!(result.is_err());
    }
}
