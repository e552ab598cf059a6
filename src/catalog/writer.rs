//! Catalog document rendering
//!
//! Serializes the versions and libraries tables into the final
//! `libs.versions.toml` text. No escaping is applied beyond the literal
//! values supplied; coordinate strings are valid catalog text as-is.

use anyhow::Result;
use std::path::Path;

use super::entry::{LibraryEntry, VersionEntry};
use super::table::CatalogTable;
use crate::utils::fs::safe_write;

/// Renders the complete catalog document: `[versions]` section first, then
/// `[libraries]`, each with keys in lexicographic order.
pub fn render_catalog(
    versions: &CatalogTable<VersionEntry>,
    libraries: &CatalogTable<LibraryEntry>,
) -> String {
    let mut document = versions.render();
    document.push_str(&libraries.render());
    document
}

/// Renders the catalog and writes it atomically to `path`.
pub fn write_catalog(
    path: &Path,
    versions: &CatalogTable<VersionEntry>,
    libraries: &CatalogTable<LibraryEntry>,
) -> Result<()> {
    safe_write(path, &render_catalog(versions, libraries))
}
