//! Catalog row types
//!
//! Two kinds of row exist: shared version entries and library entries. Both
//! carry a preferred identifier and render their own value text, which is
//! all the [`CatalogTable`](super::CatalogTable) needs from them.

use std::collections::BTreeSet;

use super::table::TableEntry;
use crate::coordinate::Coordinate;

/// A `[versions]` row: one shared version for an entire group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    /// Group whose members share this version
    pub group: String,
    /// The single version string every member of the group declared
    pub version: String,
}

impl VersionEntry {
    /// Creates a shared version entry.
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }
}

impl TableEntry for VersionEntry {
    fn base_id(&self) -> &str {
        &self.group
    }

    fn render(&self) -> String {
        format!("\"{}\"", self.version)
    }
}

/// How a library entry expresses its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryVersion {
    /// The coordinate carries no version (BOM-managed)
    Unversioned,
    /// A literal version string, written as `version = "..."`
    Literal(String),
    /// A reference to a `[versions]` key, written as `version.ref = "..."`
    Ref(String),
}

/// A `[libraries]` row: module coordinates plus a version expression and the
/// classifiers observed for the module.
#[derive(Debug, Clone)]
pub struct LibraryEntry {
    /// Group portion of the module coordinates
    pub group: String,
    /// Artifact name, also the preferred catalog identifier
    pub name: String,
    /// Version expression for the rendered row
    pub version: LibraryVersion,
    /// Classifiers seen for these coordinates; `None` marks the plain form
    pub classifiers: BTreeSet<Option<String>>,
}

impl LibraryEntry {
    /// Encodes a deduplicated coordinate into a library row.
    ///
    /// `version_ref` is the assigned `[versions]` key for the coordinate's
    /// group, when the group qualified for a shared version. A versionless
    /// coordinate stays versionless even then: the catalog must never claim
    /// a version the build file did not declare.
    pub fn from_coordinate(coordinate: Coordinate, version_ref: Option<&str>) -> Self {
        let (group, name, version, classifiers) = coordinate.into_parts();

        let version = match (version, version_ref) {
            (None, _) => LibraryVersion::Unversioned,
            (Some(_), Some(key)) => LibraryVersion::Ref(key.to_string()),
            (Some(literal), None) => LibraryVersion::Literal(literal),
        };

        Self {
            group,
            name,
            version,
            classifiers,
        }
    }

    /// Whether the underlying declaration carried a version token at all.
    ///
    /// Both the literal and the reference form mean the original text had a
    /// `:version` segment; the rewrite pattern needs to match it.
    pub fn has_version(&self) -> bool {
        !matches!(self.version, LibraryVersion::Unversioned)
    }
}

impl TableEntry for LibraryEntry {
    fn base_id(&self) -> &str {
        &self.name
    }

    fn render(&self) -> String {
        let mut out = format!("{{ module = \"{}:{}\"", self.group, self.name);
        match &self.version {
            LibraryVersion::Unversioned => {}
            LibraryVersion::Literal(version) => {
                out.push_str(&format!(", version = \"{version}\""));
            }
            LibraryVersion::Ref(key) => {
                out.push_str(&format!(", version.ref = \"{key}\""));
            }
        }
        out.push_str(" }");
        out
    }
}
