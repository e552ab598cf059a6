//! Shared-version resolution
//!
//! There is limited benefit to the `[versions]` section, and a version must
//! never be shared solely out of habit. A group/version pair is promoted to
//! a shared entry only when ALL of the following hold:
//!
//! 1. Shared versions apply to an entire group, never across groups or to a
//!    subgroup.
//! 2. Every shared version was explicitly declared - nothing is referenced
//!    that no build file stated.
//! 3. More than one coordinate in the group declares a version, or there is
//!    no point in "sharing".
//! 4. Exactly one distinct version string exists in the group; any
//!    disagreement disqualifies the whole group rather than guessing a
//!    winner.
//! 5. Classifiers play no role - they were already merged away during
//!    coordinate collection.
//!
//! This is best-effort on purpose: a good-enough catalog beats a clever one
//! that silently picks a version some module never asked for.

use std::collections::{HashMap, HashSet};

use super::entry::VersionEntry;
use crate::coordinate::Coordinate;

/// Inspects all unique coordinates and returns the groups qualifying for a
/// shared version entry, each carrying the single agreed version string.
pub fn resolve_shared_versions(coordinates: &HashSet<Coordinate>) -> Vec<VersionEntry> {
    let mut versions_by_group: HashMap<&str, Vec<&str>> = HashMap::new();

    for coordinate in coordinates {
        if let Some(version) = coordinate.version() {
            versions_by_group
                .entry(coordinate.group())
                .or_default()
                .push(version);
        }
    }

    versions_by_group
        .into_iter()
        .filter(|(_, versions)| versions.len() > 1)
        .filter(|(_, versions)| versions.iter().all(|version| *version == versions[0]))
        .map(|(group, versions)| VersionEntry::new(group, versions[0]))
        .collect()
}
