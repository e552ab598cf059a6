//! GVAC coordinate model and deduplication
//!
//! A dependency declaration names Group, Version, Artifact (name), and
//! optionally a Classifier - GVAC coordinates. The catalog format has no
//! notion of classifiers, so [`Coordinate`] keys on group/name/version only
//! and accumulates every classifier seen for that key. Two declarations
//! that differ only in classifier collapse into one coordinate.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// A single dependency declaration as observed at one declaration site.
///
/// Equality and hashing cover all four fields, so the same coordinates
/// declared with different classifiers count as distinct observations.
/// Group and name are always present; a declaration without them is not a
/// dependency declaration and never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RawDependency {
    /// Group portion of the coordinates, e.g. `org.junit.jupiter`
    pub group: String,
    /// Artifact name, e.g. `junit-jupiter-api`
    pub name: String,
    /// Declared version, absent for BOM-managed dependencies
    pub version: Option<String>,
    /// Artifact classifier, e.g. `test`
    pub classifier: Option<String>,
}

impl RawDependency {
    /// Creates a dependency observation from already-split coordinate fields.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: Option<String>,
        classifier: Option<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version,
            classifier,
        }
    }
}

/// Unique group/name/version coordinates with their accumulated classifiers.
///
/// Equality and hashing cover the three key fields only; the classifier set
/// is an attribute, never part of the identity. `None` in the classifier set
/// marks declarations that carried no classifier at all - a library used
/// both plain and with a `test` classifier ends up with `{None, Some("test")}`
/// and later produces one rewrite rule per entry.
#[derive(Debug, Clone)]
pub struct Coordinate {
    group: String,
    name: String,
    version: Option<String>,
    classifiers: BTreeSet<Option<String>>,
}

impl Coordinate {
    /// Group portion of the key.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Artifact name portion of the key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version portion of the key, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Every classifier observed for these coordinates, `None` marking the
    /// undecorated form. Iteration order is stable (`None` first).
    pub fn classifiers(&self) -> &BTreeSet<Option<String>> {
        &self.classifiers
    }

    /// Consumes the coordinate, returning its parts.
    pub fn into_parts(self) -> (String, String, Option<String>, BTreeSet<Option<String>>) {
        (self.group, self.name, self.version, self.classifiers)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.name == other.name && self.version == other.version
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.hash(state);
        self.name.hash(state);
        self.version.hash(state);
    }
}

/// Deduplicates raw dependency observations into unique coordinates.
///
/// Pure function of the input multiset: for every observation the
/// group/name/version key is computed, and the observation's classifier
/// (possibly `None`) is added to that key's classifier set. The output
/// carries no ordering guarantee.
pub fn collect<I>(dependencies: I) -> HashSet<Coordinate>
where
    I: IntoIterator<Item = RawDependency>,
{
    let mut groups: HashMap<(String, String, Option<String>), BTreeSet<Option<String>>> =
        HashMap::new();

    for dep in dependencies {
        groups
            .entry((dep.group, dep.name, dep.version))
            .or_default()
            .insert(dep.classifier);
    }

    groups
        .into_iter()
        .map(|((group, name, version), classifiers)| Coordinate {
            group,
            name,
            version,
            classifiers,
        })
        .collect()
}
