//! Rewrite rule construction
//!
//! A [`RewriteRule`] holds the messy pattern used to find one inline
//! declaration form of a library and the catalog accessor expression that
//! replaces it. One rule exists per (library, classifier) pair; a library
//! declared both plain and with a `test` classifier gets two rules with
//! different patterns and different replacements.

use anyhow::Result;
use regex::{NoExpand, Regex};

use crate::catalog::entry::LibraryEntry;
use crate::catalog::table::CatalogTable;

/// A compiled find/replace pair for one declaration form.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    /// Builds the rule for one library under its assigned catalog key,
    /// matching the form with the given classifier (`None` for the
    /// undecorated form).
    ///
    /// The pattern recognizes the original inline declaration: an optional
    /// leading space and opening parenthesis, either quote style, the
    /// literal `group:name`, a version token when the library has one, the
    /// classifier when this rule has one, the closing quote and optional
    /// closing parenthesis - captured as a whole and replaced as a whole.
    ///
    /// The version token alternation matters: a fixed version is "anything
    /// up to a terminator", but that class would swallow `${...}`
    /// interpolation syntax incorrectly (`$` is a terminator), so the
    /// interpolation form is matched as its own alternative.
    pub fn new(catalog_key: &str, library: &LibraryEntry, classifier: Option<&str>) -> Result<Self> {
        let version_matcher = if library.has_version() {
            // fixed version, or the ${...} interpolation form
            r#":(?:[^"'$:]+|\$\{.*\})"#
        } else {
            ""
        };

        let classifier_matcher = match classifier {
            Some(value) => format!(":{}", regex::escape(value)),
            None => String::new(),
        };

        let pattern = format!(
            r#"( ?\(?["']{group}:{name}{version}{classifier}["']\)?)"#,
            group = regex::escape(&library.group),
            name = regex::escape(&library.name),
            version = version_matcher,
            classifier = classifier_matcher,
        );

        let accessor = format!("(libs.{})", catalog_key.replace('-', "."));
        let replacement = match classifier {
            None => accessor,
            Some(value) => format!("{accessor} {{ artifact {{ classifier = '{value}' }} }}"),
        };

        Ok(Self {
            pattern: Regex::new(&pattern)?,
            replacement,
        })
    }

    /// Replaces the first occurrence of the declaration form in `line`.
    ///
    /// Only the first match is touched; a second occurrence of the same
    /// coordinates on one line is left alone by this rule, though a later
    /// rule may still match it. The replacement is inserted verbatim, never
    /// expanded.
    pub fn apply(&self, line: &str) -> String {
        self.pattern
            .replace(line, NoExpand(&self.replacement))
            .into_owned()
    }
}

/// Builds the full ordered rule list for a libraries table: rules are
/// emitted in lexicographic catalog-key order, and within one library in
/// classifier order with the undecorated form first, so a conversion run is
/// deterministic.
pub fn build_rules(libraries: &CatalogTable<LibraryEntry>) -> Result<Vec<RewriteRule>> {
    let mut rules = Vec::new();

    for (key, library) in libraries.iter() {
        for classifier in library.classifiers.iter() {
            rules.push(RewriteRule::new(key, library, classifier.as_deref())?);
        }
    }

    Ok(rules)
}
