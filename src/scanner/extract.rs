//! Declaration extraction from build file text
//!
//! Extraction is deliberately line-based text matching, the same model the
//! rewriter uses on the way out: a declaration that the extractor can see is
//! exactly a declaration the rewrite rules can later replace. Only the
//! top-line external-module form is recognized; `project(...)` dependencies
//! and declarations in unrecognized configurations never match.

use anyhow::Result;
use regex::Regex;

use crate::coordinate::RawDependency;

/// Matches dependency declarations of the recognized configuration buckets
/// and captures the quoted coordinate notation.
pub struct DeclarationExtractor {
    pattern: Regex,
}

impl DeclarationExtractor {
    /// Compiles the extraction pattern for the given configuration buckets.
    pub fn new(configurations: &[String]) -> Result<Self> {
        let buckets = configurations
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");

        // configuration name, then either a paren or whitespace, then an
        // optional platform wrapper, then the quoted coordinate notation
        let pattern = format!(
            r#"^\s*(?:{buckets})(?:\(|\s)\s*(?:(?:enforcedPlatform|platform)\s*\()?\s*["']([^"']+)["']"#
        );

        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Extracts a dependency observation from one line, if the line is a
    /// recognized declaration.
    pub fn extract_line(&self, line: &str) -> Option<RawDependency> {
        let captures = self.pattern.captures(line)?;
        parse_notation(captures.get(1)?.as_str())
    }

    /// Extracts every recognized declaration from a build file's text.
    pub fn extract(&self, text: &str) -> Vec<RawDependency> {
        text.lines()
            .filter_map(|line| self.extract_line(line))
            .collect()
    }
}

/// Splits `group:name[:version[:classifier]]` notation into a dependency
/// observation.
///
/// Returns `None` for notation that is not a usable external-module
/// coordinate: too few or too many segments, an empty group or name, or a
/// version token containing interpolation syntax (the declared version is a
/// property reference, not a version the catalog could state).
fn parse_notation(notation: &str) -> Option<RawDependency> {
    let parts: Vec<&str> = notation.split(':').collect();

    if parts.len() < 2 || parts.len() > 4 {
        return None;
    }
    if parts.iter().any(|part| part.is_empty()) {
        return None;
    }

    let version = parts.get(2).map(|v| (*v).to_string());
    if let Some(v) = &version {
        if v.contains('$') {
            tracing::debug!(notation, "skipping declaration with interpolated version");
            return None;
        }
    }

    Some(RawDependency::new(
        parts[0],
        parts[1],
        version,
        parts.get(3).map(|c| (*c).to_string()),
    ))
}
