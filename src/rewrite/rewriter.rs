//! Per-line application of the rewrite rule chain
//!
//! Each line of a build file is fed through every rule in order, each
//! rule's output becoming the next rule's input. Rules target distinct
//! coordinates so they are independent in the common case, but the chain is
//! defined as strictly sequential to keep the result deterministic when a
//! line could match more than one rule. There is no backtracking and no
//! multi-line matching.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::rule::RewriteRule;
use crate::utils::fs::safe_write;

/// Applies the rule chain to one line.
pub fn rewrite_line(line: &str, rules: &[RewriteRule]) -> String {
    let mut current = line.to_string();
    for rule in rules {
        current = rule.apply(&current);
    }
    current
}

/// Applies the rule chain to every line of `text`, preserving the line
/// structure and ending with a trailing newline.
pub fn rewrite_text(text: &str, rules: &[RewriteRule]) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        out.push_str(&rewrite_line(line, rules));
        out.push('\n');
    }
    out
}

/// Reads `source`, rewrites it, and writes the result atomically to
/// `target`. The source file is never modified.
pub fn rewrite_file(source: &Path, target: &Path, rules: &[RewriteRule]) -> Result<()> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("Failed to read build file: {}", source.display()))?;

    let rewritten = rewrite_text(&text, rules);

    safe_write(target, &rewritten)
        .with_context(|| format!("Failed to write rewritten build file: {}", target.display()))?;

    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        "rewrote build file"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::LibraryEntry;
    use crate::coordinate::{RawDependency, collect};
    use tempfile::TempDir;

    fn rule(group: &str, name: &str, version: &str, key: &str) -> RewriteRule {
        let coordinate = collect(vec![RawDependency::new(
            group,
            name,
            Some(version.to_string()),
            None,
        )])
        .into_iter()
        .next()
        .unwrap();
        let library = LibraryEntry::from_coordinate(coordinate, None);
        RewriteRule::new(key, &library, None).unwrap()
    }

    #[test]
    fn test_chain_applies_every_rule() {
        let rules = vec![
            rule("g1", "a", "1.0", "a"),
            rule("g2", "b", "2.0", "b"),
        ];

        let line = r#"    implementation("g1:a:1.0"); implementation("g2:b:2.0")"#;
        assert_eq!(
            rewrite_line(line, &rules),
            "    implementation(libs.a); implementation(libs.b)"
        );
    }

    #[test]
    fn test_unmatched_lines_pass_through() {
        let rules = vec![rule("g", "n", "1.0", "n")];
        let text = "plugins {\n  id('java')\n}\n";
        assert_eq!(rewrite_text(text, &rules), text);
    }

    #[test]
    fn test_rewrite_file_leaves_source_untouched() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("build.gradle");
        let target = temp.path().join("build.gradle.new");

        let original = "dependencies {\n  implementation(\"g:n:1.0\")\n}\n";
        fs::write(&source, original).unwrap();

        let rules = vec![rule("g", "n", "1.0", "n")];
        rewrite_file(&source, &target, &rules).unwrap();

        assert_eq!(fs::read_to_string(&source).unwrap(), original);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "dependencies {\n  implementation(libs.n)\n}\n"
        );
    }
}
