//! Build file rewriting
//!
//! - [`rule`] - One regex find/replace pair per (library, classifier)
//! - [`rewriter`] - Applies the ordered rule chain to build file lines
//!
//! The rewriter works line-by-line on text. It has no understanding of the
//! build language beyond what each rule's pattern encodes; declarations it
//! cannot match are passed through untouched.

pub mod rewriter;
pub mod rule;

pub use rewriter::{rewrite_file, rewrite_text};
pub use rule::{RewriteRule, build_rules};
