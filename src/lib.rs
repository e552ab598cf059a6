//! verscat - Gradle version catalog converter
//!
//! A command-line tool that converts a multi-module Gradle build's scattered
//! inline dependency declarations into a single deduplicated version catalog
//! (`gradle/libs.versions.toml`), and rewrites each module's build file to
//! reference the catalog instead.
//!
//! # How It Works
//!
//! verscat never touches the original build files. A conversion run produces
//! three kinds of staged outputs:
//! - `build/verscat/libs.versions.toml` - the generated catalog
//! - `<module>/build/verscat/build.gradle[.kts].new` - each module's build
//!   file with inline declarations replaced by catalog accessors
//! - `build/verscat/convert.sh` - an executable script that copies every
//!   staged file over its target once you are happy with the result
//!
//! # Core Modules
//!
//! ## Conversion Pipeline
//! - [`scanner`] - Module discovery and concurrent dependency extraction
//! - [`coordinate`] - GVAC coordinate model and deduplication
//! - [`catalog`] - Identifier assignment, shared-version resolution, and
//!   catalog rendering
//! - [`rewrite`] - Regex rewrite rules and per-line build file rewriting
//! - [`converter`] - Orchestration of the whole pipeline
//! - [`script`] - Generation of the executable copy script
//!
//! ## Supporting Modules
//! - [`cli`] - Command-line interface (`convert`, `scan`)
//! - [`config`] - Optional `verscat.toml` project configuration
//! - [`core`] - Error types and user-facing error reporting
//! - [`utils`] - Atomic file writes and directory helpers
//!
//! # Configuration (verscat.toml)
//!
//! All settings are optional; a missing file means defaults everywhere:
//!
//! ```toml
//! # Dependency buckets to extract declarations from
//! configurations = [
//!     "api",
//!     "implementation",
//!     "runtimeOnly",
//!     "testImplementation",
//!     "testRuntimeOnly",
//! ]
//!
//! # Subdirectory of build/ that receives staged outputs
//! build-subdir = "verscat"
//!
//! # Where convert.sh copies the catalog, relative to the project root
//! catalog-target = "gradle/libs.versions.toml"
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Convert the Gradle project in the current directory
//! verscat convert
//!
//! # Convert a project somewhere else
//! verscat convert path/to/project
//!
//! # Inspect the deduplicated coordinates without writing anything
//! verscat scan --format json
//!
//! # Apply the staged outputs
//! ./build/verscat/convert.sh
//! ```
//!
//! # What Gets Converted
//!
//! Declarations of external modules in the recognized configuration buckets,
//! in either quoting style, with or without a `platform(...)` wrapper:
//!
//! ```text
//! implementation("com.fasterxml.jackson.core:jackson-databind:2.15.2")
//! testImplementation 'org.mockito:mockito-core:5.3.1'
//! implementation platform("org.junit:junit-bom:5.9.1")
//! testRuntimeOnly("group1:name1:4.1.5:test")
//! ```
//!
//! Declarations in other configurations, project dependencies, and
//! declarations whose version is a `${...}` interpolation are left alone.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod converter;
pub mod coordinate;
pub mod core;
pub mod rewrite;
pub mod scanner;
pub mod script;
pub mod utils;

pub use coordinate::{Coordinate, RawDependency};
