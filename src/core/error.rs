//! Error handling for verscat
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`VerscatError`]) for precise handling in code
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions
//!    for CLI users
//!
//! Every conversion run is a local, idempotent batch computation, so there is
//! no retry machinery anywhere: any failure aborts the run, and re-running
//! `verscat convert` from the same inputs is the recovery strategy.
//!
//! Use [`user_friendly_error`] at the CLI boundary to turn an [`anyhow::Error`]
//! chain into a colored, suggestion-bearing message.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for verscat operations.
///
/// Each variant carries enough context (usually a path) for the CLI to print
/// an actionable message. I/O failures are always fatal: a partial catalog or
/// a half-rewritten build file must never be observable, so the pipeline
/// aborts on the first failure.
#[derive(Error, Debug)]
pub enum VerscatError {
    /// The project root passed on the command line doesn't exist or is not a
    /// directory.
    #[error("Project directory not found: {path}")]
    ProjectNotFound {
        /// Path that was searched
        path: String,
    },

    /// No `build.gradle` or `build.gradle.kts` files were found under the
    /// project root.
    #[error("No Gradle build files found under: {path}")]
    NoModulesFound {
        /// Root directory that was scanned
        path: String,
    },

    /// The optional `verscat.toml` configuration file exists but could not be
    /// parsed.
    #[error("Failed to parse configuration file {file}: {reason}")]
    ConfigParseError {
        /// Path of the configuration file
        file: String,
        /// Parser error message
        reason: String,
    },

    /// A directory could not be created or a file could not be written.
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// Operation that failed (e.g. "directory creation")
        operation: String,
        /// Path involved in the failed operation
        path: String,
    },

    /// The generated conversion script could not be marked executable.
    #[error("Unable to make script file executable: {path}")]
    ScriptPermissionError {
        /// Path of the generated script
        path: String,
    },

    /// I/O error from standard library operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Any other error, carrying its rendered message.
    #[error("{message}")]
    Other {
        /// Rendered message of the original error
        message: String,
    },
}

impl Clone for VerscatError {
    fn clone(&self) -> Self {
        match self {
            Self::ProjectNotFound { path } => Self::ProjectNotFound { path: path.clone() },
            Self::NoModulesFound { path } => Self::NoModulesFound { path: path.clone() },
            Self::ConfigParseError { file, reason } => Self::ConfigParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::FileSystemError { operation, path } => Self::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            },
            Self::ScriptPermissionError { path } => Self::ScriptPermissionError {
                path: path.clone(),
            },
            // io::Error is not Clone; keep the message
            Self::IoError(e) => Self::Other {
                message: e.to_string(),
            },
            Self::Other { message } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// User-friendly error wrapper combining an error with optional suggestion
/// and details, rendered in color at the CLI boundary.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying verscat error
    pub error: VerscatError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: VerscatError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, displayed in green.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add explanatory details, displayed in yellow.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`] with suggestions
/// tailored to the failure.
///
/// Typed [`VerscatError`]s get specific guidance; everything else falls back
/// to a generic message that preserves the full anyhow context chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(verscat_error) = error.downcast_ref::<VerscatError>() {
        return create_error_context(verscat_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let suggestion = match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                "Check file ownership or run with elevated permissions"
            }
            std::io::ErrorKind::NotFound => {
                "Check that the file or directory exists and the path is correct"
            }
            _ => "Re-run with --verbose for more detail; a rerun is always safe",
        };
        return ErrorContext::new(VerscatError::FileSystemError {
            operation: "file access".to_string(),
            path: io_error.to_string(),
        })
        .with_details(format!("{error:#}"))
        .with_suggestion(suggestion);
    }

    // Unknown error: keep the full context chain in the details
    ErrorContext::new(VerscatError::Other {
        message: error.to_string(),
    })
    .with_details(format!("{error:#}"))
    .with_suggestion("Re-run with --verbose for more detail; a rerun is always safe")
}

fn create_error_context(error: VerscatError) -> ErrorContext {
    match &error {
        VerscatError::ProjectNotFound { .. } => ErrorContext::new(error)
            .with_suggestion(
                "Pass the root directory of a Gradle project, e.g. 'verscat convert path/to/project'",
            ),

        VerscatError::NoModulesFound { .. } => ErrorContext::new(error)
            .with_suggestion(
                "Run from a Gradle project root containing build.gradle or build.gradle.kts files",
            )
            .with_details("Directories named 'build' and hidden directories are not scanned"),

        VerscatError::ConfigParseError { .. } => ErrorContext::new(error).with_suggestion(
            "Check the TOML syntax in verscat.toml, or delete the file to use defaults",
        ),

        VerscatError::FileSystemError { .. } => ErrorContext::new(error)
            .with_suggestion("Check permissions on the build/ directory; no outputs were applied"),

        VerscatError::ScriptPermissionError { .. } => ErrorContext::new(error)
            .with_suggestion("Mark the script executable manually with 'chmod +x'"),

        VerscatError::IoError(_) | VerscatError::Other { .. } => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_modules_error_message() {
        let err = VerscatError::NoModulesFound {
            path: "/tmp/empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No Gradle build files found under: /tmp/empty"
        );
    }

    #[test]
    fn test_user_friendly_error_downcast() {
        let err = anyhow::Error::from(VerscatError::ProjectNotFound {
            path: "missing".to_string(),
        });
        let ctx = user_friendly_error(err);
        assert!(ctx.suggestion.is_some());
        assert!(ctx.error.to_string().contains("missing"));
    }

    #[test]
    fn test_context_display_format() {
        let ctx = ErrorContext::new(VerscatError::ScriptPermissionError {
            path: "convert.sh".to_string(),
        })
        .with_suggestion("chmod +x");
        let rendered = format!("{ctx}");
        assert!(rendered.contains("convert.sh"));
        assert!(rendered.contains("Suggestion: chmod +x"));
    }

    #[test]
    fn test_io_error_clone_keeps_message() {
        let err = VerscatError::IoError(std::io::Error::other("disk full"));
        let cloned = err.clone();
        assert!(cloned.to_string().contains("disk full"));
    }
}
