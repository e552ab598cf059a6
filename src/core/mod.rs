//! Core types for verscat
//!
//! This module provides the error foundation used throughout the crate:
//! - [`VerscatError`] - Strongly-typed errors for every failure mode
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions
//! - [`user_friendly_error`] - Convert any error into a displayable context

pub mod error;

pub use error::{ErrorContext, VerscatError, user_friendly_error};
