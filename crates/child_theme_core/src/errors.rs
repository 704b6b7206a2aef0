//! Error types for child theme generation.
//!
//! Field-level problems with the caller's input are reported as
//! [`ValidationError`]; everything that can go wrong while building the
//! scaffold on disk is a [`ScaffoldError`].

use std::io;
use std::path::{Path, PathBuf};

use template_engine::TemplateError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Result type used throughout the crate.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Validation failure for a single input field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' is too short: {actual} characters (min: {min})")]
    TooShort {
        field: String,
        actual: usize,
        min: usize,
    },

    #[error("Field '{field}' is too large: {actual} bytes (max: {max})")]
    TooLarge {
        field: String,
        actual: usize,
        max: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    pub fn too_short(field: impl Into<String>, actual: usize, min: usize) -> Self {
        Self::TooShort {
            field: field.into(),
            actual,
            min,
        }
    }

    pub fn too_large(field: impl Into<String>, actual: usize, max: usize) -> Self {
        Self::TooLarge {
            field: field.into(),
            actual,
            max,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field }
            | Self::TooShort { field, .. }
            | Self::TooLarge { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }
}

/// Errors returned by [`crate::ScaffoldBuilder::build`] and the parent theme
/// helpers.
///
/// Every variant is terminal for the invocation. The caller can retry once
/// the underlying cause (for example a directory collision) is resolved.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The target child theme directory is already present.
    #[error("Child theme directory already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    /// A filesystem operation failed.
    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The request failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No usable parent theme exists at the given location.
    #[error("Parent theme not found at {}: {reason}", path.display())]
    ParentNotFound { path: PathBuf, reason: String },

    /// One of the generated files could not be rendered.
    #[error("Failed to render {file}: {source}")]
    Template {
        file: &'static str,
        #[source]
        source: TemplateError,
    },

    /// The host could not switch to the new child theme.
    #[error("Failed to activate child theme '{slug}': {reason}")]
    Activation { slug: String, reason: String },
}

impl ScaffoldError {
    pub fn io(operation: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parent_not_found(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::ParentNotFound {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }
}
