//! Error types for `SnipView`
//!
//! This module defines the error types used by the snippet helper, the
//! bundled placeholder renderer and the manifest loader.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by `SnippetHelper` operations
///
/// `E` is the error type of the renderer the helper was built with. Renderer
/// failures are carried as-is: `Display` and `source()` are the renderer's own.
#[derive(Debug, Error)]
pub enum SnippetError<E> {
    /// The named snippet was never appended
    #[error("Cannot find a snippet with name '{0}'")]
    NotFound(String),

    /// The renderer failed while rendering a snippet
    #[error(transparent)]
    Render(E),
}

impl<E> SnippetError<E> {
    /// Returns true if this error reports an unknown snippet name.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns the renderer error, if this is one.
    #[must_use]
    pub const fn render_error(&self) -> Option<&E> {
        match self {
            Self::Render(e) => Some(e),
            Self::NotFound(_) => None,
        }
    }
}

/// Errors raised by `PlaceholderRenderer`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// No template registered under the given identifier
    #[error("Template not found: {0}")]
    NotFound(String),

    /// A placeholder had no value (strict mode only)
    #[error("Template {template} has no value for placeholder '{name}'")]
    MissingValue {
        /// The template being rendered
        template: String,
        /// The unresolved placeholder name
        name: String,
    },
}

/// Errors related to manifest file operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the manifest file
    #[error("Failed to parse manifest: {0}")]
    Parse(String),

    /// Invalid manifest entry
    #[error("Invalid manifest value for {field}: {reason}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// The reason for validation failure
        reason: String,
    },

    /// Configuration directory could not be determined
    #[error("Configuration directory not found: {0}")]
    NotFound(PathBuf),

    /// Failed to write the manifest file
    #[error("Failed to write manifest: {0}")]
    Write(String),

    /// Failed to serialize the manifest
    #[error("Failed to serialize manifest: {0}")]
    Serialize(String),

    /// Failed to deserialize the manifest
    #[error("Failed to deserialize manifest: {0}")]
    Deserialize(String),
}

/// Result type alias for snippet helper operations
pub type SnippetResult<T, E> = std::result::Result<T, SnippetError<E>>;

/// Result type alias for placeholder rendering
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

/// Result type alias for manifest operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
