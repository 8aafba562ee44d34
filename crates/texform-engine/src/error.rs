//! Error types for the generation engine.

use std::{io, path::PathBuf};

use texform_registry::RegistryError;
use texform_template::TemplateError;
use thiserror::Error;

/// Errors that can occur during generation and registry maintenance.
///
/// Validation and duplicate errors are raised before any side effect; a
/// compiler rejection is not an error at all but a
/// [`crate::GenerationOutcome::CompileFailed`], since the registry stays
/// consistent and the caller decides how to present the diagnostics.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested template has no registry entry.
    #[error("template not found in registry: {name}")]
    TemplateNotFound {
        /// The requested template name.
        name: String,
    },

    /// The requested document has no registry entry.
    #[error("document not found in registry: {id}")]
    DocumentNotFound {
        /// The requested document ID.
        id: String,
    },

    /// A template with this name is already imported.
    #[error("template name already imported: {name}")]
    DuplicateTemplate {
        /// The conflicting name.
        name: String,
    },

    /// A file referenced by a registry record is missing from disk.
    #[error("file referenced by registry is missing: {path}")]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// One or more placeholders have no (or an empty) value.
    ///
    /// All missing names are collected so the caller can surface every gap at
    /// once instead of one at a time.
    #[error("missing values for placeholders: {}", .names.join(", "))]
    MissingValues {
        /// Placeholder names without a usable value.
        names: Vec<String>,
    },

    /// The description is empty after sanitization.
    #[error("description must not be empty")]
    EmptyDescription,

    /// The custom ID format contains tokens outside the allowed set.
    #[error("invalid token(s) in id format: {}", .tokens.join(", "))]
    UnknownTokens {
        /// The offending tokens, in order of appearance.
        tokens: Vec<String>,
    },

    /// The custom ID format is missing a required token.
    #[error("id format must include the {token} token")]
    MissingToken {
        /// The required token, braces included.
        token: &'static str,
    },

    /// All 999 sequence values are taken for this non-sequence token
    /// combination.
    ///
    /// An operational ceiling, not a crash: the caller should pick a more
    /// discriminating ID format.
    #[error("no free document id within {} sequence values for this format", crate::MAX_SEQUENCE)]
    IdSpaceExhausted,

    /// The configured LaTeX compiler is not available on this system.
    #[error("latex compiler is not available (install TeX Live or MiKTeX and check your PATH)")]
    CompilerUnavailable,

    /// Template analysis failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Registry access failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A filesystem operation outside the registries failed.
    #[error("i/o failure on {path}: {source}")]
    Io {
        /// Path of the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl EngineError {
    /// Wraps a plain I/O error for `path`.
    pub(crate) fn from_io(path: &std::path::Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
