//! Error types for registry access.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading or writing a registry file.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Failed to open, read, or write the registry file.
    #[error("failed to access registry file {path}: {source}")]
    Io {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The registry file exists but contains a row that does not match the schema.
    #[error("malformed row in registry file {path}: {message}")]
    Malformed {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the malformed content.
        message: String,
    },
}

impl RegistryError {
    /// Maps a CSV-layer error to the appropriate variant for `path`.
    ///
    /// The csv crate folds I/O failures into its own error type; unwrapping
    /// them here keeps "file unreadable" and "file corrupt" distinguishable
    /// for callers.
    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::Io {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::Malformed {
                path: path.to_path_buf(),
                message,
            },
        }
    }

    /// Wraps a plain I/O error for `path`.
    pub(crate) fn from_io(path: &std::path::Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
