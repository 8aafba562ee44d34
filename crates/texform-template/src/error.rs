//! Error types for template analysis.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when analyzing templates or parameter files.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template source contains no placeholder tokens.
    #[error("no placeholders detected (use {{{{name}}}} syntax)")]
    NoPlaceholders,

    /// The template name is empty or contains filesystem-hostile characters.
    #[error("invalid template name: {name:?}")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// A group brace was closed without being opened, or left open at the end.
    #[error("unbalanced braces in template source (near byte {position})")]
    UnbalancedBraces {
        /// Byte offset of the offending brace, or of end-of-input.
        position: usize,
    },

    /// A `\end{...}` did not match the innermost open environment.
    #[error("environment mismatch: \\begin{{{expected}}} closed by \\end{{{found}}}")]
    MismatchedEnvironment {
        /// Name of the innermost open environment.
        expected: String,
        /// Name the closing tag actually carried.
        found: String,
    },

    /// A `\begin{...}` was never closed.
    #[error("unclosed environment: \\begin{{{name}}}")]
    UnclosedEnvironment {
        /// Name of the unclosed environment.
        name: String,
    },

    /// A `\end{...}` appeared with no open environment.
    #[error("\\end{{{name}}} without matching \\begin")]
    UnexpectedEnd {
        /// Name the closing tag carried.
        name: String,
    },

    /// Failed to read or write a file.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
