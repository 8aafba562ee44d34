//! Cross-registry consistency checks.
//!
//! The registries reference each other and the filesystem without
//! enforcement: documents name their source template, records point at
//! artifacts. These checks surface drift as warnings; none of it blocks
//! normal operation.

use std::fmt;

/// A non-fatal inconsistency found in or between the registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    /// Two live template records share an index code.
    DuplicateTemplateIndex {
        /// The duplicated index code.
        index: String,
    },
    /// Two live template records share a name.
    DuplicateTemplateName {
        /// The duplicated name.
        name: String,
    },
    /// Two live document records share a document ID.
    DuplicateDocumentId {
        /// The duplicated ID.
        id: String,
    },
    /// A document references a template name with no live record.
    UnknownTemplate {
        /// ID of the referencing document.
        document: String,
        /// The dangling template name.
        template: String,
    },
    /// A template record points at a missing `.tex` file.
    TemplateFileMissing {
        /// Name of the template.
        name: String,
        /// The missing path.
        path: String,
    },
    /// A document record points at a missing PDF.
    PdfMissing {
        /// ID of the document.
        document: String,
        /// The missing path.
        path: String,
    },
    /// A document record points at a missing parameter file.
    ParameterFileMissing {
        /// ID of the document.
        document: String,
        /// The missing path.
        path: String,
    },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTemplateIndex { index } => {
                write!(f, "duplicate template index: {index}")
            }
            Self::DuplicateTemplateName { name } => {
                write!(f, "duplicate template name: {name}")
            }
            Self::DuplicateDocumentId { id } => {
                write!(f, "duplicate document id: {id}")
            }
            Self::UnknownTemplate { document, template } => {
                write!(
                    f,
                    "document {document} references unknown template '{template}'"
                )
            }
            Self::TemplateFileMissing { name, path } => {
                write!(f, "template '{name}' file is missing: {path}")
            }
            Self::PdfMissing { document, path } => {
                write!(f, "document {document} PDF is missing: {path}")
            }
            Self::ParameterFileMissing { document, path } => {
                write!(f, "document {document} parameter file is missing: {path}")
            }
        }
    }
}
