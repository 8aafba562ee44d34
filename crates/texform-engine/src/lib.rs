//! Document generation engine for texform.
//!
//! [`Engine`] composes the registries with template analysis and two
//! capability seams: a [`Compiler`] that turns bound LaTeX source into a PDF,
//! and a [`FileOpener`] that launches a viewer. Both are traits so the whole
//! generation pipeline runs in tests without a LaTeX toolchain or a desktop
//! session.
//!
//! The engine is synchronous and single-user: one operation runs to
//! completion before the next begins, and the external compiler call blocks
//! for its full duration (no cancellation).

#![warn(missing_docs)]

mod compile;
mod consistency;
mod docid;
mod engine;
mod error;
mod format;
mod open;
#[cfg(test)]
mod test_support;

pub use compile::{CompileOutcome, Compiler, PdflatexCompiler};
pub use consistency::ConsistencyIssue;
pub use docid::{DEFAULT_ID_FORMAT, MAX_SEQUENCE, generate_document_id};
pub use engine::{
    ArtifactStatus, DocumentDeletion, Engine, EnginePaths, GenerationOutcome, GenerationRequest,
    TemplateDeletion,
};
pub use error::EngineError;
pub use format::validate_id_format;
pub use open::{FileOpener, SystemOpener};
