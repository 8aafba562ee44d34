//! Flat-file registries for texform.
//!
//! texform keeps two CSV registries: imported templates and generated documents.
//! Each is a single delimited text file with a fixed header row; one record per
//! subsequent row. [`Registry`] is the sole writer of its file. Deletion is a
//! whole-file rewrite, which is acceptable for the low record counts this tool
//! manages and is isolated here so the persistence strategy can change without
//! touching callers.

#![warn(missing_docs)]

mod error;
mod filter;
mod record;
mod store;

pub use error::RegistryError;
pub use filter::{DocumentFilter, TemplateFilter};
pub use record::{
    DocumentRecord, RegistryRecord, TemplateRecord, registry_timestamp, sanitize_description,
};
pub use store::{Registry, Scan};
