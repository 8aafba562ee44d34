//! LaTeX template analysis for texform.
//!
//! This crate handles everything about a template before a document exists:
//! - `{{placeholder}}` extraction and literal value binding
//! - short index code allocation (acronym with collision suffixes)
//! - a syntactic LaTeX well-formedness gate for imports
//! - `key = value` parameter side files
//! - template name validation

#![warn(missing_docs)]

mod error;
mod index_code;
mod latex;
mod name;
mod params;
mod placeholder;

pub use error::TemplateError;
pub use index_code::allocate_index;
pub use latex::check_well_formed;
pub use name::validate_template_name;
pub use params::ParameterSet;
pub use placeholder::{bind, extract_placeholders, unique_placeholders};
