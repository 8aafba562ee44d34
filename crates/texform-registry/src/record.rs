//! Registry record types.
//!
//! Field names are bound to the exact header strings of the registry files via
//! serde renames, so serialization order and the canonical header stay in sync
//! with the struct definitions.

use chrono::Local;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A record stored in a [`crate::Registry`].
///
/// Implementors declare the canonical header row of their registry file and
/// expose their primary key. Field declaration order must match `HEADERS`.
pub trait RegistryRecord: Serialize + DeserializeOwned {
    /// Canonical header row for this record's registry file.
    const HEADERS: &'static [&'static str];

    /// Primary key value of this record.
    fn key(&self) -> &str;
}

/// One imported LaTeX template.
///
/// `index` and `name` are both unique across live records; callers check
/// uniqueness before appending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Short unique code, used as the `{TEMPLATE}` token in document IDs.
    #[serde(rename = "Template Index")]
    pub index: String,
    /// Unique human-readable template name.
    #[serde(rename = "Template Type Name")]
    pub name: String,
    /// Import timestamp, `%Y-%m-%d %H:%M:%S`.
    #[serde(rename = "Date of Import")]
    pub imported_at: String,
    /// Single-line description (newlines stripped before write).
    #[serde(rename = "Short Description")]
    pub description: String,
    /// Path to the stored copy of the template source.
    #[serde(rename = "Path to Template File")]
    pub file_path: String,
}

impl RegistryRecord for TemplateRecord {
    const HEADERS: &'static [&'static str] = &[
        "Template Index",
        "Template Type Name",
        "Date of Import",
        "Short Description",
        "Path to Template File",
    ];

    fn key(&self) -> &str {
        &self.index
    }
}

/// One generated document.
///
/// `template_name` is a soft foreign key into the template registry: deleting
/// a template does not cascade, so the reference may dangle. The parameter and
/// PDF paths point at artifacts whose lifecycle is independent of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Generated document ID, unique across live records.
    #[serde(rename = "Document Index Number")]
    pub id: String,
    /// Name of the template this document was generated from.
    #[serde(rename = "Template Type Name")]
    pub template_name: String,
    /// Generation timestamp, `%Y-%m-%d %H:%M:%S`.
    #[serde(rename = "Date of Generation")]
    pub generated_at: String,
    /// Single-line description (newlines stripped before write).
    #[serde(rename = "Short Description")]
    pub description: String,
    /// Path to the `key = value` parameter side file.
    #[serde(rename = "Path to Parameter File")]
    pub param_file_path: String,
    /// Path to the compiled PDF.
    #[serde(rename = "Path to Generated PDF")]
    pub pdf_path: String,
}

impl RegistryRecord for DocumentRecord {
    const HEADERS: &'static [&'static str] = &[
        "Document Index Number",
        "Template Type Name",
        "Date of Generation",
        "Short Description",
        "Path to Parameter File",
        "Path to Generated PDF",
    ];

    fn key(&self) -> &str {
        &self.id
    }
}

/// Returns the current local time formatted as a registry timestamp.
pub fn registry_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Collapses embedded line breaks to spaces and trims the result.
///
/// Descriptions are sanitized before they are written so every logical record
/// occupies one physical line in the registry file.
pub fn sanitize_description(raw: &str) -> String {
    raw.replace(['\n', '\r'], " ").trim().to_string()
}
