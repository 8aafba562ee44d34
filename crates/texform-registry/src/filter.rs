//! Search filters over registry records.
//!
//! All criteria are case-insensitive substring matches against the
//! corresponding record field. Empty criteria match everything, so a default
//! filter returns the whole registry.

use crate::{DocumentRecord, TemplateRecord};

/// Returns true when `needle` is empty or a case-insensitive substring of `haystack`.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Search criteria for the template registry.
#[derive(Debug, Clone, Default)]
pub struct TemplateFilter {
    /// Substring of the template index code.
    pub index: Option<String>,
    /// Substring of the template name.
    pub name: Option<String>,
    /// Substring of the import timestamp (e.g. `2026-01` for a month).
    pub date: Option<String>,
}

impl TemplateFilter {
    /// Tests a record against all present criteria.
    pub fn matches(&self, record: &TemplateRecord) -> bool {
        contains_ci(&record.index, self.index.as_deref().unwrap_or(""))
            && contains_ci(&record.name, self.name.as_deref().unwrap_or(""))
            && contains_ci(&record.imported_at, self.date.as_deref().unwrap_or(""))
    }
}

/// Search criteria for the document registry.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    /// Substring of the document ID.
    pub id: Option<String>,
    /// Substring of the source template name.
    pub template: Option<String>,
    /// Substring of the generation timestamp.
    pub date: Option<String>,
    /// Substring of the description.
    pub description: Option<String>,
}

impl DocumentFilter {
    /// Tests a record against all present criteria.
    pub fn matches(&self, record: &DocumentRecord) -> bool {
        contains_ci(&record.id, self.id.as_deref().unwrap_or(""))
            && contains_ci(&record.template_name, self.template.as_deref().unwrap_or(""))
            && contains_ci(&record.generated_at, self.date.as_deref().unwrap_or(""))
            && contains_ci(&record.description, self.description.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A fixed document record for filter tests.
    fn document() -> DocumentRecord {
        DocumentRecord {
            id: "INV-20260115-01".into(),
            template_name: "Invoice".into(),
            generated_at: "2026-01-15 10:30:00".into(),
            description: "January invoice for ACME".into(),
            param_file_path: "data/Invoice_20260115103000.txt".into(),
            pdf_path: "documents/INV-20260115-01.pdf".into(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(DocumentFilter::default().matches(&document()));
    }

    #[test]
    fn criteria_are_case_insensitive_substrings() {
        let filter = DocumentFilter {
            id: Some("inv-2026".into()),
            template: Some("voice".into()),
            description: Some("acme".into()),
            ..Default::default()
        };
        assert!(filter.matches(&document()));
    }

    #[test]
    fn any_failing_criterion_rejects() {
        let filter = DocumentFilter {
            id: Some("inv".into()),
            template: Some("letter".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&document()));
    }

    #[test]
    fn date_matches_on_substring() {
        let filter = DocumentFilter {
            date: Some("2026-01".into()),
            ..Default::default()
        };
        assert!(filter.matches(&document()));

        let filter = DocumentFilter {
            date: Some("2025".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&document()));
    }

    #[test]
    fn template_filter_matches_fields() {
        let record = TemplateRecord {
            index: "ID2".into(),
            name: "Invoice Draft".into(),
            imported_at: "2026-01-10 08:00:00".into(),
            description: "draft layout".into(),
            file_path: "templates/Invoice Draft.tex".into(),
        };

        let filter = TemplateFilter {
            index: Some("id".into()),
            name: Some("draft".into()),
            date: Some("2026".into()),
        };
        assert!(filter.matches(&record));
    }
}
