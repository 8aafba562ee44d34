//! Tabular rendering for CLI output.

use comfy_table::{Table, presets};
use texform_engine::ArtifactStatus;
use texform_registry::{DocumentRecord, TemplateRecord};

/// Label shown in listings when a document's PDF is missing from disk.
pub const PDF_MISSING_LABEL: &str = "PDF not found";

/// Label shown in listings when a document's parameter file is missing.
pub const PARAMS_MISSING_LABEL: &str = "parameters not found";

/// Creates a table with the house preset and the given header.
fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(header.to_vec());
    table
}

/// Renders template records as a table.
pub fn template_table(records: &[TemplateRecord], long: bool) -> Table {
    let mut table = if long {
        new_table(&["Index", "Name", "Imported", "Description", "File"])
    } else {
        new_table(&["Index", "Name", "Imported", "Description"])
    };

    for record in records {
        let mut row = vec![
            record.index.clone(),
            record.name.clone(),
            record.imported_at.clone(),
            record.description.clone(),
        ];
        if long {
            row.push(record.file_path.clone());
        }
        table.add_row(row);
    }
    table
}

/// Renders document records as a table, labeling missing artifacts instead of
/// failing the listing.
pub fn document_table(records: &[(DocumentRecord, ArtifactStatus)], long: bool) -> Table {
    let mut table = if long {
        new_table(&["Id", "Template", "Generated", "Description", "PDF", "Parameters"])
    } else {
        new_table(&["Id", "Template", "Generated", "Description", "PDF"])
    };

    for (record, status) in records {
        let pdf = if status.pdf_exists {
            record.pdf_path.clone()
        } else {
            PDF_MISSING_LABEL.to_string()
        };
        let mut row = vec![
            record.id.clone(),
            record.template_name.clone(),
            record.generated_at.clone(),
            record.description.clone(),
            pdf,
        ];
        if long {
            row.push(if status.params_exist {
                record.param_file_path.clone()
            } else {
                PARAMS_MISSING_LABEL.to_string()
            });
        }
        table.add_row(row);
    }
    table
}
