//! Implementation of `texform search`.

use std::process::ExitCode;

use texform_registry::{DocumentFilter, TemplateFilter};

use crate::cli::{
    CommandContext,
    args::SearchWhat,
    output::{document_table, template_table},
};

/// Searches a registry with per-field substring filters.
pub fn run(what: &SearchWhat) -> ExitCode {
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    match what {
        SearchWhat::Templates { index, name, date } => {
            let filter = TemplateFilter {
                index: index.clone(),
                name: name.clone(),
                date: date.clone(),
            };
            let hits = match engine.templates().filter(|r| filter.matches(r)) {
                Ok(hits) => hits,
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if hits.is_empty() {
                println!("No matching templates found.");
                return ExitCode::SUCCESS;
            }
            println!("{}", template_table(&hits, true));
        }
        SearchWhat::Documents {
            id,
            template,
            date,
            description,
        } => {
            let filter = DocumentFilter {
                id: id.clone(),
                template: template.clone(),
                date: date.clone(),
                description: description.clone(),
            };
            let hits = match engine.documents().filter(|r| filter.matches(r)) {
                Ok(hits) => hits,
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if hits.is_empty() {
                println!("No matching documents found.");
                return ExitCode::SUCCESS;
            }
            let rows: Vec<_> = hits
                .into_iter()
                .map(|record| {
                    let status = engine.artifact_status(&record);
                    (record, status)
                })
                .collect();
            println!("{}", document_table(&rows, true));
        }
    }
    ExitCode::SUCCESS
}
