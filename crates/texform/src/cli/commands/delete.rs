//! Implementation of `texform delete`.

use std::process::ExitCode;

use crate::cli::{CommandContext, args::DeleteWhat};

/// Deletes a template or document along with its files.
pub fn run(what: &DeleteWhat) -> ExitCode {
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    match what {
        DeleteWhat::Template { name } => match engine.delete_template(name) {
            Ok(deletion) => {
                if deletion.referencing_documents > 0 {
                    eprintln!(
                        "warning: template '{name}' is referenced by {} document(s); their records keep the name",
                        deletion.referencing_documents
                    );
                }
                if !deletion.removed_file {
                    eprintln!("note: stored template file was already missing");
                }
                println!("Deleted template '{name}'");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        DeleteWhat::Document { id } => match engine.delete_document(id) {
            Ok(deletion) => {
                if !deletion.removed_pdf {
                    eprintln!("note: PDF was already missing");
                }
                if !deletion.removed_params {
                    eprintln!("note: parameter file was already missing");
                }
                println!("Deleted document {id}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
