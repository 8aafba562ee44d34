//! Implementation of `texform ls`.

use std::process::ExitCode;

use crate::cli::{
    CommandContext,
    args::{LsCommand, LsWhat},
    output::{document_table, template_table},
};

/// Lists imported templates or generated documents.
pub fn run(cmd: &LsCommand) -> ExitCode {
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    match cmd.what {
        LsWhat::Templates => {
            let records = match engine.templates().records() {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if records.is_empty() {
                println!("No templates imported.");
                return ExitCode::SUCCESS;
            }
            println!("{}", template_table(&records, cmd.long));
        }
        LsWhat::Documents => {
            let records = match engine.documents().records() {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if records.is_empty() {
                println!("No documents generated.");
                return ExitCode::SUCCESS;
            }
            let rows: Vec<_> = records
                .into_iter()
                .map(|record| {
                    let status = engine.artifact_status(&record);
                    (record, status)
                })
                .collect();
            println!("{}", document_table(&rows, cmd.long));
        }
    }
    ExitCode::SUCCESS
}
