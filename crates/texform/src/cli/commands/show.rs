//! Implementation of `texform show`.

use std::process::ExitCode;

use crate::cli::{CommandContext, args::ShowCommand, output::PARAMS_MISSING_LABEL};

/// Shows a document's record and its stored parameter values.
pub fn run(cmd: &ShowCommand) -> ExitCode {
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let record = match engine.find_document(&cmd.id) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Document:    {}", record.id);
    println!("Template:    {}", record.template_name);
    println!("Generated:   {}", record.generated_at);
    println!("Description: {}", record.description);
    println!("PDF:         {}", record.pdf_path);
    println!("Parameters:  {}", record.param_file_path);
    println!();

    match engine.load_parameters(&record) {
        Ok(params) => {
            for (name, value) in params.iter() {
                println!("  {name} = {value}");
            }
        }
        Err(_) => println!("  ({PARAMS_MISSING_LABEL})"),
    }
    ExitCode::SUCCESS
}
