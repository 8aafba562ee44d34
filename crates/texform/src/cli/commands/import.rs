//! Implementation of `texform import`.

use std::process::ExitCode;

use crate::cli::{CommandContext, args::ImportCommand};

/// Imports a template file into the store and registry.
pub fn run(cmd: &ImportCommand) -> ExitCode {
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    match engine.import_template(&cmd.file, &cmd.name, &cmd.description) {
        Ok(record) => {
            println!("Imported '{}' as {}", record.name, record.index);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
