//! Implementation of `texform export`.

use std::process::ExitCode;

use crate::cli::{CommandContext, args::ExportCommand};

/// Copies a stored template out of the store.
pub fn run(cmd: &ExportCommand) -> ExitCode {
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    match engine.export_template(&cmd.template, &cmd.dest) {
        Ok(dest) => {
            println!("Exported '{}' to {}", cmd.template, dest.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
