//! Implementation of `texform open`.

use std::{path::Path, process::ExitCode};

use texform_engine::{FileOpener, SystemOpener};

use crate::cli::{CommandContext, args::OpenCommand};

/// Opens a generated PDF in the system viewer.
pub fn run(cmd: &OpenCommand) -> ExitCode {
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

    if !engine.artifact_status(&record).pdf_exists {
        eprintln!("error: PDF not found: {}", record.pdf_path);
        return ExitCode::FAILURE;
    }

    println!("Opening {}", record.pdf_path);
    SystemOpener.open(Path::new(&record.pdf_path));
    ExitCode::SUCCESS
}
