//! Implementations of `texform generate` and `texform regenerate`.

use std::{path::Path, process::ExitCode};

use texform_engine::{
    EngineError, FileOpener, GenerationOutcome, GenerationRequest, SystemOpener,
};
use texform_template::ParameterSet;

use crate::cli::{
    CommandContext,
    args::{GenerateCommand, RegenerateCommand},
};

/// Generates a document from an imported template.
pub fn run(cmd: &GenerateCommand) -> ExitCode {
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let mut values = match cmd.params.as_deref() {
        Some(path) => match ParameterSet::load(path) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => ParameterSet::new(),
    };
    if let Err(code) = apply_set_flags(&mut values, &cmd.set) {
        return code;
    }

    let request = GenerationRequest {
        template_name: cmd.template.clone(),
        values,
        description: cmd.description.clone(),
        id_format: ctx.id_format(cmd.id_format.as_deref()),
    };
    report_outcome(engine.generate(&request), cmd.open)
}

/// Regenerates an existing document from its stored parameters.
pub fn run_regenerate(cmd: &RegenerateCommand) -> ExitCode {
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let mut overrides = ParameterSet::new();
    if let Err(code) = apply_set_flags(&mut overrides, &cmd.set) {
        return code;
    }

    let outcome = engine.regenerate(
        &cmd.id,
        &overrides,
        cmd.description.as_deref(),
        ctx.id_format(cmd.id_format.as_deref()),
    );
    report_outcome(outcome, cmd.open)
}

/// Parses `KEY=VALUE` flags into the parameter set.
fn apply_set_flags(values: &mut ParameterSet, flags: &[String]) -> Result<(), ExitCode> {
    for flag in flags {
        let Some((key, value)) = flag.split_once('=') else {
            eprintln!("error: invalid --set '{flag}': expected KEY=VALUE");
            return Err(ExitCode::FAILURE);
        };
        values.insert(key.trim(), value);
    }
    Ok(())
}

/// Prints the result of a generation run.
fn report_outcome(
    outcome: Result<GenerationOutcome, EngineError>,
    open: bool,
) -> ExitCode {
    match outcome {
        Ok(GenerationOutcome::Generated { record }) => {
            println!("Generated {}", record.id);
            println!("  PDF: {}", record.pdf_path);
            if open {
                SystemOpener.open(Path::new(&record.pdf_path));
            }
            ExitCode::SUCCESS
        }
        Ok(GenerationOutcome::CompileFailed {
            log,
            tex_path,
            param_file_path,
        }) => {
            eprintln!("error: compilation failed");
            if !log.trim().is_empty() {
                eprintln!("{log}");
            }
            eprintln!(
                "bound source kept at {} (parameters: {})",
                tex_path.display(),
                param_file_path.display()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, EngineError::MissingValues { .. }) {
                eprintln!("provide each value with --set NAME=VALUE");
            }
            ExitCode::FAILURE
        }
    }
}
