//! Implementations of `texform status` and `texform check`.

use std::process::ExitCode;

use texform_config::discover_config_files;
use texform_engine::{Compiler, validate_id_format};

use crate::cli::CommandContext;

/// Shows configuration, resolved paths, and registry statistics.
pub fn run_status() -> ExitCode {
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    println!("Config files (highest precedence first):");
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("  (none; using defaults)");
    } else {
        for path in &config_files {
            println!("  {}", path.display());
        }
    }
    println!();

    let paths = &ctx.config.paths;
    println!("Paths:");
    println!("  templates  {}", paths.templates_dir.display());
    println!("  documents  {}", paths.documents_dir.display());
    println!("  parameters {}", paths.parameters_dir.display());
    println!("  work       {}", paths.work_dir.display());
    println!();

    println!("Registries:");
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    match (engine.templates().records(), engine.documents().records()) {
        (Ok(templates), Ok(documents)) => {
            println!(
                "  {} ({} templates)",
                engine.templates().path().display(),
                templates.len()
            );
            println!(
                "  {} ({} documents)",
                engine.documents().path().display(),
                documents.len()
            );
        }
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }
    println!();

    let compiler = engine.compiler();
    let availability = if compiler.is_available() {
        "available"
    } else {
        "NOT FOUND"
    };
    println!("Compiler: {} ({availability})", ctx.config.compiler_program);

    ExitCode::SUCCESS
}

/// Validates configuration and registry consistency.
///
/// Exits successfully only when no issues are found.
pub fn run_check() -> ExitCode {
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let mut issues: Vec<String> = Vec::new();

    if ctx.config.config_root.is_none() {
        issues.push(format!(
            "no project configuration found; run 'texform init' (using defaults under {})",
            ctx.cwd.display()
        ));
    }

    if !engine.compiler().is_available() {
        issues.push(format!(
            "compiler '{}' is not available on this system",
            ctx.config.compiler_program
        ));
    }

    if let Some(format) = &ctx.config.id_format
        && let Err(e) = validate_id_format(format)
    {
        issues.push(format!("configured id_format is invalid: {e}"));
    }

    match engine.check_consistency() {
        Ok(found) => issues.extend(found.iter().map(ToString::to_string)),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    if issues.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("Issues ({}):", issues.len());
    for issue in &issues {
        println!("  - {issue}");
    }
    ExitCode::FAILURE
}
