//! CLI support for the `texform` binary.

use std::process::ExitCode;

use crate::cli::args::{Cli, Commands};

pub mod args;
pub mod commands;
pub mod context;
pub mod output;

pub use context::CommandContext;

/// Dispatches a parsed CLI invocation to its command implementation.
pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Commands::Init(cmd) => commands::init::run(&cmd),
        Commands::Import(cmd) => commands::import::run(&cmd),
        Commands::Generate(cmd) => commands::generate::run(&cmd),
        Commands::Regenerate(cmd) => commands::generate::run_regenerate(&cmd),
        Commands::Ls(cmd) => commands::ls::run(&cmd),
        Commands::Search { what } => commands::search::run(&what),
        Commands::Show(cmd) => commands::show::run(&cmd),
        Commands::Export(cmd) => commands::export::run(&cmd),
        Commands::Delete { what } => commands::delete::run(&what),
        Commands::Open(cmd) => commands::open::run(&cmd),
        Commands::Status => commands::status::run_status(),
        Commands::Check => commands::status::run_check(),
    }
}
