//! Command-line interface for the texform document generator.
//!
//! texform manages LaTeX form templates containing `{{placeholder}}` tokens
//! and the documents generated from them. Templates and documents are tracked
//! in two CSV registries; compilation goes through an external LaTeX engine.

use std::process::ExitCode;

use clap::Parser;

use crate::cli::args::Cli;

mod cli;

fn main() -> ExitCode {
    env_logger::init();
    cli::run(Cli::parse())
}
