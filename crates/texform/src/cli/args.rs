//! Clap argument definitions for the `texform` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "texform")]
#[command(about = "LaTeX form templates and generated-document registries")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `texform init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.texform.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `texform import`.
#[derive(Args, Debug, Clone)]
pub struct ImportCommand {
    /// Path to the .tex template file to import
    pub file: PathBuf,

    /// Template name (unique, without extension)
    #[arg(long)]
    pub name: String,

    /// Short single-line description
    #[arg(long)]
    pub description: String,
}

/// Arguments for `texform generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
    /// Name of the imported template to generate from
    pub template: String,

    /// Placeholder value, repeatable (e.g. --set name=Ada)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Short description for the document registry entry
    #[arg(long)]
    pub description: String,

    /// Load initial values from an existing parameter file
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Custom document id format (e.g. {TEMPLATE}-{YYMMDD}-{seq})
    #[arg(long)]
    pub id_format: Option<String>,

    /// Open the generated PDF in the system viewer
    #[arg(long)]
    pub open: bool,
}

/// Arguments for `texform regenerate`.
#[derive(Args, Debug, Clone)]
pub struct RegenerateCommand {
    /// ID of the document to regenerate
    pub id: String,

    /// Override a stored value, repeatable (e.g. --set amount=99)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Description for the new registry entry [default: the original's]
    #[arg(long)]
    pub description: Option<String>,

    /// Custom document id format for the new document
    #[arg(long)]
    pub id_format: Option<String>,

    /// Open the regenerated PDF in the system viewer
    #[arg(long)]
    pub open: bool,
}

/// Arguments for `texform ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Show detailed information.
    #[arg(short = 'l', long)]
    pub long: bool,

    /// What to list.
    #[command(subcommand)]
    pub what: LsWhat,
}

/// What to list with `texform ls`.
#[derive(Clone, Copy, Subcommand, Debug)]
pub enum LsWhat {
    /// List all imported templates
    Templates,
    /// List all generated documents
    Documents,
}

/// Search criteria subcommands for `texform search`.
#[derive(Clone, Subcommand, Debug)]
pub enum SearchWhat {
    /// Search imported templates
    Templates {
        /// Substring of the template index code
        #[arg(long)]
        index: Option<String>,

        /// Substring of the template name
        #[arg(long)]
        name: Option<String>,

        /// Substring of the import date (e.g. 2026-01)
        #[arg(long)]
        date: Option<String>,
    },
    /// Search generated documents
    Documents {
        /// Substring of the document id
        #[arg(long)]
        id: Option<String>,

        /// Substring of the source template name
        #[arg(long)]
        template: Option<String>,

        /// Substring of the generation date
        #[arg(long)]
        date: Option<String>,

        /// Substring of the description
        #[arg(long)]
        description: Option<String>,
    },
}

/// Arguments for `texform show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// ID of the document to show
    pub id: String,
}

/// Arguments for `texform export`.
#[derive(Args, Debug, Clone)]
pub struct ExportCommand {
    /// Name of the template to export
    pub template: String,

    /// Destination path for the .tex copy
    pub dest: PathBuf,
}

/// What to delete with `texform delete`.
#[derive(Clone, Subcommand, Debug)]
pub enum DeleteWhat {
    /// Delete a template and its stored .tex file
    Template {
        /// Name of the template to delete
        name: String,
    },
    /// Delete a document, its PDF, and its parameter file
    Document {
        /// ID of the document to delete
        id: String,
    },
}

/// Arguments for `texform open`.
#[derive(Args, Debug, Clone)]
pub struct OpenCommand {
    /// ID of the document whose PDF to open
    pub id: String,
}

/// Supported `texform` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize texform configuration in current directory
    Init(InitCommand),

    /// Import a LaTeX template with {{placeholder}} tokens
    Import(ImportCommand),

    /// Generate a PDF document from an imported template
    #[command(after_help = "\
PLACEHOLDER VALUES:
  Every {{placeholder}} in the template needs a non-empty value:
    --set name=Ada --set amount=120

ID FORMATS:
  The document id is built from a token format string. Supported tokens:
    {TEMPLATE}                the template's index code (required)
    {seq}                     two-digit uniqueness counter (required)
    {YYYYMMDD} {YYMMDD} {DDMMYYYY} {DDMMYY}
    {YYYYMM} {YYMM} {YYYY} {YY} {MM} {DD}

EXAMPLES:
  texform generate Invoice --set client=ACME --set total=99 \\
      --description 'January invoice'
  texform generate Invoice --params data/Invoice_20260115103000.txt \\
      --set total=120 --description 'corrected total'
  texform generate Invoice --id-format '{TEMPLATE}-{YYMM}-{seq}' \\
      --set client=ACME --set total=99 --description 'compact ids'")]
    Generate(GenerateCommand),

    /// Regenerate an existing document from its stored parameters
    Regenerate(RegenerateCommand),

    /// List templates or documents
    Ls(LsCommand),

    /// Search the registries with per-field substring filters
    Search {
        /// Which registry to search.
        #[command(subcommand)]
        what: SearchWhat,
    },

    /// Show a document's record and stored parameters
    Show(ShowCommand),

    /// Export a stored template to a .tex file
    Export(ExportCommand),

    /// Delete a template or document and its files
    Delete {
        /// What to delete.
        #[command(subcommand)]
        what: DeleteWhat,
    },

    /// Open a generated PDF in the system viewer
    Open(OpenCommand),

    /// Show configuration, paths, and registry statistics
    Status,

    /// Validate configuration and registry consistency
    Check,
}
