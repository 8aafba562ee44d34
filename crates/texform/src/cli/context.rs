//! Shared context for running CLI commands.

use std::{env, path::PathBuf, process::ExitCode};

use texform_config::Config;
use texform_engine::{Engine, EnginePaths, PdflatexCompiler};
use texform_registry::Registry;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (defaults if no config files were found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = env::current_dir().map_err(|e| {
            eprintln!("error: could not determine current directory: {e}");
            ExitCode::FAILURE
        })?;
        let config = Config::load(&cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self { cwd, config })
    }

    /// Builds a bootstrapped engine from the loaded configuration.
    ///
    /// Creates the registry files (with headers) if they do not exist yet.
    pub fn engine(&self) -> Result<Engine<PdflatexCompiler>, ExitCode> {
        let paths = &self.config.paths;
        let engine = Engine::new(
            EnginePaths {
                templates_dir: paths.templates_dir.clone(),
                documents_dir: paths.documents_dir.clone(),
                parameters_dir: paths.parameters_dir.clone(),
                work_dir: paths.work_dir.clone(),
            },
            Registry::new(paths.templates_registry.clone()),
            Registry::new(paths.documents_registry.clone()),
            PdflatexCompiler::new(self.config.compiler_program.clone()),
        );
        engine.bootstrap().map_err(|e| {
            eprintln!("error: failed to initialize registries: {e}");
            ExitCode::FAILURE
        })?;
        Ok(engine)
    }

    /// The document ID format to use when the command line supplies none.
    pub fn id_format(&self, from_args: Option<&str>) -> Option<String> {
        from_args
            .map(str::to_string)
            .or_else(|| self.config.id_format.clone())
    }
}
