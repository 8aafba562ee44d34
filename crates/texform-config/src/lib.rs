//! Configuration system for texform.
//!
//! texform uses TOML configuration files named `.texform.toml`. Configuration
//! is resolved by walking up the directory tree from the current working
//! directory, collecting any `.texform.toml` files found, then loading
//! `~/.texform.toml` as the global config with lowest precedence. All paths
//! are resolved relative to the directory of the nearest project config (or
//! the working directory when only defaults or the global config apply).

#![warn(missing_docs)]

mod discovery;
mod error;
mod parse;
mod templates;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use parse::{
    RawCompiler, RawConfig, RawGenerate, RawPaths, RawRegistry, merge_raw, parse_config_file,
    parse_config_str,
};
pub use templates::example_config;

/// Default directory for stored template copies.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
/// Default directory the compiler writes PDFs into.
pub const DEFAULT_DOCUMENTS_DIR: &str = "documents";
/// Default directory for parameter side files.
pub const DEFAULT_PARAMETERS_DIR: &str = "data";
/// Default directory for bound `.tex` working files.
pub const DEFAULT_WORK_DIR: &str = "temp";
/// Default template registry filename.
pub const DEFAULT_TEMPLATES_REGISTRY: &str = "templates.csv";
/// Default document registry filename.
pub const DEFAULT_DOCUMENTS_REGISTRY: &str = "documents.csv";
/// Default LaTeX engine program.
pub const DEFAULT_COMPILER: &str = "pdflatex";

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved directory and registry-file layout.
    pub paths: Paths,
    /// Program name or path of the LaTeX engine.
    pub compiler_program: String,
    /// Default document ID format, if configured.
    pub id_format: Option<String>,
    /// Directory of the nearest project config file, if one was found.
    pub config_root: Option<PathBuf>,
}

/// Resolved filesystem layout.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Directory for stored template copies.
    pub templates_dir: PathBuf,
    /// Directory the compiler writes PDFs into.
    pub documents_dir: PathBuf,
    /// Directory for parameter side files.
    pub parameters_dir: PathBuf,
    /// Directory for bound `.tex` working files.
    pub work_dir: PathBuf,
    /// Path of the template registry file.
    pub templates_registry: PathBuf,
    /// Path of the document registry file.
    pub documents_registry: PathBuf,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant
    /// `.texform.toml` files.
    ///
    /// Returns a default configuration rooted at `cwd` when no files are
    /// found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let files = discover_config_files(cwd);
        Self::load_from_files(&files, cwd)
    }

    /// Loads configuration from a specific precedence-ordered file list.
    ///
    /// Highest precedence first. Primarily useful for testing.
    pub fn load_from_files(files: &[PathBuf], cwd: &Path) -> Result<Self, ConfigError> {
        let raw: Vec<RawConfig> = files
            .iter()
            .map(|path| parse_config_file(path))
            .collect::<Result<_, _>>()?;
        let merged = merge_raw(raw);

        let config_root = files
            .first()
            .filter(|path| !is_global_config(path))
            .and_then(|path| path.parent())
            .map(Path::to_path_buf);
        let base = config_root.clone().unwrap_or_else(|| cwd.to_path_buf());

        Ok(Self::resolve(&merged, base, config_root))
    }

    /// Resolves a merged raw config against a base directory.
    fn resolve(raw: &RawConfig, base: PathBuf, config_root: Option<PathBuf>) -> Self {
        /// Applies the configured value or the default, resolved against base.
        fn dir(base: &Path, configured: Option<&String>, default: &str) -> PathBuf {
            base.join(configured.map_or(default, String::as_str))
        }

        let paths = raw.paths.clone().unwrap_or_default();
        let registry = raw.registry.clone().unwrap_or_default();

        Self {
            paths: Paths {
                templates_dir: dir(&base, paths.templates.as_ref(), DEFAULT_TEMPLATES_DIR),
                documents_dir: dir(&base, paths.documents.as_ref(), DEFAULT_DOCUMENTS_DIR),
                parameters_dir: dir(&base, paths.parameters.as_ref(), DEFAULT_PARAMETERS_DIR),
                work_dir: dir(&base, paths.work.as_ref(), DEFAULT_WORK_DIR),
                templates_registry: dir(
                    &base,
                    registry.templates.as_ref(),
                    DEFAULT_TEMPLATES_REGISTRY,
                ),
                documents_registry: dir(
                    &base,
                    registry.documents.as_ref(),
                    DEFAULT_DOCUMENTS_REGISTRY,
                ),
            },
            compiler_program: raw
                .compiler
                .as_ref()
                .and_then(|c| c.program.clone())
                .unwrap_or_else(|| DEFAULT_COMPILER.to_string()),
            id_format: raw.generate.as_ref().and_then(|g| g.id_format.clone()),
            config_root,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn no_files_yields_defaults_rooted_at_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_files(&[], dir.path()).unwrap();

        assert_eq!(config.paths.templates_dir, dir.path().join("templates"));
        assert_eq!(
            config.paths.documents_registry,
            dir.path().join("documents.csv")
        );
        assert_eq!(config.compiler_program, "pdflatex");
        assert!(config.id_format.is_none());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn paths_resolve_against_config_file_directory() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("project");
        fs::create_dir_all(&project).unwrap();
        let config_path = project.join(CONFIG_FILENAME);
        fs::write(&config_path, "[paths]\ntemplates = \"tex/templates\"\n").unwrap();

        let cwd = project.join("deep/inside");
        fs::create_dir_all(&cwd).unwrap();

        let config = Config::load_from_files(&[config_path], &cwd).unwrap();
        assert_eq!(config.config_root.as_deref(), Some(project.as_path()));
        assert_eq!(config.paths.templates_dir, project.join("tex/templates"));
        // Unconfigured entries fall back to defaults under the same root.
        assert_eq!(config.paths.work_dir, project.join("temp"));
    }

    #[test]
    fn nearest_file_wins_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let outer = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &outer,
            "[compiler]\nprogram = \"pdflatex\"\n[generate]\nid_format = \"{TEMPLATE}-{seq}\"\n",
        )
        .unwrap();

        let project = dir.path().join("project");
        fs::create_dir_all(&project).unwrap();
        let inner = project.join(CONFIG_FILENAME);
        fs::write(&inner, "[compiler]\nprogram = \"lualatex\"\n").unwrap();

        let config = Config::load_from_files(&[inner, outer], &project).unwrap();
        assert_eq!(config.compiler_program, "lualatex");
        assert_eq!(config.id_format.as_deref(), Some("{TEMPLATE}-{seq}"));
        assert_eq!(config.config_root.as_deref(), Some(project.as_path()));
    }

    #[test]
    fn load_walks_up_from_cwd() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[compiler]\nprogram = \"xelatex\"\n",
        )
        .unwrap();
        let cwd = dir.path().join("a/b");
        fs::create_dir_all(&cwd).unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.compiler_program, "xelatex");
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(CONFIG_FILENAME);

        let err = Config::load_from_files(&[missing], dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
