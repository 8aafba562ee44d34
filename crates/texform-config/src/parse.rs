//! Configuration file parsing and merging.
//!
//! Individual `.texform.toml` files parse into [`RawConfig`] structures whose
//! fields are all optional; merging folds a precedence-ordered list into one
//! raw config where the nearest file wins per field.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Directory layout section.
    pub paths: Option<RawPaths>,
    /// Registry file section.
    pub registry: Option<RawRegistry>,
    /// Compiler section.
    pub compiler: Option<RawCompiler>,
    /// Generation section.
    pub generate: Option<RawGenerate>,
}

/// Raw `[paths]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPaths {
    /// Directory for stored template copies.
    pub templates: Option<String>,
    /// Directory the compiler writes PDFs into.
    pub documents: Option<String>,
    /// Directory for parameter side files.
    pub parameters: Option<String>,
    /// Directory for bound `.tex` working files.
    pub work: Option<String>,
}

/// Raw `[registry]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRegistry {
    /// Template registry filename.
    pub templates: Option<String>,
    /// Document registry filename.
    pub documents: Option<String>,
}

/// Raw `[compiler]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCompiler {
    /// Program name or path of the LaTeX engine.
    pub program: Option<String>,
}

/// Raw `[generate]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGenerate {
    /// Default document ID format.
    pub id_format: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string, using `path` for error context.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Merges raw configs in precedence order (highest precedence first).
///
/// For every field, the first config that sets it wins.
pub fn merge_raw(configs: Vec<RawConfig>) -> RawConfig {
    let mut merged = RawConfig::default();
    for config in configs {
        merge_section(&mut merged.paths, config.paths, |into, from| {
            merge_field(&mut into.templates, from.templates);
            merge_field(&mut into.documents, from.documents);
            merge_field(&mut into.parameters, from.parameters);
            merge_field(&mut into.work, from.work);
        });
        merge_section(&mut merged.registry, config.registry, |into, from| {
            merge_field(&mut into.templates, from.templates);
            merge_field(&mut into.documents, from.documents);
        });
        merge_section(&mut merged.compiler, config.compiler, |into, from| {
            merge_field(&mut into.program, from.program);
        });
        merge_section(&mut merged.generate, config.generate, |into, from| {
            merge_field(&mut into.id_format, from.id_format);
        });
    }
    merged
}

/// Folds a lower-precedence section into the merged one.
fn merge_section<T: Default>(into: &mut Option<T>, from: Option<T>, merge: impl Fn(&mut T, T)) {
    if let Some(from) = from {
        merge(into.get_or_insert_with(T::default), from);
    }
}

/// Keeps the existing value; fills in from lower precedence only when unset.
fn merge_field<T>(into: &mut Option<T>, from: Option<T>) {
    if into.is_none() {
        *into = from;
    }
}
