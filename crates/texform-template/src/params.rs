//! Parameter side files.
//!
//! Every generated document persists its resolved placeholder values as a
//! plain-text side file, one `key = value` pair per line. The file is read
//! back when a document is loaded for regeneration or editing.

use std::{fs, path::Path};

use indexmap::IndexMap;

use crate::TemplateError;

/// An ordered mapping of placeholder name to string value.
///
/// Insertion order is preserved so the side file and any form presentation
/// follow the order placeholders first appeared in the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    /// The ordered name -> value entries.
    values: IndexMap<String, String>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns the value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the `key = value` line format.
    pub fn to_file_format(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            out.push_str(name);
            out.push_str(" = ");
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    /// Parses the `key = value` line format.
    ///
    /// Lines without a `=` are ignored; keys and values are trimmed. Values
    /// may themselves contain `=` (only the first one splits).
    pub fn parse(text: &str) -> Self {
        let mut params = Self::new();
        for line in text.lines() {
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if !key.is_empty() {
                    params.insert(key, value.trim());
                }
            }
        }
        params
    }

    /// Writes the set to `path` in the side-file format.
    pub fn save(&self, path: &Path) -> Result<(), TemplateError> {
        fs::write(path, self.to_file_format()).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads a set back from a side file.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let text = fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }
}

impl FromIterator<(String, String)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
