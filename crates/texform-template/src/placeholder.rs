//! Placeholder extraction and binding.
//!
//! Placeholders are `{{name}}` tokens where `name` is one or more word
//! characters. Extraction reports tokens in order of first appearance with
//! duplicates preserved; binding is a literal substring replacement.

use std::sync::LazyLock;

use regex::Regex;

use crate::{ParameterSet, TemplateError};

/// Matches a `{{name}}` placeholder token.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// Extracts all placeholder names from template source, in order of
/// appearance, duplicates preserved.
///
/// A template with zero placeholders is rejected: it would have nothing to
/// fill in, so imports must fail fast.
pub fn extract_placeholders(source: &str) -> Result<Vec<String>, TemplateError> {
    let names: Vec<String> = PLACEHOLDER
        .captures_iter(source)
        .map(|c| c[1].to_string())
        .collect();

    if names.is_empty() {
        return Err(TemplateError::NoPlaceholders);
    }
    Ok(names)
}

/// Extracts placeholder names deduplicated, preserving first-seen order.
///
/// This is the set a form (or CLI `--set` validation) presents to the user.
pub fn unique_placeholders(source: &str) -> Result<Vec<String>, TemplateError> {
    let mut seen = Vec::new();
    for name in extract_placeholders(source)? {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    Ok(seen)
}

/// Replaces every `{{name}}` with its value from `params`.
///
/// Replacement is literal: values are inserted verbatim, with no escaping of
/// LaTeX special characters. Placeholders without a value are left in place.
pub fn bind(source: &str, params: &ParameterSet) -> String {
    let mut bound = source.to_string();
    for (name, value) in params.iter() {
        bound = bound.replace(&format!("{{{{{name}}}}}"), value);
    }
    bound
}
