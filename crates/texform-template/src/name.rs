//! Template name validation.

use crate::TemplateError;

/// Characters that are rejected in template names.
///
/// The name becomes part of the stored `.tex` filename and the parameter file
/// name, so filesystem-hostile characters are refused at import time.
const FORBIDDEN: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Validates a human-readable template name.
///
/// Rejects empty (or whitespace-only) names and names containing any of
/// `\ / : * ? " < > |`.
pub fn validate_template_name(name: &str) -> Result<(), TemplateError> {
    if name.trim().is_empty() || name.chars().any(|c| FORBIDDEN.contains(&c)) {
        return Err(TemplateError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
