//! Custom ID format validation.
//!
//! Runs before generation is attempted so a bad format never causes side
//! effects.

use std::sync::LazyLock;

use regex::Regex;

use crate::{EngineError, docid::CALENDAR_TOKENS};

/// Matches a brace-delimited upper-case token like `{YYYYMMDD}`.
static UPPER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[A-Z]+\}").expect("token pattern is valid"));

/// Validates a user-supplied document ID format string.
///
/// Fails when the format uses an upper-case token outside the supported set
/// (all offenders listed), when `{seq}` is absent (uniqueness would not be
/// guaranteed), or when `{TEMPLATE}` is absent (traceability to the source
/// template would be lost). Pure validation, no side effects.
pub fn validate_id_format(format: &str) -> Result<(), EngineError> {
    let mut unknown: Vec<String> = Vec::new();
    for token in UPPER_TOKEN.find_iter(format) {
        let token = token.as_str();
        let allowed =
            token == "{TEMPLATE}" || CALENDAR_TOKENS.iter().any(|(name, _)| *name == token);
        if !allowed && !unknown.iter().any(|t| t == token) {
            unknown.push(token.to_string());
        }
    }
    if !unknown.is_empty() {
        return Err(EngineError::UnknownTokens { tokens: unknown });
    }

    if !format.contains("{seq}") {
        return Err(EngineError::MissingToken { token: "{seq}" });
    }
    if !format.contains("{TEMPLATE}") {
        return Err(EngineError::MissingToken {
            token: "{TEMPLATE}",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_formats_pass() {
        assert!(validate_id_format("{TEMPLATE}-{YYMMDD}-{seq}").is_ok());
        assert!(validate_id_format("{TEMPLATE}-{YYYYMMDD}-{seq}").is_ok());
        assert!(validate_id_format("{TEMPLATE}_{DDMMYY}_{seq}").is_ok());
        assert!(validate_id_format("doc-{TEMPLATE}-{YYYY}-{MM}-{DD}-{seq}").is_ok());
    }

    #[test]
    fn unknown_tokens_are_listed() {
        let err = validate_id_format("{TEMPLATE}-{BOGUS}-{seq}").unwrap_err();
        assert!(
            matches!(err, EngineError::UnknownTokens { ref tokens } if tokens == &["{BOGUS}"])
        );
    }

    #[test]
    fn multiple_unknown_tokens_are_all_reported() {
        let err = validate_id_format("{TEMPLATE}-{FOO}-{BAR}-{seq}").unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnknownTokens { ref tokens } if tokens == &["{FOO}", "{BAR}"]
        ));
    }

    #[test]
    fn missing_template_token_fails() {
        let err = validate_id_format("{YYYY}-{seq}").unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingToken { token } if token == "{TEMPLATE}"
        ));
    }

    #[test]
    fn missing_seq_token_fails() {
        let err = validate_id_format("{TEMPLATE}-{YYYY}").unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingToken { token } if token == "{seq}"
        ));
    }

    #[test]
    fn lower_case_text_is_not_a_token() {
        assert!(validate_id_format("{TEMPLATE}-final-{seq}").is_ok());
    }
}
