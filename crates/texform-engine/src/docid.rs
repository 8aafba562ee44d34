//! Document ID generation.
//!
//! IDs are built from a token format string. Calendar tokens and `{TEMPLATE}`
//! are substituted once; `{seq}` is substituted last, counting up from 1
//! until the candidate is absent from the existing-ID set.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::EngineError;

/// Format used when the caller supplies none.
pub const DEFAULT_ID_FORMAT: &str = "{TEMPLATE}-{YYYYMMDD}-{seq}";

/// Upper bound for the `{seq}` counter.
pub const MAX_SEQUENCE: u32 = 999;

/// Calendar tokens and their chrono format strings.
///
/// Token boundaries are brace-delimited, so substitution order between
/// entries does not matter; the table keeps the longest forms first anyway
/// for readability.
pub(crate) const CALENDAR_TOKENS: &[(&str, &str)] = &[
    ("{YYMMDD}", "%y%m%d"),
    ("{DDMMYYYY}", "%d%m%Y"),
    ("{YYYYMMDD}", "%Y%m%d"),
    ("{DDMMYY}", "%d%m%y"),
    ("{YYYYMM}", "%Y%m"),
    ("{YYMM}", "%y%m"),
    ("{YYYY}", "%Y"),
    ("{YY}", "%y"),
    ("{MM}", "%m"),
    ("{DD}", "%d"),
];

/// Generates a document ID not present in `existing`.
///
/// `format` falls back to [`DEFAULT_ID_FORMAT`] when `None`. The sequence
/// counter is rendered two-digit zero-padded (`01`, `02`, …, overflowing
/// naturally past 99). Returns [`EngineError::IdSpaceExhausted`] when all
/// [`MAX_SEQUENCE`] candidates are taken, which means that many documents
/// already share this exact non-sequence token combination.
///
/// Callers validate custom formats with [`crate::validate_id_format`] before
/// calling; an unknown token here simply survives substitution verbatim.
pub fn generate_document_id(
    format: Option<&str>,
    template_index: &str,
    date: NaiveDate,
    existing: &HashSet<String>,
) -> Result<String, EngineError> {
    let format = format.unwrap_or(DEFAULT_ID_FORMAT);

    let mut base = format.replace("{TEMPLATE}", template_index);
    for (token, date_format) in CALENDAR_TOKENS {
        if base.contains(token) {
            base = base.replace(token, &date.format(date_format).to_string());
        }
    }

    for seq in 1..=MAX_SEQUENCE {
        let candidate = base.replace("{seq}", &format!("{seq:02}"));
        if !existing.contains(&candidate) {
            return Ok(candidate);
        }
    }

    Err(EngineError::IdSpaceExhausted)
}
