//! Template index code allocation.
//!
//! Every imported template gets a short upper-case code used as the
//! `{TEMPLATE}` token in document IDs. The base code is an acronym (or a
//! three-character prefix for single-word names); collisions with already
//! allocated codes are resolved with numeric suffixes.

use std::collections::HashSet;

/// Derives a unique index code for `name` against the `existing` code set.
///
/// Single-word names yield their first three characters upper-cased (shorter
/// names yield shorter codes, not padded); multi-word names yield the
/// initials of each word upper-cased. If the base code is taken, suffixes
/// 2, 3, 4, … are appended until the code is free.
///
/// Deterministic for a given `(name, existing)` pair; the returned code is
/// never a member of `existing`.
pub fn allocate_index(name: &str, existing: &HashSet<String>) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();

    let base: String = match words.as_slice() {
        [single] => single.chars().take(3).collect::<String>().to_uppercase(),
        many => many
            .iter()
            .filter_map(|w| w.chars().next())
            .collect::<String>()
            .to_uppercase(),
    };

    if !existing.contains(&base) {
        return base;
    }

    let mut suffix = 2u32;
    loop {
        let candidate = format!("{base}{suffix}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a code set from string literals.
    fn codes(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_word_takes_three_letter_prefix() {
        assert_eq!(allocate_index("Invoice", &HashSet::new()), "INV");
    }

    #[test]
    fn short_single_word_is_not_padded() {
        assert_eq!(allocate_index("Ab", &HashSet::new()), "AB");
        assert_eq!(allocate_index("x", &HashSet::new()), "X");
    }

    #[test]
    fn multi_word_takes_initials() {
        assert_eq!(allocate_index("Invoice Draft", &HashSet::new()), "ID");
        assert_eq!(
            allocate_index("Quarterly Revenue Report", &HashSet::new()),
            "QRR"
        );
    }

    #[test]
    fn collision_appends_numeric_suffix() {
        assert_eq!(allocate_index("Internal Draft", &codes(&["ID"])), "ID2");
        assert_eq!(
            allocate_index("Internal Draft", &codes(&["ID", "ID2"])),
            "ID3"
        );
    }

    #[test]
    fn result_is_never_in_existing_set() {
        let existing = codes(&["INV", "INV2", "INV3", "INV4"]);
        let code = allocate_index("Invoice", &existing);
        assert!(!existing.contains(&code));
        assert_eq!(code, "INV5");
    }

    #[test]
    fn allocation_is_deterministic() {
        let existing = codes(&["ID"]);
        let first = allocate_index("Invoice Draft", &existing);
        let second = allocate_index("Invoice Draft", &existing);
        assert_eq!(first, second);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(allocate_index("  Invoice  Draft  ", &HashSet::new()), "ID");
    }
}
