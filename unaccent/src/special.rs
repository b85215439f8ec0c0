//! Special-case substitutions applied after accent removal
//!
//! Canonical decomposition leaves ligatures (æ, œ, ĳ), letters with strokes
//! (ø, ð) and letters without a base form (ß, þ) alone. The table below maps
//! each of them to a plain replacement. Upper and lower case are separate
//! entries.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::normalize::remove_accents;

/// Revision of [`SPECIAL_CASES`]; bumped whenever an entry changes
pub const SPECIAL_CASES_VERSION: &str = "1.0.0";

/// Canonical substitution table, in audit order
///
/// The Cyrillic rows are already reduced by NFD stripping and are kept so
/// that the table documents every letter the enhanced form rewrites.
pub const SPECIAL_CASES: &[(char, &str)] = &[
    ('æ', "ae"),
    ('Æ', "AE"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('ð', "d"),
    ('Ð', "D"),
    ('ø', "o"),
    ('Ø', "O"),
    ('ß', "ss"),
    ('þ', "th"),
    ('Þ', "TH"),
    ('ĳ', "ij"),
    ('Ĳ', "IJ"),
    ('й', "и"),
    ('Й', "И"),
    ('ё', "е"),
    ('Ё', "Е"),
];

static SPECIAL_CASE_INDEX: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| SPECIAL_CASES.iter().copied().collect());

/// Look up the replacement for a single character in the canonical table
pub fn special_case(c: char) -> Option<&'static str> {
    SPECIAL_CASE_INDEX.get(&c).copied()
}

/// Replace every table key in `text`, one character at a time
///
/// Replacements are never rescanned.
pub(crate) fn substitute<'a, F>(text: &str, lookup: F) -> String
where
    F: Fn(char) -> Option<&'a str>,
{
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match lookup(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    result
}

/// Remove accents, then apply the canonical special-case table
///
/// # Example
/// ```
/// use unaccent::remove_accents_enhanced;
///
/// assert_eq!(remove_accents_enhanced("Straße"), "Strasse");
/// assert_eq!(remove_accents_enhanced("François et Œdipe"), "Francois et OEdipe");
/// ```
pub fn remove_accents_enhanced(text: &str) -> String {
    let base = remove_accents(text);
    if base.is_ascii() {
        return base;
    }
    substitute(&base, special_case)
}
