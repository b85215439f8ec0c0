//! Diacritic removal by canonical decomposition
//!
//! Text is decomposed with NFD so that precomposed letters become a base
//! character followed by combining marks. Every mark from the Combining
//! Diacritical Marks block (U+0300 to U+036F) is then dropped and all other
//! code points are kept in their original order.

use unicode_normalization::UnicodeNormalization;

/// Check whether `c` belongs to the Combining Diacritical Marks block
pub fn is_combining_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Remove accents from text
///
/// Marks from other combining blocks (Cyrillic titlo, Hebrew points, the
/// supplement blocks and so on) are left untouched, as are characters without
/// a canonical decomposition. Compatibility decomposition is never applied,
/// so ligatures such as `ĳ` and `ﬁ` survive.
///
/// # Arguments
/// * `text` - The input text
///
/// # Returns
/// A new String with every U+0300..U+036F mark of the NFD form removed
pub fn remove_accents(text: &str) -> String {
    // NFD is the identity on ASCII
    if text.is_ascii() {
        return text.to_string();
    }
    text.nfd().filter(|&c| !is_combining_diacritic(c)).collect()
}

/// Check if text changes under [`remove_accents`]
///
/// This is the behavioural definition `remove_accents(text) != text`, so any
/// input whose NFD form differs from itself counts, even when no mark ends up
/// being removed (a Hangul syllable decomposes into jamo, for instance).
pub fn has_accents(text: &str) -> bool {
    if text.is_ascii() {
        return false;
    }
    // Same comparison as remove_accents(text) != text, without the allocation
    !text
        .nfd()
        .filter(|&c| !is_combining_diacritic(c))
        .eq(text.chars())
}
