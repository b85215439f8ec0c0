//! Word-level accent reports built on Unicode word segmentation

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::mapper::SpecialCaseMapper;
use crate::normalize::has_accents;

/// Returns the words of `text` that carry accents, in order of appearance.
///
/// Words are found with Unicode word segmentation, so punctuation and
/// whitespace never show up in the result. Repeated words are reported each
/// time they occur.
///
/// # Examples
///
/// ```
/// use unaccent::tokenize::accented_words;
///
/// assert_eq!(accented_words("Crème brûlée, s'il vous plaît"), vec!["Crème", "brûlée", "plaît"]);
/// ```
pub fn accented_words(text: &str) -> Vec<&str> {
    text.unicode_words().filter(|word| has_accents(word)).collect()
}

/// Pairs each distinct word that `mapper` changes with its rewritten form.
///
/// Unlike [`accented_words`] this also catches words whose only change
/// comes from the substitution table, such as `Straße`.
pub fn strip_words<'a>(text: &'a str, mapper: &SpecialCaseMapper) -> Vec<(&'a str, String)> {
    let mut seen = HashSet::new();
    let mut pairs = Vec::new();
    for word in text.unicode_words() {
        if !seen.insert(word) {
            continue;
        }
        let stripped = mapper.apply(word);
        if stripped != word {
            pairs.push((word, stripped));
        }
    }
    pairs
}
