//! Extensible special-case mapping
//!
//! [`SpecialCaseMapper`] starts from a copy of the canonical table and lets
//! callers add their own rows, for instance Polish `ł` or Maltese `ħ`. The
//! canonical table itself is never modified.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::mapparse::{parse_mappings, SpecialCase};
use crate::normalize::remove_accents;
use crate::special::{substitute, SPECIAL_CASES};

/// Accent remover with a customizable substitution table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCaseMapper {
    table: HashMap<char, String>,
}

impl SpecialCaseMapper {
    /// Create a mapper holding the canonical table
    pub fn new() -> Self {
        Self {
            table: SPECIAL_CASES
                .iter()
                .map(|&(source, target)| (source, target.to_string()))
                .collect(),
        }
    }

    /// Create a mapper from the canonical table plus the rows of a CSV file
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read mapping file: {}", path.display()))?;
        let mut mapper = Self::new();
        mapper
            .extend_from_csv(&data)
            .with_context(|| format!("Failed to load mapping file: {}", path.display()))?;
        Ok(mapper)
    }

    /// Add the rows of CSV mapping data, returning how many were read
    ///
    /// Nothing is added when any row is invalid.
    pub fn extend_from_csv(&mut self, data: &str) -> Result<usize> {
        let cases = parse_mappings(data)?;
        let count = cases.len();
        self.extend(cases);
        debug!("loaded {count} custom mappings");
        Ok(count)
    }

    pub fn with_mappings<I>(mut self, cases: I) -> Self
    where
        I: IntoIterator<Item = SpecialCase>,
    {
        self.extend(cases);
        self
    }

    pub fn lookup(&self, c: char) -> Option<&str> {
        self.table.get(&c).map(String::as_str)
    }

    /// Remove accents, then substitute with this mapper's table
    ///
    /// With no custom rows this is the same as
    /// [`remove_accents_enhanced`](crate::remove_accents_enhanced).
    pub fn apply(&self, text: &str) -> String {
        substitute(&remove_accents(text), |c| self.lookup(c))
    }

    /// All rows ordered by source character
    pub fn mappings(&self) -> Vec<(char, &str)> {
        let mut rows: Vec<(char, &str)> = self
            .table
            .iter()
            .map(|(&source, target)| (source, target.as_str()))
            .collect();
        rows.sort_unstable_by_key(|&(source, _)| source);
        rows
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for SpecialCaseMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<SpecialCase> for SpecialCaseMapper {
    /// Later rows replace earlier ones with the same source
    fn extend<I: IntoIterator<Item = SpecialCase>>(&mut self, cases: I) {
        for case in cases {
            let target = case.target().to_string();
            if let Some(previous) = self.table.insert(case.source(), target) {
                warn!(
                    "mapping for {:?} replaced: {:?} -> {:?}",
                    case.source(),
                    previous,
                    case.target()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::special::remove_accents_enhanced;

    #[test]
    fn test_default_matches_enhanced() {
        let mapper = SpecialCaseMapper::default();
        assert_eq!(mapper.len(), SPECIAL_CASES.len());
        for text in ["Straße", "Søren Kierkegård", "François et Œdipe", "Привёт", ""] {
            assert_eq!(mapper.apply(text), remove_accents_enhanced(text));
        }
    }

    #[test]
    fn test_extend_from_csv() {
        let mut mapper = SpecialCaseMapper::new();
        let added = mapper
            .extend_from_csv("source,target\nŁ,L\nł,l\n")
            .expect("Failed to extend mapper in test");
        assert_eq!(added, 2);
        assert_eq!(mapper.apply("Łódź"), "Lodz");
        assert_eq!(mapper.apply("Straße"), "Strasse");
    }

    #[test]
    fn test_invalid_csv_adds_nothing() {
        let mut mapper = SpecialCaseMapper::new();
        assert!(mapper.extend_from_csv("source,target\nł,l\nxy,z\n").is_err());
        assert_eq!(mapper, SpecialCaseMapper::new());
    }

    #[test]
    fn test_override_canonical_entry() {
        let mapper =
            SpecialCaseMapper::new().with_mappings(vec![SpecialCase::new('ß', "sz").unwrap()]);
        assert_eq!(mapper.apply("Straße"), "Strasze");
        assert_eq!(mapper.len(), SPECIAL_CASES.len());
        // The canonical table is unaffected
        assert_eq!(remove_accents_enhanced("Straße"), "Strasse");
    }

    #[test]
    fn test_custom_rows_not_rescanned() {
        let mapper = SpecialCaseMapper::new().with_mappings(vec![
            SpecialCase::new('ŋ', "ng").unwrap(),
            SpecialCase::new('n', "N").unwrap(),
        ]);
        assert_eq!(mapper.apply("ŋ"), "ng");
    }

    #[test]
    fn test_mappings_sorted() {
        let mapper = SpecialCaseMapper::new();
        let rows = mapper.mappings();
        assert_eq!(rows.len(), SPECIAL_CASES.len());
        assert!(rows.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(rows.contains(&('þ', "th")));
    }

    #[test]
    fn test_lookup() {
        let mapper = SpecialCaseMapper::new();
        assert_eq!(mapper.lookup('Œ'), Some("OE"));
        assert_eq!(mapper.lookup('o'), None);
        assert!(!mapper.is_empty());
    }

    #[test]
    fn test_missing_file() {
        assert!(SpecialCaseMapper::from_csv_file("/nonexistent/mappings.csv").is_err());
    }
}
