use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

use crate::escape::decode_escapes;
use crate::normalize::has_accents;

#[derive(Debug, Deserialize, PartialEq)]
struct Mapping {
    source: String,
    target: String,
}

/// One validated row of a substitution table
///
/// The source is a single character that survives accent stripping, so the
/// row can actually match, and the target a non-empty string that
/// [`has_accents`] reports as plain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpecialCase {
    source: char,
    target: String,
}

impl SpecialCase {
    pub fn new(source: char, target: impl Into<String>) -> Result<Self> {
        let target = target.into();
        if has_accents(source.encode_utf8(&mut [0; 4])) {
            bail!("source {source:?} is removed by accent stripping and can never match");
        }
        if target.is_empty() {
            bail!("replacement for {source:?} is empty");
        }
        if has_accents(&target) {
            bail!("replacement {target:?} for {source:?} is not plain text");
        }
        Ok(Self { source, target })
    }

    pub fn source(&self) -> char {
        self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for SpecialCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Unescape and compose a field so that `é` and `é` name the same key
fn normalize_field(field: &str) -> Result<String> {
    Ok(decode_escapes(field)?.nfc().collect())
}

fn parse_record(record: &Mapping) -> Result<SpecialCase> {
    let source = normalize_field(&record.source)?;
    let mut chars = source.chars();
    let key = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => bail!(
            "source {:?} must be exactly one character",
            record.source
        ),
    };
    SpecialCase::new(key, normalize_field(&record.target)?)
}

/// Parse a substitution table from CSV data
///
/// The data needs a `source,target` header. Fields are trimmed, may use
/// `\uXXXX` escapes and are NFC-composed before validation.
///
/// # Errors
/// Returns the first malformed or invalid record, numbered from 1.
pub fn parse_mappings(data: &str) -> Result<Vec<SpecialCase>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(data.as_bytes());
    let mut cases = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let record: Mapping =
            result.with_context(|| format!("malformed mapping record {}", index + 1))?;
        let case =
            parse_record(&record).with_context(|| format!("invalid mapping record {}", index + 1))?;
        cases.push(case);
    }
    Ok(cases)
}
