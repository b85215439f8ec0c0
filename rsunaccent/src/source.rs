use anyhow::{Context, Result};
use std::io::Read;
use unaccent::decode_input;

/// Read all of `reader` and check that it is UTF-8
pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .context("Failed to read input")?;
    Ok(decode_input(&bytes)?.to_string())
}

/// Use the command line texts, or stdin when none were given
pub fn texts_or_stdin(texts: Vec<String>) -> Result<Vec<String>> {
    if texts.is_empty() {
        Ok(vec![read_text(std::io::stdin().lock())?])
    } else {
        Ok(texts)
    }
}
