//! Validation of raw input before it reaches the transforms

use anyhow::{bail, Result};

/// Interpret `bytes` as UTF-8 text
///
/// The transforms only accept `&str`, so byte input from files or stdin has
/// to pass through here first. Invalid data is rejected rather than replaced.
///
/// # Errors
/// Reports the byte offset of the first invalid sequence.
pub fn decode_input(bytes: &[u8]) -> Result<&str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => bail!(
            "input is not valid UTF-8: invalid sequence at byte {}",
            e.valid_up_to()
        ),
    }
}
