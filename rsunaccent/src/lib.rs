//! RSUnaccent - command line tooling for the unaccent crate
//!
//! This crate holds what the `unaccent` and `unaccent_test` binaries share:
//! the transform selection and UTF-8 checked input reading.

pub mod mode;
pub mod source;

pub use mode::Mode;
pub use source::{read_text, texts_or_stdin};
