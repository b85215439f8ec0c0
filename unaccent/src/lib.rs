//! Unaccent - accent stripping for search keys, slugs and comparisons
//!
//! Three operations make up the core:
//!
//! - [`remove_accents`] decomposes text with NFD and drops every mark in the
//!   Combining Diacritical Marks block (U+0300 to U+036F)
//! - [`has_accents`] reports whether [`remove_accents`] would change the text
//! - [`remove_accents_enhanced`] additionally rewrites the letters listed in
//!   [`SPECIAL_CASES`] (ligatures, letters with strokes, ß and þ)
//!
//! All three are pure functions over `&str` and never fail. Byte input is
//! validated separately with [`decode_input`].
//!
//! ```
//! use unaccent::{has_accents, remove_accents, remove_accents_enhanced};
//!
//! assert_eq!(remove_accents("Mötley Crüe"), "Motley Crue");
//! assert!(has_accents("café"));
//! assert_eq!(remove_accents_enhanced("Søren Kierkegård"), "Soren Kierkegard");
//! ```

pub mod escape;
pub mod input;
pub mod mapparse;
pub mod mapper;
pub mod normalize;
pub mod special;
pub mod tokenize;

pub use input::decode_input;
pub use mapparse::{parse_mappings, SpecialCase};
pub use mapper::SpecialCaseMapper;
pub use normalize::{has_accents, is_combining_diacritic, remove_accents};
pub use special::{remove_accents_enhanced, special_case, SPECIAL_CASES, SPECIAL_CASES_VERSION};
