use clap::ValueEnum;
use std::fmt;
use unaccent::{remove_accents, SpecialCaseMapper};

/// Which transform to run over the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Mode {
    /// NFD decomposition with combining diacritics removed
    Strip,
    /// Strip, then rewrite the special-case letters
    Enhanced,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Strip, Mode::Enhanced];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Strip => "strip",
            Mode::Enhanced => "enhanced",
        }
    }

    /// Run the transform; `mapper` is only consulted in enhanced mode
    pub fn apply(&self, text: &str, mapper: &SpecialCaseMapper) -> String {
        match self {
            Mode::Strip => remove_accents(text),
            Mode::Enhanced => mapper.apply(text),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
