//! Ending tables shared by verb and noun paradigms

use crate::error::{Result, SandhiError};
use crate::phoneme::{Phoneme, PhonemeBuf};
use crate::script;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grammatical number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vachana {
    Eka,
    Dvi,
    Bahu,
}

impl Vachana {
    pub const ALL: [Vachana; 3] = [Vachana::Eka, Vachana::Dvi, Vachana::Bahu];

    pub fn name(self) -> &'static str {
        match self {
            Vachana::Eka => "eka",
            Vachana::Dvi => "dvi",
            Vachana::Bahu => "bahu",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Vachana::Eka => &["ekavachana", "singular", "एक", "एकवचन"],
            Vachana::Dvi => &["dvivachana", "dual", "द्वि", "द्विवचन"],
            Vachana::Bahu => &["bahuvachana", "plural", "बहु", "बहुवचन"],
        }
    }
}

impl fmt::Display for Vachana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vachana {
    type Err = SandhiError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named(s, "vachana", &Self::ALL, |v| v.name(), |v| v.aliases())
    }
}

/// Look a closed-enum value up by its ASCII name or one of its aliases
pub(crate) fn parse_named<T: Copy>(
    s: &str,
    what: &str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
    aliases: impl Fn(T) -> &'static [&'static str],
) -> Result<T> {
    let key = s.trim();
    all.iter()
        .copied()
        .find(|&value| {
            name(value).eq_ignore_ascii_case(key)
                || aliases(value)
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(key))
        })
        .ok_or_else(|| SandhiError::invalid_argument(what, s))
}

/// One table of endings and the stem-final vowel they replace
#[derive(Debug, Clone)]
pub struct Endings {
    stem_final: Option<Phoneme>,
    cells: Vec<PhonemeBuf>,
}

impl Endings {
    /// Compile `expected` endings; `label` names the table in errors
    pub fn compile(
        label: &str,
        stem_final: Option<&str>,
        endings: &[String],
        expected: usize,
    ) -> Result<Self> {
        if endings.len() != expected {
            return Err(SandhiError::ConfigurationError(format!(
                "{label}: expected {expected} endings, found {}",
                endings.len()
            )));
        }

        let stem_final = match stem_final {
            Some(text) => {
                match script::decode(&script::canonicalize(text.trim())).as_slice() {
                    [vowel] if vowel.is_vowel() => Some(*vowel),
                    _ => {
                        return Err(SandhiError::ConfigurationError(format!(
                            "{label}: stem_final '{text}' must be a single vowel"
                        )))
                    }
                }
            }
            None => None,
        };

        let mut cells = Vec::with_capacity(expected);
        for ending in endings {
            let cell = script::decode_buf(&script::canonicalize(ending.trim()));
            if cell.is_empty() {
                return Err(SandhiError::ConfigurationError(format!(
                    "{label}: empty ending"
                )));
            }
            cells.push(cell);
        }

        Ok(Self { stem_final, cells })
    }

    pub fn stem_final(&self) -> Option<Phoneme> {
        self.stem_final
    }

    pub fn cell(&self, index: usize) -> &[Phoneme] {
        &self.cells[index]
    }

    pub fn cells(&self) -> impl Iterator<Item = &[Phoneme]> + '_ {
        self.cells.iter().map(|cell| cell.as_slice())
    }

    /// Remove the stem-final vowel if present, then append the ending
    pub fn attach(&self, stem: &[Phoneme], index: usize) -> String {
        let base = match (self.stem_final, stem.split_last()) {
            (Some(final_vowel), Some((last, rest))) if *last == final_vowel => rest,
            _ => stem,
        };

        let mut form = Vec::with_capacity(base.len() + self.cells[index].len());
        form.extend_from_slice(base);
        form.extend_from_slice(&self.cells[index]);
        script::render(&form)
    }
}

/// Decode a stem argument, rejecting blank input
pub(crate) fn decode_stem(stem: &str) -> Result<Vec<Phoneme>> {
    let stem = script::canonicalize(stem.trim());
    if stem.is_empty() {
        return Err(SandhiError::InvalidInput("stem is empty".to_string()));
    }
    Ok(script::decode(&stem))
}
