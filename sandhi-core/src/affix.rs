//! Attaching prefixes (upasarga) and suffixes (pratyaya)

use crate::error::{Result, SandhiError};
use crate::lexicon::{Lexicon, SuffixPool};
use crate::phoneme::PhonemeClass;
use crate::resolver::{MergeResult, SandhiResolver};
use crate::script;

#[derive(Debug, Clone, Copy)]
pub struct Affixer<'g> {
    lexicon: &'g Lexicon,
    resolver: SandhiResolver<'g>,
}

impl<'g> Affixer<'g> {
    pub fn new(lexicon: &'g Lexicon, resolver: SandhiResolver<'g>) -> Self {
        Self { lexicon, resolver }
    }

    /// Prefix `word` with a known upasarga, fusing the junction
    pub fn add_upasarga(&self, word: &str, upasarga: &str) -> Result<MergeResult> {
        let prefix = self
            .lexicon
            .upasarga(upasarga)
            .ok_or_else(|| SandhiError::invalid_argument("upasarga", upasarga))?;
        self.resolver.apply(&prefix.form, word)
    }

    pub fn upasarga_meanings(&self, upasarga: &str) -> Result<&'g [String]> {
        self.lexicon
            .upasarga(upasarga)
            .map(|u| u.meanings.as_slice())
            .ok_or_else(|| SandhiError::invalid_argument("upasarga", upasarga))
    }

    /// Append a suffix from the named pool
    ///
    /// A vowel-initial suffix replaces a stem-final short vowel; anything
    /// else is appended as is.
    pub fn add_pratyaya(&self, word: &str, pratyaya: &str, pool: &str) -> Result<String> {
        let pool: SuffixPool = pool.parse()?;
        let suffix = script::canonicalize(pratyaya.trim());
        if !self.lexicon.pool(pool).contains(&suffix) {
            return Err(SandhiError::InvalidArgument(format!(
                "'{pratyaya}' is not a {pool} suffix"
            )));
        }

        let word = script::canonicalize(word.trim());
        if word.is_empty() {
            return Err(SandhiError::InvalidInput("word is empty".to_string()));
        }

        let mut phonemes = script::decode(&word);
        let suffix = script::decode(&suffix);

        let suffix_starts_with_vowel = suffix.first().is_some_and(|p| p.is_vowel());
        let stem_ends_short = phonemes
            .last()
            .is_some_and(|p| p.class() == PhonemeClass::ShortVowel);
        if suffix_starts_with_vowel && stem_ends_short && phonemes.len() > 1 {
            phonemes.pop();
        }

        phonemes.extend(suffix);
        Ok(script::render(&phonemes))
    }
}
