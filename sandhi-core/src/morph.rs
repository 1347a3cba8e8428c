//! Morphological decomposition into prefix, stem and suffix

use crate::lexicon::{Lexicon, SuffixPool};
use crate::phoneme::Phoneme;
use crate::script;
use crate::segmenter::{Segmenter, SplitCandidate};
use serde::{Deserialize, Serialize};

/// Result of analysing one word
///
/// Every field except `original` is optional; a word the analyzer cannot
/// make sense of yields an empty decomposition rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub original: String,
    pub prefix: Option<String>,
    pub stem: Option<String>,
    pub root: Option<String>,
    pub suffix: Option<String>,
    /// Every pool listing the stripped suffix
    pub suffix_pools: Vec<SuffixPool>,
    /// Split candidates for a stem that matched no root
    pub residual_splits: Vec<SplitCandidate>,
}

impl Decomposition {
    pub fn empty(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_none()
            && self.stem.is_none()
            && self.root.is_none()
            && self.suffix.is_none()
            && self.residual_splits.is_empty()
    }
}

/// Strips the longest prefix and suffix, then looks the stem up
#[derive(Debug, Clone, Copy)]
pub struct MorphAnalyzer<'g> {
    lexicon: &'g Lexicon,
    segmenter: Segmenter<'g>,
}

impl<'g> MorphAnalyzer<'g> {
    pub fn new(lexicon: &'g Lexicon, segmenter: Segmenter<'g>) -> Self {
        Self { lexicon, segmenter }
    }

    pub fn analyze(&self, word: &str) -> Decomposition {
        let original = script::canonicalize(word.trim());
        let phonemes = script::decode(&original);

        if !script::has_known_phonemes(&phonemes) {
            return Decomposition::empty(original);
        }

        let mut decomposition = Decomposition::empty(original);
        let mut rest: &[Phoneme] = &phonemes;

        if let Some(upasarga) = self.lexicon.longest_prefix(rest) {
            decomposition.prefix = Some(upasarga.form.clone());
            rest = &rest[upasarga.phonemes.len()..];
        }

        if let Some((len, pools)) = self.lexicon.longest_suffix(rest) {
            let (stem, suffix) = rest.split_at(rest.len() - len);
            decomposition.suffix = Some(script::render(suffix));
            decomposition.suffix_pools = pools.to_vec();
            rest = stem;
        }

        decomposition.stem = Some(script::render(rest));

        match self.lexicon.find_root(rest) {
            Some(root) => decomposition.root = Some(root.root.clone()),
            None => decomposition.residual_splits = self.segmenter.split_phonemes(rest),
        }

        tracing::debug!(
            "analyzed {}: prefix={:?} stem={:?} suffix={:?} root={:?}",
            decomposition.original,
            decomposition.prefix,
            decomposition.stem,
            decomposition.suffix,
            decomposition.root
        );

        decomposition
    }
}
