//! Public API for the sandhi rule engine
//!
//! This crate wraps [`sandhi_core`] behind a small, stable surface: a
//! configurable [`Processor`], serialisable DTOs and a handful of one-shot
//! functions that run against the embedded grammar.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dto::{Metadata, WordAnalysis};
use regex::Regex;
use sandhi_core::{
    Compound, CompoundKind, Declension, Decomposition, Gender, Grammar, Lakara, MergeResult, Pada,
    Paradigm, SplitCandidate, VerbAnalysis,
};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, TextAnalysis};
pub use error::{ApiError, Result};

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Runs of Devanagari letters and signs; dandas and digits separate words
fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| {
        Regex::new(r"[\x{0900}-\x{0963}\x{0971}-\x{097F}]+")
            .expect("Failed to compile word pattern")
    })
}

/// Main entry point for sandhi processing
///
/// Cheap to clone; clones share the loaded grammar.
#[derive(Debug, Clone)]
pub struct Processor {
    grammar: Arc<Grammar>,
    config: Config,
}

impl Processor {
    /// Create a processor over the embedded grammar
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let grammar = match &config.grammar_path {
            Some(path) => {
                tracing::debug!("loading grammar from {}", path.display());
                Arc::new(Grammar::from_file(path)?)
            }
            None => Grammar::shared(),
        };

        Ok(Self { grammar, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The grammar this processor runs on
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Merge two words at their boundary
    pub fn join(&self, left: &str, right: &str) -> Result<MergeResult> {
        Ok(self.grammar.resolver().apply(left, right)?)
    }

    /// Ranked split candidates, capped at `max_split_candidates`
    pub fn split(&self, word: &str) -> Vec<SplitCandidate> {
        let mut candidates = self.grammar.segmenter().split(word);
        if let Some(limit) = self.config.max_split_candidates {
            candidates.truncate(limit);
        }
        candidates
    }

    /// Decompose a single word
    pub fn analyze(&self, word: &str) -> Decomposition {
        self.grammar.analyzer().analyze(word)
    }

    /// Form a compound; `kind` is parsed as a [`CompoundKind`]
    pub fn samasa(&self, first: &str, second: &str, kind: &str) -> Result<Compound> {
        let kind: CompoundKind = kind.parse()?;
        Ok(self.grammar.compound_builder().build(first, second, kind)?)
    }

    /// Full verb paradigm for a stem
    pub fn conjugate(&self, stem: &str, lakara: &str, pada: &str) -> Result<Paradigm> {
        let lakara: Lakara = lakara.parse()?;
        let pada: Pada = pada.parse()?;
        Ok(self.grammar.conjugator().conjugate(stem, lakara, pada)?)
    }

    /// Identify person, number and tense of a finite verb form
    pub fn detect_verb(&self, form: &str) -> Option<VerbAnalysis> {
        self.grammar.conjugator().detect(form)
    }

    /// Full noun paradigm for a stem
    pub fn decline(&self, stem: &str, gender: &str) -> Result<Declension> {
        let gender: Gender = gender.parse()?;
        Ok(self.grammar.decliner().decline(stem, gender)?)
    }

    /// Tokenise a text into Devanagari words and analyse each one
    pub fn analyze_text(&self, input: Input) -> Result<TextAnalysis> {
        let start = Instant::now();

        let text = input.read_text()?;
        let tokens: Vec<(usize, &str)> = word_pattern()
            .find_iter(&text)
            .map(|m| (m.start(), m.as_str()))
            .collect();

        let (words, parallel) = self.analyze_tokens(&tokens);
        let elapsed = start.elapsed();

        tracing::debug!(
            "analysed {} words in {}ms (parallel: {parallel})",
            words.len(),
            elapsed.as_millis()
        );

        Ok(TextAnalysis {
            metadata: Metadata {
                word_count: words.len(),
                total_bytes: text.len(),
                total_chars: text.chars().count(),
                processing_time_ms: elapsed.as_millis() as u64,
                parallel,
            },
            words,
        })
    }

    #[cfg(feature = "parallel")]
    fn analyze_tokens(&self, tokens: &[(usize, &str)]) -> (Vec<WordAnalysis>, bool) {
        use rayon::prelude::*;

        if !self.config.parallel {
            return (self.analyze_sequential(tokens), false);
        }

        let analyzer = self.grammar.analyzer();
        let words = tokens
            .par_iter()
            .map(|&(byte_offset, word)| WordAnalysis {
                word: word.to_string(),
                byte_offset,
                decomposition: analyzer.analyze(word),
            })
            .collect();
        (words, true)
    }

    #[cfg(not(feature = "parallel"))]
    fn analyze_tokens(&self, tokens: &[(usize, &str)]) -> (Vec<WordAnalysis>, bool) {
        (self.analyze_sequential(tokens), false)
    }

    fn analyze_sequential(&self, tokens: &[(usize, &str)]) -> Vec<WordAnalysis> {
        let analyzer = self.grammar.analyzer();
        tokens
            .iter()
            .map(|&(byte_offset, word)| WordAnalysis {
                word: word.to_string(),
                byte_offset,
                decomposition: analyzer.analyze(word),
            })
            .collect()
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new().expect("default processor creation should not fail")
    }
}

// Convenience functions over the embedded grammar

/// Merge two words; falls back to plain concatenation on invalid input
pub fn apply_sandhi(w1: &str, w2: &str) -> String {
    match Grammar::embedded().resolver().apply(w1, w2) {
        Ok(result) => result.merged,
        Err(e) => {
            tracing::debug!("apply_sandhi fell back to concatenation: {e}");
            format!("{w1}{w2}")
        }
    }
}

/// Best split of a word, or the word itself with an empty right part
pub fn sandhi_viched(word: &str) -> (String, String) {
    Grammar::embedded()
        .segmenter()
        .split(word)
        .into_iter()
        .next()
        .map(|candidate| (candidate.left, candidate.right))
        .unwrap_or_else(|| (word.to_string(), String::new()))
}

/// Decompose a word into prefix, stem, root and suffix
pub fn analyze_word(word: &str) -> Decomposition {
    Grammar::embedded().analyzer().analyze(word)
}

/// Form a compound of the named kind
///
/// Returns `Ok(None)` when the kind does not apply to the pair; an unknown
/// kind is an error.
pub fn form_samasa(w1: &str, w2: &str, kind: &str) -> Result<Option<String>> {
    let kind: CompoundKind = kind.parse()?;
    let compound = Grammar::embedded().compound_builder().build(w1, w2, kind)?;
    Ok(compound.merged().map(str::to_string))
}

/// Analyse a text with default configuration
pub fn analyze_text(text: &str) -> Result<TextAnalysis> {
    Processor::new()?.analyze_text(Input::from_text(text))
}

/// Analyse a file with default configuration
pub fn analyze_file<P: AsRef<std::path::Path>>(path: P) -> Result<TextAnalysis> {
    Processor::new()?.analyze_text(Input::from_file(path.as_ref().to_path_buf()))
}
