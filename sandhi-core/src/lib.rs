//! Rule engine for Sanskrit sandhi, sandhi-viched and word analysis
//!
//! Text is decoded into phonemes, and every operation works on phoneme
//! classes through one table of context-sensitive rewrite rules:
//!
//! - **Merge** ([`SandhiResolver`]): apply the most specific rule at a word
//!   boundary, or concatenate when none applies.
//! - **Split** ([`Segmenter`]): run the rules backwards and return a ranked,
//!   finite list of possible junctions.
//! - **Analysis** ([`MorphAnalyzer`]): strip the longest prefix and suffix,
//!   look the stem up in the root lexicon, and hand leftovers to the segmenter.
//!
//! Compounds, verb and noun paradigms and affixation sit on the same tables.
//! All grammar data is loaded once into a [`Grammar`]; the components are
//! `Copy` views borrowing from it.
//!
//! # Example
//!
//! ```rust
//! use sandhi_core::{CompoundKind, Grammar};
//!
//! let grammar = Grammar::embedded();
//!
//! let merged = grammar.resolver().apply("गुरु", "उपदेशः").unwrap();
//! assert_eq!(merged.merged, "गुरूपदेशः");
//!
//! let splits = grammar.segmenter().split("गुरूपदेशः");
//! assert!(splits.iter().any(|c| c.left == "गुरु" && c.right == "उपदेशः"));
//!
//! let compound = grammar
//!     .compound_builder()
//!     .build("राजन्", "पुरुष", CompoundKind::Tatpurusa)
//!     .unwrap();
//! assert_eq!(compound.merged(), Some("राजपुरुष"));
//! ```

pub mod affix;
pub mod compound;
pub mod config;
pub mod conjugation;
pub mod declension;
pub mod error;
pub mod gloss;
pub mod grammar;
pub mod lexicon;
pub mod morph;
pub mod paradigm;
pub mod phoneme;
pub mod pratyahara;
pub mod resolver;
pub mod rules;
pub mod script;
pub mod segmenter;

pub use affix::Affixer;
pub use compound::{Compound, CompoundBuilder, CompoundKind};
pub use conjugation::{Conjugator, Lakara, Pada, Paradigm, Purusha, VerbAnalysis};
pub use declension::{Declension, Decliner, Gender, Vibhakti};
pub use error::{Result, SandhiError};
pub use gloss::{GlossEntry, GlossStore, MemoryGlossStore, StoreError};
pub use grammar::Grammar;
pub use lexicon::{RootPada, SuffixPool};
pub use morph::{Decomposition, MorphAnalyzer};
pub use paradigm::Vachana;
pub use phoneme::{Phoneme, PhonemeClass, PhonemeClassifier};
pub use pratyahara::Pratyahara;
pub use resolver::{MergeResult, SandhiResolver};
pub use rules::{RuleEntry, RuleId, RuleKind, RuleTable};
pub use segmenter::{Segmenter, SplitCandidate};
