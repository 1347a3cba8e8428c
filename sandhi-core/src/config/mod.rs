//! Grammar configuration
//!
//! Grammar data (rules, lexicon, compound tables, paradigms) lives in TOML.
//! The default grammar is embedded in the crate; external files follow the
//! same schema.

mod loader;
mod types;

pub use loader::{
    embedded_grammar_config, load_grammar_config, parse_grammar_config, EMBEDDED_GRAMMAR,
};
pub use types::{
    CaseEndingConfig, CompoundConfig, ConjugationConfig, DeclensionConfig, GrammarConfig,
    LexiconConfig, Metadata, PatternConfig, RootConfig, RuleConfig, StemPolicyConfig,
    SubstitutionConfig, SuffixPools, UpasargaConfig,
};
