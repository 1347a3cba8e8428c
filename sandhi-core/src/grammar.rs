//! The loaded grammar and the components that borrow it

use crate::affix::Affixer;
use crate::compound::{CompoundBuilder, CompoundTables};
use crate::config::{self, GrammarConfig, Metadata};
use crate::conjugation::{ConjugationTables, Conjugator};
use crate::declension::{DeclensionTables, Decliner};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::morph::MorphAnalyzer;
use crate::resolver::SandhiResolver;
use crate::rules::RuleTable;
use crate::segmenter::Segmenter;
use std::path::Path;
use std::sync::{Arc, OnceLock};

static EMBEDDED: OnceLock<Arc<Grammar>> = OnceLock::new();

/// Rule table, lexicon, compound tables and paradigms, compiled once
///
/// Immutable after construction. Components are cheap `Copy` views that
/// borrow from it.
#[derive(Debug, Clone)]
pub struct Grammar {
    metadata: Metadata,
    rules: RuleTable,
    lexicon: Lexicon,
    compounds: CompoundTables,
    conjugations: ConjugationTables,
    declensions: DeclensionTables,
}

impl Grammar {
    /// Compile a parsed configuration
    pub fn from_config(config: &GrammarConfig) -> Result<Self> {
        let grammar = Self {
            metadata: config.metadata.clone(),
            rules: RuleTable::from_config(&config.rules)?,
            lexicon: Lexicon::from_config(&config.lexicon)?,
            compounds: CompoundTables::from_config(&config.compounds)?,
            conjugations: ConjugationTables::from_config(&config.conjugations)?,
            declensions: DeclensionTables::from_config(&config.declensions)?,
        };

        tracing::debug!(
            "loaded grammar {} ({}): {} rules, {} conjugation tables",
            grammar.metadata.name,
            grammar.metadata.code,
            grammar.rules.len(),
            grammar.conjugations.len()
        );

        Ok(grammar)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_config(&config::parse_grammar_config(source, "inline")?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_config(&config::load_grammar_config(path.as_ref())?)
    }

    /// The grammar shipped with the crate
    pub fn embedded() -> &'static Grammar {
        Self::embedded_arc()
    }

    /// Shared handle to the embedded grammar
    pub fn shared() -> Arc<Grammar> {
        Arc::clone(Self::embedded_arc())
    }

    fn embedded_arc() -> &'static Arc<Grammar> {
        EMBEDDED.get_or_init(|| {
            let grammar = Grammar::from_config(config::embedded_grammar_config())
                .expect("Failed to compile embedded grammar");
            Arc::new(grammar)
        })
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn compound_tables(&self) -> &CompoundTables {
        &self.compounds
    }

    pub fn conjugation_tables(&self) -> &ConjugationTables {
        &self.conjugations
    }

    pub fn declension_tables(&self) -> &DeclensionTables {
        &self.declensions
    }

    pub fn resolver(&self) -> SandhiResolver<'_> {
        SandhiResolver::new(&self.rules)
    }

    pub fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(&self.rules)
    }

    pub fn analyzer(&self) -> MorphAnalyzer<'_> {
        MorphAnalyzer::new(&self.lexicon, self.segmenter())
    }

    pub fn compound_builder(&self) -> CompoundBuilder<'_> {
        CompoundBuilder::new(&self.compounds, self.resolver())
    }

    pub fn conjugator(&self) -> Conjugator<'_> {
        Conjugator::new(&self.conjugations, &self.lexicon)
    }

    pub fn decliner(&self) -> Decliner<'_> {
        Decliner::new(&self.declensions)
    }

    pub fn affixer(&self) -> Affixer<'_> {
        Affixer::new(&self.lexicon, self.resolver())
    }
}
