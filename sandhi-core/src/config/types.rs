//! TOML schema for grammar data

use crate::error::SandhiError;
use crate::phoneme::PhonemeClass;
use crate::rules::RuleKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root grammar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarConfig {
    pub metadata: Metadata,
    pub rules: Vec<RuleConfig>,
    pub lexicon: LexiconConfig,
    pub compounds: CompoundConfig,
    #[serde(default)]
    pub conjugations: Vec<ConjugationConfig>,
    #[serde(default)]
    pub declensions: Vec<DeclensionConfig>,
}

/// Grammar metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// One `[[rules]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Generated from kind and position when absent
    #[serde(default)]
    pub id: Option<String>,
    pub kind: RuleKind,
    pub left: PatternConfig,
    pub right: PatternConfig,
    pub output: String,
    #[serde(default)]
    pub specificity: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Either a literal string or a class table
///
/// ```toml
/// left = "इ"
/// right = { pratyahara = "अच्" }
/// right = { class = ["palatal"], pratyahara = "खर्" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternConfig {
    Literal(String),
    Class {
        #[serde(default)]
        class: Vec<PhonemeClass>,
        #[serde(default)]
        pratyahara: Option<String>,
    },
}

/// Prefixes, suffix pools and the root lexicon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub upasargas: Vec<UpasargaConfig>,
    pub suffixes: SuffixPools,
    #[serde(default)]
    pub roots: Vec<RootConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpasargaConfig {
    pub form: String,
    #[serde(default)]
    pub meanings: Vec<String>,
}

/// Suffix lists, pooled for longest-match stripping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuffixPools {
    #[serde(default)]
    pub krit: Vec<String>,
    #[serde(default)]
    pub taddhita: Vec<String>,
    #[serde(default)]
    pub sarvanama: Vec<String>,
    #[serde(default)]
    pub vibhakti: Vec<String>,
    #[serde(default)]
    pub sandhi: Vec<String>,
    #[serde(default)]
    pub dhatu: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootConfig {
    pub root: String,
    /// Present stems and other surface forms that identify the root
    #[serde(default)]
    pub stems: Vec<String>,
    #[serde(default)]
    pub pada: Option<String>,
    #[serde(default)]
    pub gloss: Option<String>,
}

/// Stem reduction tables for compounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundConfig {
    /// Vowels that must remain after a case ending is removed
    #[serde(default = "default_min_stem_syllables")]
    pub min_stem_syllables: usize,
    pub case_endings: Vec<CaseEndingConfig>,
    pub policies: Vec<StemPolicyConfig>,
    #[serde(default)]
    pub closed_lists: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub substitutions: Vec<SubstitutionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseEndingConfig {
    pub ending: String,
    /// Vowel put back once the ending is removed
    #[serde(default)]
    pub stem_final: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StemPolicyConfig {
    pub kind: String,
    #[serde(default)]
    pub strip_first: bool,
    #[serde(default)]
    pub strip_second: bool,
    #[serde(default)]
    pub drop_final_n: bool,
    #[serde(default)]
    pub drop_hiatus_a: bool,
    /// Name of a closed list the first member must belong to
    #[serde(default)]
    pub first_member: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    pub kind: String,
    pub from: String,
    pub to: String,
}

/// Nine endings for one tense and voice, person-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConjugationConfig {
    pub lakara: String,
    pub pada: String,
    #[serde(default)]
    pub stem_final: Option<String>,
    pub endings: Vec<String>,
}

/// Endings for one gender: eight cases of three numbers each
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclensionConfig {
    pub gender: String,
    #[serde(default)]
    pub stem_final: Option<String>,
    pub endings: Vec<Vec<String>>,
}

fn default_min_stem_syllables() -> usize {
    2
}

impl GrammarConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), SandhiError> {
        if self.metadata.code.trim().is_empty() {
            return Err(SandhiError::ConfigurationError(
                "metadata.code must not be empty".to_string(),
            ));
        }

        if self.rules.is_empty() {
            return Err(SandhiError::ConfigurationError(
                "No sandhi rules defined".to_string(),
            ));
        }

        if let Some(empty) = self.lexicon.upasargas.iter().find(|u| u.form.trim().is_empty()) {
            return Err(SandhiError::ConfigurationError(format!(
                "upasarga with empty form (meanings: {:?})",
                empty.meanings
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_config_deserialize() {
        let toml_str = r#"
            [metadata]
            code = "sa"
            name = "Sanskrit"

            [[rules]]
            id = "guna-a-i"
            kind = "vowel"
            left = "अ"
            right = "इ"
            output = "ए"

            [[rules]]
            kind = "nasalization"
            left = "म्"
            right = { class = ["velar"] }
            output = "ङ्"
            specificity = 5

            [lexicon]
            upasargas = [{ form = "प्र", meanings = ["forward"] }]

            [lexicon.suffixes]
            krit = ["त"]

            [compounds]
            case_endings = [{ ending = "ः" }]
            policies = [{ kind = "tatpurusa", strip_first = true, drop_final_n = true }]
        "#;

        let config: GrammarConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.metadata.code, "sa");
        assert_eq!(config.rules.len(), 2);
        assert!(matches!(config.rules[0].left, PatternConfig::Literal(_)));
        assert!(matches!(
            &config.rules[1].right,
            PatternConfig::Class { class, pratyahara: None } if class == &vec![PhonemeClass::Velar]
        ));
        assert_eq!(config.rules[1].specificity, Some(5));
        assert_eq!(config.compounds.min_stem_syllables, 2);
        assert!(config.conjugations.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_rule_kind_fails_to_parse() {
        let toml_str = r#"
            kind = "elision"
            left = "अ"
            right = "इ"
            output = "ए"
        "#;
        assert!(toml::from_str::<RuleConfig>(toml_str).is_err());
    }
}
