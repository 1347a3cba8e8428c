//! Rewrite rules for word-boundary sandhi
//!
//! A rule rewrites the meeting point of two phoneme strings. Each side is
//! either a literal (consumed and replaced by the output) or a class matcher
//! (context only, the matched phoneme stays in place).

mod table;

pub use table::{BoundaryMatch, RuleTable};

use crate::config::PatternConfig;
use crate::error::{Result, SandhiError};
use crate::phoneme::{Phoneme, PhonemeBuf, PhonemeClass};
use crate::pratyahara::Pratyahara;
use crate::script;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of sandhi a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Vowel meets vowel
    Vowel,
    /// Consonant changes at the boundary
    Consonant,
    /// Final nasal takes the place of articulation of what follows
    Nasalization,
    /// Visarga before vowels and consonants
    Visarga,
    /// Full or partial assimilation of a final consonant
    Assimilation,
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Vowel => "vowel",
            RuleKind::Consonant => "consonant",
            RuleKind::Nasalization => "nasalization",
            RuleKind::Visarga => "visarga",
            RuleKind::Assimilation => "assimilation",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque rule identifier, unique within a table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Matches a single phoneme by articulatory class and/or pratyahara
///
/// When both are given the phoneme must satisfy both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassMatcher {
    classes: Vec<PhonemeClass>,
    pratyahara: Option<Pratyahara>,
}

impl ClassMatcher {
    pub fn new(mut classes: Vec<PhonemeClass>, pratyahara: Option<Pratyahara>) -> Result<Self> {
        if classes.is_empty() && pratyahara.is_none() {
            return Err(SandhiError::ConfigurationError(
                "class pattern needs at least one class or a pratyahara".to_string(),
            ));
        }
        classes.sort();
        classes.dedup();
        Ok(Self {
            classes,
            pratyahara,
        })
    }

    pub fn matches(&self, phoneme: Phoneme) -> bool {
        let class_ok = self.classes.is_empty() || self.classes.contains(&phoneme.class());
        let pratyahara_ok = self
            .pratyahara
            .as_ref()
            .map_or(true, |p| p.contains(phoneme));
        class_ok && pratyahara_ok
    }
}

impl fmt::Display for ClassMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.classes.iter().map(|c| c.name()).collect();
        match (&self.pratyahara, names.is_empty()) {
            (Some(p), true) => write!(f, "{{{p}}}"),
            (Some(p), false) => write!(f, "{{{} & {p}}}", names.join("|")),
            (None, _) => write!(f, "{{{}}}", names.join("|")),
        }
    }
}

/// One side of a rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Consumed phonemes
    Literal(PhonemeBuf),
    /// Context phoneme, kept in place
    Class(ClassMatcher),
}

impl Pattern {
    /// Build a pattern from its grammar-file form
    pub fn from_config(config: &PatternConfig) -> Result<Self> {
        match config {
            PatternConfig::Literal(text) => {
                let literal = script::decode_buf(&script::canonicalize(text.trim()));
                if literal.is_empty() {
                    return Err(SandhiError::ConfigurationError(
                        "empty literal pattern".to_string(),
                    ));
                }
                if let Some(unknown) = literal
                    .iter()
                    .find(|p| p.class() == PhonemeClass::Unknown)
                {
                    return Err(SandhiError::ConfigurationError(format!(
                        "literal pattern '{text}' contains unknown character '{}'",
                        unknown.as_char()
                    )));
                }
                Ok(Pattern::Literal(literal))
            }
            PatternConfig::Class { class, pratyahara } => {
                let pratyahara = pratyahara
                    .as_deref()
                    .map(Pratyahara::parse)
                    .transpose()
                    .map_err(|e| SandhiError::ConfigurationError(e.to_string()))?;
                Ok(Pattern::Class(ClassMatcher::new(class.clone(), pratyahara)?))
            }
        }
    }

    /// Contribution to a rule's default specificity
    pub fn weight(&self) -> i32 {
        match self {
            Pattern::Literal(literal) => 2 * literal.len() as i32,
            Pattern::Class(_) => 1,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Pattern::Literal(_))
    }

    /// Match against the end of `seq`, returning how many phonemes are consumed
    pub fn match_end(&self, seq: &[Phoneme]) -> Option<usize> {
        match self {
            Pattern::Literal(literal) => seq.ends_with(literal).then_some(literal.len()),
            Pattern::Class(matcher) => seq.last().filter(|p| matcher.matches(**p)).map(|_| 0),
        }
    }

    /// Match against the start of `seq`, returning how many phonemes are consumed
    pub fn match_start(&self, seq: &[Phoneme]) -> Option<usize> {
        match self {
            Pattern::Literal(literal) => seq.starts_with(literal).then_some(literal.len()),
            Pattern::Class(matcher) => seq.first().filter(|p| matcher.matches(**p)).map(|_| 0),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(literal) => f.write_str(&script::render(literal)),
            Pattern::Class(matcher) => fmt::Display::fmt(matcher, f),
        }
    }
}

/// A single rewrite rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    pub id: RuleId,
    pub kind: RuleKind,
    pub left: Pattern,
    pub right: Pattern,
    /// Phonemes inserted at the junction
    pub output: PhonemeBuf,
    /// Higher wins; defaults to 2 per literal phoneme plus 1 per class side
    pub specificity: i32,
    pub description: Option<String>,
    order: usize,
}

impl RuleEntry {
    pub fn new(
        id: impl Into<String>,
        kind: RuleKind,
        left: Pattern,
        right: Pattern,
        output: PhonemeBuf,
    ) -> Self {
        let specificity = left.weight() + right.weight();
        Self {
            id: RuleId::new(id),
            kind,
            left,
            right,
            output,
            specificity,
            description: None,
            order: 0,
        }
    }

    pub fn with_specificity(mut self, specificity: i32) -> Self {
        self.specificity = specificity;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Position in the table's declaration order
    pub fn order(&self) -> usize {
        self.order
    }

    /// Rewritten form, e.g. `अ + इ → ए`
    pub fn describe(&self) -> String {
        format!(
            "{} + {} → {}",
            self.left,
            self.right,
            script::render(&self.output)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(text: &str) -> Pattern {
        Pattern::Literal(script::decode_buf(text))
    }

    #[test]
    fn test_default_specificity() {
        let rule = RuleEntry::new(
            "guna",
            RuleKind::Vowel,
            literal("अ"),
            literal("इ"),
            script::decode_buf("ए"),
        );
        assert_eq!(rule.specificity, 4);

        let matcher = ClassMatcher::new(vec![PhonemeClass::Velar], None).unwrap();
        let rule = RuleEntry::new(
            "nasal",
            RuleKind::Nasalization,
            literal("म्"),
            Pattern::Class(matcher),
            script::decode_buf("ङ्"),
        );
        assert_eq!(rule.specificity, 3);
    }

    #[test]
    fn test_literal_consumes_and_class_keeps() {
        let word = script::decode("वाक्");
        assert_eq!(literal("क्").match_end(&word), Some(1));
        assert_eq!(literal("ग्").match_end(&word), None);

        let velar = Pattern::Class(ClassMatcher::new(vec![PhonemeClass::Velar], None).unwrap());
        assert_eq!(velar.match_end(&word), Some(0));
        assert_eq!(velar.match_start(&script::decode("देवी")), None);
    }

    #[test]
    fn test_class_and_pratyahara_intersect() {
        let matcher = ClassMatcher::new(
            vec![PhonemeClass::Palatal],
            Some(Pratyahara::parse("खर्").unwrap()),
        )
        .unwrap();
        assert!(matcher.matches(Phoneme::new('च')));
        assert!(!matcher.matches(Phoneme::new('ज')));
        assert!(!matcher.matches(Phoneme::new('त')));
    }

    #[test]
    fn test_empty_class_matcher_rejected() {
        assert!(matches!(
            ClassMatcher::new(Vec::new(), None),
            Err(SandhiError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_pattern_from_config() {
        let pattern = Pattern::from_config(&PatternConfig::Literal("इ".to_string())).unwrap();
        assert_eq!(pattern, literal("इ"));

        let pattern = Pattern::from_config(&PatternConfig::Class {
            class: Vec::new(),
            pratyahara: Some("अच्".to_string()),
        })
        .unwrap();
        assert!(matches!(pattern, Pattern::Class(_)));
        assert_eq!(pattern.to_string(), "{अच्}");

        assert!(Pattern::from_config(&PatternConfig::Literal(" ".to_string())).is_err());
        assert!(Pattern::from_config(&PatternConfig::Class {
            class: Vec::new(),
            pratyahara: Some("xyz".to_string()),
        })
        .is_err());
    }

    #[test]
    fn test_describe() {
        let rule = RuleEntry::new(
            "dirgha",
            RuleKind::Vowel,
            literal("उ"),
            literal("उ"),
            script::decode_buf("ऊ"),
        );
        assert_eq!(rule.describe(), "उ + उ → ऊ");
    }
}
