//! Forward sandhi: merging two words at their boundary

use crate::error::{Result, SandhiError};
use crate::phoneme::Phoneme;
use crate::rules::{BoundaryMatch, RuleId, RuleTable};
use crate::script;
use serde::{Deserialize, Serialize};

/// Outcome of joining two operands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    pub merged: String,
    pub rule_used: Option<RuleId>,
    /// No rule applied; `merged` is the plain concatenation
    pub fell_back_to_concatenation: bool,
}

/// Applies the single best rule at a word boundary
#[derive(Debug, Clone, Copy)]
pub struct SandhiResolver<'g> {
    rules: &'g RuleTable,
}

impl<'g> SandhiResolver<'g> {
    pub fn new(rules: &'g RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'g RuleTable {
        self.rules
    }

    /// Merge `left` and `right`
    ///
    /// Only the junction is rewritten; the merged form is never rescanned.
    /// When no rule matches the canonical operands are concatenated unchanged.
    pub fn apply(&self, left: &str, right: &str) -> Result<MergeResult> {
        let left = script::canonicalize(left.trim());
        let right = script::canonicalize(right.trim());

        if left.is_empty() {
            return Err(SandhiError::InvalidInput(
                "left operand is empty".to_string(),
            ));
        }
        if right.is_empty() {
            return Err(SandhiError::InvalidInput(
                "right operand is empty".to_string(),
            ));
        }

        let left_phonemes = script::decode(&left);
        let right_phonemes = script::decode(&right);

        match self.rules.best(&left_phonemes, &right_phonemes) {
            Some(found) => {
                let merged = splice(&left_phonemes, &right_phonemes, &found);
                tracing::debug!(
                    "{} + {} -> {} via {}",
                    left,
                    right,
                    script::render(&merged),
                    found.rule.id
                );
                Ok(MergeResult {
                    merged: script::render(&merged),
                    rule_used: Some(found.rule.id.clone()),
                    fell_back_to_concatenation: false,
                })
            }
            None => {
                tracing::trace!("no rule for {} + {}, concatenating", left, right);
                Ok(MergeResult {
                    merged: format!("{left}{right}"),
                    rule_used: None,
                    fell_back_to_concatenation: true,
                })
            }
        }
    }

    /// Join two phoneme strings, applying the best rule if there is one
    ///
    /// Used for morpheme boundaries where plain concatenation must still
    /// happen at the phoneme level (a consonant stem before a vowel suffix).
    pub fn join_phonemes(
        &self,
        left: &[Phoneme],
        right: &[Phoneme],
    ) -> (Vec<Phoneme>, Option<RuleId>) {
        match self.rules.best(left, right) {
            Some(found) => (splice(left, right, &found), Some(found.rule.id.clone())),
            None => {
                let mut joined = Vec::with_capacity(left.len() + right.len());
                joined.extend_from_slice(left);
                joined.extend_from_slice(right);
                (joined, None)
            }
        }
    }
}

/// Replace the consumed phonemes on both sides with the rule output
fn splice(left: &[Phoneme], right: &[Phoneme], found: &BoundaryMatch<'_>) -> Vec<Phoneme> {
    let kept_left = &left[..left.len() - found.left_consumed];
    let kept_right = &right[found.right_consumed..];

    let mut merged =
        Vec::with_capacity(kept_left.len() + found.rule.output.len() + kept_right.len());
    merged.extend_from_slice(kept_left);
    merged.extend_from_slice(&found.rule.output);
    merged.extend_from_slice(kept_right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    fn resolver() -> SandhiResolver<'static> {
        Grammar::embedded().resolver()
    }

    #[test]
    fn test_savarna_dirgha() {
        let result = resolver().apply("गुरु", "उपदेशः").unwrap();
        assert_eq!(result.merged, "गुरूपदेशः");
        assert_eq!(result.rule_used.unwrap().as_str(), "dirgha-u-u");
        assert!(!result.fell_back_to_concatenation);

        assert_eq!(resolver().apply("देव", "आलय").unwrap().merged, "देवालय");
    }

    #[test]
    fn test_guna() {
        assert_eq!(resolver().apply("राम", "इति").unwrap().merged, "रामेति");
        assert_eq!(resolver().apply("नील", "उत्पल").unwrap().merged, "नीलोत्पल");
        assert_eq!(resolver().apply("सप्त", "ऋषि").unwrap().merged, "सप्तर्षि");
    }

    #[test]
    fn test_yan_keeps_following_vowel() {
        let result = resolver().apply("प्रति", "अग्नि").unwrap();
        assert_eq!(result.merged, "प्रत्यग्नि");
        assert_eq!(result.rule_used.unwrap().as_str(), "yan-i");
    }

    #[test]
    fn test_consonant_rules() {
        assert_eq!(resolver().apply("वाक्", "देवी").unwrap().merged, "वाग्देवी");
        assert_eq!(resolver().apply("सम्", "कृ").unwrap().merged, "सङ्कृ");
        assert_eq!(resolver().apply("सम्", "सार").unwrap().merged, "संसार");
        assert_eq!(resolver().apply("तत्", "शिवः").unwrap().merged, "तच्छिवः");
        assert_eq!(resolver().apply("उत्", "लास").unwrap().merged, "उल्लास");
    }

    #[test]
    fn test_visarga_rules() {
        assert_eq!(resolver().apply("रामः", "अस्ति").unwrap().merged, "रामोऽस्ति");
        assert_eq!(resolver().apply("रामः", "च").unwrap().merged, "रामश्च");
        assert_eq!(resolver().apply("नमः", "ते").unwrap().merged, "नमस्ते");
        assert_eq!(resolver().apply("हरिः", "गच्छति").unwrap().merged, "हरिर्गच्छति");
    }

    #[test]
    fn test_fallback_is_plain_concatenation() {
        let result = resolver().apply("तत्", "कार").unwrap();
        assert_eq!(result.merged, "तत्कार");
        assert!(result.fell_back_to_concatenation);
        assert!(result.rule_used.is_none());

        let again = resolver().apply("तत्", "कार").unwrap();
        assert_eq!(again, result);
    }

    #[test]
    fn test_empty_operands_are_invalid() {
        assert!(matches!(
            resolver().apply("", "इति"),
            Err(SandhiError::InvalidInput(_))
        ));
        assert!(matches!(
            resolver().apply("राम", ""),
            Err(SandhiError::InvalidInput(_))
        ));
        assert!(matches!(
            resolver().apply("  ", "इति"),
            Err(SandhiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_single_unit_operands() {
        assert_eq!(resolver().apply("अ", "इ").unwrap().merged, "ए");
    }

    #[test]
    fn test_unknown_text_falls_back() {
        let result = resolver().apply("abc", "def").unwrap();
        assert_eq!(result.merged, "abcdef");
        assert!(result.fell_back_to_concatenation);
    }

    #[test]
    fn test_join_phonemes_concatenates_without_rule() {
        let (joined, rule) = resolver()
            .join_phonemes(&script::decode("पठ्"), &script::decode("ति"));
        assert_eq!(script::render(&joined), "पठ्ति");
        assert!(rule.is_none());
    }
}
