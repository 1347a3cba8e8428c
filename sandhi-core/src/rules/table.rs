use super::{Pattern, RuleEntry, RuleId, RuleKind};
use crate::config::RuleConfig;
use crate::error::{Result, SandhiError};
use crate::phoneme::Phoneme;
use crate::script;
use std::collections::{HashMap, HashSet};

/// A rule that matched at a boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryMatch<'t> {
    pub rule: &'t RuleEntry,
    /// Phonemes consumed from the end of the left operand
    pub left_consumed: usize,
    /// Phonemes consumed from the start of the right operand
    pub right_consumed: usize,
}

/// Ordered, validated set of rewrite rules
///
/// Declaration order is kept and only breaks ties between rules of equal
/// specificity.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
}

impl RuleTable {
    /// Build a table, rejecting duplicate ids, empty outputs and rules of one
    /// kind that share both patterns at the same specificity
    pub fn new(mut entries: Vec<RuleEntry>) -> Result<Self> {
        for (order, entry) in entries.iter_mut().enumerate() {
            entry.order = order;
        }

        Self::validate(&entries)?;
        Ok(Self { entries })
    }

    fn validate(entries: &[RuleEntry]) -> Result<()> {
        let mut ids = HashSet::new();
        let mut keys: HashMap<(RuleKind, &Pattern, &Pattern), Vec<(&RuleId, i32)>> =
            HashMap::new();

        for entry in entries {
            if !ids.insert(&entry.id) {
                return Err(SandhiError::ConfigurationError(format!(
                    "duplicate rule id '{}'",
                    entry.id
                )));
            }

            if entry.output.is_empty() {
                return Err(SandhiError::ConfigurationError(format!(
                    "rule '{}' has an empty output",
                    entry.id
                )));
            }

            let siblings = keys
                .entry((entry.kind, &entry.left, &entry.right))
                .or_default();

            if let Some((other, _)) = siblings
                .iter()
                .find(|(_, specificity)| *specificity == entry.specificity)
            {
                return Err(SandhiError::ConfigurationError(format!(
                    "rules '{other}' and '{}' rewrite {} + {} with equal specificity {}",
                    entry.id, entry.left, entry.right, entry.specificity
                )));
            }

            for (other, specificity) in siblings.iter() {
                tracing::debug!(
                    "rule '{}' overlaps '{}' on {} + {} (specificity {} vs {})",
                    entry.id,
                    other,
                    entry.left,
                    entry.right,
                    entry.specificity,
                    specificity
                );
            }

            siblings.push((&entry.id, entry.specificity));
        }

        Ok(())
    }

    /// Compile the `[[rules]]` section of a grammar file
    pub fn from_config(rules: &[RuleConfig]) -> Result<Self> {
        let mut entries = Vec::with_capacity(rules.len());

        for (index, config) in rules.iter().enumerate() {
            let id = config
                .id
                .clone()
                .unwrap_or_else(|| format!("{}-{}", config.kind, index + 1));

            let left = Pattern::from_config(&config.left)
                .map_err(|e| SandhiError::ConfigurationError(format!("rule '{id}': {e}")))?;
            let right = Pattern::from_config(&config.right)
                .map_err(|e| SandhiError::ConfigurationError(format!("rule '{id}': {e}")))?;
            let output = script::decode_buf(&script::canonicalize(config.output.trim()));

            let mut entry = RuleEntry::new(id, config.kind, left, right, output);
            if let Some(specificity) = config.specificity {
                entry = entry.with_specificity(specificity);
            }
            if let Some(description) = &config.description {
                entry = entry.with_description(description.clone());
            }
            entries.push(entry);
        }

        let table = Self::new(entries)?;
        tracing::debug!("compiled {} sandhi rules", table.len());
        Ok(table)
    }

    /// Rules applicable where `left` meets `right`, best first
    ///
    /// Ordered by specificity (descending), then declaration order.
    pub fn lookup(&self, left: &[Phoneme], right: &[Phoneme]) -> Vec<BoundaryMatch<'_>> {
        let mut matches: Vec<BoundaryMatch<'_>> = self
            .entries
            .iter()
            .filter_map(|rule| {
                let left_consumed = rule.left.match_end(left)?;
                let right_consumed = rule.right.match_start(right)?;
                Some(BoundaryMatch {
                    rule,
                    left_consumed,
                    right_consumed,
                })
            })
            .collect();

        // Stable: equal specificity keeps declaration order
        matches.sort_by(|a, b| b.rule.specificity.cmp(&a.rule.specificity));
        matches
    }

    /// The rule that wins at a boundary, if any applies
    pub fn best(&self, left: &[Phoneme], right: &[Phoneme]) -> Option<BoundaryMatch<'_>> {
        self.lookup(left, right).into_iter().next()
    }

    pub fn get(&self, id: &str) -> Option<&RuleEntry> {
        self.entries.iter().find(|entry| entry.id.as_str() == id)
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rules per kind
    pub fn count_by_kind(&self) -> HashMap<RuleKind, usize> {
        let mut counts = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.kind).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::PhonemeClass;
    use crate::rules::ClassMatcher;

    fn literal(text: &str) -> Pattern {
        Pattern::Literal(script::decode_buf(text))
    }

    fn rule(id: &str, left: &str, right: &str, output: &str) -> RuleEntry {
        RuleEntry::new(
            id,
            RuleKind::Vowel,
            literal(left),
            literal(right),
            script::decode_buf(output),
        )
    }

    fn vowels() -> Pattern {
        Pattern::Class(
            ClassMatcher::new(
                vec![
                    PhonemeClass::ShortVowel,
                    PhonemeClass::LongVowel,
                    PhonemeClass::Diphthong,
                ],
                None,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_lookup_orders_by_specificity() {
        let generic = RuleEntry::new(
            "ayadi-e",
            RuleKind::Vowel,
            literal("ए"),
            vowels(),
            script::decode_buf("अय्"),
        );
        let specific = rule("purvarupa-e", "ए", "अ", "एऽ");
        let table = RuleTable::new(vec![generic, specific]).unwrap();

        let matches = table.lookup(&script::decode("हरे"), &script::decode("अत्र"));
        let ids: Vec<&str> = matches.iter().map(|m| m.rule.id.as_str()).collect();
        assert_eq!(ids, vec!["purvarupa-e", "ayadi-e"]);
        assert_eq!(matches[0].left_consumed, 1);
        assert_eq!(matches[0].right_consumed, 1);
        assert_eq!(matches[1].right_consumed, 0);
    }

    #[test]
    fn test_precedence_independent_of_declaration_order() {
        let forward = RuleTable::new(vec![
            rule("low", "अ", "इ", "ए").with_specificity(1),
            rule("high", "अ", "इ", "ऐ").with_specificity(9),
        ])
        .unwrap();
        let reversed = RuleTable::new(vec![
            rule("high", "अ", "इ", "ऐ").with_specificity(9),
            rule("low", "अ", "इ", "ए").with_specificity(1),
        ])
        .unwrap();

        let left = script::decode("राम");
        let right = script::decode("इति");
        assert_eq!(forward.best(&left, &right).unwrap().rule.id.as_str(), "high");
        assert_eq!(reversed.best(&left, &right).unwrap().rule.id.as_str(), "high");
    }

    #[test]
    fn test_equal_specificity_ties_break_by_declaration() {
        let mut first = rule("first", "अ", "इ", "ए");
        first.kind = RuleKind::Vowel;
        let mut second = rule("second", "अ", "इ", "ऐ");
        second.kind = RuleKind::Assimilation;
        let table = RuleTable::new(vec![first, second]).unwrap();

        let best = table
            .best(&script::decode("राम"), &script::decode("इति"))
            .unwrap();
        assert_eq!(best.rule.id.as_str(), "first");
        assert_eq!(table.get("second").unwrap().order(), 1);
    }

    #[test]
    fn test_hard_duplicate_is_configuration_error() {
        let result = RuleTable::new(vec![
            rule("a", "अ", "इ", "ए"),
            rule("b", "अ", "इ", "ऐ"),
        ]);
        assert!(matches!(result, Err(SandhiError::ConfigurationError(_))));
    }

    #[test]
    fn test_shadowed_duplicate_keeps_both_ids() {
        let table = RuleTable::new(vec![
            rule("a", "अ", "इ", "ए"),
            rule("b", "अ", "इ", "ऐ").with_specificity(2),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        let matches = table.lookup(&script::decode("राम"), &script::decode("इति"));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].rule.id.as_str(), "a");
    }

    #[test]
    fn test_duplicate_id_and_empty_output_rejected() {
        assert!(RuleTable::new(vec![rule("a", "अ", "इ", "ए"), rule("a", "अ", "उ", "ओ")]).is_err());
        assert!(RuleTable::new(vec![rule("a", "अ", "इ", "")]).is_err());
    }

    #[test]
    fn test_no_match_yields_empty_lookup() {
        let table = RuleTable::new(vec![rule("guna", "अ", "इ", "ए")]).unwrap();
        assert!(table
            .lookup(&script::decode("तत्"), &script::decode("कार"))
            .is_empty());
    }

    #[test]
    fn test_count_by_kind() {
        let table = RuleTable::new(vec![rule("a", "अ", "इ", "ए"), rule("b", "अ", "उ", "ओ")]).unwrap();
        assert_eq!(table.count_by_kind().get(&RuleKind::Vowel), Some(&2));
    }
}
