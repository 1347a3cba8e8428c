//! Reverse sandhi: proposing where a word was joined

use crate::phoneme::Phoneme;
use crate::rules::{Pattern, RuleEntry, RuleId, RuleTable};
use crate::script;
use serde::{Deserialize, Serialize};

/// One way a word may have been formed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCandidate {
    pub left: String,
    pub right: String,
    pub rule_used: RuleId,
    /// Zero for the best candidate
    pub rank: usize,
    /// Phoneme offset where the rule output starts
    pub position: usize,
}

/// Where a rule's output occurs inside a word, with both contexts satisfied
#[derive(Debug, Clone, Copy)]
pub struct Occurrence<'g> {
    pub rule: &'g RuleEntry,
    /// Start of the rule output (phoneme offset)
    pub start: usize,
    /// End of the rule output, exclusive
    pub end: usize,
}

impl Occurrence<'_> {
    /// Operands that would have produced this occurrence
    pub fn operands(&self, word: &[Phoneme]) -> (Vec<Phoneme>, Vec<Phoneme>) {
        let mut left = word[..self.start].to_vec();
        if let Pattern::Literal(literal) = &self.rule.left {
            left.extend_from_slice(literal);
        }

        let mut right = match &self.rule.right {
            Pattern::Literal(literal) => literal.to_vec(),
            Pattern::Class(_) => Vec::new(),
        };
        right.extend_from_slice(&word[self.end..]);

        (left, right)
    }
}

/// Lazy scan over every rule occurrence in a word
///
/// Finite: each (rule, offset) pair is visited at most once. Holds no state
/// outside itself, so a fresh scan can start at any time.
pub struct Occurrences<'g, 'w> {
    rules: &'g [RuleEntry],
    word: &'w [Phoneme],
    rule_index: usize,
    offset: usize,
}

impl<'g, 'w> Occurrences<'g, 'w> {
    fn new(rules: &'g [RuleEntry], word: &'w [Phoneme]) -> Self {
        Self {
            rules,
            word,
            rule_index: 0,
            offset: 0,
        }
    }

    fn matches_at(&self, rule: &'g RuleEntry, start: usize) -> Option<Occurrence<'g>> {
        let output = rule.output.as_slice();
        let end = start + output.len();
        if end > self.word.len() || &self.word[start..end] != output {
            return None;
        }

        // A class context must be satisfied by the neighbouring phoneme
        if let Pattern::Class(matcher) = &rule.left {
            let previous = self.word[..start].last()?;
            if !matcher.matches(*previous) {
                return None;
            }
        }
        if let Pattern::Class(matcher) = &rule.right {
            let next = self.word.get(end)?;
            if !matcher.matches(*next) {
                return None;
            }
        }

        Some(Occurrence { rule, start, end })
    }
}

impl<'g> Iterator for Occurrences<'g, '_> {
    type Item = Occurrence<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        let rules = self.rules;
        while let Some(rule) = rules.get(self.rule_index) {
            while self.offset < self.word.len() {
                let start = self.offset;
                self.offset += 1;
                if let Some(found) = self.matches_at(rule, start) {
                    tracing::trace!("{} matches at {}", rule.id, start);
                    return Some(found);
                }
            }

            self.rule_index += 1;
            self.offset = 0;
        }
        None
    }
}

/// Enumerates ranked split candidates
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'g> {
    rules: &'g RuleTable,
}

impl<'g> Segmenter<'g> {
    pub fn new(rules: &'g RuleTable) -> Self {
        Self { rules }
    }

    /// Scan a decoded word for rule outputs
    pub fn occurrences<'w>(&self, word: &'w [Phoneme]) -> Occurrences<'g, 'w> {
        Occurrences::new(self.rules.entries(), word)
    }

    /// All candidate splits of `word`, best first
    ///
    /// Ranked by rule specificity, then by how close the junction is to the
    /// end of the word, then by rule declaration order. Empty when no rule
    /// output occurs in the word.
    pub fn split(&self, word: &str) -> Vec<SplitCandidate> {
        let word = script::canonicalize(word.trim());
        let phonemes = script::decode(&word);
        self.split_phonemes(&phonemes)
    }

    /// [`split`](Self::split) for an already decoded word
    pub fn split_phonemes(&self, word: &[Phoneme]) -> Vec<SplitCandidate> {
        let mut found: Vec<Occurrence<'_>> = self
            .occurrences(word)
            .filter(|occurrence| {
                let (left, right) = occurrence.operands(word);
                !left.is_empty() && !right.is_empty()
            })
            .collect();

        found.sort_by(|a, b| {
            b.rule
                .specificity
                .cmp(&a.rule.specificity)
                .then(b.end.cmp(&a.end))
                .then(b.start.cmp(&a.start))
                .then(a.rule.order().cmp(&b.rule.order()))
        });

        found
            .into_iter()
            .enumerate()
            .map(|(rank, occurrence)| {
                let (left, right) = occurrence.operands(word);
                SplitCandidate {
                    left: script::render(&left),
                    right: script::render(&right),
                    rule_used: occurrence.rule.id.clone(),
                    rank,
                    position: occurrence.start,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    fn segmenter() -> Segmenter<'static> {
        Grammar::embedded().segmenter()
    }

    fn contains(candidates: &[SplitCandidate], left: &str, right: &str) -> bool {
        candidates
            .iter()
            .any(|c| c.left == left && c.right == right)
    }

    #[test]
    fn test_split_recovers_dirgha() {
        let candidates = segmenter().split("गुरूपदेशः");
        assert!(contains(&candidates, "गुरु", "उपदेशः"));
    }

    #[test]
    fn test_split_recovers_class_context_rules() {
        let candidates = segmenter().split("प्रत्यग्नि");
        assert!(contains(&candidates, "प्रति", "अग्नि"));

        let candidates = segmenter().split("सङ्कृ");
        assert!(contains(&candidates, "सम्", "कृ"));
    }

    #[test]
    fn test_ranks_are_sequential() {
        let candidates = segmenter().split("देवालय");
        assert!(!candidates.is_empty());
        for (i, candidate) in candidates.iter().enumerate() {
            assert_eq!(candidate.rank, i);
        }
    }

    #[test]
    fn test_equal_specificity_prefers_later_junction() {
        let candidates = segmenter().split("गुरूपदेशः");
        let first_u = candidates
            .iter()
            .position(|c| c.left == "गुरु" && c.right == "उपदेशः")
            .unwrap();
        let later = candidates
            .iter()
            .position(|c| c.position > 3 && c.rule_used.as_str().starts_with("guna"))
            .unwrap();
        assert!(later < first_u);
    }

    #[test]
    fn test_no_candidates_for_unknown_text() {
        assert!(segmenter().split("xyz").is_empty());
        assert!(segmenter().split("").is_empty());
    }

    #[test]
    fn test_occurrences_are_restartable() {
        let word = script::decode("देवालय");
        let s = segmenter();
        let first: Vec<usize> = s.occurrences(&word).map(|o| o.start).collect();
        let second: Vec<usize> = s.occurrences(&word).map(|o| o.start).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_split_is_deterministic() {
        assert_eq!(segmenter().split("रामेति"), segmenter().split("रामेति"));
    }
}
