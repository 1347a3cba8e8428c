//! Samasa (compound) formation
//!
//! Each compound kind has a stem policy: which members lose their case
//! ending, whether a final `न्` or a hiatus `अ` is dropped, and which closed
//! list the first member must come from. The reduced stems are then fused
//! through the [`SandhiResolver`].

use crate::config::CompoundConfig;
use crate::error::{Result, SandhiError};
use crate::phoneme::{Phoneme, PhonemeBuf};
use crate::resolver::{MergeResult, SandhiResolver};
use crate::script;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

const FINAL_N: Phoneme = Phoneme::new('न');

/// The six compound kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundKind {
    /// Adverbial; first member indeclinable
    Avyayibhava,
    /// Determinative
    Tatpurusa,
    /// Descriptive
    Karmadharaya,
    /// Numerical; first member a numeral
    Dvigu,
    /// Copulative
    Dvandva,
    /// Possessive
    Bahuvrihi,
}

impl CompoundKind {
    pub const ALL: [CompoundKind; 6] = [
        CompoundKind::Avyayibhava,
        CompoundKind::Tatpurusa,
        CompoundKind::Karmadharaya,
        CompoundKind::Dvigu,
        CompoundKind::Dvandva,
        CompoundKind::Bahuvrihi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CompoundKind::Avyayibhava => "avyayibhava",
            CompoundKind::Tatpurusa => "tatpurusa",
            CompoundKind::Karmadharaya => "karmadharaya",
            CompoundKind::Dvigu => "dvigu",
            CompoundKind::Dvandva => "dvandva",
            CompoundKind::Bahuvrihi => "bahuvrihi",
        }
    }

    pub fn devanagari(self) -> &'static str {
        match self {
            CompoundKind::Avyayibhava => "अव्ययीभाव",
            CompoundKind::Tatpurusa => "तत्पुरुष",
            CompoundKind::Karmadharaya => "कर्मधारय",
            CompoundKind::Dvigu => "द्विगु",
            CompoundKind::Dvandva => "द्वन्द्व",
            CompoundKind::Bahuvrihi => "बहुव्रीहि",
        }
    }
}

impl fmt::Display for CompoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompoundKind {
    type Err = SandhiError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        let ascii = key.to_ascii_lowercase();
        let ascii = match ascii.as_str() {
            "tatpurusha" => "tatpurusa",
            "avyayibhaava" => "avyayibhava",
            other => other,
        };

        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == ascii || kind.devanagari() == key)
            .ok_or_else(|| SandhiError::invalid_argument("compound kind", s))
    }
}

/// Outcome of compound formation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Compound {
    Formed(MergeResult),
    /// The members do not qualify for the requested kind
    NotApplicable { reason: String },
}

impl Compound {
    pub fn merged(&self) -> Option<&str> {
        match self {
            Compound::Formed(result) => Some(&result.merged),
            Compound::NotApplicable { .. } => None,
        }
    }

    pub fn is_formed(&self) -> bool {
        matches!(self, Compound::Formed(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct StemPolicy {
    strip_first: bool,
    strip_second: bool,
    drop_final_n: bool,
    drop_hiatus_a: bool,
    first_member: Option<String>,
}

#[derive(Debug, Clone)]
struct CaseEnding {
    ending: PhonemeBuf,
    stem_final: Option<Phoneme>,
}

/// Compiled compound tables
#[derive(Debug, Clone)]
pub struct CompoundTables {
    min_stem_syllables: usize,
    /// Longest first
    case_endings: Vec<CaseEnding>,
    policies: HashMap<CompoundKind, StemPolicy>,
    closed_lists: HashMap<String, HashSet<String>>,
    substitutions: HashMap<CompoundKind, Vec<(Vec<Phoneme>, Vec<Phoneme>)>>,
}

impl CompoundTables {
    pub fn from_config(config: &CompoundConfig) -> Result<Self> {
        let mut case_endings = Vec::with_capacity(config.case_endings.len());
        for entry in &config.case_endings {
            let ending = script::decode_buf(&script::canonicalize(entry.ending.trim()));
            if ending.is_empty() {
                return Err(SandhiError::ConfigurationError(
                    "empty case ending in compound tables".to_string(),
                ));
            }
            let stem_final = match entry.stem_final.as_deref() {
                Some(text) => Some(single_phoneme(text, "stem_final")?),
                None => None,
            };
            case_endings.push(CaseEnding { ending, stem_final });
        }
        case_endings.sort_by(|a, b| b.ending.len().cmp(&a.ending.len()));

        let closed_lists: HashMap<String, HashSet<String>> = config
            .closed_lists
            .iter()
            .map(|(name, words)| {
                let words = words
                    .iter()
                    .map(|w| script::canonicalize(w.trim()))
                    .collect();
                (name.clone(), words)
            })
            .collect();

        let mut policies = HashMap::new();
        for policy in &config.policies {
            let kind: CompoundKind = policy
                .kind
                .parse()
                .map_err(|e| SandhiError::ConfigurationError(format!("compound policy: {e}")))?;

            if let Some(list) = &policy.first_member {
                if !closed_lists.contains_key(list) {
                    return Err(SandhiError::ConfigurationError(format!(
                        "{kind} policy refers to unknown closed list '{list}'"
                    )));
                }
            }

            let compiled = StemPolicy {
                strip_first: policy.strip_first,
                strip_second: policy.strip_second,
                drop_final_n: policy.drop_final_n,
                drop_hiatus_a: policy.drop_hiatus_a,
                first_member: policy.first_member.clone(),
            };
            if policies.insert(kind, compiled).is_some() {
                return Err(SandhiError::ConfigurationError(format!(
                    "{kind} policy is defined twice"
                )));
            }
        }

        let mut substitutions: HashMap<CompoundKind, Vec<_>> = HashMap::new();
        for substitution in &config.substitutions {
            let kind: CompoundKind = substitution.kind.parse().map_err(|e| {
                SandhiError::ConfigurationError(format!("compound substitution: {e}"))
            })?;
            let from = script::decode(&script::canonicalize(substitution.from.trim()));
            let to = script::decode(&script::canonicalize(substitution.to.trim()));
            if from.is_empty() || to.is_empty() {
                return Err(SandhiError::ConfigurationError(format!(
                    "{kind} substitution with an empty side"
                )));
            }
            substitutions.entry(kind).or_default().push((from, to));
        }

        Ok(Self {
            min_stem_syllables: config.min_stem_syllables,
            case_endings,
            policies,
            closed_lists,
            substitutions,
        })
    }

    pub fn min_stem_syllables(&self) -> usize {
        self.min_stem_syllables
    }

    /// Remove the longest case ending that leaves a long enough stem
    pub fn strip_case_ending(&self, word: &[Phoneme]) -> Vec<Phoneme> {
        for entry in &self.case_endings {
            let Some(stem) = word.strip_suffix(entry.ending.as_slice()) else {
                continue;
            };

            let mut stem = stem.to_vec();
            stem.extend(entry.stem_final);
            if script::syllable_count(&stem) >= self.min_stem_syllables {
                return stem;
            }
        }
        word.to_vec()
    }

    fn policy(&self, kind: CompoundKind) -> StemPolicy {
        self.policies.get(&kind).cloned().unwrap_or_default()
    }

    fn in_closed_list(&self, list: &str, word: &str) -> bool {
        self.closed_lists
            .get(list)
            .is_some_and(|words| words.contains(word))
    }

    fn substitute(&self, kind: CompoundKind, stem: Vec<Phoneme>) -> Vec<Phoneme> {
        self.substitutions
            .get(&kind)
            .and_then(|pairs| pairs.iter().find(|(from, _)| *from == stem))
            .map(|(_, to)| to.clone())
            .unwrap_or(stem)
    }
}

fn single_phoneme(text: &str, field: &str) -> Result<Phoneme> {
    match script::decode(&script::canonicalize(text.trim())).as_slice() {
        [phoneme] => Ok(*phoneme),
        _ => Err(SandhiError::ConfigurationError(format!(
            "{field} '{text}' must be a single sound"
        ))),
    }
}

/// Forms compounds of a given kind
#[derive(Debug, Clone, Copy)]
pub struct CompoundBuilder<'g> {
    tables: &'g CompoundTables,
    resolver: SandhiResolver<'g>,
}

impl<'g> CompoundBuilder<'g> {
    pub fn new(tables: &'g CompoundTables, resolver: SandhiResolver<'g>) -> Self {
        Self { tables, resolver }
    }

    /// Reduce both members according to the kind's policy, then fuse them
    pub fn build(&self, first: &str, second: &str, kind: CompoundKind) -> Result<Compound> {
        let first = script::canonicalize(first.trim());
        let second = script::canonicalize(second.trim());
        if first.is_empty() || second.is_empty() {
            return Err(SandhiError::InvalidInput(format!(
                "{kind} needs two non-empty members"
            )));
        }

        let policy = self.tables.policy(kind);

        if let Some(list) = &policy.first_member {
            if !self.tables.in_closed_list(list, &first) {
                return Ok(Compound::NotApplicable {
                    reason: format!("'{first}' is not in the {list} list required for {kind}"),
                });
            }
        }

        let mut first_stem = script::decode(&first);
        if policy.strip_first {
            first_stem = self.tables.strip_case_ending(&first_stem);
        }
        if policy.drop_final_n && first_stem.len() > 1 && first_stem.last() == Some(&FINAL_N) {
            first_stem.pop();
        }
        if policy.drop_hiatus_a {
            drop_hiatus_a(&mut first_stem);
        }
        let first_stem = self.tables.substitute(kind, first_stem);

        let mut second_stem = script::decode(&second);
        if policy.strip_second {
            second_stem = self.tables.strip_case_ending(&second_stem);
        }

        let first_stem = script::render(&first_stem);
        let second_stem = script::render(&second_stem);
        tracing::debug!("{kind}: {first} + {second} reduced to {first_stem} + {second_stem}");

        self.resolver
            .apply(&first_stem, &second_stem)
            .map(Compound::Formed)
    }
}

/// A written vowel `अ` directly after another vowel
fn drop_hiatus_a(stem: &mut Vec<Phoneme>) {
    if let [.., previous, last] = stem.as_slice() {
        if *last == script::INHERENT_A && previous.is_vowel() {
            stem.pop();
        }
    }
}
