//! Prefixes, suffix pools and the root lexicon
//!
//! Affixes are stored in phoneme tries so that prefix and suffix stripping
//! is a single longest-match walk. Suffixes are inserted reversed and
//! scanned from the end of the word.

use crate::config::LexiconConfig;
use crate::conjugation::Pada;
use crate::error::{Result, SandhiError};
use crate::phoneme::{Phoneme, PhonemeBuf};
use crate::script;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Named suffix list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuffixPool {
    /// Primary (verbal) derivation
    Krit,
    /// Secondary (nominal) derivation
    Taddhita,
    /// Pronominal
    Sarvanama,
    /// Case endings
    Vibhakti,
    /// Junction remnants
    Sandhi,
    /// Verbal endings
    Dhatu,
}

impl SuffixPool {
    pub const ALL: [SuffixPool; 6] = [
        SuffixPool::Krit,
        SuffixPool::Taddhita,
        SuffixPool::Sarvanama,
        SuffixPool::Vibhakti,
        SuffixPool::Sandhi,
        SuffixPool::Dhatu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SuffixPool::Krit => "krit",
            SuffixPool::Taddhita => "taddhita",
            SuffixPool::Sarvanama => "sarvanama",
            SuffixPool::Vibhakti => "vibhakti",
            SuffixPool::Sandhi => "sandhi",
            SuffixPool::Dhatu => "dhatu",
        }
    }

    fn devanagari(self) -> &'static str {
        match self {
            SuffixPool::Krit => "कृत्",
            SuffixPool::Taddhita => "तद्धित",
            SuffixPool::Sarvanama => "सर्वनाम",
            SuffixPool::Vibhakti => "विभक्ति",
            SuffixPool::Sandhi => "सन्धि",
            SuffixPool::Dhatu => "धातु",
        }
    }
}

impl fmt::Display for SuffixPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SuffixPool {
    type Err = SandhiError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|pool| pool.name().eq_ignore_ascii_case(key) || pool.devanagari() == key)
            .ok_or_else(|| SandhiError::invalid_argument("suffix pool", s))
    }
}

/// Voice a root is conjugated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootPada {
    Parasmaipada,
    Atmanepada,
    /// Takes both voices
    Ubhayapada,
}

impl RootPada {
    pub fn admits(self, pada: Pada) -> bool {
        matches!(
            (self, pada),
            (RootPada::Ubhayapada, _)
                | (RootPada::Parasmaipada, Pada::Parasmaipada)
                | (RootPada::Atmanepada, Pada::Atmanepada)
        )
    }
}

impl FromStr for RootPada {
    type Err = SandhiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "ubhayapada" | "उभयपद" => Ok(RootPada::Ubhayapada),
            other => match other.parse::<Pada>()? {
                Pada::Parasmaipada => Ok(RootPada::Parasmaipada),
                Pada::Atmanepada => Ok(RootPada::Atmanepada),
            },
        }
    }
}

/// A verbal root with the surface stems that identify it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    pub root: String,
    pub stems: Vec<String>,
    pub pada: Option<RootPada>,
    pub gloss: Option<String>,
}

/// A verbal prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upasarga {
    pub form: String,
    pub phonemes: PhonemeBuf,
    pub meanings: Vec<String>,
}

#[derive(Debug, Clone)]
struct TrieNode<C> {
    children: HashMap<Phoneme, u32>,
    categories: Vec<C>,
}

impl<C> TrieNode<C> {
    fn empty() -> Self {
        Self {
            children: HashMap::new(),
            categories: Vec::new(),
        }
    }
}

/// Phoneme trie with longest-match lookup
///
/// Nodes live in one contiguous vector and refer to children by index. A node
/// is terminal when it carries at least one category.
#[derive(Debug, Clone)]
pub struct AffixTrie<C> {
    nodes: Vec<TrieNode<C>>,
}

impl<C: Clone + PartialEq> Default for AffixTrie<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone + PartialEq> AffixTrie<C> {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::empty()],
        }
    }

    /// Insert a phoneme sequence; the same sequence may carry several categories
    pub fn insert<I>(&mut self, sequence: I, category: C)
    where
        I: IntoIterator<Item = Phoneme>,
    {
        let mut current = 0u32;

        for phoneme in sequence {
            current = match self.nodes[current as usize].children.get(&phoneme) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::empty());
                    self.nodes[current as usize].children.insert(phoneme, child);
                    child
                }
            };
        }

        // The root node stands for the empty affix, which is never stored
        if current == 0 {
            return;
        }

        let node = &mut self.nodes[current as usize];
        if !node.categories.contains(&category) {
            node.categories.push(category);
        }
    }

    /// Longest stored sequence that is a prefix of `input`, at most `limit` long
    ///
    /// Returns its length and categories.
    pub fn longest_match<I>(&self, input: I, limit: usize) -> Option<(usize, &[C])>
    where
        I: IntoIterator<Item = Phoneme>,
    {
        let mut current = 0usize;
        let mut best = None;

        for (depth, phoneme) in input.into_iter().take(limit).enumerate() {
            match self.nodes[current].children.get(&phoneme) {
                Some(&child) => current = child as usize,
                None => break,
            }
            let node = &self.nodes[current];
            if !node.categories.is_empty() {
                best = Some((depth + 1, node.categories.as_slice()));
            }
        }

        best
    }

    /// Number of stored sequences
    pub fn len(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| !node.categories.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compiled lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    upasargas: Vec<Upasarga>,
    prefixes: AffixTrie<usize>,
    pools: BTreeMap<SuffixPool, Vec<String>>,
    suffixes: AffixTrie<SuffixPool>,
    roots: Vec<Root>,
    root_index: HashMap<Vec<Phoneme>, usize>,
}

impl Lexicon {
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        let mut upasargas = Vec::with_capacity(config.upasargas.len());
        let mut prefixes = AffixTrie::new();

        for upasarga in &config.upasargas {
            let form = script::canonicalize(upasarga.form.trim());
            let phonemes = script::decode_buf(&form);
            if !script::has_known_phonemes(&phonemes) {
                return Err(SandhiError::ConfigurationError(format!(
                    "upasarga '{form}' contains no Devanagari sounds"
                )));
            }
            if upasargas.iter().any(|u: &Upasarga| u.form == form) {
                return Err(SandhiError::ConfigurationError(format!(
                    "upasarga '{form}' is listed twice"
                )));
            }

            prefixes.insert(phonemes.iter().copied(), upasargas.len());
            upasargas.push(Upasarga {
                form,
                phonemes,
                meanings: upasarga.meanings.clone(),
            });
        }

        let lists = &config.suffixes;
        let mut pools = BTreeMap::new();
        let mut suffixes = AffixTrie::new();
        for (pool, list) in [
            (SuffixPool::Krit, &lists.krit),
            (SuffixPool::Taddhita, &lists.taddhita),
            (SuffixPool::Sarvanama, &lists.sarvanama),
            (SuffixPool::Vibhakti, &lists.vibhakti),
            (SuffixPool::Sandhi, &lists.sandhi),
            (SuffixPool::Dhatu, &lists.dhatu),
        ] {
            let mut canonical = Vec::with_capacity(list.len());
            for suffix in list {
                let suffix = script::canonicalize(suffix.trim());
                if suffix.is_empty() {
                    return Err(SandhiError::ConfigurationError(format!(
                        "empty suffix in the {pool} pool"
                    )));
                }
                suffixes.insert(script::decode(&suffix).into_iter().rev(), pool);
                if !canonical.contains(&suffix) {
                    canonical.push(suffix);
                }
            }
            pools.insert(pool, canonical);
        }

        let mut roots = Vec::with_capacity(config.roots.len());
        let mut root_index = HashMap::new();
        for entry in &config.roots {
            let pada = entry
                .pada
                .as_deref()
                .map(str::parse::<RootPada>)
                .transpose()
                .map_err(|e| {
                    SandhiError::ConfigurationError(format!("root '{}': {e}", entry.root))
                })?;

            let root = Root {
                root: script::canonicalize(entry.root.trim()),
                stems: entry
                    .stems
                    .iter()
                    .map(|s| script::canonicalize(s.trim()))
                    .collect(),
                pada,
                gloss: entry.gloss.clone(),
            };

            let index = roots.len();
            for key in std::iter::once(&root.root).chain(root.stems.iter()) {
                // First root listing a form keeps it
                root_index.entry(script::decode(key)).or_insert(index);
            }
            roots.push(root);
        }

        tracing::debug!(
            "lexicon: {} upasargas, {} suffixes, {} roots",
            upasargas.len(),
            suffixes.len(),
            roots.len()
        );

        Ok(Self {
            upasargas,
            prefixes,
            pools,
            suffixes,
            roots,
            root_index,
        })
    }

    pub fn upasargas(&self) -> &[Upasarga] {
        &self.upasargas
    }

    pub fn upasarga(&self, form: &str) -> Option<&Upasarga> {
        let form = script::canonicalize(form.trim());
        self.upasargas.iter().find(|u| u.form == form)
    }

    /// Longest upasarga at the start of `word` that leaves something behind
    pub fn longest_prefix(&self, word: &[Phoneme]) -> Option<&Upasarga> {
        let limit = word.len().checked_sub(1)?;
        self.prefixes
            .longest_match(word.iter().copied(), limit)
            .and_then(|(_, indices)| indices.first())
            .map(|&index| &self.upasargas[index])
    }

    /// Longest pooled suffix at the end of `word` that leaves something behind
    ///
    /// Returns the suffix length in phonemes and every pool listing it.
    pub fn longest_suffix(&self, word: &[Phoneme]) -> Option<(usize, &[SuffixPool])> {
        let limit = word.len().checked_sub(1)?;
        self.suffixes.longest_match(word.iter().rev().copied(), limit)
    }

    pub fn pool(&self, pool: SuffixPool) -> &[String] {
        self.pools.get(&pool).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    /// Root whose citation form or a listed stem equals `stem`
    ///
    /// A stem ending in the thematic `अ` is also tried without it.
    pub fn find_root(&self, stem: &[Phoneme]) -> Option<&Root> {
        if let Some(&index) = self.root_index.get(stem) {
            return Some(&self.roots[index]);
        }

        match stem.split_last() {
            Some((last, rest)) if *last == script::INHERENT_A && !rest.is_empty() => self
                .root_index
                .get(rest)
                .map(|&index| &self.roots[index]),
            _ => None,
        }
    }
}
