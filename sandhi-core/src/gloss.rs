//! Dictionary collaborator interface
//!
//! The engine never stores glosses itself; callers plug in a [`GlossStore`].
//! [`MemoryGlossStore`] is the reference implementation.

use crate::script;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("dictionary word must not be empty")]
    EmptyWord,

    #[error("gloss for '{0}' must not be empty")]
    EmptyGloss(String),

    /// Failure reported by a backing store
    #[error("dictionary backend error: {0}")]
    Backend(String),
}

/// One dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossEntry {
    pub gloss: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

/// Word → gloss lookup, case-insensitive on the word
pub trait GlossStore {
    /// Glosses recorded for `word`, oldest first; empty when unknown
    fn lookup_gloss(&self, word: &str) -> Vec<String>;

    fn add_entry(
        &mut self,
        word: &str,
        gloss: &str,
        metadata: BTreeMap<String, String>,
    ) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryGlossStore {
    entries: HashMap<String, Vec<GlossEntry>>,
}

impl MemoryGlossStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(word: &str) -> String {
        script::canonicalize(word.trim()).to_lowercase()
    }

    /// Full entries, metadata included
    pub fn entries(&self, word: &str) -> &[GlossEntry] {
        self.entries
            .get(&Self::key(word))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GlossStore for MemoryGlossStore {
    fn lookup_gloss(&self, word: &str) -> Vec<String> {
        self.entries(word)
            .iter()
            .map(|entry| entry.gloss.clone())
            .collect()
    }

    fn add_entry(
        &mut self,
        word: &str,
        gloss: &str,
        metadata: BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        let key = Self::key(word);
        if key.is_empty() {
            return Err(StoreError::EmptyWord);
        }
        if gloss.trim().is_empty() {
            return Err(StoreError::EmptyGloss(word.to_string()));
        }

        self.entries.entry(key).or_default().push(GlossEntry {
            gloss: gloss.trim().to_string(),
            metadata,
        });
        Ok(())
    }
}
