//! Phonemes and their semantic classes
//!
//! A [`Phoneme`] is one sound unit in canonical form: vowels are stored as
//! their independent letters, consonants as bare base letters (no inherent
//! vowel). Dependent vowel signs decode to the same phoneme as the matching
//! independent vowel, so `उ` and `ु` are one class member.

use crate::error::SandhiError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Devanagari virama (halant)
pub const VIRAMA: char = '\u{094D}';

/// Inline storage for short phoneme strings such as rule literals and affixes
pub type PhonemeBuf = SmallVec<[Phoneme; 8]>;

/// Semantic class of a phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhonemeClass {
    /// अ इ उ ऋ ऌ
    ShortVowel,
    /// आ ई ऊ ॠ ॡ
    LongVowel,
    /// ए ऐ ओ औ
    Diphthong,
    /// क-varga
    Velar,
    /// च-varga
    Palatal,
    /// ट-varga
    Retroflex,
    /// त-varga
    Dental,
    /// प-varga
    Labial,
    /// य र ल व
    Semivowel,
    /// श ष स
    Sibilant,
    /// ह
    AspirateH,
    /// ः
    Visarga,
    /// ं and chandrabindu
    Anusvara,
    /// ्
    Virama,
    /// Anything outside the alphabet
    Unknown,
}

impl PhonemeClass {
    /// All classes, in declaration order
    pub const ALL: [PhonemeClass; 15] = [
        PhonemeClass::ShortVowel,
        PhonemeClass::LongVowel,
        PhonemeClass::Diphthong,
        PhonemeClass::Velar,
        PhonemeClass::Palatal,
        PhonemeClass::Retroflex,
        PhonemeClass::Dental,
        PhonemeClass::Labial,
        PhonemeClass::Semivowel,
        PhonemeClass::Sibilant,
        PhonemeClass::AspirateH,
        PhonemeClass::Visarga,
        PhonemeClass::Anusvara,
        PhonemeClass::Virama,
        PhonemeClass::Unknown,
    ];

    /// Classify a single surface character. Total: unmapped characters are
    /// [`PhonemeClass::Unknown`].
    pub fn of(ch: char) -> Self {
        match ch {
            'अ' | 'इ' | 'उ' | 'ऋ' | 'ऌ' | 'ऍ' | 'ऎ' | 'ऒ' => PhonemeClass::ShortVowel,
            'ि' | 'ु' | 'ृ' | 'ॢ' | 'ॅ' | 'ॆ' | 'ॊ' => PhonemeClass::ShortVowel,
            'आ' | 'ई' | 'ऊ' | 'ॠ' | 'ॡ' | 'ऑ' => PhonemeClass::LongVowel,
            'ा' | 'ी' | 'ू' | 'ॄ' | 'ॣ' | 'ॉ' => PhonemeClass::LongVowel,
            'ए' | 'ऐ' | 'ओ' | 'औ' | 'े' | 'ै' | 'ो' | 'ौ' => PhonemeClass::Diphthong,
            'क' | 'ख' | 'ग' | 'घ' | 'ङ' | '\u{0958}' | '\u{0959}' | '\u{095A}' => PhonemeClass::Velar,
            'च' | 'छ' | 'ज' | 'झ' | 'ञ' | '\u{095B}' => PhonemeClass::Palatal,
            'ट' | 'ठ' | 'ड' | 'ढ' | 'ण' | '\u{095C}' | '\u{095D}' => PhonemeClass::Retroflex,
            'त' | 'थ' | 'द' | 'ध' | 'न' | '\u{0929}' => PhonemeClass::Dental,
            'प' | 'फ' | 'ब' | 'भ' | 'म' | '\u{095E}' => PhonemeClass::Labial,
            'य' | 'र' | 'ल' | 'व' | '\u{095F}' | '\u{0931}' | 'ळ' | '\u{0934}' => PhonemeClass::Semivowel,
            'श' | 'ष' | 'स' => PhonemeClass::Sibilant,
            'ह' => PhonemeClass::AspirateH,
            'ः' => PhonemeClass::Visarga,
            'ं' | 'ँ' => PhonemeClass::Anusvara,
            VIRAMA => PhonemeClass::Virama,
            _ => PhonemeClass::Unknown,
        }
    }

    pub fn is_vowel(self) -> bool {
        matches!(
            self,
            PhonemeClass::ShortVowel | PhonemeClass::LongVowel | PhonemeClass::Diphthong
        )
    }

    pub fn is_consonant(self) -> bool {
        matches!(
            self,
            PhonemeClass::Velar
                | PhonemeClass::Palatal
                | PhonemeClass::Retroflex
                | PhonemeClass::Dental
                | PhonemeClass::Labial
                | PhonemeClass::Semivowel
                | PhonemeClass::Sibilant
                | PhonemeClass::AspirateH
        )
    }

    /// Name used in grammar files
    pub fn name(self) -> &'static str {
        match self {
            PhonemeClass::ShortVowel => "short-vowel",
            PhonemeClass::LongVowel => "long-vowel",
            PhonemeClass::Diphthong => "diphthong",
            PhonemeClass::Velar => "velar",
            PhonemeClass::Palatal => "palatal",
            PhonemeClass::Retroflex => "retroflex",
            PhonemeClass::Dental => "dental",
            PhonemeClass::Labial => "labial",
            PhonemeClass::Semivowel => "semivowel",
            PhonemeClass::Sibilant => "sibilant",
            PhonemeClass::AspirateH => "aspirate-h",
            PhonemeClass::Visarga => "visarga",
            PhonemeClass::Anusvara => "anusvara",
            PhonemeClass::Virama => "virama",
            PhonemeClass::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PhonemeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhonemeClass {
    type Err = SandhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        PhonemeClass::ALL
            .into_iter()
            .find(|class| class.name() == key)
            .ok_or_else(|| SandhiError::invalid_argument("phoneme class", s))
    }
}

/// A single sound unit in canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phoneme(char);

impl Phoneme {
    pub const fn new(ch: char) -> Self {
        Self(ch)
    }

    pub const fn as_char(self) -> char {
        self.0
    }

    pub fn class(self) -> PhonemeClass {
        PhonemeClass::of(self.0)
    }

    pub fn is_vowel(self) -> bool {
        self.class().is_vowel()
    }

    pub fn is_consonant(self) -> bool {
        self.class().is_consonant()
    }

    /// Short savarna of a long simple vowel, the phoneme itself otherwise
    pub fn short_form(self) -> Phoneme {
        match self.0 {
            'आ' => Phoneme('अ'),
            'ई' => Phoneme('इ'),
            'ऊ' => Phoneme('उ'),
            'ॠ' => Phoneme('ऋ'),
            'ॡ' => Phoneme('ऌ'),
            _ => self,
        }
    }

    /// Long savarna of a short simple vowel, if it has one
    pub fn long_form(self) -> Option<Phoneme> {
        match self.0 {
            'अ' => Some(Phoneme('आ')),
            'इ' => Some(Phoneme('ई')),
            'उ' => Some(Phoneme('ऊ')),
            'ऋ' => Some(Phoneme('ॠ')),
            'ऌ' => Some(Phoneme('ॡ')),
            _ => None,
        }
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_consonant() {
            write!(f, "{}{}", self.0, VIRAMA)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Classifies surface units into phoneme classes
///
/// Multi-character units (an akshara such as `कि`) are classified by their
/// onset phoneme.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhonemeClassifier;

impl PhonemeClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, unit: &str) -> PhonemeClass {
        crate::script::decode(unit)
            .first()
            .map(|p| p.class())
            .unwrap_or(PhonemeClass::Unknown)
    }

    pub fn classify_char(&self, ch: char) -> PhonemeClass {
        PhonemeClass::of(ch)
    }
}
