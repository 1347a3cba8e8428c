//! Pratyahara sound classes
//!
//! A pratyahara names a contiguous stretch of the fourteen Maheshvara sutras by
//! its first sound and a closing it-marker: `अच्` is every vowel, `हल्` every
//! consonant, `अश्` vowels plus voiced consonants. Rule tables use them as
//! context classes next to the articulatory [`PhonemeClass`] groups.
//!
//! [`PhonemeClass`]: crate::phoneme::PhonemeClass

use crate::error::{Result, SandhiError};
use crate::phoneme::Phoneme;
use crate::script;
use std::collections::BTreeSet;
use std::fmt;

/// The Maheshvara sutras: sounds followed by their it-marker
const SUTRAS: [(&[char], char); 14] = [
    (&['अ', 'इ', 'उ'], 'ण'),
    (&['ऋ', 'ऌ'], 'क'),
    (&['ए', 'ओ'], 'ङ'),
    (&['ऐ', 'औ'], 'च'),
    (&['ह', 'य', 'व', 'र'], 'ट'),
    (&['ल'], 'ण'),
    (&['ञ', 'म', 'ङ', 'ण', 'न'], 'म'),
    (&['झ', 'भ'], 'ञ'),
    (&['घ', 'ढ', 'ध'], 'ष'),
    (&['ज', 'ब', 'ग', 'ड', 'द'], 'श'),
    (&['ख', 'फ', 'छ', 'ठ', 'थ', 'च', 'ट', 'त'], 'व'),
    (&['क', 'प'], 'य'),
    (&['श', 'ष', 'स'], 'र'),
    (&['ह'], 'ल'),
];

#[derive(Clone, Copy)]
enum SutraItem {
    Sound(char),
    Marker(char),
}

fn sutra_items() -> impl Iterator<Item = SutraItem> {
    SUTRAS.iter().flat_map(|(sounds, marker)| {
        sounds
            .iter()
            .map(|&ch| SutraItem::Sound(ch))
            .chain(std::iter::once(SutraItem::Marker(*marker)))
    })
}

/// An expanded pratyahara
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pratyahara {
    name: String,
    members: BTreeSet<Phoneme>,
}

impl Pratyahara {
    /// Expand a pratyahara name such as `अच्` or `हश्`
    ///
    /// The first occurrence of the start sound opens the range, which closes at
    /// the first matching it-marker after it. Markers are not members; vowels
    /// bring their long savarna with them.
    pub fn parse(name: &str) -> Result<Self> {
        let name = script::canonicalize(name.trim());
        let phonemes = script::decode(&name);

        let (start, marker) = match phonemes.as_slice() {
            [start, marker] if start.is_vowel() && marker.is_consonant() => (*start, *marker),
            [start, a, marker]
                if start.is_consonant() && a.as_char() == 'अ' && marker.is_consonant() =>
            {
                (*start, *marker)
            }
            _ => return Err(SandhiError::invalid_argument("pratyahara", &name)),
        };

        let mut members = BTreeSet::new();
        let mut open = false;
        let mut closed = false;

        for item in sutra_items() {
            match item {
                SutraItem::Sound(ch) => {
                    if !open && ch == start.as_char() {
                        open = true;
                    }
                    if open {
                        let sound = Phoneme::new(ch);
                        members.insert(sound);
                        if let Some(long) = sound.long_form() {
                            members.insert(long);
                        }
                    }
                }
                SutraItem::Marker(ch) => {
                    if open && ch == marker.as_char() {
                        closed = true;
                        break;
                    }
                }
            }
        }

        if !closed {
            return Err(SandhiError::invalid_argument("pratyahara", &name));
        }

        Ok(Self { name, members })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, phoneme: Phoneme) -> bool {
        self.members.contains(&phoneme)
    }

    pub fn members(&self) -> impl Iterator<Item = Phoneme> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Display for Pratyahara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::PhonemeClass;

    fn p(ch: char) -> Phoneme {
        Phoneme::new(ch)
    }

    #[test]
    fn test_ac_is_all_vowels() {
        let ac = Pratyahara::parse("अच्").unwrap();
        for ch in ['अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ऋ', 'ॠ', 'ऌ', 'ए', 'ऐ', 'ओ', 'औ'] {
            assert!(ac.contains(p(ch)), "{ch} should be in अच्");
        }
        assert!(!ac.contains(p('क')));
        assert!(ac.members().all(|m| m.class().is_vowel()));
    }

    #[test]
    fn test_hal_is_all_consonants() {
        let hal = Pratyahara::parse("हल्").unwrap();
        assert!(hal.members().all(|m| m.class().is_consonant()));
        assert!(hal.contains(p('ह')));
        assert!(hal.contains(p('प')));
        assert_eq!(hal.len(), 33);
    }

    #[test]
    fn test_voiced_classes() {
        let has = Pratyahara::parse("हश्").unwrap();
        assert!(has.contains(p('ग')));
        assert!(has.contains(p('म')));
        assert!(!has.contains(p('क')));
        assert!(!has.contains(p('अ')));

        let as_ = Pratyahara::parse("अश्").unwrap();
        assert!(as_.contains(p('अ')));
        assert!(as_.contains(p('द')));
        assert!(!as_.contains(p('स')));
    }

    #[test]
    fn test_khar_is_voiceless() {
        let khar = Pratyahara::parse("खर्").unwrap();
        for ch in ['क', 'च', 'ट', 'त', 'प', 'श', 'ष', 'स'] {
            assert!(khar.contains(p(ch)));
        }
        assert!(!khar.contains(p('ग')));
        assert!(khar
            .members()
            .all(|m| m.class() != PhonemeClass::AspirateH));
    }

    #[test]
    fn test_markers_are_excluded() {
        let ik = Pratyahara::parse("इक्").unwrap();
        let members: Vec<char> = ik.members().map(|m| m.as_char()).collect();
        assert_eq!(members.len(), 8);
        assert!(!ik.contains(p('ण')));
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert!(matches!(
            Pratyahara::parse("अक्ष्"),
            Err(SandhiError::InvalidArgument(_))
        ));
        assert!(Pratyahara::parse("").is_err());
        assert!(Pratyahara::parse("अज्").is_err());
    }
}
