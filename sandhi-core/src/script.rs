//! Devanagari codec
//!
//! Converts between surface strings and phoneme sequences. Decoding splits a
//! consonant akshara into the bare consonant plus its vowel (the inherent `अ`
//! unless a vowel sign or virama follows). Rendering reverses this, writing
//! vowels after consonants as signs and closing a final or pre-consonantal
//! consonant with a virama.

use crate::phoneme::{Phoneme, PhonemeBuf, PhonemeClass, VIRAMA};

/// Devanagari nukta
pub const NUKTA: char = '\u{093C}';

/// Vowel implied by a consonant letter with no sign or virama
pub const INHERENT_A: Phoneme = Phoneme::new('अ');

/// Base letter + nukta pairs that have a single precomposed code point
const NUKTA_FORMS: [(char, char); 11] = [
    ('क', '\u{0958}'),
    ('ख', '\u{0959}'),
    ('ग', '\u{095A}'),
    ('ज', '\u{095B}'),
    ('ड', '\u{095C}'),
    ('ढ', '\u{095D}'),
    ('फ', '\u{095E}'),
    ('य', '\u{095F}'),
    ('न', '\u{0929}'),
    ('र', '\u{0931}'),
    ('ळ', '\u{0934}'),
];

/// Precomposed nukta letters that canonical (NFC) text keeps decomposed
fn is_composition_exclusion(ch: char) -> bool {
    ('\u{0958}'..='\u{095F}').contains(&ch)
}

fn compose_nukta(base: char) -> Option<char> {
    NUKTA_FORMS
        .iter()
        .find(|(b, _)| *b == base)
        .map(|(_, composed)| *composed)
}

fn decompose_nukta(composed: char) -> Option<char> {
    NUKTA_FORMS
        .iter()
        .find(|(_, c)| *c == composed)
        .map(|(base, _)| *base)
}

/// Independent vowel for a dependent vowel sign
pub fn vowel_for_sign(sign: char) -> Option<char> {
    let vowel = match sign {
        'ा' => 'आ',
        'ि' => 'इ',
        'ी' => 'ई',
        'ु' => 'उ',
        'ू' => 'ऊ',
        'ृ' => 'ऋ',
        'ॄ' => 'ॠ',
        'ॢ' => 'ऌ',
        'ॣ' => 'ॡ',
        'े' => 'ए',
        'ै' => 'ऐ',
        'ो' => 'ओ',
        'ौ' => 'औ',
        'ॅ' => 'ऍ',
        'ॆ' => 'ऎ',
        'ॉ' => 'ऑ',
        'ॊ' => 'ऒ',
        _ => return None,
    };
    Some(vowel)
}

/// Dependent sign for an independent vowel; `अ` has none
pub fn sign_for_vowel(vowel: char) -> Option<char> {
    let sign = match vowel {
        'आ' => 'ा',
        'इ' => 'ि',
        'ई' => 'ी',
        'उ' => 'ु',
        'ऊ' => 'ू',
        'ऋ' => 'ृ',
        'ॠ' => 'ॄ',
        'ऌ' => 'ॢ',
        'ॡ' => 'ॣ',
        'ए' => 'े',
        'ऐ' => 'ै',
        'ओ' => 'ो',
        'औ' => 'ौ',
        'ऍ' => 'ॅ',
        'ऎ' => 'ॆ',
        'ऑ' => 'ॉ',
        'ऒ' => 'ॊ',
        _ => return None,
    };
    Some(sign)
}

/// Bring text into the single canonical form used for all comparisons
///
/// Nukta letters follow NFC: U+0958..U+095F are decomposed, the remaining
/// nukta letters are composed. Everything else passes through unchanged.
pub fn canonicalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if is_composition_exclusion(ch) {
            if let Some(base) = decompose_nukta(ch) {
                out.push(base);
                out.push(NUKTA);
                continue;
            }
        }

        if chars.peek() == Some(&NUKTA) {
            if let Some(composed) = compose_nukta(ch).filter(|c| !is_composition_exclusion(*c)) {
                chars.next();
                out.push(composed);
                continue;
            }
        }

        out.push(ch);
    }

    out
}

/// Decode surface text into phonemes
///
/// Never fails: characters outside the alphabet become phonemes of class
/// [`PhonemeClass::Unknown`], a stray vowel sign decodes to its vowel.
pub fn decode(text: &str) -> Vec<Phoneme> {
    let chars: Vec<char> = text.chars().collect();
    let mut phonemes = Vec::with_capacity(chars.len() + chars.len() / 2);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        i += 1;

        if PhonemeClass::of(ch).is_consonant() {
            let mut consonant = ch;
            if chars.get(i) == Some(&NUKTA) {
                if let Some(composed) = compose_nukta(ch) {
                    consonant = composed;
                    i += 1;
                }
            }
            phonemes.push(Phoneme::new(consonant));

            match chars.get(i).copied() {
                Some(VIRAMA) => i += 1,
                Some(next) => match vowel_for_sign(next) {
                    Some(vowel) => {
                        phonemes.push(Phoneme::new(vowel));
                        i += 1;
                    }
                    None => phonemes.push(INHERENT_A),
                },
                None => phonemes.push(INHERENT_A),
            }
        } else if let Some(vowel) = vowel_for_sign(ch) {
            phonemes.push(Phoneme::new(vowel));
        } else {
            phonemes.push(Phoneme::new(ch));
        }
    }

    phonemes
}

/// Decode into inline storage, for short literals
pub fn decode_buf(text: &str) -> PhonemeBuf {
    decode(text).into_iter().collect()
}

/// Render phonemes back to canonical Devanagari
pub fn render(phonemes: &[Phoneme]) -> String {
    let mut out = String::with_capacity(phonemes.len() * 3);
    let mut pending_consonant = false;

    for phoneme in phonemes {
        let ch = phoneme.as_char();

        if phoneme.is_vowel() {
            if pending_consonant {
                if let Some(sign) = sign_for_vowel(ch) {
                    out.push(sign);
                }
                pending_consonant = false;
            } else {
                out.push(ch);
            }
            continue;
        }

        if pending_consonant {
            out.push(VIRAMA);
            pending_consonant = false;
        }

        if phoneme.is_consonant() {
            match decompose_nukta(ch).filter(|_| is_composition_exclusion(ch)) {
                Some(base) => {
                    out.push(base);
                    out.push(NUKTA);
                }
                None => out.push(ch),
            }
            pending_consonant = true;
        } else {
            out.push(ch);
        }
    }

    if pending_consonant {
        out.push(VIRAMA);
    }

    out
}

/// Whether any phoneme belongs to the alphabet
pub fn has_known_phonemes(phonemes: &[Phoneme]) -> bool {
    phonemes
        .iter()
        .any(|p| p.class() != PhonemeClass::Unknown)
}

/// Number of vowels (syllable nuclei)
pub fn syllable_count(phonemes: &[Phoneme]) -> usize {
    phonemes.iter().filter(|p| p.is_vowel()).count()
}
